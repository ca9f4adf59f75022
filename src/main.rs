#[tokio::main]
async fn main() {
    event_listing_backend::run().await;
}
