use axum::Router;
use event_listing_backend::{
    api::router::create_router,
    config::Config,
    infra::factory::bootstrap_state,
    state::AppState,
};
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    db_filename: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let config = Config {
            database_url: Some(format!("sqlite://{}?mode=rwc", db_filename)),
            port: 0,
        };

        // The provider dials lazily; the first request migrates the db.
        let state = Arc::new(bootstrap_state(&config));
        let router = create_router(state.clone());

        Self {
            router,
            state,
            db_filename,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
