use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AppError;

/// Trims `value` and rejects it when nothing remains.
pub fn require_text(field: &'static str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!(
            "field '{}' is required and must be a non-empty string",
            field
        )));
    }
    Ok(trimmed.to_string())
}

/// Rejects empty lists and lists containing blank entries; surviving
/// entries are stored trimmed.
pub fn require_text_list(field: &'static str, values: &[String]) -> Result<Vec<String>, AppError> {
    if values.is_empty() {
        return Err(AppError::Validation(format!(
            "field '{}' is required and must be a non-empty list",
            field
        )));
    }
    values
        .iter()
        .map(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(AppError::Validation(format!(
                    "field '{}' must contain only non-empty strings",
                    field
                )));
            }
            Ok(trimmed.to_string())
        })
        .collect()
}

/// Lowercases the title, collapses every run of non-alphanumeric characters
/// to a single dash and strips leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y"];

/// Normalizes a date input to ISO `YYYY-MM-DD`. RFC 3339 timestamps are
/// reduced to their UTC date portion; date-only inputs must match one of
/// the accepted spellings and name an existing calendar date.
pub fn normalize_date(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive().format("%Y-%m-%d").to_string());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.format("%Y-%m-%d").to_string());
        }
    }

    Err(AppError::Validation(format!("invalid event date '{}'", trimmed)))
}

/// Normalizes a time input to zero-padded 24-hour `HH:MM`. Accepts `H:MM`
/// and `HH:MM` only; minutes must be exactly two digits.
pub fn normalize_time(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    let invalid = || {
        AppError::Validation(format!(
            "invalid event time '{}', expected 24-hour H:MM or HH:MM",
            trimmed
        ))
    };

    let (hours, minutes) = trimmed.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(format!("{:02}:{:02}", hours, minutes))
}

/// Trims and validates an email against a `local@domain.tld` shape.
pub fn require_email(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if !is_valid_email(trimmed) {
        return Err(AppError::Validation(format!("invalid email address '{}'", trimmed)));
    }
    Ok(trimmed.to_string())
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
