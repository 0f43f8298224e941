pub mod brands;
pub mod categories;
pub mod products;

use crate::error::{AppError, AppResult};

/// Required text field: present and not blank. Returns the trimmed value.
pub(crate) fn require_text(field: &str, value: Option<String>) -> AppResult<String> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}
