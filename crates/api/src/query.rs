//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?name_filter=` used by the JSON listing and the HTML page.
#[derive(Debug, Default, Deserialize)]
pub struct NameFilterParams {
    pub name_filter: Option<String>,
}
