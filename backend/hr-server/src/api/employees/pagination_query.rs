use serde::Deserialize;

/// Query parameters for `GET /api/employees/paginated`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    pub page: Option<i64>,
    /// Falls back to `pagination.default_page_size`
    pub size: Option<i64>,
    pub sort_by: Option<String>,
}
