use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ManagerLevelQuery {
    pub level: i64,
}
