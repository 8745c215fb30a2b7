use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Expected bearer token; `None` disables the auth check
    pub api_token: Option<String>,
}
