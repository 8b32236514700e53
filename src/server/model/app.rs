use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Session username granted access to the admin pages.
    pub admin_username: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, admin_username: impl Into<String>) -> Self {
        Self {
            db,
            admin_username: admin_username.into(),
        }
    }

    /// Whether `username` is the administrative identity.
    ///
    /// The comparison is exact; `admin` does not match `Admin`.
    pub fn is_admin(&self, username: &str) -> bool {
        username == self.admin_username
    }
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, admin_username): (DatabaseConnection, String)) -> Self {
        Self::new(db, admin_username)
    }
}
