/// Who is looking at a page, used to pick the navigation links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewer {
    pub username: Option<String>,
    pub is_admin: bool,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: Some(username.into()),
            is_admin,
        }
    }
}
