pub mod layout;
pub mod navbar;
pub mod notice;
pub mod viewer;

pub use layout::Layout;
pub use navbar::Navbar;
pub use notice::{Notice, NoticeBanner, NoticeKind};
pub use viewer::Viewer;
