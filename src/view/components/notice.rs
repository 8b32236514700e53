use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// A message shown above the page content.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[component]
pub fn NoticeBanner(#[props(!optional)] notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx!();
    };

    let class = match notice.kind {
        NoticeKind::Success => "alert alert-success",
        NoticeKind::Info => "alert alert-info",
        NoticeKind::Error => "alert alert-error",
    };

    rsx!(
        div { class: "{class}", role: "alert",
            p { "{notice.message}" }
        }
    )
}
