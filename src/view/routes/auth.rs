use dioxus::prelude::*;

use crate::view::components::{Layout, Notice, Viewer};

#[component]
pub fn SignInPage(
    viewer: Viewer,
    #[props(!optional)] notice: Option<Notice>,
    #[props(into)] username: String,
) -> Element {
    rsx!(
        Layout { title: "Sign in", viewer, notice,
            h1 { class: "text-2xl", "Sign in" }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/sign-in",
                label { "Username"
                    input { class: "input", r#type: "text", name: "username", value: "{username}", required: true }
                }
                label { "Password"
                    input { class: "input", r#type: "password", name: "password", required: true }
                }
                button { class: "btn btn-primary", r#type: "submit", "Sign in" }
            }
            p {
                a { class: "link", href: "/forgot-password", "Forgot your password?" }
            }
            p {
                "New here? "
                a { class: "link", href: "/sign-up", "Create an account" }
            }
        }
    )
}

/// Previously entered sign-up values, re-filled when the form is shown again with an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpValues {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

#[component]
pub fn SignUpPage(
    viewer: Viewer,
    #[props(!optional)] notice: Option<Notice>,
    values: SignUpValues,
) -> Element {
    rsx!(
        Layout { title: "Sign up", viewer, notice,
            h1 { class: "text-2xl", "Create an account" }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/sign-up",
                label { "First name"
                    input { class: "input", r#type: "text", name: "first-name", value: "{values.first_name}", required: true }
                }
                label { "Last name"
                    input { class: "input", r#type: "text", name: "last-name", value: "{values.last_name}", required: true }
                }
                label { "Username"
                    input { class: "input", r#type: "text", name: "username", value: "{values.username}", required: true }
                }
                label { "Email"
                    input { class: "input", r#type: "email", name: "email", value: "{values.email}", required: true }
                }
                label { "Password"
                    input { class: "input", r#type: "password", name: "password", minlength: "8", required: true }
                }
                button { class: "btn btn-primary", r#type: "submit", "Sign up" }
            }
            p {
                "Already have an account? "
                a { class: "link", href: "/sign-in", "Sign in" }
            }
        }
    )
}

#[component]
pub fn ForgotPasswordPage(viewer: Viewer, #[props(!optional)] notice: Option<Notice>) -> Element {
    rsx!(
        Layout { title: "Forgot password", viewer, notice,
            h1 { class: "text-2xl", "Forgot your password?" }
            p { "Enter the email address of your account and we will send reset instructions." }
            form { class: "flex flex-col gap-2 w-full max-w-96", method: "post", action: "/forgot-password",
                label { "Email"
                    input { class: "input", r#type: "email", name: "email", required: true }
                }
                button { class: "btn btn-primary", r#type: "submit", "Send reset link" }
            }
        }
    )
}
