use dioxus_logger::tracing;

use crate::{server::error::Error, view::components::Notice};

/// Unwraps page data, falling back to an empty value and a notice when loading failed.
///
/// Pages stay available while the database is down; the failure is logged instead.
pub fn or_unavailable<T: Default>(result: Result<T, Error>, what: &str) -> (T, Option<Notice>) {
    match result {
        Ok(value) => (value, None),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load {what}");

            (
                T::default(),
                Some(Notice::error(format!(
                    "The {what} is temporarily unavailable, please try again later."
                ))),
            )
        }
    }
}

/// Turns the outcome of a form submission into the notice shown on the re-rendered page
///
/// Validation errors are shown as-is; anything else is logged and reported as unavailable.
pub fn outcome_notice<T>(
    result: Result<T, Error>,
    action: &str,
    success: impl FnOnce(T) -> String,
) -> Notice {
    match result {
        Ok(value) => Notice::success(success(value)),
        Err(
            e @ (Error::AccountError(_) | Error::OrderError(_) | Error::InventoryError(_)),
        ) => Notice::error(e.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to {action}");

            Notice::error(format!(
                "Unable to {action} right now, please try again later."
            ))
        }
    }
}
