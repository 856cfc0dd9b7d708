//! Admin pages

mod ads;
mod aiml;
mod analytics;
mod articles;
mod categories;
mod dashboard;
mod login;
mod profile;
mod time_saver;
mod users;

pub use ads::*;
pub use aiml::*;
pub use analytics::*;
pub use articles::*;
pub use categories::*;
pub use dashboard::*;
pub use login::*;
pub use profile::*;
pub use time_saver::*;
pub use users::*;

use dioxus::prelude::*;
use newsroom_api::ApiError;

use crate::routes::Route;
use crate::session::SessionContext;
use crate::state::NoticeState;

/// Single funnel for request failures. A 401 tears the session down exactly
/// once across concurrent failures; everything else becomes a notice. Silent
/// calls (background polls) skip this entirely.
pub(crate) fn report_error(
    err: &ApiError,
    session: &mut SessionContext,
    notices: &mut NoticeState,
    navigator: &Navigator,
) {
    tracing::warn!(%err, "request failed");
    match err {
        ApiError::Unauthorized => {
            if session.expire() {
                notices.error(err.notice());
                navigator.replace(Route::Login {});
            }
        }
        other => notices.error(other.notice()),
    }
}
