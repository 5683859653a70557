//! Request handlers

pub mod tickets;

use axum::response::{IntoResponse, Redirect, Response};
use tt_services::Navigation;

/// Browser path for a navigation target.
fn path_for(target: Navigation) -> String {
    match target {
        Navigation::ProjectIndex => "/projects".to_string(),
        Navigation::ProjectDetails(id) => format!("/projects/{}", id),
        Navigation::TicketCreate(id) => format!("/projects/{}/tickets/new", id),
    }
}

/// 303 redirect to a navigation target. POST-redirect-GET: every
/// successful mutation sends the client on rather than rendering a body.
pub(crate) fn see_other(target: Navigation) -> Response {
    Redirect::to(&path_for(target)).into_response()
}
