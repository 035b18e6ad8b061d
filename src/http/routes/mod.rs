//! Request dispatch
//!
//! All resource routing happens on the HTTP method plus the `action`
//! query parameter - the surface the frontend calls:
//! `?action=library|playlists|radio`. The path is not part of the
//! contract.

pub mod health;
pub mod library;
pub mod playlists;
pub mod radio;

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error::ApiError;
use super::response::preflight;

/// Resource group selected by the `action` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Library,
    Playlists,
    Radio,
}

impl Action {
    /// Parse the `action` parameter; absent means `library`.
    fn parse(value: Option<&str>) -> Option<Self> {
        match value.unwrap_or("library") {
            "library" => Some(Self::Library),
            "playlists" => Some(Self::Playlists),
            "radio" => Some(Self::Radio),
            _ => None,
        }
    }
}

/// Query parameters recognized by the dispatcher.
#[derive(Debug, Default, Deserialize)]
pub struct DispatchParams {
    pub action: Option<String>,
}

/// Route a request on (method, action).
///
/// OPTIONS is answered before any database work. Unmatched pairs,
/// including PUT and DELETE and unknown actions, fall through to 404
/// without opening a connection.
pub async fn dispatch(
    method: Method,
    Query(params): Query<DispatchParams>,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return preflight();
    }

    let Some(action) = Action::parse(params.action.as_deref()) else {
        return ApiError::NotFound.into_response();
    };

    let result = match (method.as_str(), action) {
        ("GET", Action::Library) => library::list().await,
        ("POST", Action::Library) => library::create(&body).await,
        ("GET", Action::Playlists) => playlists::list().await,
        ("POST", Action::Playlists) => playlists::create(&body).await,
        ("GET", Action::Radio) => radio::list().await,
        ("POST", Action::Radio) => radio::create(&body).await,
        _ => Err(ApiError::NotFound),
    };

    match result {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
