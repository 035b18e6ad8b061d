//! Playlist endpoints (`action=playlists`)

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::db::{self, NewPlaylist, Playlist, PlaylistRepo, PlaylistWithCount, DEFAULT_ICON};
use crate::http::error::ApiError;
use crate::http::response::json_response;

/// Create playlist request
#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub icon: Option<String>,
}

/// Playlist with track count, as listed
#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub created_at: String,
    pub track_count: i64,
}

impl From<PlaylistWithCount> for PlaylistResponse {
    fn from(p: PlaylistWithCount) -> Self {
        Self {
            id: p.id,
            name: p.name,
            icon: p.icon,
            created_at: p.created_at.to_rfc3339(),
            track_count: p.track_count,
        }
    }
}

/// Freshly created playlist; carries no track count, links cannot exist
/// yet.
#[derive(Debug, Serialize)]
pub struct CreatedPlaylistResponse {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub created_at: String,
}

impl From<Playlist> for CreatedPlaylistResponse {
    fn from(p: Playlist) -> Self {
        Self {
            id: p.id,
            name: p.name,
            icon: p.icon,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Create outcome
#[derive(Debug, Serialize)]
pub struct CreatePlaylistResponse {
    pub success: bool,
    pub playlist: CreatedPlaylistResponse,
}

/// GET ?action=playlists - all playlists with track counts, newest first
pub async fn list() -> Result<Response, ApiError> {
    let mut conn = db::connect().await?;
    let playlists = PlaylistRepo::new(&mut conn).list().await?;

    let playlists: Vec<PlaylistResponse> =
        playlists.into_iter().map(PlaylistResponse::from).collect();
    Ok(json_response(StatusCode::OK, &playlists))
}

/// POST ?action=playlists - create a playlist
pub async fn create(body: &Bytes) -> Result<Response, ApiError> {
    let req: CreatePlaylistRequest = serde_json::from_slice(body)?;

    let mut conn = db::connect().await?;
    let created = PlaylistRepo::new(&mut conn)
        .create(NewPlaylist {
            name: req.name,
            icon: req.icon.unwrap_or_else(|| DEFAULT_ICON.to_owned()),
        })
        .await?;

    Ok(json_response(
        StatusCode::CREATED,
        &CreatePlaylistResponse {
            success: true,
            playlist: CreatedPlaylistResponse::from(created),
        },
    ))
}
