//! Library endpoints (`action=library`)

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::db::{self, NewTrack, Track, TrackRepo};
use crate::http::error::ApiError;
use crate::http::response::json_response;

/// Add-track request, as posted by the frontend.
///
/// `id` is the external track identifier, stored as `track_id`.
#[derive(Debug, Deserialize)]
pub struct CreateTrackRequest {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: f64,
    pub album: Option<String>,
    #[serde(rename = "audioUrl")]
    pub audio_url: Option<String>,
}

/// Track response
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub id: i32,
    pub track_id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: f64,
    pub audio_url: Option<String>,
    pub added_at: String,
}

impl From<Track> for TrackResponse {
    fn from(t: Track) -> Self {
        Self {
            id: t.id,
            track_id: t.track_id,
            title: t.title,
            artist: t.artist,
            album: t.album,
            duration: t.duration,
            audio_url: t.audio_url,
            added_at: t.added_at.to_rfc3339(),
        }
    }
}

/// Insert outcome: `track` is null when the id was already present.
#[derive(Debug, Serialize)]
pub struct CreateTrackResponse {
    pub success: bool,
    pub track: Option<TrackResponse>,
}

/// GET ?action=library - all tracks, newest first
pub async fn list() -> Result<Response, ApiError> {
    let mut conn = db::connect().await?;
    let tracks = TrackRepo::new(&mut conn).list().await?;

    let tracks: Vec<TrackResponse> = tracks.into_iter().map(TrackResponse::from).collect();
    Ok(json_response(StatusCode::OK, &tracks))
}

/// POST ?action=library - add a track to the library
pub async fn create(body: &Bytes) -> Result<Response, ApiError> {
    let req: CreateTrackRequest = serde_json::from_slice(body)?;

    let mut conn = db::connect().await?;
    let inserted = TrackRepo::new(&mut conn)
        .insert(NewTrack {
            track_id: req.id,
            title: req.title,
            artist: req.artist,
            album: req.album,
            duration: req.duration,
            audio_url: req.audio_url,
        })
        .await?;

    Ok(json_response(
        StatusCode::CREATED,
        &CreateTrackResponse {
            success: true,
            track: inserted.map(TrackResponse::from),
        },
    ))
}
