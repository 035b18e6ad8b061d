//! Track repository
//!
//! Library inserts are idempotent on the external track id: a duplicate
//! insert is skipped silently and returns no row.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use crate::db::DbError;

/// Track record from database
#[derive(Debug, Clone, FromRow)]
pub struct Track {
    pub id: i32,
    pub track_id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: f64,
    pub audio_url: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// New track payload for insertion
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub track_id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: f64,
    pub audio_url: Option<String>,
}

/// Track repository
pub struct TrackRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TrackRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all tracks, newest first.
    pub async fn list(&mut self) -> Result<Vec<Track>, DbError> {
        let tracks: Vec<Track> = sqlx::query_as(
            r#"
            SELECT id, track_id, title, artist, album, duration, audio_url, added_at
            FROM tracks
            ORDER BY added_at DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(tracks)
    }

    /// Insert a track, skipping silently when the track id already exists.
    ///
    /// Single atomic statement; returns the inserted row, or `None` on
    /// conflict.
    pub async fn insert(&mut self, track: NewTrack) -> Result<Option<Track>, DbError> {
        let inserted: Option<Track> = sqlx::query_as(
            r#"
            INSERT INTO tracks (track_id, title, artist, album, duration, audio_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (track_id) DO NOTHING
            RETURNING id, track_id, title, artist, album, duration, audio_url, added_at
            "#,
        )
        .bind(&track.track_id)
        .bind(&track.title)
        .bind(&track.artist)
        .bind(&track.album)
        .bind(track.duration)
        .bind(&track.audio_url)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(inserted)
    }
}
