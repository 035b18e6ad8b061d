//! Playlist repository
//!
//! Playlists carry a derived `track_count` on reads: the number of
//! playlist-track links referencing them. The links themselves are
//! read-only here.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, Row};

use crate::db::DbError;

/// Icon stored when a playlist is created without one.
pub const DEFAULT_ICON: &str = "Music";

/// Playlist record from database
#[derive(Debug, Clone, FromRow)]
pub struct Playlist {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

/// Playlist with link count for list display
#[derive(Debug, Clone)]
pub struct PlaylistWithCount {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub track_count: i64,
}

/// New playlist payload for insertion
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub icon: String,
}

/// Playlist repository
pub struct PlaylistRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PlaylistRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List playlists with track counts, newest first.
    ///
    /// Uses a LEFT JOIN to get counts in a single query (no N+1).
    pub async fn list(&mut self) -> Result<Vec<PlaylistWithCount>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.id,
                p.name,
                p.icon,
                p.created_at,
                COUNT(pt.playlist_id) as track_count
            FROM playlists p
            LEFT JOIN playlist_tracks pt ON pt.playlist_id = p.id
            GROUP BY p.id, p.name, p.icon, p.created_at
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        let playlists = rows
            .into_iter()
            .map(|r| PlaylistWithCount {
                id: r.get("id"),
                name: r.get("name"),
                icon: r.get("icon"),
                created_at: r.get("created_at"),
                track_count: r.get("track_count"),
            })
            .collect();

        Ok(playlists)
    }

    /// Create a playlist, returning the stored row.
    pub async fn create(&mut self, playlist: NewPlaylist) -> Result<Playlist, DbError> {
        let created: Playlist = sqlx::query_as(
            r#"
            INSERT INTO playlists (name, icon)
            VALUES ($1, $2)
            RETURNING id, name, icon, created_at
            "#,
        )
        .bind(&playlist.name)
        .bind(&playlist.icon)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    // Integration tests - run with DATABASE_URL set:
    // DATABASE_URL=postgres://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_stores_default_icon() {
        let mut conn = db::connect().await.expect("connection failed");

        let created = PlaylistRepo::new(&mut conn)
            .create(NewPlaylist {
                name: "Morning".to_owned(),
                icon: DEFAULT_ICON.to_owned(),
            })
            .await
            .expect("create failed");

        assert_eq!(created.icon, "Music");
        assert_eq!(created.name, "Morning");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn new_playlist_has_zero_track_count() {
        let mut conn = db::connect().await.expect("connection failed");

        let created = PlaylistRepo::new(&mut conn)
            .create(NewPlaylist {
                name: "Empty".to_owned(),
                icon: "Star".to_owned(),
            })
            .await
            .expect("create failed");

        let playlists = PlaylistRepo::new(&mut conn)
            .list()
            .await
            .expect("list failed");
        let found = playlists
            .iter()
            .find(|p| p.id == created.id)
            .expect("created playlist missing from list");

        assert_eq!(found.track_count, 0);
        assert_eq!(found.icon, "Star");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first() {
        let mut conn = db::connect().await.expect("connection failed");

        let mut repo = PlaylistRepo::new(&mut conn);
        for name in ["first", "second"] {
            repo.create(NewPlaylist {
                name: name.to_owned(),
                icon: DEFAULT_ICON.to_owned(),
            })
            .await
            .expect("create failed");
        }

        let playlists = PlaylistRepo::new(&mut conn)
            .list()
            .await
            .expect("list failed");
        for pair in playlists.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
