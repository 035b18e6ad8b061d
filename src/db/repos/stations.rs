//! Radio station repository
//!
//! Station inserts are idempotent on the external station id, same
//! contract as tracks.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use crate::db::DbError;

/// Radio station record from database
#[derive(Debug, Clone, FromRow)]
pub struct Station {
    pub id: i32,
    pub station_id: String,
    pub name: String,
    pub genre: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// New station payload for insertion
#[derive(Debug, Clone)]
pub struct NewStation {
    pub station_id: String,
    pub name: String,
    pub genre: String,
    pub url: String,
}

/// Radio station repository
pub struct StationRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> StationRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all stations, newest first.
    pub async fn list(&mut self) -> Result<Vec<Station>, DbError> {
        let stations: Vec<Station> = sqlx::query_as(
            r#"
            SELECT id, station_id, name, genre, url, created_at
            FROM radio_stations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(stations)
    }

    /// Insert a station, skipping silently when the station id already
    /// exists. Returns the inserted row, or `None` on conflict.
    pub async fn insert(&mut self, station: NewStation) -> Result<Option<Station>, DbError> {
        let inserted: Option<Station> = sqlx::query_as(
            r#"
            INSERT INTO radio_stations (station_id, name, genre, url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (station_id) DO NOTHING
            RETURNING id, station_id, name, genre, url, created_at
            "#,
        )
        .bind(&station.station_id)
        .bind(&station.name)
        .bind(&station.genre)
        .bind(&station.url)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    // Integration tests - run with DATABASE_URL set:
    // DATABASE_URL=postgres://... cargo test -- --ignored

    fn sample(station_id: &str) -> NewStation {
        NewStation {
            station_id: station_id.to_owned(),
            name: "Jazz FM".to_owned(),
            genre: "jazz".to_owned(),
            url: "https://example.com/stream".to_owned(),
        }
    }

    fn unique_id(prefix: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        format!("{}-{}", prefix, nanos)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_station_id_is_noop() {
        let mut conn = db::connect().await.expect("connection failed");
        let station_id = unique_id("station");

        let mut repo = StationRepo::new(&mut conn);
        let first = repo
            .insert(sample(&station_id))
            .await
            .expect("insert failed");
        assert!(first.is_some());

        let second = repo
            .insert(sample(&station_id))
            .await
            .expect("insert failed");
        assert!(second.is_none());

        let stations = StationRepo::new(&mut conn).list().await.expect("list failed");
        let matches = stations.iter().filter(|s| s.station_id == station_id).count();
        assert_eq!(matches, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first() {
        let mut conn = db::connect().await.expect("connection failed");

        let mut repo = StationRepo::new(&mut conn);
        repo.insert(sample(&unique_id("a")))
            .await
            .expect("insert failed");
        repo.insert(sample(&unique_id("b")))
            .await
            .expect("insert failed");

        let stations = StationRepo::new(&mut conn).list().await.expect("list failed");
        for pair in stations.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
