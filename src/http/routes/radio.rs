//! Radio station endpoints (`action=radio`)

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::db::{self, NewStation, Station, StationRepo};
use crate::http::error::ApiError;
use crate::http::response::json_response;

/// Add-station request; `id` is the external station identifier.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub url: String,
}

/// Station response
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub id: i32,
    pub station_id: String,
    pub name: String,
    pub genre: String,
    pub url: String,
    pub created_at: String,
}

impl From<Station> for StationResponse {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            station_id: s.station_id,
            name: s.name,
            genre: s.genre,
            url: s.url,
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

/// Insert outcome: `station` is null when the id was already present.
#[derive(Debug, Serialize)]
pub struct CreateStationResponse {
    pub success: bool,
    pub station: Option<StationResponse>,
}

/// GET ?action=radio - all stations, newest first
pub async fn list() -> Result<Response, ApiError> {
    let mut conn = db::connect().await?;
    let stations = StationRepo::new(&mut conn).list().await?;

    let stations: Vec<StationResponse> =
        stations.into_iter().map(StationResponse::from).collect();
    Ok(json_response(StatusCode::OK, &stations))
}

/// POST ?action=radio - add a station
pub async fn create(body: &Bytes) -> Result<Response, ApiError> {
    let req: CreateStationRequest = serde_json::from_slice(body)?;

    let mut conn = db::connect().await?;
    let inserted = StationRepo::new(&mut conn)
        .insert(NewStation {
            station_id: req.id,
            name: req.name,
            genre: req.genre,
            url: req.url,
        })
        .await?;

    Ok(json_response(
        StatusCode::CREATED,
        &CreateStationResponse {
            success: true,
            station: inserted.map(StationResponse::from),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_requires_all_fields() {
        let body = json!({"id": "s1", "name": "Jazz FM", "genre": "jazz"});
        let result = serde_json::from_value::<CreateStationRequest>(body);
        assert!(result.is_err());
    }

    #[test]
    fn conflict_response_has_null_station() {
        let response = CreateStationResponse {
            success: true,
            station: None,
        };
        let value = serde_json::to_value(response).expect("serialize failed");
        assert_eq!(value, json!({"success": true, "station": null}));
    }
}
