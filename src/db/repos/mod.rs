//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the request's connection (no pool handle)
//! - Handles conflicts via ON CONFLICT (no check-then-insert)
//! - List queries attach derived counts via JOINs (no N+1)

pub mod playlists;
pub mod stations;
pub mod tracks;

pub use playlists::{NewPlaylist, Playlist, PlaylistRepo, PlaylistWithCount, DEFAULT_ICON};
pub use stations::{NewStation, Station, StationRepo};
pub use tracks::{NewTrack, Track, TrackRepo};
