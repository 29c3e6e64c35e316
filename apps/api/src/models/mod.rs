//! Database models for the Discotheque catalog
//!
//! This module contains SQLx models for:
//! - Artists, albums, and musiques (tracks)
//! - Users and their playlists

pub mod album;
pub mod artist;
pub mod musique;
pub mod playlist;
pub mod user;

pub use album::{Album, CreateAlbum};
pub use artist::{Artist, CreateArtist};
pub use musique::{CreateMusique, Musique};
pub use playlist::{CreatePlaylist, Playlist, PlaylistMusique};
pub use user::{CreateUser, User};
