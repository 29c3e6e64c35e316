//! Database repository layer for Discotheque
//!
//! Resolvers and the seed reach the database through these repositories.
//! DataLoaders issue their own batch queries with the same column lists.

pub mod album;
pub mod artist;
pub mod musique;
pub mod playlist;
pub mod user;
pub mod utils;

pub use album::AlbumRepository;
pub use artist::ArtistRepository;
pub use musique::MusiqueRepository;
pub use playlist::{PlaylistAppend, PlaylistRepository};
pub use user::UserRepository;
