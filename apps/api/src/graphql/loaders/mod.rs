//! DataLoader implementations for GraphQL
//!
//! Each loader batches the keys requested during one execution tick into a
//! single `= ANY($1)` query, solving the N+1 problem in relationship
//! resolvers.
//!
//! There are two types of loaders:
//! - Single-entity loaders: one generic [`ByIdLoader`] per table, returning
//!   `Option<T>` for a single entity by ID
//! - Collection loaders: Return `Vec<T>` for related entities by parent ID

mod albums_by_artist;
mod by_id;
mod musiques_by_album;
mod musiques_by_artist;
mod musiques_by_playlist;
mod playlists_by_user;

pub use albums_by_artist::AlbumsByArtistLoader;
pub use by_id::{AlbumLoader, ArtistLoader, ByIdLoader, Keyed, UserLoader};
pub use musiques_by_album::MusiquesByAlbumLoader;
pub use musiques_by_artist::MusiquesByArtistLoader;
pub use musiques_by_playlist::MusiquesByPlaylistLoader;
pub use playlists_by_user::PlaylistsByUserLoader;

use std::collections::HashMap;
use std::hash::Hash;

/// Group rows under their parent key, keeping row order
///
/// Every requested key gets an entry, empty when no row matched.
pub(crate) fn group_by_key<K, V>(
    keys: &[K],
    rows: Vec<V>,
    key_of: impl Fn(&V) -> Option<K>,
) -> HashMap<K, Vec<V>>
where
    K: Hash + Eq + Copy,
{
    let mut result: HashMap<K, Vec<V>> = keys.iter().map(|k| (*k, Vec::new())).collect();
    for row in rows {
        if let Some(key) = key_of(&row) {
            result.entry(key).or_default().push(row);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_key_fills_missing_keys() {
        let rows = vec![(1, "a"), (1, "b"), (3, "c")];
        let grouped = group_by_key(&[1, 2, 3], rows, |(k, _)| Some(*k));

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[&1], vec![(1, "a"), (1, "b")]);
        assert!(grouped[&2].is_empty());
        assert_eq!(grouped[&3], vec![(3, "c")]);
    }

    #[test]
    fn test_group_by_key_drops_rows_without_key() {
        let rows = vec![(Some(1), "kept"), (None, "orphan")];
        let grouped = group_by_key(&[1], rows, |(k, _)| *k);

        assert_eq!(grouped[&1], vec![(Some(1), "kept")]);
    }

    #[test]
    fn test_group_by_key_empty_keys() {
        let rows: Vec<(i32, &str)> = Vec::new();
        let keys: &[i32] = &[];
        let grouped = group_by_key(keys, rows, |(k, _)| Some(*k));
        assert!(grouped.is_empty());
    }
}
