//! Shared SQL fragments for repositories and loaders

// ============================================================================
// SQL Column Constants
//
// SELECT column lists for each entity type, shared by repositories and
// DataLoaders so both always decode the same row shape.
// ============================================================================

/// SQL columns for artist queries
pub const ARTIST_COLUMNS: &str = "id, name, genres, created_at";

/// SQL columns for album queries
pub const ALBUM_COLUMNS: &str = "id, title, artist_id, created_at";

/// SQL columns for musique queries
pub const MUSIQUE_COLUMNS: &str = "id, title, duree, album_id, artist_id, created_at";

/// SQL columns for playlist queries
pub const PLAYLIST_COLUMNS: &str = "id, name, description, created_by_id, created_at";

/// SQL columns for user queries
pub const USER_COLUMNS: &str = "id, username, email, created_at";

/// Prefix every column of a list with a table alias (`m.id, m.title, ...`)
///
/// Needed when a column list is used in a JOIN where names would be ambiguous.
pub fn qualified(alias: &str, columns: &str) -> String {
    columns
        .split(',')
        .map(|c| format!("{}.{}", alias, c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_prefixes_every_column() {
        assert_eq!(
            qualified("a", ALBUM_COLUMNS),
            "a.id, a.title, a.artist_id, a.created_at"
        );
    }

    #[test]
    fn test_qualified_single_column() {
        assert_eq!(qualified("m", "id"), "m.id");
    }
}
