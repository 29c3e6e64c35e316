//! Shared pagination helpers for GraphQL resolvers

/// Maximum items per page for top-level list queries
pub const MAX_LIMIT: i32 = 100;

/// Maximum items for nested relationship resolvers
pub const MAX_NESTED_LIMIT: i32 = 50;

/// Clamp pagination limit to valid range
#[inline]
pub fn clamp_limit(limit: i32, max: i32) -> i64 {
    limit.clamp(1, max) as i64
}

/// Clamp offset to non-negative
#[inline]
pub fn clamp_offset(offset: i32) -> i64 {
    offset.max(0) as i64
}

/// Apply nested-list pagination to rows already fetched by a DataLoader
pub fn paginate<T>(items: Vec<T>, limit: i32, offset: i32) -> impl Iterator<Item = T> {
    items
        .into_iter()
        .skip(clamp_offset(offset) as usize)
        .take(clamp_limit(limit, MAX_NESTED_LIMIT) as usize)
}
