//! Data models
//!
//! Rust structs representing database entities.
//! All models use ULID for IDs and chrono for timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// ID Types
// =============================================================================

/// Entity ID wrapper (ULID format, 26 characters)
///
/// Example: "01ARZ3NDEKTSV4RRFFQ69G5FAV"
///
/// ULIDs are lexicographically sortable by creation time, so ordering
/// by id matches creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Generate a new ULID
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    /// Create from existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// User / Profile
// =============================================================================

/// A registered user
///
/// Authentication state is carried by signed session tokens,
/// not stored on this row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile, one-to-one with a user
///
/// The follower set lives in the `followers` join table,
/// not on this row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub user_id: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Tweet
// =============================================================================

/// A tweet
///
/// The owning user is immutable after creation. The liker set lives
/// in the `likes` join table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tweet {
    pub id: String,
    pub user_id: String,
    /// Plain text content
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Read model for a tweet joined with its owner's username and like count
///
/// Produced by the listing/detail queries so handlers can serialize
/// a tweet without extra round trips.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TweetView {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}
