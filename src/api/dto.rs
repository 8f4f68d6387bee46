//! API response DTOs
//!
//! The serialized tweet form is consumed by the frontend and must
//! remain stable for client compatibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serialized tweet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetResponse {
    pub id: String,
    /// Owner's username
    pub user: String,
    pub content: String,
    /// Liker-set size
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

/// Follower count response for follow/unfollow requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowCountResponse {
    pub count: i64,
}

/// Generic confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
