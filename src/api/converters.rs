//! Conversion functions from database models to API DTOs

use crate::api::dto::TweetResponse;
use crate::data::TweetView;

/// Convert a tweet read model to its serialized form
pub fn tweet_to_response(view: &TweetView) -> TweetResponse {
    TweetResponse {
        id: view.id.clone(),
        user: view.username.clone(),
        content: view.content.clone(),
        likes: view.like_count,
        created_at: view.created_at,
    }
}
