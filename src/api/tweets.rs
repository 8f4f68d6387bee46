//! Tweet endpoints

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;

use super::converters::tweet_to_response;
use super::dto::{MessageResponse, TweetResponse};
use crate::AppState;
use crate::auth::CurrentUser;
use crate::data::{EntityId, Tweet};
use crate::error::AppError;
use crate::metrics::{TWEET_ACTIONS_TOTAL, TWEETS_TOTAL};

/// Tweet creation request
#[derive(Debug, Deserialize)]
pub struct CreateTweetRequest {
    pub content: Option<String>,
}

/// Engagement action on a tweet
///
/// Unrecognized values deserialize to `Unknown` rather than failing,
/// so unsupported actions are accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TweetAction {
    Like,
    Unlike,
    Retweet,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TweetAction {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Retweet => "retweet",
            Self::Unknown => "unknown",
        }
    }
}

/// Tweet action request
#[derive(Debug, Deserialize)]
pub struct TweetActionRequest {
    pub id: Option<String>,
    #[serde(default)]
    pub action: TweetAction,
}

fn validate_content(raw: Option<String>, max_chars: usize) -> Result<String, AppError> {
    let content = raw.unwrap_or_default().trim().to_string();

    if content.is_empty() {
        return Err(AppError::Validation("content is required".to_string()));
    }
    if content.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "content must be at most {} characters",
            max_chars
        )));
    }

    Ok(content)
}

/// POST /api/tweets
///
/// Creates a tweet owned by the actor. Returns 201 with the
/// serialized tweet.
async fn create_tweet(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Json(request): Json<CreateTweetRequest>,
) -> Result<(StatusCode, Json<TweetResponse>), AppError> {
    let content = validate_content(request.content, state.config.tweets.max_chars)?;

    let tweet = Tweet {
        id: EntityId::new().0,
        user_id: session.user_id.clone(),
        content,
        created_at: Utc::now(),
    };
    state.db.insert_tweet(&tweet).await?;
    TWEETS_TOTAL.inc();

    tracing::debug!(tweet_id = %tweet.id, username = %session.username, "Tweet created");

    let response = TweetResponse {
        id: tweet.id,
        user: session.username,
        content: tweet.content,
        likes: 0,
        created_at: tweet.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/tweets
///
/// Public. All tweets, newest first.
async fn list_tweets(State(state): State<AppState>) -> Result<Json<Vec<TweetResponse>>, AppError> {
    let views = state.db.list_tweet_views().await?;
    let tweets = views.iter().map(tweet_to_response).collect();

    Ok(Json(tweets))
}

/// GET /api/tweets/{id}
///
/// Public. 404 if the id does not resolve.
async fn tweet_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TweetResponse>, AppError> {
    let view = state.db.get_tweet_view(&id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(tweet_to_response(&view)))
}

/// DELETE /api/tweets/{id} (also POST /api/tweets/{id}/delete)
///
/// 404 if the tweet is absent. If it exists but the actor is not the
/// owner, 401 with a distinct error rather than 404.
async fn delete_tweet(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let tweet = state.db.get_tweet(&id).await?.ok_or(AppError::NotFound)?;

    if tweet.user_id != session.user_id {
        return Err(AppError::NotTweetOwner);
    }

    state.db.delete_tweet(&id).await?;

    tracing::debug!(tweet_id = %id, username = %session.username, "Tweet deleted");

    Ok(Json(MessageResponse {
        message: "Tweet was deleted".to_string(),
    }))
}

/// POST /api/tweets/action
///
/// Dispatches like/unlike/retweet on a tweet. The tweet must resolve
/// regardless of the action. `like` returns the full serialized tweet;
/// `unlike` and `retweet` return an empty object (asymmetry kept for
/// client compatibility).
async fn tweet_action(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Json(request): Json<TweetActionRequest>,
) -> Result<Response, AppError> {
    let id = request
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("id is required".to_string()))?;

    state.db.get_tweet(id).await?.ok_or(AppError::NotFound)?;

    TWEET_ACTIONS_TOTAL
        .with_label_values(&[request.action.as_str()])
        .inc();

    match request.action {
        TweetAction::Like => {
            state.db.add_like(id, &session.user_id).await?;
            let view = state.db.get_tweet_view(id).await?.ok_or(AppError::NotFound)?;
            Ok(Json(tweet_to_response(&view)).into_response())
        }
        TweetAction::Unlike => {
            state.db.remove_like(id, &session.user_id).await?;
            Ok(Json(serde_json::json!({})).into_response())
        }
        // Retweet is accepted but not implemented; unknown actions are
        // ignored rather than rejected.
        TweetAction::Retweet | TweetAction::Unknown => {
            Ok(Json(serde_json::json!({})).into_response())
        }
    }
}

/// Create tweets router
pub fn tweets_router() -> Router<AppState> {
    Router::new()
        .route("/tweets", get(list_tweets).post(create_tweet))
        .route("/tweets/action", post(tweet_action))
        .route("/tweets/:id", get(tweet_detail).delete(delete_tweet))
        .route("/tweets/:id/delete", post(delete_tweet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_deserializes_known_values() {
        let action: TweetAction = serde_json::from_str("\"like\"").unwrap();
        assert_eq!(action, TweetAction::Like);
        let action: TweetAction = serde_json::from_str("\"unlike\"").unwrap();
        assert_eq!(action, TweetAction::Unlike);
        let action: TweetAction = serde_json::from_str("\"retweet\"").unwrap();
        assert_eq!(action, TweetAction::Retweet);
    }

    #[test]
    fn action_maps_unrecognized_to_unknown() {
        let action: TweetAction = serde_json::from_str("\"boost\"").unwrap();
        assert_eq!(action, TweetAction::Unknown);
    }

    #[test]
    fn action_defaults_to_unknown_when_missing() {
        let request: TweetActionRequest = serde_json::from_str("{\"id\": \"abc\"}").unwrap();
        assert_eq!(request.action, TweetAction::Unknown);
    }

    #[test]
    fn content_validation_trims_and_bounds() {
        assert!(validate_content(None, 240).is_err());
        assert!(validate_content(Some("   ".to_string()), 240).is_err());
        assert!(validate_content(Some("x".repeat(241)), 240).is_err());

        let content = validate_content(Some("  hello  ".to_string()), 240).unwrap();
        assert_eq!(content, "hello");
    }
}
