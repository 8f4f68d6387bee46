//! Profile endpoints

use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, post},
};
use serde::Deserialize;

use super::converters::tweet_to_response;
use super::dto::{FollowCountResponse, TweetResponse};
use crate::AppState;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::metrics::FOLLOW_ACTIONS_TOTAL;

/// Follow/unfollow action on a profile
///
/// Unrecognized values deserialize to `Unknown`; the handler then
/// performs no mutation but still reports the follower count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowAction {
    Follow,
    Unfollow,
    #[default]
    #[serde(other)]
    Unknown,
}

impl FollowAction {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
            Self::Unknown => "unknown",
        }
    }
}

/// Follow request body
#[derive(Debug, Default, Deserialize)]
pub struct FollowRequest {
    #[serde(default)]
    pub action: FollowAction,
}

/// POST /api/profiles/{username}/follow
///
/// Adds or removes the actor in the target's follower set. Always
/// responds with the current follower count, even when the action
/// was unrecognized or missing.
async fn follow_user(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Path(username): Path<String>,
    body: Option<Json<FollowRequest>>,
) -> Result<Json<FollowCountResponse>, AppError> {
    let target = state
        .db
        .get_user_by_username(&username)
        .await?
        .ok_or(AppError::NotFound)?;

    // A missing or unparseable body means no mutation, count only.
    let action = body.map(|Json(request)| request.action).unwrap_or_default();

    FOLLOW_ACTIONS_TOTAL
        .with_label_values(&[action.as_str()])
        .inc();

    match action {
        FollowAction::Follow => {
            state.db.add_follower(&target.id, &session.user_id).await?;
            tracing::debug!(target = %target.username, actor = %session.username, "Followed");
        }
        FollowAction::Unfollow => {
            state.db.remove_follower(&target.id, &session.user_id).await?;
            tracing::debug!(target = %target.username, actor = %session.username, "Unfollowed");
        }
        FollowAction::Unknown => {}
    }

    let count = state.db.count_followers(&target.id).await?;

    Ok(Json(FollowCountResponse { count }))
}

/// GET /api/profiles/{username}/tweets
///
/// Public. The target user's tweets, newest first.
async fn list_user_tweets(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<TweetResponse>>, AppError> {
    let user = state
        .db
        .get_user_by_username(&username)
        .await?
        .ok_or(AppError::NotFound)?;

    let views = state.db.list_tweet_views_by_user(&user.id).await?;
    let tweets = views.iter().map(tweet_to_response).collect();

    Ok(Json(tweets))
}

/// Create profiles router
pub fn profiles_router() -> Router<AppState> {
    Router::new()
        .route("/profiles/:username/follow", post(follow_user))
        .route("/profiles/:username/tweets", get(list_user_tweets))
}
