//! SQLite database operations
//!
//! All database access goes through this module.
//! Follower and liker sets are stored as join relations keyed by
//! foreign key pairs; membership add/remove is idempotent.

use chrono::Utc;
use sqlx::{Pool, Sqlite, SqlitePool};
use std::path::Path;

use super::models::*;
use crate::error::AppError;

const TWEET_VIEW_SELECT: &str = "SELECT t.id, t.user_id, u.username, t.content, \
     (SELECT COUNT(*) FROM likes l WHERE l.tweet_id = t.id) AS like_count, \
     t.created_at \
     FROM tweets t JOIN users u ON u.id = t.user_id";

/// Database connection pool wrapper.
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    // =========================================================================
    // Connection
    // =========================================================================

    /// Connect to SQLite database
    ///
    /// Creates the database file if it doesn't exist.
    /// Runs pending migrations automatically.
    ///
    /// # Arguments
    /// * `path` - Path to SQLite database file
    ///
    /// # Errors
    /// Returns error if connection or migration fails
    pub async fn connect(path: &Path) -> Result<Self, AppError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Database(sqlx::Error::Io(e)))?;
        }

        let connection_string = format!("sqlite:{}?mode=rwc", path.display());
        let pool = SqlitePool::connect(&connection_string).await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Migration failed: {}", e);
                AppError::Internal(anyhow::anyhow!("Migration failed: {}", e))
            })?;

        tracing::info!("Database connected and migrated successfully");

        Ok(Self { pool })
    }

    // =========================================================================
    // Users / Profiles
    // =========================================================================

    /// Create a user and its one-to-one profile row
    ///
    /// Both rows are inserted in a single transaction so a user can
    /// never exist without a profile.
    ///
    /// # Errors
    /// Returns error if the username is already taken
    pub async fn create_user(
        &self,
        username: &str,
        display_name: Option<&str>,
    ) -> Result<User, AppError> {
        let user = User {
            id: EntityId::new().0,
            username: username.to_string(),
            display_name: display_name.map(ToOwned::to_owned),
            created_at: Utc::now(),
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO users (id, username, display_name, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.display_name)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO profiles (user_id, bio, created_at) VALUES (?, NULL, ?)")
            .bind(&user.id)
            .bind(user.created_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Get a user by username
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Get the profile row for a user
    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    // =========================================================================
    // Follower set
    // =========================================================================

    /// Add a follower to a profile's follower set
    ///
    /// Idempotent: adding an already-present member is a no-op.
    pub async fn add_follower(
        &self,
        profile_user_id: &str,
        follower_user_id: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO followers (profile_user_id, follower_user_id, created_at) VALUES (?, ?, ?) \
             ON CONFLICT(profile_user_id, follower_user_id) DO NOTHING",
        )
        .bind(profile_user_id)
        .bind(follower_user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a follower from a profile's follower set
    ///
    /// Idempotent: removing an absent member is a no-op.
    pub async fn remove_follower(
        &self,
        profile_user_id: &str,
        follower_user_id: &str,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM followers WHERE profile_user_id = ? AND follower_user_id = ?")
            .bind(profile_user_id)
            .bind(follower_user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Count followers of a profile
    pub async fn count_followers(&self, profile_user_id: &str) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM followers WHERE profile_user_id = ?")
                .bind(profile_user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    // =========================================================================
    // Tweets
    // =========================================================================

    /// Insert a tweet
    pub async fn insert_tweet(&self, tweet: &Tweet) -> Result<(), AppError> {
        sqlx::query("INSERT INTO tweets (id, user_id, content, created_at) VALUES (?, ?, ?, ?)")
            .bind(&tweet.id)
            .bind(&tweet.user_id)
            .bind(&tweet.content)
            .bind(tweet.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Get a tweet by ID
    pub async fn get_tweet(&self, id: &str) -> Result<Option<Tweet>, AppError> {
        let tweet = sqlx::query_as::<_, Tweet>("SELECT * FROM tweets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tweet)
    }

    /// Get a tweet joined with its owner's username and like count
    pub async fn get_tweet_view(&self, id: &str) -> Result<Option<TweetView>, AppError> {
        let view =
            sqlx::query_as::<_, TweetView>(&format!("{} WHERE t.id = ?", TWEET_VIEW_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(view)
    }

    /// List all tweets, newest first
    pub async fn list_tweet_views(&self) -> Result<Vec<TweetView>, AppError> {
        let views = sqlx::query_as::<_, TweetView>(&format!(
            "{} ORDER BY t.created_at DESC, t.id DESC",
            TWEET_VIEW_SELECT
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(views)
    }

    /// List a single user's tweets, newest first
    pub async fn list_tweet_views_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<TweetView>, AppError> {
        let views = sqlx::query_as::<_, TweetView>(&format!(
            "{} WHERE t.user_id = ? ORDER BY t.created_at DESC, t.id DESC",
            TWEET_VIEW_SELECT
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(views)
    }

    /// Delete a tweet and its like rows
    ///
    /// Both deletions run in a single transaction so a like row can
    /// never outlive its tweet.
    pub async fn delete_tweet(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM likes WHERE tweet_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM tweets WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    // =========================================================================
    // Liker set
    // =========================================================================

    /// Add a user to a tweet's liker set
    ///
    /// Idempotent: liking an already-liked tweet is a no-op.
    pub async fn add_like(&self, tweet_id: &str, user_id: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO likes (tweet_id, user_id, created_at) VALUES (?, ?, ?) \
             ON CONFLICT(tweet_id, user_id) DO NOTHING",
        )
        .bind(tweet_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a user from a tweet's liker set
    ///
    /// Idempotent: unliking a tweet that was never liked is a no-op.
    pub async fn remove_like(&self, tweet_id: &str, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM likes WHERE tweet_id = ? AND user_id = ?")
            .bind(tweet_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
