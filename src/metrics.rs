//! Prometheus metrics registry and instruments.
//!
//! This module is framework-agnostic and can be used from any layer.

use lazy_static::lazy_static;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("chirp_http_requests_total", "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("metric can be created");

    // Application Metrics
    pub static ref TWEETS_TOTAL: IntCounter = IntCounter::new(
        "chirp_tweets_total",
        "Total number of tweets created"
    ).expect("metric can be created");
    pub static ref TWEET_ACTIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("chirp_tweet_actions_total", "Total number of tweet engagement actions"),
        &["action"]
    ).expect("metric can be created");
    pub static ref FOLLOW_ACTIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("chirp_follow_actions_total", "Total number of follow/unfollow actions"),
        &["action"]
    ).expect("metric can be created");

    // Error Metrics
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("chirp_errors_total", "Total number of errors"),
        &["error_type"]
    ).expect("metric can be created");
}

/// Initialize metrics registry.
pub fn init_metrics() {
    REGISTRY
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("HTTP_REQUESTS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(TWEETS_TOTAL.clone()))
        .expect("TWEETS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(TWEET_ACTIONS_TOTAL.clone()))
        .expect("TWEET_ACTIONS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(FOLLOW_ACTIONS_TOTAL.clone()))
        .expect("FOLLOW_ACTIONS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(ERRORS_TOTAL.clone()))
        .expect("ERRORS_TOTAL can be registered");

    tracing::info!("Metrics registry initialized");
}
