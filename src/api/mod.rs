//! API layer
//!
//! HTTP handlers for:
//! - Tweet endpoints (create, list, detail, delete, actions)
//! - Profile endpoints (follow/unfollow, per-user feed)
//! - Metrics (Prometheus)

mod converters;
mod dto;
pub mod metrics;
mod profiles;
mod tweets;

pub use converters::*;
pub use dto::*;

pub use metrics::metrics_router;
pub use profiles::profiles_router;
pub use tweets::tweets_router;
