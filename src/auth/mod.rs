//! Authentication module
//!
//! HMAC-signed session tokens and the actor-identity extractor.
//! Credential verification (login UI, password handling) is external
//! to this backend; tokens are minted by the surrounding system.

mod middleware;
pub mod session;

pub use middleware::CurrentUser;
pub use session::{Session, create_session_token, verify_session_token};
