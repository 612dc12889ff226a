//! Integration tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with their extractors and asserted on the
//! resulting response status codes.

mod contest;
mod sync;
mod team;

use crease::server::model::auth::AuthenticatedUser;

pub fn test_user(id: i32) -> AuthenticatedUser {
    AuthenticatedUser {
        id,
        name: format!("User {id}"),
    }
}
