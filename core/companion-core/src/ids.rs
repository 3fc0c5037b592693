//! Identifier generation.
//!
//! Ids are ULIDs with a short kind prefix. ULIDs carry 80 random bits per
//! millisecond, so back-to-back creates never collide the way bare
//! millisecond timestamps do.

use ulid::Ulid;

fn prefixed(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
}

/// Fresh identity id, e.g. `user-01hx...`.
pub fn new_user_id() -> String {
    prefixed("user")
}

/// Fresh experience id, e.g. `exp-01hx...`.
pub fn new_experience_id() -> String {
    prefixed("exp")
}

pub fn new_toast_id() -> String {
    Ulid::new().to_string().to_lowercase()
}
