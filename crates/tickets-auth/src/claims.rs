use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// `id` and `email` identify the user; `iat` and `exp` are Unix timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    /// Claims for `user_id` valid for `ttl_secs` starting at `issued_at`.
    pub fn new(user_id: i64, email: &str, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            id: user_id,
            email: email.to_string(),
            iat: issued_at.max(0) as usize,
            exp: (issued_at + ttl_secs).max(0) as usize,
        }
    }
}
