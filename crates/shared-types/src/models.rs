use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the authentication service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}
