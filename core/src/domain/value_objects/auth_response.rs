//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Tokens plus the signed-in user, returned by every auth endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub tokens: TokenPair,
    pub user: User,
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: User) -> Self {
        Self { tokens, user }
    }
}
