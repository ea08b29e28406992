//! Google sign-in verification

mod tokeninfo;

pub use tokeninfo::{GoogleTokenInfoVerifier, TokenInfo};
