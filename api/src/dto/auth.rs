use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login/google`
///
/// Fields are optional so a missing token reaches the service and is reported
/// as "No google token provided" instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    #[serde(default)]
    pub google_token: Option<String>,
}

/// Body of `POST /auth/refresh`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Body of `POST /auth/update-user-tokens`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserTokensRequest {
    #[serde(default)]
    pub auth_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: GoogleLoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.google_token.is_none());

        let request: RefreshTokenRequest = serde_json::from_str(r#"{"refreshToken":"abc"}"#).unwrap();
        assert_eq!(request.refresh_token.as_deref(), Some("abc"));
    }
}
