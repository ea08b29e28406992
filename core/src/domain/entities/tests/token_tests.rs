use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::{NewUser, User, UserRole};

fn user() -> User {
    User::new(NewUser {
        role: UserRole::Company,
        first_name: "Luis".to_string(),
        last_name: "Pérez".to_string(),
        email: "luis@example.com".to_string(),
        ..Default::default()
    })
}

#[test]
fn test_access_token_claims() {
    let mut user = user();
    let company_id = Uuid::new_v4();
    user.company_id = Some(company_id);

    let claims = Claims::new_access_token(&user, Duration::minutes(15));

    assert_eq!(claims.user_id().unwrap(), user.user_id);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert_eq!(claims.role, UserRole::Company);
    assert_eq!(claims.company_id(), Some(company_id));
    assert!(!claims.is_expired());
}

#[test]
fn test_claims_expiration() {
    let mut claims = Claims::new_access_token(&user(), Duration::minutes(15));
    claims.exp = Utc::now().timestamp() - 1;
    assert!(claims.is_expired());
}

#[test]
fn test_claims_omit_missing_company() {
    let claims = Claims::new_access_token(&user(), Duration::minutes(15));
    let json = serde_json::to_value(&claims).unwrap();
    assert!(json.get("companyId").is_none());
    assert_eq!(json["role"], "company");
}

#[test]
fn test_refresh_token_lifecycle() {
    let mut token = RefreshToken::new(
        Uuid::new_v4(),
        "hash".to_string(),
        "family".to_string(),
        Duration::days(7),
    );
    assert!(token.is_valid());

    token.revoke();
    assert!(!token.is_valid());

    let mut expired = token.clone();
    expired.is_revoked = false;
    expired.expires_at = Utc::now() - Duration::days(1);
    assert!(expired.is_expired());
    assert!(!expired.is_valid());
}
