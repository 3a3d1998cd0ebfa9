use sarthak_api::config::jwt::JwtConfig;
use sarthak_api::modules::users::model::UserRole;
use sarthak_api::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn test_config() -> JwtConfig {
    JwtConfig {
        secret: "unit-test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn test_token_round_trip() {
    let config = test_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "user@test.com", UserRole::Student, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "user@test.com");
    assert_eq!(claims.role, UserRole::Student);
}

#[test]
fn test_token_carries_role() {
    let config = test_config();

    for role in [
        UserRole::Admin,
        UserRole::Faculty,
        UserRole::Parent,
        UserRole::Student,
    ] {
        let token = create_access_token(Uuid::new_v4(), "r@test.com", role, &config).unwrap();
        assert_eq!(verify_token(&token, &config).unwrap().role, role);
    }
}

#[test]
fn test_token_rejected_with_wrong_secret() {
    let config = test_config();
    let token =
        create_access_token(Uuid::new_v4(), "user@test.com", UserRole::Admin, &config).unwrap();

    let other = JwtConfig {
        secret: "a-different-secret".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_tampered_token_rejected() {
    let config = test_config();
    let token =
        create_access_token(Uuid::new_v4(), "user@test.com", UserRole::Student, &config).unwrap();

    let mut tampered = token.clone();
    tampered.truncate(token.len() - 2);

    assert!(verify_token(&tampered, &config).is_err());
}

#[test]
fn test_expired_token_rejected() {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use sarthak_api::modules::auth::model::Claims;

    let config = test_config();
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "user@test.com".to_string(),
        role: UserRole::Student,
        exp: now - 3600,
        iat: now - 7200,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .unwrap();

    assert!(verify_token(&token, &config).is_err());
}
