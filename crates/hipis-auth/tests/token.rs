use jsonwebtoken::{encode, get_current_timestamp, Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use hipis_auth::token::{AuthIdentity, TokenService, TOKEN_TTL_SECS};
use hipis_core::models::user::Role;

const SECRET: &[u8] = b"test-secret-not-for-production";

fn student() -> AuthIdentity {
    AuthIdentity {
        user_id: Uuid::new_v4(),
        email: "riya@student.edu".to_string(),
        role: Role::Student,
    }
}

#[test]
fn issued_token_verifies_to_the_same_identity() {
    let service = TokenService::new(SECRET);
    let identity = student();

    let token = service.issue(&identity).unwrap();
    let verified = service.verify(&token).unwrap();

    assert_eq!(verified, identity);
}

#[test]
fn token_expires_after_its_lifetime() {
    let service = TokenService::new(SECRET);
    let now = get_current_timestamp();

    // Issued 1 h 1 s ago: one second past expiry, deterministically invalid.
    let expired = service.issue_at(&student(), now - TOKEN_TTL_SECS - 1).unwrap();
    assert!(service.verify(&expired).is_none());

    // Issued just under an hour ago: still valid.
    let fresh = service.issue_at(&student(), now - TOKEN_TTL_SECS + 5).unwrap();
    assert!(service.verify(&fresh).is_some());
}

#[test]
fn token_signed_with_another_secret_is_invalid() {
    let ours = TokenService::new(SECRET);
    let theirs = TokenService::new(b"some-other-secret");

    let token = theirs.issue(&student()).unwrap();
    assert!(ours.verify(&token).is_none());
}

#[derive(Serialize)]
struct ForeignClaims {
    sub: Uuid,
    email: String,
    role: Role,
    iss: String,
    aud: String,
    iat: u64,
    exp: u64,
}

fn foreign_token(iss: &str, aud: &str) -> String {
    let now = get_current_timestamp();
    let claims = ForeignClaims {
        sub: Uuid::new_v4(),
        email: "riya@student.edu".to_string(),
        role: Role::Student,
        iss: iss.to_string(),
        aud: aud.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

#[test]
fn issuer_mismatch_is_invalid_even_with_our_secret() {
    let service = TokenService::new(SECRET);
    let token = foreign_token("someone-else", "hipis-app");
    assert!(service.verify(&token).is_none());
}

#[test]
fn audience_mismatch_is_invalid_even_with_our_secret() {
    let service = TokenService::new(SECRET);
    let token = foreign_token("hipis", "another-app");
    assert!(service.verify(&token).is_none());
}

#[test]
fn garbage_input_is_invalid_not_a_panic() {
    let service = TokenService::new(SECRET);
    assert!(service.verify("").is_none());
    assert!(service.verify("not.a.jwt").is_none());
}

#[test]
fn hashed_passwords_round_trip() {
    let hash = hipis_auth::password::hash_password("Password@123").unwrap();
    assert!(hipis_auth::password::verify_password("Password@123", &hash));
    assert!(!hipis_auth::password::verify_password("password@123", &hash));
    assert!(!hipis_auth::password::verify_password("Password@123", "not-a-phc-string"));
}
