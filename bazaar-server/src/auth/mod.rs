//! Session authentication and role gating

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::Role;

use crate::state::AppState;

const TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT claims for a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id
    pub sub: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Expiration (Unix seconds)
    pub exp: i64,
    /// Issued at (Unix seconds)
    pub iat: i64,
}

/// Authenticated identity, inserted into request extensions by
/// [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<SessionClaims> for Identity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Sign a session token for an authenticated user.
pub fn create_token(
    user_id: i64,
    name: &str,
    email: &str,
    role: Role,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = SessionClaims {
        sub: user_id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        exp: (now + chrono::Duration::hours(TOKEN_EXPIRY_HOURS)).timestamp(),
        iat: now.timestamp(),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a session token's signature and expiry.
pub fn verify_token(
    token: &str,
    secret: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let data = jsonwebtoken::decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Require a valid `Authorization: Bearer <token>` header and attach the
/// caller's [`Identity`] to the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated).into_response())?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated).into_response())?;

    let claims = verify_token(token, &state.jwt_secret)
        .map_err(|_| AppError::new(ErrorCode::TokenInvalid).into_response())?;

    request.extensions_mut().insert(Identity::from(claims));
    Ok(next.run(request).await)
}

/// Reject non-admin callers. Must be layered inside [`auth_middleware`].
pub async fn require_admin(request: Request, next: Next) -> Result<Response, Response> {
    let identity = request
        .extensions()
        .get::<Identity>()
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated).into_response())?;

    if !identity.role.is_admin() {
        return Err(AppError::new(ErrorCode::AdminRequired).into_response());
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_roundtrip() {
        let token = create_token(7, "Alice", "alice@example.com", Role::Admin, SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(1, "Bob", "bob@example.com", Role::User, SECRET).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = create_token(1, "Bob", "bob@example.com", Role::User, SECRET).unwrap();
        let mut tampered = token.clone();
        // flip a character in the payload segment
        let mid = token.len() / 2;
        let original = tampered.remove(mid);
        let replacement = if original == 'A' { 'B' } else { 'A' };
        tampered.insert(mid, replacement);
        assert!(verify_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            sub: 1,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            role: Role::User,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(verify_token(&token, SECRET).is_err());
    }
}
