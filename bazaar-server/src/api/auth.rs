//! Registration and login

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::Role;

use crate::db;
use crate::state::AppState;
use crate::util::{hash_password, verify_password};

use super::{ApiResult, internal};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public identity payload; the password hash never leaves the db layer.
#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserPayload,
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<AuthResponse> {
    let name = req.name.trim();
    let email = req.email.trim();
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(AppError::validation("name, email and password are required"));
    }

    if db::users::find_by_email(&state.pool, email)
        .await
        .map_err(internal)?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::EmailTaken));
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("password hashing failed: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    let now = shared::util::now_millis();
    let user_id = match db::users::insert(
        &state.pool,
        name,
        email,
        &password_hash,
        Role::User.as_str(),
        now,
    )
    .await
    {
        Ok(id) => id,
        // Unique index backstop for concurrent registrations of one email
        Err(e) if e.as_database_error().is_some_and(|d| d.is_unique_violation()) => {
            return Err(AppError::new(ErrorCode::EmailTaken));
        }
        Err(e) => return Err(internal(e.into())),
    };

    let token = issue_token(&state, user_id, name, email, Role::User)?;
    Ok(Json(AuthResponse {
        user: UserPayload {
            id: user_id,
            name: name.to_string(),
            email: email.to_string(),
            role: Role::User,
        },
        token,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    // Unknown email and wrong password are indistinguishable to the caller.
    let user = db::users::find_by_email(&state.pool, req.email.trim())
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }

    let role = Role::from_db(&user.role);
    let token = issue_token(&state, user.id, &user.name, &user.email, role)?;
    Ok(Json(AuthResponse {
        user: UserPayload {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
        },
        token,
    }))
}

fn issue_token(
    state: &AppState,
    user_id: i64,
    name: &str,
    email: &str,
    role: Role,
) -> Result<String, AppError> {
    crate::auth::create_token(user_id, name, email, role, &state.jwt_secret).map_err(|e| {
        tracing::error!("token signing failed: {e}");
        AppError::new(ErrorCode::InternalError)
    })
}
