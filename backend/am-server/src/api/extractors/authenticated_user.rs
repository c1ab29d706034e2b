//! Bearer-token authentication for REST handlers

use crate::{ApiError, AppState};

use am_auth::{AuthError, SessionClaims};
use am_core::Role;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

const AUTH_TOKEN_HEADER: &str = "x-auth-token";
const BEARER_PREFIX: &str = "Bearer ";

/// The verified session of the caller.
///
/// The token is read from `Authorization: Bearer <token>`, falling back to
/// the `x-auth-token` header. A missing token rejects with
/// "No token provided", anything unverifiable with "Invalid token".
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub SessionClaims);

impl AuthenticatedUser {
    pub fn id(&self) -> Uuid {
        self.0.id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = extract_token(&parts.headers)?;
            let claims = state.tokens.verify(&token)?;
            log::debug!("Authenticated {} {}", claims.role, claims.id);
            Ok(AuthenticatedUser(claims))
        }
    }
}

pub(crate) fn extract_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let raw = headers
        .get(AUTHORIZATION)
        .or_else(|| headers.get(AUTH_TOKEN_HEADER));

    let Some(raw) = raw else {
        return Err(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let value = raw.to_str().map_err(|_| AuthError::InvalidToken {
        message: "header is not valid ASCII".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();
    if token.is_empty() {
        return Err(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token.to_string())
}
