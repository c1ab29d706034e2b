use crate::{AuthError, IdentityResolver, Result as AuthErrorResult, TokenIssuer, verify_password};

use am_core::{Identity, RegistrationStatus, Role};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};
use uuid::Uuid;

/// Raw login input. Either field may be absent.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The identity fields safe to return to a client. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub apartment_complex_name: Option<String>,
    pub role: Role,
    pub status: Option<RegistrationStatus>,
    pub phone: Option<String>,
}

impl From<Identity> for PublicIdentity {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            apartment_complex_name: identity.apartment_complex_name,
            role: identity.role,
            status: identity.status,
            phone: identity.phone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: PublicIdentity,
}

/// Authenticates a login request end to end: input check, resolution,
/// password verification, status gate, token issue.
pub struct LoginService {
    resolver: IdentityResolver,
    tokens: Arc<TokenIssuer>,
}

impl LoginService {
    pub fn new(resolver: IdentityResolver, tokens: Arc<TokenIssuer>) -> Self {
        Self { resolver, tokens }
    }

    pub async fn login(&self, request: LoginRequest) -> AuthErrorResult<LoginOutcome> {
        let (email, password) = match (non_empty(request.email), non_empty(request.password)) {
            (Some(email), Some(password)) => (email, password),
            _ => {
                return Err(AuthError::MissingCredentials {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let Some(identity) = self.resolver.resolve(&email).await? else {
            warn!("Login failed: unknown email");
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !verify_password(&password, &identity.password_hash)? {
            warn!("Login failed: wrong password for {} {}", identity.role, identity.id);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if identity.is_blocked_by_status() {
            let status = identity.status.unwrap_or_default();
            warn!(
                "Login refused: {} {} registration is {}",
                identity.role,
                identity.id,
                status.as_str()
            );
            return Err(AuthError::RegistrationPending {
                status: status.as_str().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.tokens.issue(&identity)?;
        info!(
            "Login succeeded: {} {} (apartment: {})",
            identity.role,
            identity.id,
            identity.apartment_complex_name.as_deref().unwrap_or("-")
        );

        Ok(LoginOutcome {
            token,
            user: PublicIdentity::from(identity),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
