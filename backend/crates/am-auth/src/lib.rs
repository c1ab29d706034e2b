pub mod claims;
pub mod error;
pub mod identity_resolver;
pub mod login_service;
pub mod password;
pub mod token_issuer;

pub use claims::SessionClaims;
pub use error::{AuthError, Result};
pub use identity_resolver::IdentityResolver;
pub use login_service::{LoginOutcome, LoginRequest, LoginService, PublicIdentity};
pub use password::{hash_password, verify_password};
pub use token_issuer::TokenIssuer;

#[cfg(test)]
mod tests;
