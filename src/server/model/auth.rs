//! Bearer token claims, signing keys, and the authenticated-user extractor.

use std::fmt;

use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{DecodingKey, EncodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    data::{lifecycle::LifecycleRepository, user::UserRepository},
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Claims carried by access and refresh tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued for.
    pub sub: i32,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Signing and verification keys derived from the configured secret.
#[derive(Clone)]
pub struct TokenKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// The fixed roles a user can hold.
///
/// Role names match the rows seeded into the `role` table; mutating
/// operations demand one of these through [`AuthedUser::require_role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleName {
    HouseOwner,
    Worker,
    ShopOwner,
}

impl RoleName {
    pub const ALL: [RoleName; 3] = [Self::HouseOwner, Self::Worker, Self::ShopOwner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HouseOwner => "House Owner",
            Self::Worker => "Worker",
            Self::ShopOwner => "ShopOwner",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated user resolved from the request's bearer token.
///
/// Extraction fails with 401 when the Authorization header is missing or
/// malformed, the token does not verify, or the user from the claims is
/// missing or soft deleted.
pub struct AuthedUser {
    pub user: entity::user::Model,
    pub roles: Vec<String>,
}

impl AuthedUser {
    /// The acting user's ID, stamped into `created_by`/`updated_by` columns.
    pub fn id(&self) -> i32 {
        self.user.id
    }

    /// Rejects with 403 unless the user holds the named role.
    pub fn require_role(&self, role: RoleName) -> Result<(), Error> {
        if self.roles.iter().any(|name| name == role.as_str()) {
            Ok(())
        } else {
            Err(AuthError::MissingRole(role).into())
        }
    }
}

impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingBearerToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingBearerToken)?;

        let claims = decode_claims(token, &state.tokens)?;

        let user = LifecycleRepository::<entity::user::Entity>::new(&state.db)
            .get_active(claims.sub)
            .await?
            .ok_or(AuthError::StaleToken(claims.sub))?;

        let roles = UserRepository::new(&state.db).get_role_names(user.id).await?;

        Ok(AuthedUser { user, roles })
    }
}

/// Decode and verify a bearer token's claims.
pub fn decode_claims(token: &str, keys: &TokenKeys) -> Result<Claims, AuthError> {
    jsonwebtoken::decode::<Claims>(token, &keys.decoding, &Validation::default())
        .map(|data| data.claims)
        .map_err(AuthError::InvalidToken)
}
