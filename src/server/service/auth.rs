use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        auth::{LoginDto, TokenDto},
        user::UserDto,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::auth::{Claims, TokenKeys},
        util::secret::verify_password,
    },
};

/// How long an access token stays valid.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;
/// How long a refresh token stays valid.
pub const REFRESH_TOKEN_TTL_SECS: i64 = 60 * 60 * 24 * 7;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and mints bearer tokens
    ///
    /// # Behavior
    /// - The username is looked up without the soft-delete filter, then a
    ///   deleted account is rejected the same way as an unknown one so the
    ///   response never reveals which part of the credentials was wrong.
    /// - The password is verified against the stored hash.
    /// - On success an access and a refresh token are minted, both carrying
    ///   the user ID as `sub` and differing only in their expiry.
    ///
    /// # Returns
    /// - `Ok(TokenDto)`: Tokens plus the user's reduced projection
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))`: Unknown
    ///   username, deactivated account, or wrong password
    pub async fn login(&self, payload: &LoginDto) -> Result<TokenDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.find_by_username(&payload.username).await? {
            Some(user) if !user.is_deleted => user,
            _ => return Err(AuthError::InvalidCredentials.into()),
        };

        if !verify_password(&payload.password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let roles = user_repo.get_role_names(user.id).await?;

        let access_token = self.issue_token(user.id, ACCESS_TOKEN_TTL_SECS)?;
        let refresh_token = self.issue_token(user.id, REFRESH_TOKEN_TTL_SECS)?;

        Ok(TokenDto {
            access_token,
            refresh_token,
            user: UserDto {
                username: user.username,
                name: user.name,
                email: user.email,
                mobile: user.mobile,
                roles,
            },
        })
    }

    fn issue_token(&self, user_id: i32, ttl_secs: i64) -> Result<String, Error> {
        let claims = Claims {
            sub: user_id,
            exp: (Utc::now().timestamp() + ttl_secs) as usize,
        };

        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &self.tokens.encoding)
            .map_err(|err| AuthError::TokenIssue(err).into())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DatabaseConnection;
    use setu_test_utils::error::TestError;

    use crate::server::{data::user::UserRepository, util::secret::hash_password};

    async fn insert_login_user(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let hash = hash_password(password).expect("failed to hash test password");
        let user = UserRepository::new(db)
            .create(
                username.to_string(),
                hash,
                "Test User".to_string(),
                9_000_000_001,
                "a@example.com".to_string(),
            )
            .await?;

        Ok(user)
    }

    mod login {
        use setu_test_utils::prelude::*;

        use crate::{
            model::auth::LoginDto,
            server::{
                data::lifecycle::LifecycleRepository,
                error::{auth::AuthError, Error},
                model::auth::{decode_claims, TokenKeys},
                service::auth::{tests::insert_login_user, AuthService},
            },
        };

        /// Expect tokens carrying the user's ID for valid credentials
        #[tokio::test]
        async fn issues_tokens_for_valid_credentials() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::User,
                entity::prelude::Role,
                entity::prelude::UserRole
            )?;
            let user =
                insert_login_user(&test.state.db, "tester_user_01", "super-secret-pw").await?;

            let keys = TokenKeys::new("test-secret");
            let service = AuthService::new(&test.state.db, &keys);
            let result = service
                .login(&LoginDto {
                    username: "tester_user_01".to_string(),
                    password: "super-secret-pw".to_string(),
                })
                .await;

            assert!(result.is_ok());
            let tokens = result.unwrap();

            let claims = decode_claims(&tokens.access_token, &keys).unwrap();

            assert_eq!(claims.sub, user.id);
            assert_eq!(tokens.user.username, "tester_user_01");

            Ok(())
        }

        /// Expect rejection for a wrong password
        #[tokio::test]
        async fn rejects_wrong_password() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::User,
                entity::prelude::Role,
                entity::prelude::UserRole
            )?;
            insert_login_user(&test.state.db, "tester_user_01", "super-secret-pw").await?;

            let keys = TokenKeys::new("test-secret");
            let service = AuthService::new(&test.state.db, &keys);
            let result = service
                .login(&LoginDto {
                    username: "tester_user_01".to_string(),
                    password: "wrong-password".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }

        /// Expect rejection for an unknown username
        #[tokio::test]
        async fn rejects_unknown_username() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::User,
                entity::prelude::Role,
                entity::prelude::UserRole
            )?;

            let keys = TokenKeys::new("test-secret");
            let service = AuthService::new(&test.state.db, &keys);
            let result = service
                .login(&LoginDto {
                    username: "tester_user_01".to_string(),
                    password: "super-secret-pw".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }

        /// Expect rejection for a deactivated account
        #[tokio::test]
        async fn rejects_deleted_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::User,
                entity::prelude::Role,
                entity::prelude::UserRole
            )?;
            let user =
                insert_login_user(&test.state.db, "tester_user_01", "super-secret-pw").await?;

            LifecycleRepository::<entity::user::Entity>::new(&test.state.db)
                .soft_delete(user.id)
                .await?;

            let keys = TokenKeys::new("test-secret");
            let service = AuthService::new(&test.state.db, &keys);
            let result = service
                .login(&LoginDto {
                    username: "tester_user_01".to_string(),
                    password: "super-secret-pw".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }
    }
}
