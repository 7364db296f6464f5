use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct VerificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationRepository<'a> {
    /// Creates a new instance of [`VerificationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a confirmed email verification
    pub async fn create(
        &self,
        email: &str,
        otp: i32,
    ) -> Result<entity::verification::Model, DbErr> {
        let verification = entity::verification::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            otp: ActiveValue::Set(otp),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        verification.insert(self.db).await
    }

    /// Gets the verification entry for an email
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::verification::Model>, DbErr> {
        entity::prelude::Verification::find()
            .filter(entity::verification::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use setu_test_utils::prelude::*;

        use crate::server::data::verification::VerificationRepository;

        /// Expect success when recording a verification
        #[tokio::test]
        async fn creates_verification() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;

            let repo = VerificationRepository::new(&test.state.db);
            let result = repo.create("user@example.com", 123456).await;

            assert!(result.is_ok());

            Ok(())
        }

        /// Expect Error when the email is already verified
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;
            factory::insert_verification(&test.state.db, "user@example.com").await?;

            let repo = VerificationRepository::new(&test.state.db);
            let result = repo.create("user@example.com", 654321).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_email {
        use setu_test_utils::prelude::*;

        use crate::server::data::verification::VerificationRepository;

        /// Expect Some when the email has been verified
        #[tokio::test]
        async fn finds_verified_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;
            factory::insert_verification(&test.state.db, "user@example.com").await?;

            let repo = VerificationRepository::new(&test.state.db);
            let result = repo.find_by_email("user@example.com").await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect None when the email has not been verified
        #[tokio::test]
        async fn returns_none_for_unverified_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;

            let repo = VerificationRepository::new(&test.state.db);
            let result = repo.find_by_email("user@example.com").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
