use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{OtpConfirmDto, OtpRequestDto},
    server::{
        data::verification::VerificationRepository,
        error::{
            resource::{Resource, ResourceError},
            validation::ValidationError,
            Error,
        },
        model::otp::{Notifier, PendingOtps},
        validate::validate_email,
    },
};

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    pending: &'a PendingOtps,
    notifier: &'a dyn Notifier,
}

impl<'a> VerificationService<'a> {
    /// Creates a new instance of [`VerificationService`]
    pub fn new(
        db: &'a DatabaseConnection,
        pending: &'a PendingOtps,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            db,
            pending,
            notifier,
        }
    }

    /// Issues a one-time code for an email awaiting verification
    ///
    /// # Behavior
    /// - An email that already has a verification row is rejected with a
    ///   conflict; accounts can only be gated once.
    /// - A fresh six-digit code is parked in the pending map, replacing any
    ///   earlier code for the same email, then handed to the notifier for
    ///   delivery.
    pub async fn request_otp(&self, payload: &OtpRequestDto) -> Result<(), Error> {
        validate_email(&payload.email)?;

        let existing = VerificationRepository::new(self.db)
            .find_by_email(&payload.email)
            .await?;

        if existing.is_some() {
            return Err(ResourceError::Conflict(
                Resource::Verification,
                format!("Email {} has already been verified", payload.email),
            )
            .into());
        }

        let otp = rand::rng().random_range(100_000..=999_999);

        self.pending.put(&payload.email, otp).await;
        self.notifier.send_otp(&payload.email, otp).await;

        Ok(())
    }

    /// Confirms a one-time code and persists the verification gate
    ///
    /// On a match the verification row is written and the pending entry
    /// dropped; account creation for the email is unlocked from then on. A
    /// wrong or expired code is a validation failure.
    pub async fn confirm_otp(&self, payload: &OtpConfirmDto) -> Result<(), Error> {
        if !self.pending.matches(&payload.email, payload.otp).await {
            return Err(ValidationError::new(
                "otp",
                format!("The code did not match the one sent to {}", payload.email),
            )
            .into());
        }

        VerificationRepository::new(self.db)
            .create(&payload.email, payload.otp)
            .await?;

        self.pending.clear(&payload.email).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use crate::server::model::otp::Notifier;

    /// Captures issued codes so tests can read them back.
    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, i32)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_otp(&self, email: &str, otp: i32) {
            let mut guard = self.sent.lock().await;

            guard.push((email.to_string(), otp));
        }
    }

    mod request_otp {
        use setu_test_utils::prelude::*;

        use crate::{
            model::auth::OtpRequestDto,
            server::{
                error::{resource::ResourceError, Error},
                model::otp::PendingOtps,
                service::verification::{tests::RecordingNotifier, VerificationService},
            },
        };

        /// Expect the delivered code to match the parked one
        #[tokio::test]
        async fn parks_and_delivers_code() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;
            let pending = PendingOtps::default();
            let notifier = RecordingNotifier::default();

            let service = VerificationService::new(&test.state.db, &pending, &notifier);
            let result = service
                .request_otp(&OtpRequestDto {
                    email: "user@example.com".to_string(),
                })
                .await;

            assert!(result.is_ok());

            let sent = notifier.sent.lock().await;

            assert_eq!(sent.len(), 1);
            assert_eq!(sent[0].0, "user@example.com");
            assert!(pending.matches("user@example.com", sent[0].1).await);

            Ok(())
        }

        /// Expect Conflict when the email is already verified
        #[tokio::test]
        async fn rejects_verified_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;
            factory::insert_verification(&test.state.db, "user@example.com").await?;

            let pending = PendingOtps::default();
            let notifier = RecordingNotifier::default();

            let service = VerificationService::new(&test.state.db, &pending, &notifier);
            let result = service
                .request_otp(&OtpRequestDto {
                    email: "user@example.com".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::Conflict(_, _)))
            ));

            Ok(())
        }

        /// Expect a malformed email to be rejected before any lookup
        #[tokio::test]
        async fn rejects_malformed_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;
            let pending = PendingOtps::default();
            let notifier = RecordingNotifier::default();

            let service = VerificationService::new(&test.state.db, &pending, &notifier);
            let result = service
                .request_otp(&OtpRequestDto {
                    email: "not-an-email".to_string(),
                })
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            Ok(())
        }
    }

    mod confirm_otp {
        use setu_test_utils::prelude::*;

        use crate::{
            model::auth::OtpConfirmDto,
            server::{
                data::verification::VerificationRepository,
                error::Error,
                model::otp::PendingOtps,
                service::verification::{tests::RecordingNotifier, VerificationService},
            },
        };

        /// Expect the verification row to persist and the code to be dropped
        #[tokio::test]
        async fn persists_verification_on_match() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;
            let pending = PendingOtps::default();
            let notifier = RecordingNotifier::default();

            pending.put("user@example.com", 123456).await;

            let service = VerificationService::new(&test.state.db, &pending, &notifier);
            let result = service
                .confirm_otp(&OtpConfirmDto {
                    email: "user@example.com".to_string(),
                    otp: 123456,
                })
                .await;

            assert!(result.is_ok());

            let row = VerificationRepository::new(&test.state.db)
                .find_by_email("user@example.com")
                .await?;

            assert!(row.is_some());
            assert!(!pending.matches("user@example.com", 123456).await);

            Ok(())
        }

        /// Expect a wrong code to fail without persisting anything
        #[tokio::test]
        async fn rejects_wrong_code() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Verification)?;
            let pending = PendingOtps::default();
            let notifier = RecordingNotifier::default();

            pending.put("user@example.com", 123456).await;

            let service = VerificationService::new(&test.state.db, &pending, &notifier);
            let result = service
                .confirm_otp(&OtpConfirmDto {
                    email: "user@example.com".to_string(),
                    otp: 654321,
                })
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            let row = VerificationRepository::new(&test.state.db)
                .find_by_email("user@example.com")
                .await?;

            assert!(row.is_none());

            Ok(())
        }
    }
}
