//! End-to-end flows driven through the service layer against an in-memory
//! database, covering the paths a client walks across several endpoints.

use async_trait::async_trait;
use tokio::sync::Mutex;

use setu::server::model::otp::Notifier;

/// Captures issued codes so the flow can read them back.
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

mod onboarding {
    use setu_test_utils::prelude::*;

    use setu::{
        model::{
            address::{CreateAddressDto, OwnerRefDto},
            auth::{LoginDto, OtpConfirmDto, OtpRequestDto},
            profession::CreateProfessionDto,
            search::ProfessionSearchDto,
            user::CreateUserDto,
        },
        server::{
            model::{auth::TokenKeys, otp::PendingOtps},
            service::{
                address::AddressService,
                auth::AuthService,
                profession::ProfessionService,
                search::{profession::ProfessionSearchService, ProfessionSearchResult},
                user::UserService,
                verification::VerificationService,
            },
            startup::seed_reference_data,
        },
    };

    use crate::workflow::RecordingNotifier;

    /// Expect a verified worker to register, log in, publish a profession
    /// with a work place, and surface in the city search with that address
    #[tokio::test]
    async fn verified_worker_reaches_city_search() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let db = &test.state.db;

        seed_reference_data(db).await.unwrap();

        let pending = PendingOtps::default();
        let notifier = RecordingNotifier::default();
        let verification = VerificationService::new(db, &pending, &notifier);

        verification
            .request_otp(&OtpRequestDto {
                email: "kavita@example.com".to_string(),
            })
            .await
            .unwrap();

        let otp = notifier.sent.lock().await[0].1;

        verification
            .confirm_otp(&OtpConfirmDto {
                email: "kavita@example.com".to_string(),
                otp,
            })
            .await
            .unwrap();

        let account = UserService::new(db)
            .create(&CreateUserDto {
                username: "kavita_sharma".to_string(),
                password: "strong-enough-pw".to_string(),
                name: "Kavita Sharma".to_string(),
                mobile: 9_876_543_210,
                email: "kavita@example.com".to_string(),
                roles: vec!["Worker".to_string()],
            })
            .await
            .unwrap();

        let tokens = TokenKeys::new("workflow-test-secret");
        let session = AuthService::new(db, &tokens)
            .login(&LoginDto {
                username: "kavita_sharma".to_string(),
                password: "strong-enough-pw".to_string(),
            })
            .await
            .unwrap();

        assert!(!session.access_token.is_empty());
        assert_eq!(session.user.roles, vec!["Worker".to_string()]);

        let profession = ProfessionService::new(db)
            .create(
                &CreateProfessionDto {
                    profession: "Plumber".to_string(),
                    work_experience: 6.0,
                    expected_salary: 1400,
                    gender: "Female".to_string(),
                    user_id: account.id,
                    is_available: None,
                },
                account.id,
            )
            .await
            .unwrap();

        AddressService::new(db)
            .create(&CreateAddressDto {
                building_number: Some("12/4-B".to_string()),
                street: Some("Station Road".to_string()),
                village_area: None,
                city: "Pune".to_string(),
                landmark: "Near Old Mill".to_string(),
                district: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                pincode: 411_001,
                owner: OwnerRefDto::WorkPlace(profession.id),
            })
            .await
            .unwrap();

        let result = ProfessionSearchService::new(db)
            .search(&ProfessionSearchDto {
                profession: None,
                salary: None,
                city: Some("Pune".to_string()),
                category: Some("Plumber".to_string()),
            })
            .await
            .unwrap();

        let rows = match result {
            ProfessionSearchResult::WithAddresses(rows) => rows,
            ProfessionSearchResult::Plain(_) => {
                panic!("city and type search must embed addresses")
            }
        };

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user.email, "kavita@example.com");
        assert_eq!(rows[0].profession, "Plumber");
        assert_eq!(rows[0].address.city, "Pune");

        Ok(())
    }
}

mod hiring {
    use entity::address::OwnerKind;
    use setu_test_utils::prelude::*;

    use setu::{
        model::job::CreateJobDto,
        server::{
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            model::roster::OfferBoard,
            service::{job::JobService, offer::OfferService},
        },
    };

    /// Expect three acceptances to drain the posting and the fourth to be refused
    #[tokio::test]
    async fn headcount_fills_and_then_refuses() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let db = &test.state.db;

        let owner =
            factory::insert_user(db, "house_owner_01", "owner@example.com", 9_000_000_001).await?;
        factory::insert_work_type(db, "Mason").await?;
        let address = factory::insert_address(db, OwnerKind::HomeOwner, owner.id, "Pune").await?;

        let job = JobService::new(db)
            .create(
                &CreateJobDto {
                    work_type: "Mason".to_string(),
                    number_of_workers: 3,
                    work_date: chrono::NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
                    working_days: 5,
                    work_pay: 1500.0,
                    address_id: address.id,
                    requestor_id: owner.id,
                    job_status: None,
                },
                owner.id,
            )
            .await
            .unwrap();

        let board = OfferBoard::default();
        let offers = OfferService::new(db, &board);

        let mut workers = Vec::new();
        for slot in 0..4 {
            let worker = factory::insert_user(
                db,
                &format!("worker_user_{slot:02}"),
                &format!("worker{slot}@example.com"),
                9_000_000_100 + i64::from(slot),
            )
            .await?;

            offers.apply(job.id, worker.id).await.unwrap();
            workers.push(worker);
        }

        let roster = offers.applicants(job.id).await.unwrap();
        assert_eq!(roster.applicants.len(), 4);

        for (slot, worker) in workers.iter().take(3).enumerate() {
            let remaining = offers.accept(job.id, worker.id, owner.id).await.unwrap();

            assert_eq!(remaining, 2 - slot as i32);
        }

        let refused = offers.accept(job.id, workers[3].id, owner.id).await;

        assert!(matches!(
            refused,
            Err(Error::ResourceError(ResourceError::Conflict(
                Resource::Job,
                _
            )))
        ));

        offers.reject(job.id, workers[3].id).await.unwrap();

        let roster = offers.applicants(job.id).await.unwrap();
        assert_eq!(roster.applicants.len(), 3);

        Ok(())
    }
}

mod posting_conflicts {
    use chrono::NaiveDate;
    use entity::address::OwnerKind;
    use setu_test_utils::prelude::*;

    use setu::{
        model::job::CreateJobDto,
        server::{
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::job::JobService,
        },
    };

    fn job_payload(address_id: i32, requestor_id: i32, work_date: NaiveDate) -> CreateJobDto {
        CreateJobDto {
            work_type: "Painter".to_string(),
            number_of_workers: 2,
            work_date,
            working_days: 3,
            work_pay: 1200.0,
            address_id,
            requestor_id,
            job_status: None,
        }
    }

    /// Expect one open posting per requestor and date, with the slot freed
    /// again once the posting is deleted
    #[tokio::test]
    async fn one_open_posting_per_date() -> Result<(), TestError> {
        let test = test_setup_with_core_tables!()?;
        let db = &test.state.db;

        let owner =
            factory::insert_user(db, "house_owner_01", "owner@example.com", 9_000_000_001).await?;
        factory::insert_work_type(db, "Painter").await?;
        let address = factory::insert_address(db, OwnerKind::HomeOwner, owner.id, "Nagpur").await?;

        let date = NaiveDate::from_ymd_opt(2030, 6, 15).unwrap();
        let service = JobService::new(db);

        let first = service
            .create(&job_payload(address.id, owner.id, date), owner.id)
            .await
            .unwrap();

        let duplicate = service
            .create(&job_payload(address.id, owner.id, date), owner.id)
            .await;

        assert!(matches!(
            duplicate,
            Err(Error::ResourceError(ResourceError::Conflict(
                Resource::Job,
                _
            )))
        ));

        let other_date = NaiveDate::from_ymd_opt(2030, 6, 16).unwrap();
        assert!(service
            .create(&job_payload(address.id, owner.id, other_date), owner.id)
            .await
            .is_ok());

        service.delete(first.id).await.unwrap();

        assert!(service
            .create(&job_payload(address.id, owner.id, date), owner.id)
            .await
            .is_ok());

        Ok(())
    }
}
