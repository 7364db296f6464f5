use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::model::{
    auth::TokenKeys,
    otp::{LogNotifier, Notifier, PendingOtps},
    roster::OfferBoard,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenKeys,
    pub offers: OfferBoard,
    pub pending_otps: PendingOtps,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Builds application state with the default log-only notifier.
    pub fn new(db: DatabaseConnection, jwt_secret: &str) -> Self {
        Self {
            db,
            tokens: TokenKeys::new(jwt_secret),
            offers: OfferBoard::default(),
            pending_otps: PendingOtps::default(),
            notifier: Arc::new(LogNotifier),
        }
    }
}
