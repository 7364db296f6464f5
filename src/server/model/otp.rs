//! One-time code delivery seam and the in-memory store of pending codes.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Delivers one-time codes to users.
///
/// Production deployments plug in a mail gateway here; the default
/// [`LogNotifier`] writes the code to the log instead.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_otp(&self, email: &str, otp: i32);
}

/// Notifier that logs the code instead of sending mail.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_otp(&self, email: &str, otp: i32) {
        tracing::info!(email, otp, "One-time code issued");
    }
}

/// Pending one-time codes keyed by email, awaiting confirmation.
#[derive(Clone, Default)]
pub struct PendingOtps {
    codes: Arc<Mutex<HashMap<String, i32>>>,
}

impl PendingOtps {
    /// Stores a code for an email, replacing any earlier one.
    pub async fn put(&self, email: &str, otp: i32) {
        let mut guard = self.codes.lock().await;

        guard.insert(email.to_string(), otp);
    }

    /// Checks a submitted code against the stored one.
    pub async fn matches(&self, email: &str, otp: i32) -> bool {
        let guard = self.codes.lock().await;

        guard.get(email) == Some(&otp)
    }

    /// Drops the stored code for an email once confirmed.
    pub async fn clear(&self, email: &str) {
        let mut guard = self.codes.lock().await;

        guard.remove(email);
    }
}
