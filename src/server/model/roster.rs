//! In-memory roster of users who applied to each job offer.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

/// Tracks which users have applied to which jobs.
///
/// Applications live in process memory only; accepted workers are the part
/// that persists, as `job_acceptor` rows. Handles are cheap to clone and
/// share one underlying map.
#[derive(Clone, Default)]
pub struct OfferBoard {
    applicants: Arc<Mutex<HashMap<i32, Vec<i32>>>>,
}

impl OfferBoard {
    /// Records an application. Returns false when the user already applied.
    pub async fn apply(&self, job_id: i32, user_id: i32) -> bool {
        let mut guard = self.applicants.lock().await;
        let entry = guard.entry(job_id).or_default();

        if entry.contains(&user_id) {
            return false;
        }

        entry.push(user_id);
        true
    }

    /// Lists applicant user IDs for a job, in application order.
    pub async fn applicants(&self, job_id: i32) -> Vec<i32> {
        let guard = self.applicants.lock().await;

        guard.get(&job_id).cloned().unwrap_or_default()
    }

    /// Withdraws an application. Returns false when the user never applied.
    pub async fn remove(&self, job_id: i32, user_id: i32) -> bool {
        let mut guard = self.applicants.lock().await;

        match guard.get_mut(&job_id) {
            Some(entry) => match entry.iter().position(|id| *id == user_id) {
                Some(index) => {
                    entry.remove(index);
                    true
                }
                None => false,
            },
            None => false,
        }
    }
}
