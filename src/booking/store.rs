use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::controller::{BookingForm, SubmitOutcome};
use super::gateway::GatewayError;
use super::types::SubmissionStatus;

const IDLE_TTL_SECS: u64 = 1800; // 30 minutes

struct Entry {
    form: BookingForm,
    touched: Instant,
}

/// Booking attempts held in memory, one per visitor session.
///
/// Entries idle past the TTL are dropped lazily on the next access. Callers must
/// not hold the closure open across an await; see `BookingForm::begin_submit`.
#[derive(Clone)]
pub struct BookingStore {
    forms: Arc<Mutex<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(IDLE_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            forms: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Run `f` against the form for `key`, creating an empty one if needed.
    pub fn with_form<R>(&self, key: &str, f: impl FnOnce(&mut BookingForm) -> R) -> R {
        let mut map = self.forms.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        let ttl = self.ttl;
        map.retain(|k, entry| k == key || now.duration_since(entry.touched) < ttl);

        let entry = map.entry(key.to_string()).or_insert_with(|| Entry {
            form: BookingForm::new(),
            touched: now,
        });
        if now.duration_since(entry.touched) >= ttl {
            entry.form = BookingForm::new();
        }
        entry.touched = now;
        f(&mut entry.form)
    }

    /// Track the gateway call for a form that `begin_submit` moved to
    /// `Submitting`. The returned guard finishes the submission; if it is
    /// dropped first, the form is completed as a cancelled delivery.
    pub fn pending_submit(&self, key: &str) -> PendingSubmit {
        PendingSubmit {
            store: self.clone(),
            key: key.to_string(),
            finished: false,
        }
    }

    /// Number of live booking attempts.
    pub fn len(&self) -> usize {
        self.forms.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An outstanding gateway call for one stored form.
pub struct PendingSubmit {
    store: BookingStore,
    key: String,
    finished: bool,
}

impl PendingSubmit {
    pub fn complete(mut self, result: Result<(), GatewayError>) -> SubmitOutcome {
        self.finished = true;
        self.store
            .with_form(&self.key, |booking| booking.complete_submit(result))
    }
}

impl Drop for PendingSubmit {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        self.store.with_form(&self.key, |booking| {
            if booking.status() == SubmissionStatus::Submitting {
                booking.complete_submit(Err(GatewayError::Cancelled));
            }
        });
    }
}
