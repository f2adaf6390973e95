use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::ports::{Clock, RecordStore};

// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub clock: Arc<dyn Clock>,
    // Guard for the full fetch-build-persist rebuild sequence.
    pub rebuild_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            rebuild_lock: Arc::new(Mutex::new(())),
        }
    }
}

// Wall-clock adapter used outside of tests.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}
