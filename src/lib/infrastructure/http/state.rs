//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::notifications::{NotificationComposer, NotificationDispatcher};

/// Global application state
#[derive(Clone)]
pub struct AppState<D: NotificationDispatcher> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Builds notifications from submissions
    pub composer: Arc<NotificationComposer>,

    /// Delivers notifications
    pub dispatcher: Arc<D>,
}

impl<D> AppState<D>
where
    D: NotificationDispatcher,
{
    /// Create a new application state
    pub fn new(composer: NotificationComposer, dispatcher: D) -> Self {
        Self {
            start_time: Utc::now(),
            composer: Arc::new(composer),
            dispatcher: Arc::new(dispatcher),
        }
    }
}

impl<D> fmt::Debug for AppState<D>
where
    D: NotificationDispatcher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("composer", &self.composer)
            .field("dispatcher", &"NotificationDispatcher")
            .finish()
    }
}
