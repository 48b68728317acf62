//! Journal fan-out over a tokio broadcast channel.
//!
//! Every subscriber sees the zone's events in publish order. A subscriber
//! that falls more than the channel capacity behind loses the oldest
//! entries and is told how many through `RecvError::Lagged`.

use std::future::Future;

use tokio::sync::broadcast;

use homewarden_domain::error::HomeWardenError;
use homewarden_domain::event::Event;

use crate::ports::EventPublisher;

/// Journal entries buffered per subscriber by [`InProcessEventBus::default`].
///
/// One tick produces at most a dozen events with the default cameras.
pub const DEFAULT_CAPACITY: usize = 256;

/// Journal bus shared by a zone's controller and its renderers.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl InProcessEventBus {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receive every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HomeWardenError>> + Send {
        // An unobserved journal is not an error.
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}
