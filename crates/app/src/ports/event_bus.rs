//! Event bus port: publish/subscribe for journal events.

use std::future::Future;

use homewarden_domain::error::HomeWardenError;
use homewarden_domain::event::Event;

/// Publishes journal events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HomeWardenError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), HomeWardenError>> + Send {
        (**self).publish(event)
    }
}
