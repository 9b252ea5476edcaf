use crate::TrackedEvent;

/// A trait for handing tracked events and transactions over to your delivery pipeline.
pub trait EventLogger {
    /// Logs the tracked event.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use batch_user::{EventLogger, TrackedEvent};
    /// struct MyEventLogger;
    ///
    /// impl EventLogger for MyEventLogger {
    ///     fn log_event(&self, event: TrackedEvent) {
    ///         // Queue the event for delivery here
    ///     }
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// This method should not return errors and should not panic. Tracking is fire-and-forget,
    /// so failures should be handled internally within the implementation.
    ///
    /// # Notes
    ///
    /// This method is called on the tracking thread, so it should not block.
    fn log_event(&self, event: TrackedEvent);
}

pub(crate) struct NoopEventLogger;
impl EventLogger for NoopEventLogger {
    fn log_event(&self, _event: TrackedEvent) {}
}

impl<T: Fn(TrackedEvent)> EventLogger for T {
    fn log_event(&self, event: TrackedEvent) {
        self(event);
    }
}
