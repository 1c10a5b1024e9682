//! Notification sink for reminders and reschedules
//!
//! Delivery is out of scope: the tracker only decides *whether* to notify
//! and hands the message to a [`Notifier`].

/// Receiver of reminder and reschedule messages
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that emits every message as a `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        tracing::info!(target: "worktrack::notify", "{}", message);
    }
}

/// Notifier that keeps messages in memory, in the order they were sent
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Take the recorded messages, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        tracing::debug!(notification = message, "notification recorded");
        self.messages.push(message.to_string());
    }
}
