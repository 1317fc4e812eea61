// src/modules/notify/mod.rs
//
// Transient success/error surface shown after mutating operations
// (the admin console's toast).

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[cfg_attr(test, automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, level: ToastLevel, message: &str);
}

/// Default adapter: routes toasts through the tracing pipeline.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Success => tracing::info!(toast = message, "toast"),
            ToastLevel::Error => tracing::warn!(toast = message, "toast"),
        }
    }
}

/// Test/inspection adapter: records every toast in order.
#[derive(Default)]
pub struct BufferNotifier {
    toasts: std::sync::Mutex<Vec<(ToastLevel, String)>>,
}

impl BufferNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<(ToastLevel, String)> {
        self.toasts.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for BufferNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.toasts
            .lock()
            .expect("notifier lock poisoned")
            .push((level, message.to_string()));
    }
}
