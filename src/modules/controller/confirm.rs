// src/modules/controller/confirm.rs

#[cfg(test)]
use mockall::automock;

/// Synchronous user confirmation gate in front of every delete. An
/// unconfirmed delete must issue no network call at all.
#[cfg_attr(test, automock)]
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Non-interactive adapter for headless wiring.
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
