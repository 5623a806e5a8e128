//! User-facing notification collaborator.
//!
//! The UI layer owns how messages reach the user (toast, status bar); the
//! core only needs somewhere to send them. Fire-and-forget operations report
//! their outcome exclusively through this channel and the diagnostic log.

/// Sink for short user-visible status messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
