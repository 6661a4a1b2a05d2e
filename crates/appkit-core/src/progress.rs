//! Lifecycle notifications emitted by the init pipeline
//!
//! The pipeline brackets each stage ("download", "copy") with a start and a
//! completion notification. Rendering is owned by the caller; the binary
//! supplies a console-backed sink, tests use [`NullReporter`].

/// Caller-supplied sink for stage lifecycle notifications
pub trait Reporter {
    /// A stage is starting; `message` describes it in human terms
    fn starting(&self, message: &str);

    /// The most recently started stage finished successfully
    fn done(&self);
}

/// Reporter that discards all notifications
pub struct NullReporter;

impl Reporter for NullReporter {
    fn starting(&self, _message: &str) {}
    fn done(&self) {}
}
