//! Notification surface trait.

/// Surface that shows the outcome of a submission to the operator.
///
/// A pure pass-through: implementations display what they receive, without
/// retrying or batching.
///
/// # Implementations
///
/// - [`crate::infrastructure::notification::ConsoleNotifier`] - Colored terminal output
/// - [`crate::infrastructure::notification::TracingNotifier`] - Log records only
pub trait Notifier: Send + Sync {
    /// The action succeeded.
    fn ok(&self, message: &str);

    /// The action succeeded or was refused with something the operator should
    /// look at. `detail` carries an optional longer body.
    fn warning(&self, message: &str, detail: Option<&str>);

    /// The action failed.
    fn error(&self, message: &str);
}
