//! Callbacks into the redirect list that hosts the form.

use crate::domain::entities::Redirect;

/// Receives the outcome of a successful submission.
///
/// The hosting list uses these to reconcile its rows; the form itself never
/// touches the list.
#[cfg_attr(test, mockall::automock)]
pub trait RedirectListener: Send + Sync {
    /// A redirect was created. `changed` includes the new redirect and every
    /// redirect the backend adjusted as a consequence.
    fn on_created(&self, changed: &[Redirect]);

    /// A redirect was updated. `original` is the redirect as it was before the
    /// edit, so the list can locate the row even if host or source changed.
    fn on_updated(&self, changed: &[Redirect], original: &Redirect);

    /// The operator abandoned editing.
    fn on_cancel(&self);
}

/// Listener that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl RedirectListener for NoopListener {
    fn on_created(&self, _changed: &[Redirect]) {}

    fn on_updated(&self, _changed: &[Redirect], _original: &Redirect) {}

    fn on_cancel(&self) {}
}
