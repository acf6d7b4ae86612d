//! View-adapter traits implemented once per host.

use std::future::Future;

use crate::util::validate::Credentials;

/// A page with a credential form, an error region and a submit control.
pub trait FormView {
    /// Current field values, untrimmed.
    fn credentials(&self) -> Credentials;
    fn clear_error(&self);
    /// Replace the error region with a single line.
    fn show_error(&self, message: &str);
    /// Disable and relabel the submit control, or restore the page's idle label.
    fn set_busy(&self, busy: bool);
    /// Blocking confirmation shown before leaving the page.
    fn confirm(&self, message: &str);
}

pub trait DashboardView {
    fn has_greeting_target(&self) -> bool;
    fn show_greeting(&self, text: &str);
}

/// Holds a view busy until dropped, so the reset runs on every exit path.
pub struct BusyGuard<'a, V: FormView + ?Sized> {
    view: &'a V,
}

impl<'a, V: FormView + ?Sized> BusyGuard<'a, V> {
    pub fn engage(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: FormView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

/// Await `fut` with the view marked busy for its whole duration.
pub async fn while_busy<V, F>(view: &V, fut: F) -> F::Output
where
    V: FormView + ?Sized,
    F: Future,
{
    let _busy = BusyGuard::engage(view);
    fut.await
}
