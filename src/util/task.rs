//! Local task spawning.
//!
//! In the browser (`csr`) futures run on the Leptos local executor. Native
//! builds have no executor, so the future is dropped unpolled.

use std::future::Future;

/// Spawn a `!Send` future on the browser event loop.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("no local executor outside the browser; task dropped");
        drop(fut);
    }
}
