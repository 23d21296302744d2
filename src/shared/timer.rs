//! Cancelable timers for the single-threaded UI event loop
//!
//! wasm32 runs on the browser microtask queue via `wasm-bindgen-futures` and
//! `gloo-timers`. Native builds use tokio; callers must be inside a
//! `tokio::task::LocalSet`.

use futures::future::{AbortHandle, Abortable};
use std::future::Future;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    tokio::task::spawn_local(future);
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Owned handle to a scheduled callback. Dropping it cancels the callback.
#[derive(Debug)]
pub struct TimerHandle {
    abort: AbortHandle,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Run `callback` once after `delay` unless the returned handle is cancelled
/// or dropped first.
pub fn schedule<F>(delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    let timer = Abortable::new(
        async move {
            sleep(delay).await;
            callback();
        },
        registration,
    );
    spawn_local(async move {
        let _ = timer.await;
    });
    TimerHandle { abort }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    #[tokio::test(start_paused = true)]
    async fn test_schedule_fires_after_delay() {
        LocalSet::new()
            .run_until(async {
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                let _handle = schedule(Duration::from_millis(500), move || flag.set(true));

                sleep(Duration::from_millis(499)).await;
                assert!(!fired.get());

                sleep(Duration::from_millis(2)).await;
                assert!(fired.get());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_never_fires() {
        LocalSet::new()
            .run_until(async {
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                let handle = schedule(Duration::from_millis(100), move || flag.set(true));
                drop(handle);

                sleep(Duration::from_millis(200)).await;
                assert!(!fired.get());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_marks_handle() {
        LocalSet::new()
            .run_until(async {
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);
                let handle = schedule(Duration::from_millis(100), move || flag.set(true));
                handle.cancel();

                assert!(handle.is_cancelled());
                sleep(Duration::from_millis(200)).await;
                assert!(!fired.get());
            })
            .await;
    }
}
