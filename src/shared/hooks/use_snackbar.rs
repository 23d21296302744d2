use dioxus::prelude::*;

use crate::config::NotificationConfig;
use crate::domain::services::{NotificationQueue, SnackbarView};

/// Handle for enqueuing notifications from any component below
/// `SnackbarProvider`
pub fn use_snackbar() -> NotificationQueue {
    use_context::<NotificationQueue>()
}

/// Create the queue, expose it as context and mirror its state in a signal
pub fn use_snackbar_provider(config: NotificationConfig) -> (NotificationQueue, Signal<SnackbarView>) {
    let view = use_signal(SnackbarView::default);

    let queue = use_context_provider(move || {
        let queue = NotificationQueue::new(config);
        queue.set_listener(move |snapshot| {
            let mut view = view;
            view.set(snapshot.clone());
        });
        queue
    });

    let on_unmount = queue.clone();
    use_drop(move || on_unmount.shutdown());

    (queue, view)
}
