use dioxus::prelude::*;

use crate::domain::services::{SearchController, SearchView};
use crate::shared::services::AppServices;

/// Mount a search controller for the calling component.
///
/// The returned signal mirrors the controller state; the controller is torn
/// down (timer cancelled, late responses ignored) when the component drops.
pub fn use_sermon_search() -> (SearchController, Signal<SearchView>) {
    let services = use_context::<AppServices>();
    let view = use_signal(SearchView::default);

    let controller = use_hook(move || {
        let controller = SearchController::new(
            services.records.clone(),
            services.navigator.clone(),
            services.config.search.clone(),
        );
        controller.set_listener(move |snapshot| {
            let mut view = view;
            view.set(snapshot.clone());
        });
        controller
    });

    let on_unmount = controller.clone();
    use_drop(move || on_unmount.teardown());

    (controller, view)
}
