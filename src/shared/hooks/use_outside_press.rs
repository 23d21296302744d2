#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

/// Unique DOM id for a widget root, so the outside-press check can find it
pub fn widget_dom_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Run `on_outside` for every document mousedown that lands outside the
/// element with `container_id`.
///
/// The listener only observes: the press still reaches its target, so a link
/// clicked outside the widget is followed while the widget closes.
#[cfg(target_arch = "wasm32")]
pub fn use_outside_press(container_id: String, on_outside: impl Fn() + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    type Listener = Closure<dyn FnMut(web_sys::MouseEvent)>;

    let registered = use_hook(move || {
        let slot: Rc<RefCell<Option<Listener>>> = Rc::new(RefCell::new(None));
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            tracing::warn!("No document available for outside-press detection");
            return slot;
        };

        let lookup = document.clone();
        let listener = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let Some(container) = lookup.get_element_by_id(&container_id) else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !container.contains(target.as_ref()) {
                on_outside();
            }
        }) as Box<dyn FnMut(_)>);

        if let Err(e) = document
            .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
        {
            tracing::error!(error = ?e, "Failed to register outside-press listener");
            return slot;
        }
        *slot.borrow_mut() = Some(listener);
        slot
    });

    use_drop(move || {
        let Some(listener) = registered.borrow_mut().take() else {
            return;
        };
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
        }
    });
}

/// No document outside the browser: nothing to observe
#[cfg(not(target_arch = "wasm32"))]
pub fn use_outside_press(container_id: String, on_outside: impl Fn() + 'static) {
    let _ = (container_id, on_outside);
}
