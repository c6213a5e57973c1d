use std::rc::Rc;

use chat_widget_core::ScrollObserver;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event};

/// A passive `scroll` listener on one element.
/// Dropping the subscription removes the listener.
pub struct ScrollSubscription {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

impl ScrollSubscription {
    /// Calls `on_scroll` with the element's offset from the top on every scroll.
    pub fn attach(target: Element, mut on_scroll: impl FnMut(i32) + 'static) -> Result<Self, JsValue> {
        let el = target.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            on_scroll(el.scroll_top());
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self { target, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::error!("Failed to detach scroll listener: {e:?}");
        }
    }
}

/// Runs `on_top` whenever the list behind `list_ref` is scrolled to its top.
///
/// The listener is attached once the element mounts and released when the
/// owning component is cleaned up.
pub fn watch_top(list_ref: NodeRef<Div>, throttle_ms: u32, on_top: impl Fn() + 'static) {
    let subscription = StoredValue::new_local(None::<ScrollSubscription>);
    let on_top = Rc::new(on_top);

    Effect::new(move |_| {
        let Some(list) = list_ref.get() else {
            return;
        };
        if subscription.with_value(Option::is_some) {
            return;
        }

        let on_top = Rc::clone(&on_top);
        let mut observer = ScrollObserver::new(throttle_ms);
        let attached = ScrollSubscription::attach(list.into(), move |offset| {
            if observer.observe(offset, js_sys::Date::now()) {
                (*on_top)();
            }
        });

        match attached {
            Ok(sub) => subscription.set_value(Some(sub)),
            Err(e) => log::error!("Failed to attach scroll listener: {e:?}"),
        }
    });

    on_cleanup(move || {
        subscription.try_update_value(|sub| {
            sub.take();
        });
    });
}
