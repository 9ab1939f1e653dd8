// Owned DOM event listeners, detached on drop
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use super::SetupError;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let func: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        let _ = self.target.remove_event_listener_with_callback(self.event, func);
    }
}

#[derive(Default)]
pub struct Listeners {
    items: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `handler` for `event` on `target`; it stays attached until
    /// this set is dropped. Listeners are registered non-passive: browsers
    /// default touch listeners on `window` to passive, which would turn
    /// `prevent_default` in a move handler into a no-op.
    pub fn on<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<(), SetupError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        {
            let func: &js_sys::Function = callback.as_ref().unchecked_ref();
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event, func, &options,
                )
                .map_err(|_| SetupError::Listen(event))?;
        }
        self.items.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    /// Attaches one shared handler to several events.
    pub fn on_each<F>(
        &mut self,
        target: &EventTarget,
        events: &[&'static str],
        handler: F,
    ) -> Result<(), SetupError>
    where
        F: Fn(Event) + Clone + 'static,
    {
        for event in events {
            self.on(target, *event, handler.clone())?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
