use gloo::events::EventListener;
use wasm_bindgen::closure::Closure;
use web_sys::IntersectionObserver;

/// Intersection observer plus the callback it calls. Dropping it disconnects.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new(
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ) -> Self {
        Self {
            observer,
            _callback: callback,
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything one controller attached to the page. Each `EventListener`
/// removes itself from its target when dropped.
#[derive(Default)]
pub struct Mounted {
    listeners: Vec<EventListener>,
    observer: Option<Observer>,
}

impl Mounted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = Some(observer);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Detach every listener and disconnect the observer, if any.
    pub fn detach(self) {
        drop(self);
    }
}
