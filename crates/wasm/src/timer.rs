use std::cell::RefCell;
use std::rc::Rc;

use folio_core::debounce::Debounce;
use gloo::timers::callback::Timeout;

/// Run `f` once after `delay_ms`, independent of any handle.
pub fn once(delay_ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, f).forget();
}

struct DebouncedInner {
    state: RefCell<Debounce>,
    // Replacing the pending timeout drops it, which clears it.
    pending: RefCell<Option<Timeout>>,
    callback: RefCell<Box<dyn FnMut()>>,
}

/// A callback rate-limited by `Debounce`, driven by gloo timeouts.
#[derive(Clone)]
pub struct Debounced {
    inner: Rc<DebouncedInner>,
}

impl Debounced {
    pub fn new(debounce: Debounce, callback: impl FnMut() + 'static) -> Self {
        Self {
            inner: Rc::new(DebouncedInner {
                state: RefCell::new(debounce),
                pending: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
            }),
        }
    }

    pub fn call(&self) {
        let trigger = self.inner.state.borrow_mut().trigger();

        let weak = Rc::downgrade(&self.inner);
        let timeout = Timeout::new(trigger.wait_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let fire = inner.state.borrow_mut().elapsed(trigger.arm);
            if fire {
                (inner.callback.borrow_mut())();
            }
        });
        self.inner.pending.replace(Some(timeout));

        if trigger.invoke_now {
            (self.inner.callback.borrow_mut())();
        }
    }
}
