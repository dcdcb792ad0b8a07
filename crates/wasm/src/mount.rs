//! Attach each core controller to the live document.
//!
//! Every mount function returns the `Mounted` handle that owns its
//! listeners. Controller state sits in an `Rc<RefCell<_>>` shared by that
//! controller's closures only; borrows end before commands are applied.
//!
//! `EventListener::new` registers passive listeners. Handlers that may emit
//! `PreventDefault` use `EventListenerOptions::enable_prevent_default()`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::PageConfig;
use folio_core::controllers::{Gallery, MobileMenu, Navbar, ScrollReveal, SmoothScroll};
use folio_core::debounce::Debounce;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    Node, TouchEvent,
};

use crate::dom;
use crate::listener::{Mounted, Observer};
use crate::renderer::{Effects, Renderer};
use crate::timer::Debounced;

pub fn navbar(renderer: &Rc<Renderer>, config: &PageConfig) -> Mounted {
    let mut mounted = Mounted::new();
    let navbar = Navbar::new(config.navbar, config.tracker);
    let window = renderer.elements().window.clone();

    let r = Rc::clone(renderer);
    mounted.push(EventListener::new(&window, "scroll", move |_: &Event| {
        let elements = r.elements();
        let metrics = elements.page_metrics();
        let boxes = elements.section_boxes();
        let commands = navbar.on_scroll(&metrics, &boxes, &elements.nav_hrefs);
        r.apply(&commands, Effects::default());
    }));
    mounted
}

pub fn mobile_menu(renderer: &Rc<Renderer>) -> Mounted {
    let mut mounted = Mounted::new();
    let elements = renderer.elements();
    let (Some(button), Some(panel)) = (elements.menu_button.clone(), elements.menu_panel.clone())
    else {
        return mounted;
    };
    let menu = Rc::new(RefCell::new(MobileMenu::new()));

    {
        let r = Rc::clone(renderer);
        let menu = Rc::clone(&menu);
        mounted.push(EventListener::new(&button, "click", move |_: &Event| {
            let commands = menu.borrow_mut().on_button_click();
            r.apply(&commands, Effects::default());
        }));
    }

    let links = panel.query_selector_all("a").ok();
    let links = links.iter().flat_map(|list| (0..list.length()).filter_map(move |i| list.item(i)));
    for link in links {
        let r = Rc::clone(renderer);
        let menu = Rc::clone(&menu);
        mounted.push(EventListener::new(&link, "click", move |_: &Event| {
            let commands = menu.borrow_mut().on_link_click();
            r.apply(&commands, Effects::default());
        }));
    }

    {
        let r = Rc::clone(renderer);
        let document = elements.document.clone();
        mounted.push(EventListener::new(&document, "click", move |event: &Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_button = button.contains(target.as_ref());
            let inside_panel = panel.contains(target.as_ref());
            let commands = menu
                .borrow_mut()
                .on_document_click(inside_button, inside_panel);
            r.apply(&commands, Effects::default());
        }));
    }
    mounted
}

pub fn gallery(renderer: &Rc<Renderer>, config: &PageConfig, with_buttons: bool) -> Mounted {
    let mut mounted = Mounted::new();
    let elements = renderer.elements();
    let Some(container) = elements.gallery.clone() else {
        return mounted;
    };
    let gallery = Rc::new(RefCell::new(Gallery::new(config.gallery, with_buttons)));

    if let Some(metrics) = elements.gallery_metrics() {
        let commands = gallery.borrow().install(&metrics);
        renderer.apply(&commands, Effects::default());
    }

    if with_buttons
        && let (Some(prev), Some(next)) = (elements.prev_button.clone(), elements.next_button.clone())
    {
        {
            let r = Rc::clone(renderer);
            let gallery = Rc::clone(&gallery);
            mounted.push(EventListener::new(&prev, "click", move |_: &Event| {
                let commands = gallery.borrow().on_prev();
                r.apply(&commands, Effects::default());
            }));
        }
        {
            let r = Rc::clone(renderer);
            let gallery = Rc::clone(&gallery);
            mounted.push(EventListener::new(&next, "click", move |_: &Event| {
                let commands = gallery.borrow().on_next();
                r.apply(&commands, Effects::default());
            }));
        }

        let refresh = {
            let r = Rc::clone(renderer);
            let gallery = Rc::clone(&gallery);
            move || {
                let Some(metrics) = r.elements().gallery_metrics() else {
                    return;
                };
                let commands = gallery.borrow().refresh_buttons(&metrics);
                r.apply(&commands, Effects::default());
            }
        };

        let on_scroll = refresh.clone();
        mounted.push(EventListener::new(&container, "scroll", move |_: &Event| on_scroll()));

        let window = elements.window.clone();
        match config.gallery.resize_debounce_ms {
            Some(wait_ms) => {
                let debounced = Debounced::new(Debounce::new(wait_ms, true), refresh);
                mounted.push(EventListener::new(&window, "resize", move |_: &Event| {
                    debounced.call();
                }));
            }
            None => {
                mounted.push(EventListener::new(&window, "resize", move |_: &Event| refresh()));
            }
        }
    }

    {
        let gallery = Rc::clone(&gallery);
        let el = container.clone();
        mounted.push(EventListener::new(&container, "touchstart", move |event: &Event| {
            let Some(touch) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| e.touches().item(0))
            else {
                return;
            };
            gallery
                .borrow_mut()
                .touch_start(f64::from(touch.client_x()), f64::from(el.scroll_left()));
        }));
    }
    {
        let r = Rc::clone(renderer);
        let gallery = Rc::clone(&gallery);
        mounted.push(EventListener::new(&container, "touchmove", move |event: &Event| {
            let Some(touch) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|e| e.touches().item(0))
            else {
                return;
            };
            let commands = gallery.borrow().touch_move(f64::from(touch.client_x()));
            r.apply(&commands, Effects::default());
        }));
    }
    {
        let gallery = Rc::clone(&gallery);
        mounted.push(EventListener::new(&container, "touchend", move |_: &Event| {
            gallery.borrow_mut().touch_end();
        }));
    }
    {
        let gallery = Rc::clone(&gallery);
        mounted.push(EventListener::new(&container, "touchcancel", move |_: &Event| {
            gallery.borrow_mut().touch_cancel();
        }));
    }

    {
        let r = Rc::clone(renderer);
        let gallery = Rc::clone(&gallery);
        let el = container.clone();
        mounted.push(EventListener::new(&container, "mousedown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let x = f64::from(event.page_x() - el.offset_left());
            let commands = gallery
                .borrow_mut()
                .mouse_down(x, f64::from(el.scroll_left()));
            r.apply(&commands, Effects::default());
        }));
    }
    {
        let r = Rc::clone(renderer);
        let gallery = Rc::clone(&gallery);
        mounted.push(EventListener::new(&container, "mouseleave", move |_: &Event| {
            let commands = gallery.borrow_mut().mouse_leave();
            r.apply(&commands, Effects::default());
        }));
    }
    {
        let r = Rc::clone(renderer);
        let gallery = Rc::clone(&gallery);
        mounted.push(EventListener::new(&container, "mouseup", move |_: &Event| {
            let commands = gallery.borrow_mut().mouse_up();
            r.apply(&commands, Effects::default());
        }));
    }
    {
        let r = Rc::clone(renderer);
        let el = container.clone();
        mounted.push(EventListener::new_with_options(
            &container,
            "mousemove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let x = f64::from(mouse.page_x() - el.offset_left());
                let commands = gallery.borrow().mouse_move(x);
                r.apply(&commands, Effects::event(event));
            },
        ));
    }
    mounted
}

pub fn smooth_scroll(renderer: &Rc<Renderer>, config: &PageConfig) -> Mounted {
    let mut mounted = Mounted::new();
    let elements = renderer.elements();
    let log = renderer.log();
    let scroller = Rc::new(SmoothScroll::new(config.smooth_scroll));

    for link in dom::query_all(&elements.document, &config.selectors.anchor_links, log) {
        let r = Rc::clone(renderer);
        let scroller = Rc::clone(&scroller);
        let anchor = link.clone();
        mounted.push(EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let href = anchor.get_attribute("href").unwrap_or_default();
                if !SmoothScroll::wants(&href) {
                    return;
                }
                let elements = r.elements();
                let target = elements.document.query_selector(&href).ok().flatten();
                if target.is_none() {
                    r.log().debug(&format!("no element for {href}"));
                }
                let top = target.map(|t| dom::document_top(&elements.window, &t));
                let commands = scroller.on_anchor_click(&href, top);
                r.apply(&commands, Effects::event(event));
            },
        ));
    }
    log.debug(&format!("smooth scroll on {} links", mounted.listener_count()));
    mounted
}

pub fn scroll_reveal(renderer: &Rc<Renderer>, config: &PageConfig) -> Mounted {
    let mut mounted = Mounted::new();
    let elements = renderer.elements();
    let targets = elements.reveal_targets.clone();
    if targets.is_empty() {
        renderer.log().debug("no reveal targets");
        return mounted;
    }
    let reveal = Rc::new(RefCell::new(ScrollReveal::new(targets.len())));

    let r = Rc::clone(renderer);
    let observed = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let el = entry.target();
                let Some(index) = observed.iter().position(|t| *t == el) else {
                    continue;
                };
                let commands = reveal
                    .borrow_mut()
                    .on_intersection(index, entry.is_intersecting());
                r.apply(&commands, Effects::observer(&observer));
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.reveal.root_margin);
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(_) => {
            renderer.log().warn("IntersectionObserver unavailable");
            return mounted;
        }
    };
    for target in &targets {
        observer.observe(target);
    }
    mounted.set_observer(Observer::new(observer, callback));
    mounted
}
