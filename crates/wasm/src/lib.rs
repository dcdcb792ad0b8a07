mod dom;
mod listener;
mod log;
mod mount;
mod renderer;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::PageConfig;
use folio_core::boot::{self, Controller};
use folio_core::viewport;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use crate::dom::PageElements;
use crate::listener::Mounted;
use crate::log::Logger;
use crate::renderer::{Effects, Renderer};

/// Id of an optional `<script type="application/json">` holding a `PageConfig`.
const CONFIG_ELEMENT_ID: &str = "folio-config";

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// The installed controllers of one page. Dropping or detaching it removes
/// every listener they attached.
#[wasm_bindgen]
pub struct Page {
    mounted: Vec<Mounted>,
}

#[wasm_bindgen]
impl Page {
    /// Remove every listener and observer this page installed.
    pub fn detach(&mut self) {
        for mounted in self.mounted.drain(..) {
            mounted.detach();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn controllers(&self) -> usize {
        self.mounted.len()
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        boot_default();
        return;
    }
    EventListener::once(&document, "DOMContentLoaded", |_| boot_default()).forget();
}

fn boot_default() {
    let config = match embedded_config() {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            Logger::new(false).warn(&format!("ignoring #{CONFIG_ELEMENT_ID}: {e}"));
            PageConfig::default()
        }
        None => PageConfig::default(),
    };
    let page = boot(&config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

fn embedded_config() -> Option<Result<PageConfig, folio_core::ConfigError>> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let json = element.text_content()?;
    Some(PageConfig::from_json(&json))
}

/// Boot the page with a JSON config. Missing keys take their defaults.
#[wasm_bindgen]
pub fn boot_with_config(json: &str) -> Result<Page, JsError> {
    let config = PageConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(boot(&config))
}

/// Install only the scroll-reveal controller, with default settings.
#[wasm_bindgen]
pub fn init_scroll_reveal() -> Result<Page, JsError> {
    let config = PageConfig::default();
    let renderer = renderer(&config).ok_or_else(|| JsError::new("no document"))?;
    Ok(Page {
        mounted: vec![mount::scroll_reveal(&renderer, &config)],
    })
}

/// Detach the page booted at startup, if any.
#[wasm_bindgen]
pub fn detach_page() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(mut page) = page {
        page.detach();
    }
}

/// Whether `element` lies entirely inside the visible viewport.
#[wasm_bindgen]
pub fn is_in_viewport(element: &web_sys::Element) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    viewport::is_in_viewport(
        &dom::client_rect(element),
        &dom::viewport_size(&window, &document),
    )
}

fn renderer(config: &PageConfig) -> Option<Rc<Renderer>> {
    let log = Logger::new(config.debug);
    let window = web_sys::window()?;
    let document = window.document()?;
    let elements = PageElements::query(window, document, &config.selectors, log);
    Some(Rc::new(Renderer::new(
        Rc::new(elements),
        config.classes.clone(),
        config.tracker,
        log,
    )))
}

fn boot(config: &PageConfig) -> Page {
    let Some(renderer) = renderer(config) else {
        Logger::new(config.debug).warn("no window or document; nothing installed");
        return Page {
            mounted: Vec::new(),
        };
    };
    let log = renderer.log();
    let plan = boot::plan(config, &renderer.elements().presence());
    for skip in &plan.skipped {
        log.debug(&skip.to_string());
    }
    renderer.apply(&plan.initial, Effects::default());

    let mounted = plan
        .install
        .iter()
        .map(|controller| match controller {
            Controller::Navbar => mount::navbar(&renderer, config),
            Controller::MobileMenu => mount::mobile_menu(&renderer),
            Controller::Gallery { with_buttons } => {
                mount::gallery(&renderer, config, *with_buttons)
            }
            Controller::SmoothScroll => mount::smooth_scroll(&renderer, config),
            Controller::ScrollReveal => mount::scroll_reveal(&renderer, config),
        })
        .collect();
    log.debug(&format!("booted {} controllers", plan.install.len()));
    Page { mounted }
}
