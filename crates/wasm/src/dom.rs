use folio_core::boot::Presence;
use folio_core::config::Selectors;
use folio_core::controllers::{GalleryMetrics, PageMetrics, SectionBox};
use folio_protocol::{Rect, ViewportSize};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use crate::log::Logger;

/// Every element the page script touches, queried once at boot.
pub struct PageElements {
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub navbar: Option<Element>,
    pub menu_button: Option<Element>,
    pub menu_panel: Option<Element>,
    pub nav_links: Vec<Element>,
    /// `href` of each nav link, indexed like `nav_links`.
    pub nav_hrefs: Vec<String>,
    pub gallery: Option<HtmlElement>,
    pub prev_button: Option<HtmlButtonElement>,
    pub next_button: Option<HtmlButtonElement>,
    /// Sections carrying an id, in document order.
    pub sections: Vec<(String, Element)>,
    pub reveal_targets: Vec<Element>,
}

impl PageElements {
    pub fn query(window: Window, document: Document, selectors: &Selectors, log: Logger) -> Self {
        let nav_links = query_all(&document, &selectors.nav_links, log);
        let nav_hrefs = nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect();
        let sections = query_all(&document, &selectors.sections, log)
            .into_iter()
            .filter_map(|el| {
                let id = el.id();
                (!id.is_empty()).then_some((id, el))
            })
            .collect();

        Self {
            body: document.body(),
            navbar: query(&document, &selectors.navbar, log),
            menu_button: query(&document, &selectors.menu_button, log),
            menu_panel: query(&document, &selectors.menu_panel, log),
            nav_links,
            nav_hrefs,
            gallery: query(&document, &selectors.gallery, log)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            prev_button: query(&document, &selectors.prev_button, log)
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()),
            next_button: query(&document, &selectors.next_button, log)
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()),
            sections,
            reveal_targets: query_all(&document, &selectors.reveal_targets, log),
            window,
            document,
        }
    }

    pub fn presence(&self) -> Presence {
        Presence {
            navbar: self.navbar.is_some(),
            menu_button: self.menu_button.is_some(),
            menu_panel: self.menu_panel.is_some(),
            gallery: self.gallery.is_some(),
            prev_button: self.prev_button.is_some(),
            next_button: self.next_button.is_some(),
        }
    }

    pub fn page_metrics(&self) -> PageMetrics {
        PageMetrics {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            viewport_height: viewport_size(&self.window, &self.document).height,
            document_height: self
                .body
                .as_ref()
                .map_or(0.0, |body| f64::from(body.offset_height())),
        }
    }

    pub fn section_boxes(&self) -> Vec<SectionBox> {
        self.sections
            .iter()
            .map(|(id, el)| SectionBox::new(id.clone(), document_top(&self.window, el)))
            .collect()
    }

    pub fn gallery_metrics(&self) -> Option<GalleryMetrics> {
        self.gallery.as_ref().map(|g| GalleryMetrics {
            scroll_left: f64::from(g.scroll_left()),
            scroll_width: f64::from(g.scroll_width()),
            client_width: f64::from(g.client_width()),
        })
    }
}

pub fn query(document: &Document, selector: &str, log: Logger) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            log.warn(&format!("invalid selector {selector:?}"));
            None
        }
    }
}

pub fn query_all(document: &Document, selector: &str, log: Logger) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log.warn(&format!("invalid selector {selector:?}"));
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Offset of an element's top edge from the document top. Uses `offsetTop`
/// for HTML elements, the bounding rect otherwise.
pub fn document_top(window: &Window, element: &Element) -> f64 {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => f64::from(html.offset_top()),
        None => {
            element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
        }
    }
}

/// Visible viewport size. Falls back to the root element's client size when
/// the window reports zero.
pub fn viewport_size(window: &Window, document: &Document) -> ViewportSize {
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).filter(|v| *v > 0.0)
    };
    let root = document.document_element();
    let width = inner(window.inner_width())
        .or_else(|| root.as_ref().map(|r| f64::from(r.client_width())))
        .unwrap_or(0.0);
    let height = inner(window.inner_height())
        .or_else(|| root.as_ref().map(|r| f64::from(r.client_height())))
        .unwrap_or(0.0);
    ViewportSize::new(width, height)
}

pub fn client_rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::from_edges(r.top(), r.left(), r.bottom(), r.right())
}
