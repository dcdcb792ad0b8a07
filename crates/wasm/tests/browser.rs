#![cfg(target_arch = "wasm32")]

use folio_wasm::{Page, boot_with_config, is_in_viewport};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const MENU_PAGE: &str = r##"
    <button class="mobile-menu-btn"><span class="bar"></span></button>
    <div class="mobile-nav">
        <p class="blurb">menu</p>
        <a class="menu-link" href="#nowhere">Nowhere</a>
    </div>
    <p class="outside">elsewhere</p>
"##;

const NAV_PAGE: &str = r##"
    <section id="about" style="height: 40px">about</section>
    <ul class="nav-links"><li><a class="about-link" href="#about">About</a></li></ul>
"##;

const GALLERY_PAGE: &str = r##"
    <div class="projects-grid" style="width: 100px; overflow-x: auto; white-space: nowrap">
        <div style="display: inline-block; width: 1000px; height: 10px"></div>
    </div>
    <button class="projects-nav-btn prev">prev</button>
    <button class="projects-nav-btn next">next</button>
"##;

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document available")
}

/// Mount `html` in a fresh root at the top of the body.
fn fixture(html: &str) -> Element {
    let document = document();
    let body = document.body().expect("body available");
    let root = document.create_element("div").expect("create root");
    root.set_id("folio-test-root");
    root.set_inner_html(html);
    body.insert_before(&root, body.first_child().as_ref())
        .expect("insert root");
    root
}

fn find(selector: &str) -> Element {
    document()
        .query_selector(selector)
        .ok()
        .flatten()
        .unwrap_or_else(|| panic!("{selector} in fixture"))
}

fn boot(json: &str) -> Page {
    let Ok(page) = boot_with_config(json) else {
        panic!("config rejected: {json}");
    };
    page
}

/// Dispatch a bubbling, cancelable mouse event. Returns false if a
/// handler prevented the default action.
fn dispatch(el: &Element, kind: &str) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event");
    el.dispatch_event(&event).expect("dispatch")
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[wasm_bindgen_test]
fn menu_opens_and_closes_on_real_clicks() {
    let root = fixture(MENU_PAGE);
    let mut page = boot("{}");
    let button = find(".mobile-menu-btn");
    let panel = find(".mobile-nav");

    // The button click also bubbles to the document; that must not close it.
    dispatch(&button, "click");
    assert!(has_class(&panel, "active"));
    assert!(has_class(&button, "active"));

    dispatch(&find(".mobile-menu-btn .bar"), "click");
    assert!(!has_class(&panel, "active"));
    dispatch(&button, "click");

    dispatch(&find(".blurb"), "click");
    assert!(has_class(&panel, "active"), "click inside the panel keeps it open");

    dispatch(&find(".outside"), "click");
    assert!(!has_class(&panel, "active"));
    assert!(!has_class(&button, "active"));

    dispatch(&button, "click");
    dispatch(&find(".menu-link"), "click");
    assert!(!has_class(&panel, "active"), "following a menu link closes it");

    page.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn detach_removes_listeners() {
    let root = fixture(MENU_PAGE);
    let mut page = boot("{}");
    assert!(page.controllers() >= 2);
    page.detach();
    assert_eq!(page.controllers(), 0);

    let button = find(".mobile-menu-btn");
    dispatch(&button, "click");
    assert!(!has_class(&find(".mobile-nav"), "active"));
    assert!(!has_class(&button, "active"));

    root.remove();
}

#[wasm_bindgen_test]
async fn anchor_click_prevents_default_then_refreshes_links() {
    let root = fixture(NAV_PAGE);
    let mut page = boot(r#"{ "smooth_scroll": { "settle_delay_ms": 20 } }"#);
    let link = find(".about-link");
    assert!(!has_class(&link, "active"));

    let not_prevented = dispatch(&link, "click");
    assert!(!not_prevented, "in-page anchor click is handled by the script");

    TimeoutFuture::new(80).await;
    assert!(has_class(&link, "active"));

    page.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn unknown_fragment_is_left_to_the_browser() {
    let root = fixture(r##"<a class="lonely" href="#missing">x</a>"##);
    let mut page = boot("{}");
    assert!(dispatch(&find(".lonely"), "click"));
    page.detach();
    root.remove();
}

#[wasm_bindgen_test]
async fn page_loaded_marker_follows_boot_delay() {
    let root = fixture("");
    let body = document().body().expect("body available");
    body.class_list().remove_1("page-loaded").ok();

    let mut page = boot(r#"{ "boot": { "page_loaded_delay_ms": 10 } }"#);
    assert!(!has_class(&body, "page-loaded"));
    TimeoutFuture::new(60).await;
    assert!(has_class(&body, "page-loaded"));

    page.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn gallery_buttons_and_drag_cursor() {
    let root = fixture(GALLERY_PAGE);
    let mut page = boot("{}");
    let grid = find(".projects-grid");
    let prev = find(".projects-nav-btn.prev");
    let next = find(".projects-nav-btn.next");
    assert!(prev.has_attribute("disabled"));
    assert!(!next.has_attribute("disabled"));

    let style = grid.dyn_ref::<HtmlElement>().expect("html element").style();
    dispatch(&grid, "mousedown");
    assert_eq!(style.get_property_value("cursor").ok().as_deref(), Some("grabbing"));
    dispatch(&grid, "mouseup");
    assert_eq!(style.get_property_value("cursor").ok().as_deref(), Some("grab"));

    page.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn viewport_check_on_live_elements() {
    let root = fixture(
        r#"<div class="near" style="width: 10px; height: 10px"></div>
           <div class="far" style="margin-top: 50000px; height: 10px"></div>"#,
    );
    assert!(is_in_viewport(&find(".near")));
    assert!(!is_in_viewport(&find(".far")));
    root.remove();
}
