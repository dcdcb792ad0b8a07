use std::rc::Rc;

use folio_core::config::{ClassNames, TrackerConfig};
use folio_core::controllers::sections;
use folio_protocol::{DomCommand, ElementRef, StateMarker, Task};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, IntersectionObserver, ScrollToOptions};

use crate::dom::PageElements;
use crate::log::Logger;
use crate::timer;

/// Event-scoped handles some commands need.
#[derive(Default, Clone, Copy)]
pub struct Effects<'a> {
    pub event: Option<&'a Event>,
    pub observer: Option<&'a IntersectionObserver>,
}

impl<'a> Effects<'a> {
    pub fn event(event: &'a Event) -> Self {
        Self {
            event: Some(event),
            observer: None,
        }
    }

    pub fn observer(observer: &'a IntersectionObserver) -> Self {
        Self {
            event: None,
            observer: Some(observer),
        }
    }
}

/// Class name for a marker under the page's naming scheme.
pub fn class_for(classes: &ClassNames, marker: StateMarker) -> &str {
    match marker {
        StateMarker::Scrolled => &classes.scrolled,
        StateMarker::ActiveLink => &classes.active_link,
        StateMarker::MenuOpen => &classes.menu_open,
        StateMarker::Visible => &classes.visible,
        StateMarker::PageLoaded => &classes.page_loaded,
    }
}

/// Applies `DomCommand` lists to the live document.
pub struct Renderer {
    elements: Rc<PageElements>,
    classes: ClassNames,
    tracker: TrackerConfig,
    log: Logger,
}

impl Renderer {
    pub fn new(
        elements: Rc<PageElements>,
        classes: ClassNames,
        tracker: TrackerConfig,
        log: Logger,
    ) -> Self {
        Self {
            elements,
            classes,
            tracker,
            log,
        }
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    pub fn log(&self) -> Logger {
        self.log
    }

    /// Re-run the active-section tracker against the current scroll position.
    pub fn refresh_active_links(self: &Rc<Self>) {
        let metrics = self.elements.page_metrics();
        let boxes = self.elements.section_boxes();
        let commands = sections::track(&boxes, &self.elements.nav_hrefs, &metrics, &self.tracker);
        self.apply(&commands, Effects::default());
    }

    fn element(&self, target: ElementRef) -> Option<Element> {
        let e = &self.elements;
        match target {
            ElementRef::Body => e.body.clone().map(Into::into),
            ElementRef::Navbar => e.navbar.clone(),
            ElementRef::MenuButton => e.menu_button.clone(),
            ElementRef::MenuPanel => e.menu_panel.clone(),
            ElementRef::NavLink(i) => e.nav_links.get(i).cloned(),
            ElementRef::Gallery => e.gallery.clone().map(Into::into),
            ElementRef::PrevButton => e.prev_button.clone().map(Into::into),
            ElementRef::NextButton => e.next_button.clone().map(Into::into),
            ElementRef::RevealTarget(i) => e.reveal_targets.get(i).cloned(),
        }
    }

    /// Apply commands in order. Commands addressing a missing element are
    /// skipped.
    pub fn apply(self: &Rc<Self>, commands: &[DomCommand], effects: Effects<'_>) {
        for cmd in commands {
            match cmd {
                DomCommand::SetMarker { target, marker, on } => {
                    let Some(el) = self.element(*target) else {
                        continue;
                    };
                    let class = class_for(&self.classes, *marker);
                    let list = el.class_list();
                    if *on {
                        list.add_1(class).ok();
                    } else {
                        list.remove_1(class).ok();
                    }
                }

                DomCommand::SetDisabled { target, disabled } => {
                    let Some(el) = self.element(*target) else {
                        continue;
                    };
                    match el.dyn_ref::<HtmlButtonElement>() {
                        Some(button) => button.set_disabled(*disabled),
                        None if *disabled => {
                            el.set_attribute("disabled", "").ok();
                        }
                        None => {
                            el.remove_attribute("disabled").ok();
                        }
                    }
                }

                DomCommand::SetCursor { target, cursor } => {
                    if let Some(el) = self.element(*target)
                        && let Some(html) = el.dyn_ref::<HtmlElement>()
                    {
                        html.style().set_property("cursor", cursor.as_css()).ok();
                    }
                }

                DomCommand::ScrollWindowTo { top, behavior } => {
                    let options = ScrollToOptions::new();
                    options.set_top(*top);
                    options.set_behavior(web_behavior(*behavior));
                    self.elements
                        .window
                        .scroll_to_with_scroll_to_options(&options);
                }

                DomCommand::ScrollElementBy {
                    target,
                    left,
                    behavior,
                } => {
                    let Some(el) = self.element(*target) else {
                        continue;
                    };
                    let options = ScrollToOptions::new();
                    options.set_left(*left);
                    options.set_behavior(web_behavior(*behavior));
                    el.scroll_by_with_scroll_to_options(&options);
                }

                DomCommand::SetScrollLeft { target, left } => {
                    if let Some(el) = self.element(*target) {
                        el.set_scroll_left(left.round() as i32);
                    }
                }

                DomCommand::PreventDefault => {
                    if let Some(event) = effects.event {
                        event.prevent_default();
                    }
                }

                DomCommand::Unobserve { target } => {
                    if let (Some(observer), Some(el)) = (effects.observer, self.element(*target)) {
                        observer.unobserve(&el);
                    }
                }

                DomCommand::Schedule { delay_ms, task } => {
                    let renderer = Rc::clone(self);
                    let task = *task;
                    timer::once(*delay_ms, move || renderer.run(task));
                }
            }
        }
    }

    fn run(self: &Rc<Self>, task: Task) {
        match task {
            Task::RefreshActiveLink => self.refresh_active_links(),
            Task::MarkPageLoaded => self.apply(
                &[DomCommand::SetMarker {
                    target: ElementRef::Body,
                    marker: StateMarker::PageLoaded,
                    on: true,
                }],
                Effects::default(),
            ),
        }
    }
}

fn web_behavior(behavior: folio_protocol::ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        folio_protocol::ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        folio_protocol::ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    }
}
