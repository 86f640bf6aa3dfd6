use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use leptos::logging::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Node};

use super::{INJECTED_ATTR, clipboard};
use crate::config::InjectorConfig;
use crate::state::{CopyMachine, CopyState, Generation};

thread_local! {
    /// Buttons owned by the page until `release` detaches them
    static LIVE: RefCell<Vec<Rc<CopyButton>>> = const { RefCell::new(Vec::new()) };
}

/// A copy button bound to one code block
pub struct CopyButton {
    element: HtmlElement,
    code: HtmlElement,
    config: Rc<InjectorConfig>,
    machine: RefCell<CopyMachine>,
    handler: RefCell<Option<Closure<dyn FnMut()>>>,
    /// Dropping a `Timeout` cancels it, so replacing this clears the old reset
    pending_reset: RefCell<Option<Timeout>>,
}

impl CopyButton {
    /// Create the `<button>` element, wire its click handler and register it
    /// with the page. The caller decides where it goes in the tree.
    pub fn create(document: &Document, code: HtmlElement, config: Rc<InjectorConfig>) -> Result<Rc<Self>, JsValue> {
        let element: HtmlElement = document.create_element("button")?.dyn_into()?;
        element.set_attribute("type", "button")?;
        element.class_list().add_1(&config.button_class)?;
        element.set_inner_text(CopyState::Idle.label(&config.labels));

        let button = Rc::new(Self {
            element,
            code,
            config,
            machine: RefCell::new(CopyMachine::new()),
            handler: RefCell::new(None),
            pending_reset: RefCell::new(None),
        });

        let handler = {
            let button: Weak<Self> = Rc::downgrade(&button);
            Closure::wrap(Box::new(move || {
                if let Some(button) = button.upgrade() {
                    button.on_click();
                }
            }) as Box<dyn FnMut()>)
        };
        button
            .element
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        button.handler.replace(Some(handler));

        LIVE.with(|live| live.borrow_mut().push(Rc::clone(&button)));
        Ok(button)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn on_click(self: &Rc<Self>) {
        let generation = self.machine.borrow_mut().click();
        self.pending_reset.borrow_mut().take();
        self.render(CopyState::Copying);

        // Read at click time so snippets edited after injection copy their current text
        let text = self.code.inner_text();
        let button = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let result = clipboard::write_text(&text).await;
            if let Err(e) = &result {
                warn!("[snippets] Clipboard write failed: {:?}", e);
            }
            let next = button.machine.borrow_mut().write_finished(generation, result.is_ok());
            if let Some(state) = next {
                button.render(state);
                button.schedule_reset(generation);
            }
        });
    }

    fn schedule_reset(self: &Rc<Self>, generation: Generation) {
        let button = Rc::clone(self);
        let timeout = Timeout::new(self.config.reset_delay_ms, move || {
            let next = button.machine.borrow_mut().reset(generation);
            if let Some(state) = next {
                button.render(state);
            }
        });
        self.pending_reset.replace(Some(timeout));
    }

    fn render(&self, state: CopyState) {
        self.element.set_inner_text(state.label(&self.config.labels));
    }

    /// Unhook the click handler, cancel any pending reset, take the element
    /// out of the tree and unmark its container.
    fn detach(&self) {
        if let Some(handler) = self.handler.borrow_mut().take() {
            let _ = self
                .element
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
        self.pending_reset.borrow_mut().take();
        if let Some(container) = self.element.parent_element() {
            let _ = container.remove_attribute(INJECTED_ATTR);
        }
        self.element.remove();
    }
}

/// Detach every button inside `root` and drop the page's hold on it.
/// Returns how many were released.
pub fn release(root: &Element) -> usize {
    let released: Vec<Rc<CopyButton>> = LIVE.with(|live| {
        let mut live = live.borrow_mut();
        let (inside, outside): (Vec<_>, Vec<_>) = live
            .drain(..)
            .partition(|button: &Rc<CopyButton>| {
                let node: &Node = &button.element;
                root.contains(Some(node))
            });
        *live = outside;
        inside
    });

    for button in &released {
        button.detach();
    }
    released.len()
}
