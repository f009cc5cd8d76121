// DOM collaborator for the slider core: element-or-selector resolution,
// synchronous measurement, inline style application, and click wiring.
// Everything here is plumbing; the geometry and state live in the core.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::controller::{Slider, TrackSurface};
use crate::error::SliderError;
use crate::types::{Control, Direction, SliderConfig, TrackMetrics};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Inline-style sink over the track and its items.
struct DomSurface {
    track: HtmlElement,
    items: Vec<HtmlElement>,
}

impl DomSurface {
    /// Expects the container's first element child to be the track and the
    /// track's children to be the items.
    fn mount(container: &HtmlElement) -> Result<Self, SliderError> {
        let track = container
            .first_element_child()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(SliderError::MissingTrack)?;

        let children = track.children();
        let mut items = Vec::with_capacity(children.length() as usize);
        for index in 0..children.length() {
            if let Some(item) = children
                .item(index)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            {
                items.push(item);
            }
        }

        if items.is_empty() {
            return Err(SliderError::EmptyTrack);
        }

        Ok(DomSurface { track, items })
    }
}

impl TrackSurface for DomSurface {
    fn apply_item_gap(&mut self, direction: Direction, gap: i32) {
        let property = match direction {
            Direction::Horizontal => "margin-right",
            Direction::Vertical => "margin-bottom",
        };
        let value = format!("{gap}px");
        for item in &self.items {
            let _ = item.style().set_property(property, &value);
        }
    }

    fn apply_offset(&mut self, direction: Direction, offset: i32) {
        let property = match direction {
            Direction::Horizontal => "right",
            Direction::Vertical => "top",
        };
        let _ = self.track.style().set_property(property, &format!("{offset}px"));
    }
}

fn document() -> Result<Document, SliderError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SliderError::ContainerNotFound("no document available".to_string()))
}

/// Dual-mode resolution: a concrete element is used directly, a string goes
/// through `querySelector`. The error message says what was looked up; the
/// caller decides which error variant it becomes.
fn resolve_element(document: &Document, value: &JsValue) -> Result<HtmlElement, String> {
    if let Some(element) = value.dyn_ref::<HtmlElement>() {
        return Ok(element.clone());
    }

    let Some(selector) = value.as_string() else {
        return Err("expected an element or a selector string".to_string());
    };

    document
        .query_selector(&selector)
        .map_err(|_| format!("invalid selector {selector:?}"))?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| format!("no element matches {selector:?}"))
}

/// Scalar options go through the typed config; `JSON.stringify` drops the
/// element-valued control fields, which are read separately via `Reflect`.
fn parse_config(options: &JsValue) -> Result<SliderConfig, SliderError> {
    if options.is_undefined() || options.is_null() {
        return Ok(SliderConfig::default());
    }

    let json = js_sys::JSON::stringify(options)
        .map_err(|_| SliderError::InvalidConfig("options are not a plain object".to_string()))?;

    Ok(serde_json::from_str(&String::from(json))?)
}

/// A control reference from the options object: element, selector string, or
/// absent/empty to disable.
fn control_ref(options: &JsValue, key: &str) -> Option<JsValue> {
    if !options.is_object() {
        return None;
    }
    let value = js_sys::Reflect::get(options, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if value.as_string().is_some_and(|selector| selector.is_empty()) {
        return None;
    }
    Some(value)
}

fn to_js(err: SliderError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Slider exposed to JavaScript.
///
/// The container is an element or a selector string; options is a plain
/// object with `visibles`, `direction`, `justify`, `steps`, `controlNext`,
/// `controlPrev` (controls may themselves be elements or selectors).
/// Measurement is synchronous, so the container must already be part of a
/// rendered, visible layout.
#[wasm_bindgen]
pub struct WasmSlider {
    inner: Rc<RefCell<Slider<DomSurface>>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl WasmSlider {
    #[wasm_bindgen(constructor)]
    pub fn new(container: &JsValue, options: &JsValue) -> Result<WasmSlider, JsValue> {
        let document = document().map_err(to_js)?;
        let container = resolve_element(&document, container)
            .map_err(|message| to_js(SliderError::ContainerNotFound(message)))?;

        let config = parse_config(options).map_err(to_js)?;

        let surface = DomSurface::mount(&container).map_err(to_js)?;
        let first_item = &surface.items[0];
        let (viewport_size, item_size) = match config.direction {
            Direction::Horizontal => (container.offset_width(), first_item.offset_width()),
            Direction::Vertical => (container.offset_height(), first_item.offset_height()),
        };
        let metrics = TrackMetrics::new(viewport_size, item_size, surface.items.len());

        let next_ref = control_ref(options, "controlNext");
        let prev_ref = control_ref(options, "controlPrev");

        let slider = Slider::new(metrics, config, surface).map_err(to_js)?;
        let inner = Rc::new(RefCell::new(slider));

        // Controls resolve at construction; a dangling reference fails here
        // rather than on first click.
        let mut listeners = Vec::new();
        for (value, control) in [(next_ref, Control::Next), (prev_ref, Control::Prev)] {
            let Some(value) = value else { continue };
            let element = resolve_element(&document, &value)
                .map_err(|message| to_js(SliderError::ControlNotFound(message)))?;

            let handle = Rc::clone(&inner);
            listeners.push(EventListener::new_with_options(
                element.as_ref(),
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    handle.borrow_mut().trigger(control);
                },
            ));
        }

        Ok(WasmSlider { inner, listeners })
    }

    /// Move the track by `steps` items (default 1 when zero; negative
    /// reverses). A move past the travel limits is silently ignored.
    /// Returns whether the move was applied.
    #[wasm_bindgen(js_name = "move")]
    pub fn move_by(&self, steps: i32) -> bool {
        self.inner.borrow_mut().move_by(steps)
    }

    /// Current track offset in pixels, signed along the scroll axis.
    #[wasm_bindgen(getter, js_name = currentOffset)]
    pub fn current_offset(&self) -> i32 {
        self.inner.borrow().current_offset()
    }

    /// Effective configuration (defaults overlaid with supplied options) as
    /// JSON.
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.borrow().config())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Detach the control handlers and invalidate the instance.
    pub fn dispose(self) {
        drop(self.listeners);
    }
}
