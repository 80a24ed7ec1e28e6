//! Browser entry point.
//!
//! [`start`] runs as soon as the wasm module is instantiated. Loaded from
//! `<head>`, that is before the body renders, so the stored or system theme
//! is on the root element before first paint.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::MANAGED_ATTRIBUTE;
use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::{Result, ThemeError};
use crate::system::ColorSchemeSource;

pub mod dom;
pub mod media;
pub mod storage;

pub use dom::DomSurface;
pub use media::MediaQuery;
pub use storage::LocalStorage;

pub type BrowserThemeController = ThemeController<LocalStorage, MediaQuery, DomSurface>;

type EventClosure = Closure<dyn FnMut(web_sys::Event)>;

/// Handlers registered with the page. They stay alive for the page lifetime.
struct Bindings {
    controller: Rc<BrowserThemeController>,
    _ready: Option<EventClosure>,
    _scheme_change: EventClosure,
}

/// Click handler and the toggle element it is registered on
struct ToggleClick {
    element: web_sys::Element,
    closure: EventClosure,
}

thread_local! {
    static BINDINGS: RefCell<Option<Bindings>> = RefCell::new(None);
    static TOGGLE_CLICK: RefCell<Option<ToggleClick>> = RefCell::new(None);
}

impl From<ThemeError> for JsValue {
    fn from(e: ThemeError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

/// Best-effort text of a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // The host page may already have installed a logger
    let _ = console_log::init_with_level(log::Level::Info);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Dom("no document".into()))?;
    install(dom::read_config(&document))?;
    Ok(())
}

/// Build the browser controller, apply the initial theme and register the
/// page handlers. Calling it again returns the already installed controller.
pub fn install(config: ThemeConfig) -> Result<Rc<BrowserThemeController>> {
    if let Some(existing) = installed() {
        return Ok(existing);
    }

    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Dom("no document".into()))?;

    let store = LocalStorage::open(&window)?;
    let scheme = MediaQuery::new(&window, &config.color_scheme_query)?;
    let surface = DomSurface::new(document.clone(), &config);
    let controller = Rc::new(ThemeController::new(store, scheme, surface, config));

    let theme = controller.apply_initial()?;
    tracing::info!("Theme controller started with {} theme", theme);

    let loading = document.ready_state() == "loading";
    let ready = loading.then(|| {
        let c = controller.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            on_ready(&c);
        }) as Box<dyn FnMut(_)>)
    });

    let c = controller.clone();
    let onchange = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let prefers_dark = event
            .dyn_ref::<web_sys::MediaQueryListEvent>()
            .map(|e| e.matches())
            .unwrap_or_else(|| c.scheme().prefers_dark());
        match c.on_system_change(prefers_dark) {
            Ok(Some(theme)) => tracing::debug!("Following system color scheme: {}", theme),
            Ok(None) => {}
            Err(e) => tracing::error!("Failed to follow system color scheme: {}", e),
        }
    }) as Box<dyn FnMut(_)>);

    // Both closures must be owned by BINDINGS before the page can call them
    let onchange_fn = onchange.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let onready_fn = ready
        .as_ref()
        .map(|r| r.as_ref().unchecked_ref::<js_sys::Function>().clone());
    BINDINGS.with(|slot| {
        *slot.borrow_mut() = Some(Bindings {
            controller: controller.clone(),
            _ready: ready,
            _scheme_change: onchange,
        });
    });

    controller
        .scheme()
        .list()
        .add_event_listener_with_callback("change", &onchange_fn)
        .map_err(|e| ThemeError::Dom(js_message(&e)))?;

    match onready_fn {
        Some(onready) => document
            .add_event_listener_with_callback("DOMContentLoaded", &onready)
            .map_err(|e| ThemeError::Dom(js_message(&e)))?,
        None => on_ready(&controller),
    }

    Ok(controller)
}

/// Controller registered by [`install`], if any.
pub fn installed() -> Option<Rc<BrowserThemeController>> {
    BINDINGS.with(|slot| slot.borrow().as_ref().map(|b| b.controller.clone()))
}

fn on_ready(controller: &Rc<BrowserThemeController>) {
    if let Err(e) = bind_toggle(controller) {
        tracing::error!("Failed to bind theme toggle: {}", e);
    }
}

/// Refresh the toggle icon and route the toggle's clicks to `controller`.
///
/// Runs at DOM-ready; call it again after inserting a toggle later. A toggle
/// rendered by a live [`ThemeToggle`](crate::components::ThemeToggle) handles
/// its own clicks and is left alone. Returns whether a toggle is on the page.
pub fn bind_toggle(controller: &Rc<BrowserThemeController>) -> Result<bool> {
    if !controller.on_dom_ready()? {
        return Ok(false);
    }
    let Some(toggle) = controller.surface().toggle_element()? else {
        return Ok(false);
    };
    if toggle.has_attribute(MANAGED_ATTRIBUTE) {
        return Ok(true);
    }

    let already_bound = TOGGLE_CLICK.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|bound| bound.element == toggle)
    });
    if already_bound {
        return Ok(true);
    }

    let c = controller.clone();
    let onclick = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Err(e) = c.toggle_theme() {
            tracing::error!("Failed to toggle theme: {}", e);
        }
    }) as Box<dyn FnMut(_)>);
    toggle
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(js_message(&e)))?;

    let previous = TOGGLE_CLICK.with(|slot| {
        slot.borrow_mut().replace(ToggleClick {
            element: toggle,
            closure: onclick,
        })
    });
    // A replaced toggle must not keep calling a dropped closure
    if let Some(previous) = previous {
        let _ = previous.element.remove_event_listener_with_callback(
            "click",
            previous.closure.as_ref().unchecked_ref(),
        );
    }
    Ok(true)
}
