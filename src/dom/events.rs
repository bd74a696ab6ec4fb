// ============================================================================
// EVENT HANDLING - Listeners globales de navegación
// ============================================================================
// Estos listeners son globales (window/document): solo deben registrarse UNA
// VEZ al arrancar la app, si no se acumularían. closure.forget() mantiene el
// closure vivo durante toda la vida de la página.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::web::{document, window};
use crate::error::{dom_error, AppError, AppResult};

/// Atributo que marca un enlace interno de navegación
pub const ROUTE_ATTR: &str = "data-route";

/// Intercepta clicks en cualquier `[data-route]` y llama a `handler(path)`
pub fn on_route_link_click<F>(handler: F) -> AppResult<()>
where
    F: Fn(String) + 'static,
{
    let doc = document().ok_or_else(|| AppError::Dom("No document".to_string()))?;
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        // Respetar ctrl/cmd+click (abrir en otra pestaña)
        if event.ctrl_key() || event.meta_key() || event.shift_key() || event.button() != 0 {
            return;
        }
        let link = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&format!("[{}]", ROUTE_ATTR)).ok().flatten());
        if let Some(path) = link.and_then(|el| el.get_attribute(ROUTE_ATTR)) {
            event.prevent_default();
            handler(path);
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

/// Escucha `popstate` (atrás/adelante del navegador)
pub fn on_popstate<F>(handler: F) -> AppResult<()>
where
    F: Fn() + 'static,
{
    let win = window().ok_or_else(|| AppError::Dom("No window".to_string()))?;
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        handler();
    }) as Box<dyn FnMut(Event)>);

    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}
