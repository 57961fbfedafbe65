use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement, HtmlSpanElement,
    PointerEvent, Window,
};

use roughboard_shared::{to_canvas_local, BoardConfig, Point};

use crate::render::redraw;
use crate::state::State;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn update_size_label(input: &HtmlInputElement, value: &HtmlSpanElement) {
    value.set_text_content(Some(&input.value()));
}

pub fn set_tool_button(button: &HtmlButtonElement, active: bool) {
    let pressed = if active { "true" } else { "false" };
    let _ = button.set_attribute("aria-pressed", pressed);
}

pub fn set_canvas_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
    let _ = canvas.style().set_property("cursor", cursor);
}

/// Reads JSON overrides from the canvas `data-config` attribute.
pub fn read_config(canvas: &HtmlCanvasElement) -> BoardConfig {
    let Some(text) = canvas.get_attribute("data-config") else {
        return BoardConfig::default();
    };
    match BoardConfig::from_json(&text) {
        Ok(config) => config,
        Err(error) => {
            log::warn!("ignoring invalid data-config: {error}");
            BoardConfig::default()
        }
    }
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Fits the canvas to the viewport and repaints; resizing wipes the pixels.
pub fn resize_canvas(window: &Window, state: &mut State) {
    let Some((viewport_width, viewport_height)) = viewport_size(window) else {
        log::warn!("viewport size unavailable, keeping canvas size");
        return;
    };
    let (width, height) = state.config.canvas_size(viewport_width, viewport_height);
    let dpr = window.device_pixel_ratio();
    state.canvas.set_width((width * dpr) as u32);
    state.canvas.set_height((height * dpr) as u32);
    let style = state.canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    let _ = state.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    log::debug!(
        "canvas resized from {}x{} to {width}x{height}",
        state.board_width,
        state.board_height
    );
    state.board_width = width;
    state.board_height = height;
    redraw(state);
}

pub fn event_to_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    to_canvas_local(
        Point::new(event.client_x() as f64, event.client_y() as f64),
        Point::new(rect.left(), rect.top()),
    )
}
