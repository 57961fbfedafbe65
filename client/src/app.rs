use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Event, FileReader, HtmlButtonElement, HtmlCanvasElement,
    HtmlInputElement, HtmlSpanElement, PointerEvent, ProgressEvent,
};

use roughboard_shared::{Board, Change, FillStyle, StrokeWidth, Tool};

use crate::dom::{
    event_to_point, get_element, read_config, resize_canvas, set_canvas_cursor, set_tool_button,
    update_size_label,
};
use crate::logging;
use crate::persistence::{download_json, read_import_text, LocalStorage};
use crate::render::redraw;
use crate::rough::{rough_canvas, RoughJs};
use crate::state::State;

const TOOL_BUTTONS: [(&str, Tool); 4] = [
    ("toolLine", Tool::Line),
    ("toolRectangle", Tool::Rectangle),
    ("toolEllipse", Tool::Ellipse),
    ("toolFreehand", Tool::Freehand),
];

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

fn sync_tool_ui(tool: Tool, buttons: &[(HtmlButtonElement, Tool)]) {
    for (button, button_tool) in buttons {
        set_tool_button(button, *button_tool == tool);
    }
}

/// Repaints after a document change and keeps the cursor in step with the
/// gesture state.
fn apply_change(state: &State, change: Change) {
    if change.is_document() {
        redraw(state);
    }
    set_canvas_cursor(&state.canvas, state.board.cursor());
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    logging::init(logging::debug_enabled(&window));

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let size_input: HtmlInputElement = get_element(&document, "strokeWidth")?;
    let size_value: HtmlSpanElement = get_element(&document, "strokeWidthValue")?;
    let color_input: HtmlInputElement = get_element(&document, "color")?;
    let stroke_radio: HtmlInputElement = get_element(&document, "styleStroke")?;
    let fill_radio: HtmlInputElement = get_element(&document, "styleFill")?;
    let undo_button: HtmlButtonElement = get_element(&document, "undo")?;
    let clear_button: HtmlButtonElement = get_element(&document, "clear")?;
    let export_button: HtmlButtonElement = get_element(&document, "export")?;
    let import_button: HtmlButtonElement = get_element(&document, "import")?;
    let import_file: HtmlInputElement = get_element(&document, "importFile")?;
    let tool_buttons = TOOL_BUTTONS
        .iter()
        .map(|(id, tool)| Ok((get_element::<HtmlButtonElement>(&document, id)?, *tool)))
        .collect::<Result<Vec<_>, JsValue>>()?;
    let tool_buttons = Rc::new(tool_buttons);

    let config = read_config(&canvas);
    let board = Board::open(
        RoughJs::new()?,
        LocalStorage::from_window(&window),
        &config,
    );
    log::info!("board ready with {} shapes", board.document().len());

    {
        let settings = board.settings();
        let style = &settings.style;
        size_input.set_value(&style.stroke_width.get().to_string());
        color_input.set_value(&style.color);
        stroke_radio.set_checked(style.fill == FillStyle::Stroke);
        fill_radio.set_checked(style.fill == FillStyle::Fill);
        sync_tool_ui(settings.tool, &tool_buttons);
    }
    update_size_label(&size_input, &size_value);
    set_canvas_cursor(&canvas, board.cursor());

    let state = Rc::new(RefCell::new(State {
        rough: rough_canvas(&canvas)?,
        canvas: canvas.clone(),
        ctx,
        board,
        config,
        board_width: 0.0,
        board_height: 0.0,
        import_reader: None,
        import_onload: None,
    }));

    {
        let resize_state = state.clone();
        let window_cb = window.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            let mut state = resize_state.borrow_mut();
            resize_canvas(&window_cb, &mut state);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    {
        let mut state = state.borrow_mut();
        resize_canvas(&window, &mut state);
    }

    for (button, tool) in tool_buttons.iter() {
        let tool = *tool;
        let tool_state = state.clone();
        let buttons = tool_buttons.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            tool_state.borrow_mut().board.set_tool(tool);
            sync_tool_ui(tool, &buttons);
        });
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let size_state = state.clone();
        let size_input_cb = size_input.clone();
        let size_value_cb = size_value.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            update_size_label(&size_input_cb, &size_value_cb);
            let width = size_input_cb.value_as_number();
            size_state
                .borrow_mut()
                .board
                .set_stroke_width(StrokeWidth::from(width));
        });
        size_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let color_state = state.clone();
        let color_input_cb = color_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            color_state
                .borrow_mut()
                .board
                .set_color(color_input_cb.value());
        });
        color_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    for (radio, fill) in [
        (stroke_radio.clone(), FillStyle::Stroke),
        (fill_radio.clone(), FillStyle::Fill),
    ] {
        let fill_state = state.clone();
        let radio_cb = radio.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            if radio_cb.checked() {
                fill_state.borrow_mut().board.set_fill(fill);
            }
        });
        radio.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let undo_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = undo_state.borrow_mut();
            let change = state.board.undo();
            apply_change(&state, change);
        });
        undo_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let clear_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = clear_state.borrow_mut();
            let change = state.board.clear();
            apply_change(&state, change);
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let export_state = state.clone();
        let document = document.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let state = export_state.borrow();
            let json = match state.board.export_json() {
                Ok(json) => json,
                Err(error) => {
                    log::error!("failed to export JSON: {error}");
                    return;
                }
            };
            if let Err(error) = download_json(&document, &state.config.export_file_name, &json) {
                web_sys::console::error_2(&"failed to start download".into(), &error);
            }
        });
        export_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let import_file = import_file.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            import_file.set_value("");
            import_file.click();
        });
        import_button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let import_file_cb = import_file.clone();
        let import_state = state.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            let Some(file) = import_file_cb.files().and_then(|list| list.get(0)) else {
                return;
            };
            if let Some(previous) = import_state.borrow_mut().import_reader.take() {
                previous.set_onload(None);
                previous.abort();
            }
            let reader = match FileReader::new() {
                Ok(reader) => reader,
                Err(error) => {
                    web_sys::console::error_2(&"failed to create FileReader".into(), &error);
                    return;
                }
            };
            let onload_state = import_state.clone();
            let onload = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
                let Some(text) = read_import_text(&event) else {
                    log::error!("failed to import JSON: file could not be read as text");
                    return;
                };
                let mut state = onload_state.borrow_mut();
                match state.board.import_json(&text) {
                    Ok(change) => apply_change(&state, change),
                    Err(error) => log::error!("failed to import JSON: {error}"),
                }
            });
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            if let Err(error) = reader.read_as_text(&file) {
                web_sys::console::error_2(&"failed to read import file".into(), &error);
                return;
            }
            let mut state = import_state.borrow_mut();
            state.import_reader = Some(reader);
            state.import_onload = Some(onload);
        });
        import_file.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            let _ = down_canvas.set_pointer_capture(event.pointer_id());
            let point = event_to_point(&down_canvas, &event);
            let mut state = down_state.borrow_mut();
            let change = state.board.pointer_down(point);
            apply_change(&state, change);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut state = move_state.borrow_mut();
            if !state.board.is_drawing() {
                return;
            }
            event.prevent_default();
            let point = event_to_point(&move_canvas, &event);
            let change = state.board.pointer_move(point);
            apply_change(&state, change);
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    for event_name in ["pointerup", "pointercancel", "lostpointercapture"] {
        let up_state = state.clone();
        let onup = Closure::<dyn FnMut(PointerEvent)>::new(move |_: PointerEvent| {
            let mut state = up_state.borrow_mut();
            if !state.board.is_drawing() {
                return;
            }
            let change = state.board.pointer_up();
            apply_change(&state, change);
        });
        canvas.add_event_listener_with_callback(event_name, onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    Ok(())
}
