use wasm_bindgen::prelude::Closure;
use web_sys::{CanvasRenderingContext2d, FileReader, HtmlCanvasElement, ProgressEvent};

use roughboard_shared::{Board, BoardConfig};

use crate::persistence::LocalStorage;
use crate::rough::{RoughCanvas, RoughJs};

pub type WhiteBoard = Board<RoughJs, LocalStorage>;

pub struct State {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub rough: RoughCanvas,
    pub board: WhiteBoard,
    pub config: BoardConfig,
    pub board_width: f64,
    pub board_height: f64,
    pub import_reader: Option<FileReader>,
    pub import_onload: Option<Closure<dyn FnMut(ProgressEvent)>>,
}
