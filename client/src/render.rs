use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use roughboard_shared::Surface;

use crate::rough::RoughCanvas;
use crate::state::State;

struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    rough: &'a RoughCanvas,
    width: f64,
    height: f64,
}

impl Surface<JsValue> for CanvasSurface<'_> {
    fn clear(&mut self, background: &str) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str(background);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw(&mut self, drawable: &JsValue) {
        self.rough.draw(drawable);
    }
}

pub fn redraw(state: &State) {
    let mut surface = CanvasSurface {
        ctx: &state.ctx,
        rough: &state.rough,
        width: state.board_width,
        height: state.board_height,
    };
    state.board.render(&mut surface);
}
