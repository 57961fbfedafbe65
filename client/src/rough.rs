use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use roughboard_shared::{EllipseFrame, Frame, Generator, Point, RoughOptions};

#[wasm_bindgen]
extern "C" {
    pub type JsGenerator;

    #[wasm_bindgen(catch, js_namespace = rough, js_name = generator)]
    fn create_generator() -> Result<JsGenerator, JsValue>;

    #[wasm_bindgen(method)]
    fn line(this: &JsGenerator, x1: f64, y1: f64, x2: f64, y2: f64, options: &Object) -> JsValue;

    #[wasm_bindgen(method)]
    fn rectangle(
        this: &JsGenerator,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: &Object,
    ) -> JsValue;

    #[wasm_bindgen(method)]
    fn ellipse(
        this: &JsGenerator,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: &Object,
    ) -> JsValue;

    #[wasm_bindgen(method, js_name = linearPath)]
    fn linear_path(this: &JsGenerator, points: &Array, options: &Object) -> JsValue;

    pub type RoughCanvas;

    #[wasm_bindgen(catch, js_namespace = rough, js_name = canvas)]
    fn create_canvas(canvas: &HtmlCanvasElement) -> Result<RoughCanvas, JsValue>;

    #[wasm_bindgen(method)]
    pub fn draw(this: &RoughCanvas, drawable: &JsValue);
}

/// rough.js generator. Drawables are rough.js `Drawable` objects.
pub struct RoughJs {
    generator: JsGenerator,
}

impl RoughJs {
    pub fn new() -> Result<Self, JsValue> {
        let generator = create_generator()
            .map_err(|_| JsValue::from_str("rough.js is not loaded (missing `rough` global)"))?;
        Ok(Self { generator })
    }
}

pub fn rough_canvas(canvas: &HtmlCanvasElement) -> Result<RoughCanvas, JsValue> {
    create_canvas(canvas)
        .map_err(|_| JsValue::from_str("rough.js is not loaded (missing `rough` global)"))
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}

fn options_object(options: &RoughOptions) -> Object {
    let object = Object::new();
    set(&object, "stroke", &JsValue::from_str(&options.stroke));
    set(&object, "strokeWidth", &options.stroke_width.into());
    set(&object, "roughness", &options.roughness.into());
    if let Some(bowing) = options.bowing {
        set(&object, "bowing", &bowing.into());
    }
    let fill = options.fill.as_deref().unwrap_or("none");
    set(&object, "fill", &JsValue::from_str(fill));
    if let Some(fill_style) = options.fill_style {
        set(&object, "fillStyle", &JsValue::from_str(fill_style));
    }
    if let Some(gap) = options.hachure_gap {
        set(&object, "hachureGap", &gap.into());
    }
    if let Some(angle) = options.hachure_angle {
        set(&object, "hachureAngle", &angle.into());
    }
    object
}

impl Generator for RoughJs {
    type Drawable = JsValue;

    fn line(&self, from: Point, to: Point, options: &RoughOptions) -> JsValue {
        self.generator
            .line(from.x, from.y, to.x, to.y, &options_object(options))
    }

    fn rectangle(&self, frame: Frame, options: &RoughOptions) -> JsValue {
        self.generator.rectangle(
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            &options_object(options),
        )
    }

    fn ellipse(&self, frame: EllipseFrame, options: &RoughOptions) -> JsValue {
        self.generator.ellipse(
            frame.center.x,
            frame.center.y,
            frame.width(),
            frame.height(),
            &options_object(options),
        )
    }

    fn linear_path(&self, points: &[Point], options: &RoughOptions) -> JsValue {
        let array = points
            .iter()
            .map(|point| Array::of2(&point.x.into(), &point.y.into()))
            .collect::<Array>();
        self.generator.linear_path(&array, &options_object(options))
    }
}
