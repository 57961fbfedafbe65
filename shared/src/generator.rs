use crate::shape::{EllipseFrame, FillStyle, Frame, ShapeKind, Style};
use crate::Point;

pub const HACHURE_FILL: &str = "hachure";

/// Parameters handed to the hand-drawn generator for one shape.
#[derive(Clone, Debug, PartialEq)]
pub struct RoughOptions {
    pub stroke: String,
    pub stroke_width: f64,
    pub roughness: f64,
    pub bowing: Option<f64>,
    /// `None` means the shape is outlined only.
    pub fill: Option<String>,
    pub fill_style: Option<&'static str>,
    pub hachure_gap: Option<f64>,
    pub hachure_angle: Option<f64>,
}

impl RoughOptions {
    pub fn for_shape(kind: ShapeKind, style: &Style) -> Self {
        let mut options = Self {
            stroke: style.color.clone(),
            stroke_width: style.stroke_width.get() as f64,
            roughness: 1.7,
            bowing: Some(2.0),
            fill: None,
            fill_style: None,
            hachure_gap: None,
            hachure_angle: None,
        };
        match kind {
            ShapeKind::Line => {}
            ShapeKind::Ellipse => options.apply_fill(style),
            ShapeKind::Rectangle => {
                options.roughness = 2.3;
                options.bowing = Some(1.0);
                options.hachure_gap = Some(8.0);
                options.hachure_angle = Some(60.0);
                options.apply_fill(style);
            }
            ShapeKind::Freehand => {
                options.roughness = 0.7;
                options.bowing = None;
            }
        }
        options
    }

    fn apply_fill(&mut self, style: &Style) {
        if style.fill == FillStyle::Fill {
            self.fill = Some(style.color.clone());
            self.fill_style = Some(HACHURE_FILL);
        }
    }
}

/// Turns normalized geometry into an opaque drawable.
pub trait Generator {
    type Drawable;

    fn line(&self, from: Point, to: Point, options: &RoughOptions) -> Self::Drawable;

    fn rectangle(&self, frame: Frame, options: &RoughOptions) -> Self::Drawable;

    fn ellipse(&self, frame: EllipseFrame, options: &RoughOptions) -> Self::Drawable;

    fn linear_path(&self, points: &[Point], options: &RoughOptions) -> Self::Drawable;
}

/// Target that drawables are painted onto.
pub trait Surface<D> {
    fn clear(&mut self, background: &str);

    fn draw(&mut self, drawable: &D);
}
