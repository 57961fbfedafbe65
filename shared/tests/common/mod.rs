#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use roughboard_shared::{
    Board, BoardConfig, EllipseFrame, Frame, Generator, MemoryStorage, Point, RoughOptions,
    Storage, StorageError, Surface,
};

/// What the recording generator produced for one shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Sketch {
    Line { from: Point, to: Point },
    Rectangle(Frame),
    Ellipse(EllipseFrame),
    Path(Vec<Point>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    pub sketch: Sketch,
    pub options: RoughOptions,
}

/// Generator that keeps what it was asked to draw. `calls` is shared so a
/// test can keep a counter after handing the generator to a board.
#[derive(Default)]
pub struct RecordingGenerator {
    pub calls: Rc<Cell<usize>>,
}

impl RecordingGenerator {
    fn record(&self, sketch: Sketch, options: &RoughOptions) -> Drawable {
        self.calls.set(self.calls.get() + 1);
        Drawable {
            sketch,
            options: options.clone(),
        }
    }
}

impl Generator for RecordingGenerator {
    type Drawable = Drawable;

    fn line(&self, from: Point, to: Point, options: &RoughOptions) -> Drawable {
        self.record(Sketch::Line { from, to }, options)
    }

    fn rectangle(&self, frame: Frame, options: &RoughOptions) -> Drawable {
        self.record(Sketch::Rectangle(frame), options)
    }

    fn ellipse(&self, frame: EllipseFrame, options: &RoughOptions) -> Drawable {
        self.record(Sketch::Ellipse(frame), options)
    }

    fn linear_path(&self, points: &[Point], options: &RoughOptions) -> Drawable {
        self.record(Sketch::Path(points.to_vec()), options)
    }
}

#[derive(Debug, PartialEq)]
pub enum Paint {
    Clear(String),
    Draw(Sketch),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Paint>,
}

impl Surface<Drawable> for RecordingSurface {
    fn clear(&mut self, background: &str) {
        self.ops.push(Paint::Clear(background.to_string()));
    }

    fn draw(&mut self, drawable: &Drawable) {
        self.ops.push(Paint::Draw(drawable.sketch.clone()));
    }
}

pub type TestBoard = Board<RecordingGenerator, MemoryStorage>;

pub fn board() -> TestBoard {
    board_with(MemoryStorage::new())
}

pub fn board_with(storage: MemoryStorage) -> TestBoard {
    Board::open(RecordingGenerator::default(), storage, &BoardConfig::default())
}

/// A board plus the number of drawables its generator has produced so far.
pub fn counted_board() -> (TestBoard, Rc<Cell<usize>>) {
    let generator = RecordingGenerator::default();
    let calls = Rc::clone(&generator.calls);
    let board = Board::open(generator, MemoryStorage::new(), &BoardConfig::default());
    (board, calls)
}

/// Storage that rejects every call, like a browser with storage disabled.
#[derive(Default)]
pub struct FailingStorage {
    pub attempts: usize,
}

impl Storage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        self.attempts += 1;
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        self.attempts += 1;
        Err(StorageError::Unavailable("disabled".to_string()))
    }
}

pub fn failing_board() -> Board<RecordingGenerator, FailingStorage> {
    Board::open(
        RecordingGenerator::default(),
        FailingStorage::default(),
        &BoardConfig::default(),
    )
}

pub fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn saved(board: &TestBoard) -> Option<String> {
    board.storage().get("elements").unwrap()
}

/// Runs one pointer gesture: down at the first point, a move for every
/// following point, then up.
pub fn gesture<S: Storage>(board: &mut Board<RecordingGenerator, S>, points: &[Point]) {
    let (first, rest) = points.split_first().expect("gesture needs a point");
    let _ = board.pointer_down(*first);
    for point in rest {
        let _ = board.pointer_move(*point);
    }
    let _ = board.pointer_up();
}
