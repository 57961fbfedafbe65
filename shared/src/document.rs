use crate::format::ShapeRecord;
use crate::shape::Shape;

/// Ordered shape list. The last shape is the most recent one and is painted on top.
#[derive(Clone, Debug)]
pub struct Document<D> {
    shapes: Vec<Shape<D>>,
}

impl<D> Default for Document<D> {
    fn default() -> Self {
        Self { shapes: Vec::new() }
    }
}

impl<D> Document<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape<D>) {
        self.shapes.push(shape);
    }

    /// Swaps the last shape for `shape`. Returns false on an empty document.
    pub fn replace_last(&mut self, shape: Shape<D>) -> bool {
        match self.shapes.last_mut() {
            Some(last) => {
                *last = shape;
                true
            }
            None => false,
        }
    }

    pub fn pop(&mut self) -> Option<Shape<D>> {
        self.shapes.pop()
    }

    pub fn replace_all(&mut self, shapes: Vec<Shape<D>>) {
        self.shapes = shapes;
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn last(&self) -> Option<&Shape<D>> {
        self.shapes.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape<D>> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn records(&self) -> Vec<ShapeRecord> {
        self.shapes.iter().map(ShapeRecord::from_shape).collect()
    }
}
