use nalgebra::Point2;

use crate::canvas::{Canvas, Color, Projection};
use crate::Float;

/// Fewer points than this and the trail is not drawn.
const TRAIL_MIN_DRAW_POINTS: usize = 3;
const TRAIL_WIDTH: f64 = 2.0;

/// Every position a body has been integrated to, oldest first. Never shrinks.
#[derive(Debug, Default, Clone)]
pub struct Trail {
    nodes: Vec<Point2<Float>>,
}

impl Trail {
    #[inline]
    pub fn add_node(&mut self, pos: Point2<Float>) {
        self.nodes.push(pos);
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn last(&self) -> Option<&Point2<Float>> {
        self.nodes.last()
    }

    #[inline]
    pub fn nodes(&self) -> &[Point2<Float>] {
        &self.nodes
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, projection: &Projection, color: Color) -> bool {    // Returns if anything was drawn
        if self.node_count() < TRAIL_MIN_DRAW_POINTS {
            return false;
        }

        let points: Vec<[f64; 2]> = self.nodes().iter().map(|p| projection.to_screen(p)).collect();
        canvas.polyline(&points, TRAIL_WIDTH, color);
        true
    }
}
