//! World <-> display coordinate mapping
//!
//! The plane is drawn on a fixed-size surface. World x grows to the right and
//! world y grows upward, so the vertical axis is flipped on the way to pixels.
//! The surface width is the scale reference for radii so circles stay round.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAJOR_GRID_STEP, PLANE_HEIGHT, PLANE_WIDTH};
use crate::error::{GameError, Result};

/// Rectangular extent of the visible plane (world units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldBounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl WorldBounds {
    /// Checked constructor; rejects empty or inverted extents
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        let valid = max_x > min_x && max_y > min_y;
        if !valid {
            return Err(GameError::DegenerateWorldBounds {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Square extent `[-half, half]` on both axes. `half` must be positive.
    pub(crate) const fn square(half: f64) -> Self {
        Self {
            min_x: -half,
            max_x: half,
            min_y: -half,
            max_y: half,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, point: DVec2) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Constant x, spans the full surface height
    Vertical,
    /// Constant y, spans the full surface width
    Horizontal,
}

/// A grid line of the plane, in display space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    pub orientation: Orientation,
    /// World coordinate the line sits on (also its label)
    pub value: i32,
    /// Display x for vertical lines, display y for horizontal ones
    pub position: f64,
    /// Major lines are drawn heavier and carry a label
    pub major: bool,
}

/// Maps a world rectangle onto a display surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    bounds: WorldBounds,
    surface: Surface,
}

impl Projector {
    pub fn new(bounds: WorldBounds, surface: Surface) -> Self {
        Self { bounds, surface }
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// World point to display point
    pub fn to_display(&self, point: DVec2) -> DVec2 {
        let b = &self.bounds;
        let x = (point.x - b.min_x) / b.width() * self.surface.width;
        let y = self.surface.height - (point.y - b.min_y) / b.height() * self.surface.height;
        DVec2::new(x, y)
    }

    /// Display point back to world point
    pub fn to_world(&self, display: DVec2) -> DVec2 {
        let b = &self.bounds;
        let x = display.x / self.surface.width * b.width() + b.min_x;
        let y = (self.surface.height - display.y) / self.surface.height * b.height() + b.min_y;
        DVec2::new(x, y)
    }

    /// World radius to display radius (scaled by width)
    pub fn radius_to_display(&self, radius: f64) -> f64 {
        radius / self.bounds.width() * self.surface.width
    }

    /// Display position of the world origin, where the axes cross
    pub fn origin(&self) -> DVec2 {
        self.to_display(DVec2::ZERO)
    }

    /// Grid lines at every integer coordinate inside the bounds.
    ///
    /// Multiples of [`MAJOR_GRID_STEP`] are major lines; the zero lines are
    /// left out since the axes are drawn on top of them.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let b = &self.bounds;
        let mut lines = Vec::new();

        for value in integer_span(b.min_x, b.max_x) {
            if value % MAJOR_GRID_STEP != 0 {
                let position = self.to_display(DVec2::new(value as f64, 0.0)).x;
                lines.push(GridLine {
                    orientation: Orientation::Vertical,
                    value,
                    position,
                    major: false,
                });
            }
        }
        for value in integer_span(b.min_y, b.max_y) {
            if value % MAJOR_GRID_STEP != 0 {
                let position = self.to_display(DVec2::new(0.0, value as f64)).y;
                lines.push(GridLine {
                    orientation: Orientation::Horizontal,
                    value,
                    position,
                    major: false,
                });
            }
        }

        for value in major_span(b.min_x, b.max_x).filter(|v| *v != 0) {
            let position = self.to_display(DVec2::new(value as f64, 0.0)).x;
            lines.push(GridLine {
                orientation: Orientation::Vertical,
                value,
                position,
                major: true,
            });
        }
        for value in major_span(b.min_y, b.max_y).filter(|v| *v != 0) {
            let position = self.to_display(DVec2::new(0.0, value as f64)).y;
            lines.push(GridLine {
                orientation: Orientation::Horizontal,
                value,
                position,
                major: true,
            });
        }

        lines
    }
}

fn integer_span(min: f64, max: f64) -> std::ops::RangeInclusive<i32> {
    (min.floor() as i32)..=(max.floor() as i32)
}

fn major_span(min: f64, max: f64) -> impl Iterator<Item = i32> {
    let step = MAJOR_GRID_STEP as f64;
    let first = (min / step).ceil() * step;
    integer_span(first, max).step_by(MAJOR_GRID_STEP as usize)
}
