use na::{vector, Vector2};

use crate::{types::Float, LEFT_WALL, RIGHT_WALL};

pub const MASS_WIDTH: Float = 0.30;
pub const MASS_HEIGHT: Float = 0.50;

/// Corners of a rectangular block centered at (x, 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassCorners {
    pub bottom_left: Vector2<Float>,
    pub bottom_right: Vector2<Float>,
    pub top_right: Vector2<Float>,
    pub top_left: Vector2<Float>,
}

impl MassCorners {
    /// Closed polygon, counter-clockwise from the bottom-left corner, with
    /// the first corner repeated at the end.
    pub fn outline(&self) -> [Vector2<Float>; 5] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_right,
            self.top_left,
            self.bottom_left,
        ]
    }

    pub fn left(&self) -> Float {
        self.bottom_left.x
    }

    pub fn right(&self) -> Float {
        self.bottom_right.x
    }

    pub fn center(&self) -> Vector2<Float> {
        (self.bottom_left + self.top_right) / 2.0
    }
}

/// Corners of a mass whose center is at x
pub fn position(x: Float) -> MassCorners {
    let x1 = x - MASS_WIDTH / 2.0;
    let x2 = x + MASS_WIDTH / 2.0;
    let y1 = MASS_HEIGHT / 2.0;
    let y2 = -MASS_HEIGHT / 2.0;

    MassCorners {
        bottom_left: vector![x1, y2],
        bottom_right: vector![x2, y2],
        top_right: vector![x2, y1],
        top_left: vector![x1, y1],
    }
}

/// A spring drawn as a straight segment along y = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub from: Float,
    pub to: Float,
}

impl Spring {
    pub fn length(&self) -> Float {
        self.to - self.from
    }

    pub fn endpoints(&self) -> [Vector2<Float>; 2] {
        [vector![self.from, 0.0], vector![self.to, 0.0]]
    }
}

/// The three springs: left wall to mass 1, mass 1 to mass 2, mass 2 to right
/// wall.
pub fn springs(mass1: &MassCorners, mass2: &MassCorners) -> [Spring; 3] {
    [
        Spring {
            from: LEFT_WALL,
            to: mass1.left(),
        },
        Spring {
            from: mass1.right(),
            to: mass2.left(),
        },
        Spring {
            from: mass2.right(),
            to: RIGHT_WALL,
        },
    ]
}
