//! Turtle state and the commands that drive it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Operations that the 2D turtle understands.
///
/// This set is closed: any symbol whose command is not one of these is never drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum OperationKind {
    /// Step one unit along the current heading, emitting a segment.
    Forward,
    /// Rotate the heading by `angle` radians (counter-clockwise when positive).
    Turn { angle: f32 },
    /// Save position and heading onto the stack (`[`).
    Push,
    /// Restore the most recently pushed position and heading (`]`).
    Pop,
}

/// A drawing command attached to an alphabet symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Human-readable label, used only for tracing (e.g. `"turn left 25d"`).
    pub description: String,

    #[serde(flatten)]
    pub operation: OperationKind,
}

impl Command {
    pub fn new(description: impl Into<String>, operation: OperationKind) -> Self {
        Self {
            description: description.into(),
            operation,
        }
    }

    pub fn forward() -> Self {
        Self::new("forward", OperationKind::Forward)
    }

    /// A turn by `angle` radians, described in whole degrees.
    pub fn turn(angle: f32) -> Self {
        let side = if angle >= 0.0 { "left" } else { "right" };
        let degrees = angle.abs().to_degrees().round();
        Self::new(
            format!("turn {side} {degrees}d"),
            OperationKind::Turn { angle },
        )
    }

    pub fn push() -> Self {
        Self::new("push", OperationKind::Push)
    }

    pub fn pop() -> Self {
        Self::new("pop", OperationKind::Pop)
    }
}

/// The state of the drawing turtle.
///
/// The turtle starts at the origin facing `+Y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: Vec2,

    /// Current direction of travel. Kept at unit length by construction.
    pub heading: Vec2,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: Vec2::Y,
        }
    }
}

impl TurtleState {
    /// Rotates the heading by `angle` radians.
    ///
    /// `x' = cos(a)x - sin(a)y`, `y' = sin(a)x + cos(a)y`.
    pub fn turn(&mut self, angle: f32) {
        self.heading = Vec2::from_angle(angle).rotate(self.heading);
    }

    /// Moves `length` units along the normalized heading and returns the new position.
    pub fn advance(&mut self, length: f32) -> Vec2 {
        self.position += self.heading.normalize_or_zero() * length;
        self.position
    }
}
