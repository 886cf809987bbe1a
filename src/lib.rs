//! # lsystem-turtle
//!
//! Deterministic L-System rewriting and 2D turtle interpretation.
//!
//! An axiom is expanded by the grammar engine ([`rewrite`]) and the resulting
//! string is walked by a [`TurtleInterpreter`], producing a [`Drawing`]: an
//! ordered list of line segments and their bounding box, ready to be handed to
//! any rendering backend through [`SegmentSink`].
//!
//! ```
//! use lsystem_turtle::LSystemConfig;
//!
//! let drawing = LSystemConfig::fractal_plant().run().unwrap();
//! assert!(!drawing.is_empty());
//! ```

pub mod config;
pub mod drawing;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod turtle;

pub use config::*;
pub use drawing::*;
pub use error::{LSystemError, Result};
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
