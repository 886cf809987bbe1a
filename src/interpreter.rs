//! Interpreter that walks a rewritten L-System string and draws it with a 2D turtle.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with an
//! [`InterpreterConfig`], then call [`TurtleInterpreter::interpret`] with the
//! expanded string and the [`Alphabet`] that gives each character its meaning.

use crate::drawing::{Drawing, Segment};
use crate::error::{LSystemError, Result};
use crate::grammar::Alphabet;
use crate::turtle::{Command, OperationKind, TurtleState};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// What to do when `Pop` is reached with nothing on the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPop {
    /// Leave the turtle where it is and keep going.
    #[default]
    Ignore,
    /// Stop with [`LSystemError::UnmatchedPop`].
    Error,
}

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Distance covered by one `Forward`. Default: 1.0.
    pub step_length: f32,
    /// Maximum stack depth for push/pop operations. `None` (the default) means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stack_depth: Option<usize>,
    /// Policy for a `Pop` on an empty stack.
    pub unmatched_pop: UnmatchedPop,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            step_length: 1.0,
            max_stack_depth: None,
            unmatched_pop: UnmatchedPop::Ignore,
        }
    }
}

/// Interprets a rewritten string to build a [`Drawing`].
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: InterpreterConfig,
}

impl TurtleInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Interprets `input` and returns the resulting [`Drawing`].
    ///
    /// The turtle starts at the origin facing `+Y`. Characters with no symbol,
    /// or whose symbol has no command, are skipped without touching the turtle.
    ///
    /// # Push / Pop
    ///
    /// `[` saves position and heading onto a stack and `]` restores them
    /// exactly. Nesting is unbounded unless `max_stack_depth` is set, in which
    /// case a push beyond it fails with [`LSystemError::StackOverflow`]. An
    /// unmatched `]` is handled according to [`InterpreterConfig::unmatched_pop`].
    pub fn interpret(&self, input: &str, alphabet: &Alphabet) -> Result<Drawing> {
        self.interpret_with(input, alphabet, |_| {})
    }

    /// Like [`interpret`](Self::interpret), calling `observer` with every
    /// resolved command before it is applied.
    pub fn interpret_with<F>(
        &self,
        input: &str,
        alphabet: &Alphabet,
        mut observer: F,
    ) -> Result<Drawing>
    where
        F: FnMut(&Command),
    {
        let mut drawing = Drawing::new();
        let mut turtle = TurtleState::default();
        let mut stack: Vec<TurtleState> = Vec::new();

        for (index, c) in input.chars().enumerate() {
            let Some(command) = alphabet.command(c) else {
                continue;
            };

            trace!("{index}: '{c}' {}", command.description);
            observer(command);

            match command.operation {
                OperationKind::Forward => {
                    let start = turtle.position;
                    let end = turtle.advance(self.config.step_length);
                    drawing.add_segment(Segment::new(start, end));
                }
                OperationKind::Turn { angle } => turtle.turn(angle),
                OperationKind::Push => {
                    if let Some(max_depth) = self.config.max_stack_depth
                        && stack.len() >= max_depth
                    {
                        return Err(LSystemError::StackOverflow { index, max_depth });
                    }
                    stack.push(turtle);
                }
                OperationKind::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => match self.config.unmatched_pop {
                        UnmatchedPop::Ignore => warn!("ignoring unmatched pop at index {index}"),
                        UnmatchedPop::Error => return Err(LSystemError::UnmatchedPop { index }),
                    },
                },
            }
        }

        debug!(
            "interpreted {} characters into {} segments (bounds {:?} to {:?})",
            input.chars().count(),
            drawing.len(),
            drawing.bounds.min,
            drawing.bounds.max
        );
        Ok(drawing)
    }
}

/// Builds the diagnostic trace of every command in `input`: each command's
/// description followed by `", "`, in scan order.
pub fn describe(input: &str, alphabet: &Alphabet) -> String {
    let mut description = String::new();
    for command in input.chars().filter_map(|c| alphabet.command(c)) {
        description.push_str(&command.description);
        description.push_str(", ");
    }
    description
}
