//! Serializable description of a complete L-System run.

use crate::drawing::Drawing;
use crate::error::{LSystemError, Result};
use crate::grammar::{Alphabet, Grammar, RuleSet, Symbol, rewrite, rewrite_bounded};
use crate::interpreter::{InterpreterConfig, TurtleInterpreter};
use crate::turtle::OperationKind;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Everything needed to rewrite an axiom and draw the result.
///
/// Loaded from JSON, e.g.:
///
/// ```json
/// {
///   "axiom": "X",
///   "generations": 6,
///   "grammar": { "variables": ["X", "F"], "constants": ["+", "-", "[", "]"] },
///   "rules": [
///     { "input": "X", "output": "F+[[X]-X]-F[-FX]+X" },
///     { "input": "F", "output": "FF" }
///   ],
///   "alphabet": [
///     { "key": "F", "command": { "description": "forward", "operation": "forward" } },
///     { "key": "+", "command": { "description": "turn left 25d", "operation": "turn", "angle": 0.436332 } },
///     { "key": "X" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystemConfig {
    pub axiom: String,

    #[serde(default)]
    pub generations: usize,

    pub grammar: Grammar,

    pub rules: RuleSet,

    pub alphabet: Alphabet,

    /// Abort rewriting once the string would exceed this many characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansion_len: Option<usize>,

    #[serde(default)]
    pub interpreter: InterpreterConfig,
}

impl LSystemConfig {
    /// The fractal plant: `X -> F+[[X]-X]-F[-FX]+X`, `F -> FF`, 25 degree
    /// turns, axiom `X`, 6 generations.
    pub fn fractal_plant() -> Self {
        let angle = 25.0f32.to_radians();
        Self {
            axiom: "X".to_owned(),
            generations: 6,
            grammar: Grammar::new(['X', 'F'], ['+', '-', '[', ']']),
            rules: RuleSet::new()
                .with_rule('X', "F+[[X]-X]-F[-FX]+X")
                .with_rule('F', "FF"),
            alphabet: Alphabet::standard(angle).with_symbol(Symbol::non_terminal('X')),
            max_expansion_len: None,
            interpreter: InterpreterConfig::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the config for values that cannot produce a sensible drawing.
    pub fn validate(&self) -> Result<()> {
        if self.axiom.is_empty() {
            return Err(LSystemError::EmptyAxiom);
        }
        self.grammar.validate()?;

        for symbol in self.alphabet.symbols() {
            if let Some(command) = &symbol.command
                && let OperationKind::Turn { angle } = command.operation
                && !angle.is_finite()
            {
                return Err(LSystemError::InvalidAngle { key: symbol.key });
            }
        }

        let step = self.interpreter.step_length;
        if !step.is_finite() || step <= 0.0 {
            return Err(LSystemError::InvalidStepLength(step));
        }
        Ok(())
    }

    /// Expands the axiom for the configured number of generations.
    pub fn expand(&self) -> Result<String> {
        match self.max_expansion_len {
            Some(limit) => rewrite_bounded(
                &self.grammar,
                &self.rules,
                &self.axiom,
                self.generations,
                limit,
            ),
            None => Ok(rewrite(
                &self.grammar,
                &self.rules,
                &self.axiom,
                self.generations,
            )),
        }
    }

    /// Validates, rewrites, and interprets in one pass.
    pub fn run(&self) -> Result<Drawing> {
        self.validate()?;
        let expanded = self.expand()?;
        TurtleInterpreter::new(self.interpreter.clone()).interpret(&expanded, &self.alphabet)
    }
}
