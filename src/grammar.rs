//! Alphabet, production rules, and the generation-synchronous rewriting engine.
//!
//! A [`Grammar`] classifies characters as variables (rewritable) or constants
//! (terminals). A [`RuleSet`] holds the productions. [`rewrite`] expands an
//! axiom by replacing every eligible character simultaneously, once per
//! generation. The [`Alphabet`] maps characters to turtle [`Command`]s for the
//! interpreter.

use crate::error::{LSystemError, Result};
use crate::turtle::Command;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::convert::Infallible;

/// Classification of characters into variables and constants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grammar {
    /// Characters that productions may rewrite.
    pub variables: BTreeSet<char>,
    /// Characters that always pass through unchanged.
    pub constants: BTreeSet<char>,
}

impl Grammar {
    pub fn new(
        variables: impl IntoIterator<Item = char>,
        constants: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            variables: variables.into_iter().collect(),
            constants: constants.into_iter().collect(),
        }
    }

    pub fn is_variable(&self, c: char) -> bool {
        self.variables.contains(&c)
    }

    /// Checks that no character is both a variable and a constant.
    ///
    /// [`rewrite`] only consults `variables` and never calls this.
    pub fn validate(&self) -> Result<()> {
        match self.variables.intersection(&self.constants).next() {
            Some(&c) => Err(LSystemError::OverlappingClasses(c)),
            None => Ok(()),
        }
    }
}

/// A single production `input -> output`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRule {
    pub input: char,
    pub output: String,
}

impl ProductionRule {
    pub fn new(input: char, output: impl Into<String>) -> Self {
        Self {
            input,
            output: output.into(),
        }
    }
}

/// Ordered production table. When two rules share an input, the first one wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<ProductionRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule (builder pattern).
    pub fn with_rule(mut self, input: char, output: impl Into<String>) -> Self {
        self.push(ProductionRule::new(input, output));
        self
    }

    pub fn push(&mut self, rule: ProductionRule) {
        self.rules.push(rule);
    }

    /// Returns the first rule whose input is `c`.
    pub fn find(&self, c: char) -> Option<&ProductionRule> {
        self.rules.iter().find(|r| r.input == c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolves every variable to the output of its first matching rule.
    fn productions<'a>(&'a self, grammar: &Grammar) -> HashMap<char, &'a str> {
        let mut table = HashMap::new();
        for rule in &self.rules {
            if grammar.is_variable(rule.input) {
                table.entry(rule.input).or_insert(rule.output.as_str());
            }
        }
        table
    }
}

impl FromIterator<ProductionRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = ProductionRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Expands `axiom` through `generations` rounds of simultaneous substitution.
///
/// A character is replaced only when it is a variable of `grammar` and a rule
/// exists for it; everything else is copied literally. Output produced during a
/// generation is not rescanned until the next one. Zero generations returns the
/// axiom unchanged.
pub fn rewrite(grammar: &Grammar, rules: &RuleSet, axiom: &str, generations: usize) -> String {
    let unbounded = expand(grammar, rules, axiom, generations, |_, _| {
        Ok::<(), Infallible>(())
    });
    match unbounded {
        Ok(s) => s,
        Err(never) => match never {},
    }
}

/// Same as [`rewrite`], but fails with [`LSystemError::ExpansionLimit`] as soon
/// as the string would exceed `max_len` characters.
pub fn rewrite_bounded(
    grammar: &Grammar,
    rules: &RuleSet,
    axiom: &str,
    generations: usize,
    max_len: usize,
) -> Result<String> {
    if axiom.chars().count() > max_len {
        return Err(LSystemError::ExpansionLimit {
            generation: 0,
            limit: max_len,
        });
    }
    expand(grammar, rules, axiom, generations, |generation, len| {
        if len > max_len {
            Err(LSystemError::ExpansionLimit {
                generation,
                limit: max_len,
            })
        } else {
            Ok(())
        }
    })
}

/// Runs the substitution loop, calling `check(generation, len)` after every
/// character appended to the string under construction.
fn expand<E, F>(
    grammar: &Grammar,
    rules: &RuleSet,
    axiom: &str,
    generations: usize,
    mut check: F,
) -> std::result::Result<String, E>
where
    F: FnMut(usize, usize) -> std::result::Result<(), E>,
{
    let productions = rules.productions(grammar);
    let mut current = axiom.to_owned();

    for generation in 1..=generations {
        let mut next = String::with_capacity(current.len() * 2);
        let mut len = 0usize;

        for c in current.chars() {
            match productions.get(&c) {
                Some(output) => {
                    next.push_str(output);
                    len += output.chars().count();
                }
                None => {
                    next.push(c);
                    len += 1;
                }
            }
            check(generation, len)?;
        }

        debug!("generation {generation}: {len} characters");
        current = next;
    }

    Ok(current)
}

/// A character of the alphabet and, optionally, the command it draws.
///
/// Symbols without a command are pure non-terminals: they take part in
/// rewriting and are skipped by the interpreter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub key: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

impl Symbol {
    pub fn new(key: char, command: Command) -> Self {
        Self {
            key,
            command: Some(command),
        }
    }

    pub fn non_terminal(key: char) -> Self {
        Self { key, command: None }
    }
}

/// Lookup table from character to [`Symbol`]. Inserting an existing key replaces it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: HashMap<char, Symbol>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the conventional turtle symbols: `F` forward, `+`/`-` turn
    /// by `±angle` radians, `[` push, `]` pop.
    pub fn standard(angle: f32) -> Self {
        Self::new()
            .with_symbol(Symbol::new('F', Command::forward()))
            .with_symbol(Symbol::new('+', Command::turn(angle)))
            .with_symbol(Symbol::new('-', Command::turn(-angle)))
            .with_symbol(Symbol::new('[', Command::push()))
            .with_symbol(Symbol::new(']', Command::pop()))
    }

    /// Adds a symbol (builder pattern).
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.insert(symbol);
        self
    }

    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.key, symbol);
    }

    pub fn get(&self, key: char) -> Option<&Symbol> {
        self.symbols.get(&key)
    }

    /// Resolves `key` straight to its command, if it has one.
    pub fn command(&self, key: char) -> Option<&Command> {
        self.get(key).and_then(|s| s.command.as_ref())
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<Vec<Symbol>> for Alphabet {
    fn from(symbols: Vec<Symbol>) -> Self {
        symbols.into_iter().collect()
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        let mut symbols: Vec<Symbol> = alphabet.symbols.into_values().collect();
        symbols.sort_by_key(|s| s.key);
        symbols
    }
}

impl FromIterator<Symbol> for Alphabet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut alphabet = Self::new();
        for symbol in iter {
            alphabet.insert(symbol);
        }
        alphabet
    }
}

/// Returns the symbol registered for `key`, if any.
pub fn lookup_symbol(alphabet: &Alphabet, key: char) -> Option<&Symbol> {
    alphabet.get(key)
}
