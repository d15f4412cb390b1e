//! Birth/survival rules.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A life-like birth/survival rule over neighbor counts 0..=8.
///
/// Stored as two bitmasks: bit `n` of `birth` is set when a dead cell with
/// `n` live neighbors is born, bit `n` of `survive` when a live cell with `n`
/// live neighbors stays alive. Every other case is a death or stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rule {
    birth: u16,
    survive: u16,
}

impl Rule {
    /// Conway's Game of Life (B3/S23).
    pub const LIFE: Rule = Rule::from_masks(1 << 3, (1 << 2) | (1 << 3));

    const fn from_masks(birth: u16, survive: u16) -> Self {
        Self { birth, survive }
    }

    /// Builds a rule from neighbor counts. Counts above 8 are ignored.
    pub fn new(birth: &[u8], survive: &[u8]) -> Self {
        let mask = |counts: &[u8]| {
            counts
                .iter()
                .filter(|&&n| n <= 8)
                .fold(0u16, |m, &n| m | (1 << n))
        };
        Self::from_masks(mask(birth), mask(survive))
    }

    /// Returns true if a dead cell with `neighbors` live neighbors is born.
    pub fn births(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.birth & (1 << neighbors) != 0
    }

    /// Returns true if a live cell with `neighbors` live neighbors survives.
    pub fn survives(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.survive & (1 << neighbors) != 0
    }

    /// Next state of a cell given its current state and live neighbor count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survives(neighbors)
        } else {
            self.births(neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::LIFE
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in 0..=8u8 {
            if self.births(n) {
                write!(f, "{n}")?;
            }
        }
        f.write_str("/S")?;
        for n in 0..=8u8 {
            if self.survives(n) {
                write!(f, "{n}")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a rule string such as `"B3/S23"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rule {input:?}: expected B<digits>/S<digits> with digits 0-8")]
pub struct RuleParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RuleParseError {
            input: s.to_string(),
        };
        let (b, s_part) = s.trim().split_once('/').ok_or_else(err)?;
        let birth = b
            .strip_prefix('B')
            .or_else(|| b.strip_prefix('b'))
            .ok_or_else(err)?;
        let survive = s_part
            .strip_prefix('S')
            .or_else(|| s_part.strip_prefix('s'))
            .ok_or_else(err)?;

        let digits = |part: &str| -> Result<Vec<u8>, RuleParseError> {
            part.chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if d <= 8 => Ok(d as u8),
                    _ => Err(err()),
                })
                .collect()
        };

        Ok(Rule::new(&digits(birth)?, &digits(survive)?))
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}
