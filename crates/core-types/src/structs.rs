use crate::enums::Breed;
use serde::{Deserialize, Serialize};

/// The three-part score a cat earns in one contest attempt, plus its total.
///
/// `sum` is derived once at construction and never recomputed. Deserializing
/// goes through the same constructor, so a stored `sum` is never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ContestResultParts")]
pub struct ContestResult {
    running: i32,
    jumping: i32,
    purring: i32,
    sum: i32,
}

/// The wire shape accepted when deserializing a `ContestResult`.
#[derive(Deserialize)]
struct ContestResultParts {
    running: i32,
    jumping: i32,
    purring: i32,
}

impl From<ContestResultParts> for ContestResult {
    fn from(parts: ContestResultParts) -> Self {
        Self::new(parts.running, parts.jumping, parts.purring)
    }
}

impl ContestResult {
    /// Builds a result from its sub-scores. Signs and ranges are not checked.
    pub fn new(running: i32, jumping: i32, purring: i32) -> Self {
        // Integer overflow wraps rather than panicking.
        let sum = running.wrapping_add(jumping).wrapping_add(purring);
        Self {
            running,
            jumping,
            purring,
            sum,
        }
    }

    pub fn running(&self) -> i32 {
        self.running
    }

    pub fn jumping(&self) -> i32 {
        self.jumping
    }

    pub fn purring(&self) -> i32 {
        self.purring
    }

    pub fn sum(&self) -> i32 {
        self.sum
    }
}

/// Anything that can be entered into a contest.
///
/// The analyzer only ever reads a contestant's breed and its result, so any
/// caller-owned record can take part by implementing this trait.
pub trait Contestant {
    fn breed(&self) -> Breed;

    /// `None` until the contestant has competed.
    fn contest_result(&self) -> Option<&ContestResult>;
}

/// A cat entered into the contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub name: String,
    pub breed: Breed,
    #[serde(default)]
    pub contest_result: Option<ContestResult>,
}

impl Cat {
    /// Creates a cat that has not competed yet.
    pub fn new(name: impl Into<String>, breed: Breed) -> Self {
        Self {
            name: name.into(),
            breed,
            contest_result: None,
        }
    }

    /// Creates a cat that already holds a result.
    pub fn with_result(name: impl Into<String>, breed: Breed, result: ContestResult) -> Self {
        Self {
            name: name.into(),
            breed,
            contest_result: Some(result),
        }
    }

    pub fn has_competed(&self) -> bool {
        self.contest_result.is_some()
    }
}

impl Contestant for Cat {
    fn breed(&self) -> Breed {
        self.breed
    }

    fn contest_result(&self) -> Option<&ContestResult> {
        self.contest_result.as_ref()
    }
}
