use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of breeds a cat can be entered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breed {
    Persian,
    Siamese,
    MaineCoon,
    Sphynx,
    BritishShorthair,
    Bengal,
}

impl Breed {
    /// Every breed, in declaration order.
    pub const ALL: [Breed; 6] = [
        Breed::Persian,
        Breed::Siamese,
        Breed::MaineCoon,
        Breed::Sphynx,
        Breed::BritishShorthair,
        Breed::Bengal,
    ];

    /// Returns the human-readable label for the breed.
    pub fn label(&self) -> &'static str {
        match self {
            Breed::Persian => "Persian",
            Breed::Siamese => "Siamese",
            Breed::MaineCoon => "Maine Coon",
            Breed::Sphynx => "Sphynx",
            Breed::BritishShorthair => "British Shorthair",
            Breed::Bengal => "Bengal",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Breed::Persian => "Persian",
            Breed::Siamese => "Siamese",
            Breed::MaineCoon => "MaineCoon",
            Breed::Sphynx => "Sphynx",
            Breed::BritishShorthair => "BritishShorthair",
            Breed::Bengal => "Bengal",
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Breed {
    type Err = CoreError;

    /// Accepts `MaineCoon`, `maine_coon`, `maine-coon` and `Maine Coon` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();

        Breed::ALL
            .into_iter()
            .find(|breed| breed.variant_name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CoreError::InvalidInput("breed".to_string(), s.to_string()))
    }
}
