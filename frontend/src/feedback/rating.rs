use serde::{Deserialize, Serialize};

use crate::error::FormError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// How one step of the rating scale is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingOption {
    pub id: u8,
    pub emoji: &'static str,
    /// CSS class carrying the bubble colour.
    pub color: &'static str,
    pub text: &'static str,
}

pub const RATING_OPTIONS: [RatingOption; 5] = [
    RatingOption { id: 1, emoji: "😵", color: "rating-terrible", text: "Terrible" },
    RatingOption { id: 2, emoji: "☹️", color: "rating-bad", text: "Bad" },
    RatingOption { id: 3, emoji: "😐", color: "rating-okay", text: "Okay" },
    RatingOption { id: 4, emoji: "😊", color: "rating-good", text: "Good" },
    RatingOption { id: 5, emoji: "😍", color: "rating-great", text: "Great!" },
];

impl RatingOption {
    pub fn rating(&self) -> Rating {
        Rating(self.id)
    }
}

/// A score on the 1–5 scale. Sent over the wire as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn option(self) -> &'static RatingOption {
        &RATING_OPTIONS[usize::from(self.0 - MIN_RATING)]
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(self) -> u8 {
        (u16::from(self.0) * 100 / u16::from(MAX_RATING)) as u8
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(MAX_RATING)
    }
}

impl TryFrom<u8> for Rating {
    type Error = FormError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(FormError::RatingOutOfRange(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 {
        r.0
    }
}
