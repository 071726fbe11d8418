use serde::{Deserialize, Serialize};

use super::category::Category;
use super::rating::Rating;
use super::submit::SubmitOutcome;
use crate::error::FormError;

/// Live state of the feedback form, bound field-by-field to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub category: Option<Category>,
    pub description: String,
    pub rating: Rating,
}

/// Body of `POST /api/feedback/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub name: String,
    pub email: String,
    pub category: Category,
    pub description: String,
    pub rating: Rating,
}

/// What the page should tell the user after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Transient banner, hidden again after the configured duration.
    Toast(String),
    /// Blocking browser alert.
    Alert(String),
}

impl FeedbackForm {
    pub fn is_selected(&self, category: Category) -> bool {
        self.category == Some(category)
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn select_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    /// Builds the request body, or lists the required fields still empty.
    /// Text is not trimmed: whitespace counts as filled in.
    pub fn validate(&self) -> Result<FeedbackPayload, FormError> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.description.is_empty() {
            missing.push("description");
        }

        match self.category {
            Some(category) if missing.is_empty() => Ok(FeedbackPayload {
                name: self.name.clone(),
                email: self.email.clone(),
                category,
                description: self.description.clone(),
                rating: self.rating,
            }),
            _ => Err(FormError::MissingFields(missing)),
        }
    }

    pub fn reset(&mut self) {
        *self = FeedbackForm::default();
    }

    /// Folds a finished submission into the form. Accepted clears every
    /// field; rejected and failed attempts leave the input untouched.
    pub fn apply(&mut self, outcome: SubmitOutcome) -> Option<Notice> {
        match outcome {
            SubmitOutcome::Accepted(message) => {
                self.reset();
                Some(Notice::Toast(message))
            }
            SubmitOutcome::Rejected(message) => Some(Notice::Alert(message)),
            SubmitOutcome::Failed => None,
        }
    }
}
