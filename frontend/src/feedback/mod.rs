//! Browser-independent model of the feedback page.

mod category;
mod form;
mod rating;
mod submit;
mod toast;

pub use category::Category;
pub use form::{FeedbackForm, FeedbackPayload, Notice};
pub use rating::RATING_OPTIONS;
pub use submit::{submit_feedback, FeedbackTransport, ServerReply};
pub use toast::Toast;
