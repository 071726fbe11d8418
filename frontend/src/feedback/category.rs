use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of feedback being reported. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "UI Design Issues")]
    UiDesign,
    #[serde(rename = "Navigation Problems")]
    Navigation,
    #[serde(rename = "Bugs & Errors")]
    Bugs,
    #[serde(rename = "Content Issues")]
    Content,
    #[serde(rename = "Feature Requests")]
    FeatureRequest,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Display order on the page.
    pub const ALL: [Category; 6] = [
        Category::UiDesign,
        Category::Navigation,
        Category::Bugs,
        Category::Content,
        Category::FeatureRequest,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::UiDesign => "UI Design Issues",
            Category::Navigation => "Navigation Problems",
            Category::Bugs => "Bugs & Errors",
            Category::Content => "Content Issues",
            Category::FeatureRequest => "Feature Requests",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
