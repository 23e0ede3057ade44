use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Partition of the catalog used by the listing filter.
///
/// `All` is a sentinel: it matches every post and no post is ever tagged with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Tutorial,
    Security,
    Programming,
    Ethics,
    DevOps,
}

impl Category {
    /// The fixed set in the order the filter controls are rendered.
    pub const ALL_CATEGORIES: [Category; 6] = [
        Category::All,
        Category::Tutorial,
        Category::Security,
        Category::Programming,
        Category::Ethics,
        Category::DevOps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Tutorial => "Tutorial",
            Category::Security => "Security",
            Category::Programming => "Programming",
            Category::Ethics => "Ethics",
            Category::DevOps => "DevOps",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        Category::ALL_CATEGORIES
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("{s} is not a known blog category."))
    }

    /// Whether a post tagged with `post_category` is visible under this selection.
    pub fn matches(&self, post_category: Category) -> bool {
        *self == Category::All || *self == post_category
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
