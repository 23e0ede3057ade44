use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(s: String) -> Result<Self, String> {
        let is_valid = !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !s.starts_with('-')
            && !s.ends_with('-');

        if !is_valid {
            return Err(format!("{s} is not a valid post slug."));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::parse(value)
    }
}

/// One article of the static catalog. `date` and `read_time` are display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub category: Category,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub image: String,
    pub featured: bool,
    pub slug: Slug,
}

impl Post {
    /// Path of the per-post detail view.
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug.as_ref())
    }
}
