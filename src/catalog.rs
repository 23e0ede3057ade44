//! The static post catalog and the listing filters derived from it.

use std::collections::HashSet;

use crate::domain::{Category, Post};

static EMBEDDED_POSTS: &str = include_str!("../content/posts.json");

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to decode the embedded catalog.")]
    Decode(#[from] serde_json::Error),
    #[error("Slug `{0}` is used by more than one post.")]
    DuplicateSlug(String),
    #[error("Post `{0}` is tagged with the `All` sentinel instead of a real category.")]
    SentinelCategory(String),
}

/// Ordered, immutable list of posts. Slugs are unique and every post carries a real category.
#[derive(Debug, Clone)]
pub struct Catalog {
    posts: Vec<Post>,
    featured: Vec<usize>,
}

impl Catalog {
    pub fn new(posts: Vec<Post>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if post.category == Category::All {
                return Err(CatalogError::SentinelCategory(post.slug.as_ref().to_owned()));
            }
            if !seen.insert(post.slug.as_ref()) {
                return Err(CatalogError::DuplicateSlug(post.slug.as_ref().to_owned()));
            }
        }

        let featured = posts
            .iter()
            .enumerate()
            .filter(|(_, post)| post.featured)
            .map(|(index, _)| index)
            .collect();

        Ok(Self { posts, featured })
    }

    /// The catalog compiled into the binary from `content/posts.json`.
    pub fn embedded() -> Result<Self, CatalogError> {
        let posts: Vec<Post> = serde_json::from_str(EMBEDDED_POSTS)?;
        Self::new(posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL_CATEGORIES
    }

    /// Posts visible under `category`, in catalog order.
    pub fn filter(&self, category: Category) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| category.matches(post.category))
            .collect()
    }

    pub fn featured(&self) -> Vec<&Post> {
        self.featured.iter().map(|&index| &self.posts[index]).collect()
    }

    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug.as_ref() == slug)
    }
}

/// The currently selected category of one listing view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelection {
    current: Category,
}

impl CategorySelection {
    pub fn current(&self) -> Category {
        self.current
    }

    pub fn select(&mut self, category: Category) {
        tracing::debug!(%category, "Blog category selected");
        self.current = category;
    }

    pub fn visible<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Post> {
        catalog.filter(self.current)
    }
}
