use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Serialize;

use crate::catalog::{Catalog, CategorySelection};
use crate::domain::{Category, Post};

use super::error_chain_fmt;

#[derive(serde::Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    category: Category,
}

#[derive(Serialize)]
struct Listing<'a> {
    category: Category,
    categories: &'a [Category],
    featured: Vec<&'a Post>,
    posts: Vec<&'a Post>,
}

#[derive(thiserror::Error)]
pub enum BlogError {
    #[error("No post is published under `{0}`.")]
    PostNotFound(String),
}

impl std::fmt::Debug for BlogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for BlogError {
    fn status_code(&self) -> StatusCode {
        match self {
            BlogError::PostNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[tracing::instrument(
    name = "Listing blog posts",
    skip(query, catalog),
    fields(category = %query.category)
)]
pub async fn list_posts(
    query: web::Query<ListingQuery>,
    catalog: web::Data<Catalog>,
) -> HttpResponse {
    let mut selection = CategorySelection::default();
    selection.select(query.category);

    let listing = Listing {
        category: selection.current(),
        categories: catalog.categories(),
        featured: catalog.featured(),
        posts: selection.visible(&catalog),
    };

    HttpResponse::Ok().json(listing)
}

#[tracing::instrument(name = "Opening a blog post", skip(catalog))]
pub async fn blog_post(
    slug: web::Path<String>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, BlogError> {
    let slug = slug.into_inner();
    let post = catalog
        .find(&slug)
        .ok_or_else(|| BlogError::PostNotFound(slug.clone()))?;

    Ok(HttpResponse::Ok().json(post))
}
