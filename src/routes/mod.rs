mod blog;
mod health_check;
mod helpers;
mod subscriptions;

pub use blog::{blog_post, list_posts};
pub use health_check::health_check;
pub use helpers::error_chain_fmt;
pub use subscriptions::subscribe;
