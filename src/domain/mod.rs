mod category;
mod post;
mod subscriber_email;
mod subscription_request;

pub use category::Category;
pub use post::{Post, Slug};
pub use subscriber_email::SubscriberEmail;
pub use subscription_request::{NEWSLETTER_SUBSCRIPTION, SubscriptionRequest};
