mod blog;
mod health_check;
mod subscriptions;
