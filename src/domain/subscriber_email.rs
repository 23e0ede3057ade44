use std::fmt::Display;

use validator::ValidateEmail;

/// An address that passed the same check an `<input type="email">` performs:
/// surrounding whitespace stripped, then a syntactic email check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Subscriber email is required.".into());
        }
        if !trimmed.validate_email() {
            return Err(format!("{trimmed} is not a valid subscriber email."));
        };
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
