use crate::catalog::model::FilterState;
use itertools::Itertools;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Subscription {
    pub token: Uuid,
    pub email: String,
    pub subscribed: bool,
}

/// Local signup state for the newsletter form. The address never leaves the
/// process; subscribing only flips the flag and mints a token.
#[derive(Debug, Default)]
pub struct Signup {
    subscription: Option<Subscription>,
}

impl Signup {
    pub fn subscribe(&mut self, email: &str) -> Result<&Subscription, SubscribeError> {
        if email.trim().is_empty() {
            return Err(SubscribeError::EmptyEmail);
        }

        let subscription = Subscription {
            token: Uuid::new_v4(),
            email: email.to_string(),
            subscribed: true,
        };

        info!("Newsletter subscription {} activated", subscription.token);

        Ok(self.subscription.insert(subscription))
    }

    pub fn unsubscribe(&mut self) {
        self.subscription = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|subscription| subscription.subscribed)
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }
}

#[derive(Debug)]
pub enum SubscribeError {
    EmptyEmail,
}

/// Human-readable summary of what the visitor would subscribe to, e.g.
/// "Konzert, Party in Stuttgart".
pub fn filter_description(filters: &FilterState) -> String {
    if filters.categories.is_empty() {
        return format!("alle Events in {}", filters.city);
    }

    format!(
        "{} in {}",
        filters
            .categories
            .iter()
            .map(|category| category.label())
            .join(", "),
        filters.city
    )
}
