use async_trait::async_trait;

/// A blocking message the user has to dismiss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into(), details: None }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Confirmation and notification capabilities the record view needs from its host.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;

    fn notify(&self, notification: Notification);
}
