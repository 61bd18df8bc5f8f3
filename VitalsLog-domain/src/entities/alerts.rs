use serde::Serialize;

/// Outcome of alert evaluation
///
/// `has_alert` is derived from `messages` at construction so the two can
/// never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResult {
    has_alert: bool,
    messages: Vec<String>,
}

impl AlertResult {
    pub fn from_messages(messages: Vec<String>) -> Self {
        Self {
            has_alert: !messages.is_empty(),
            messages,
        }
    }

    pub fn has_alert(&self) -> bool {
        self.has_alert
    }

    /// Messages in evaluation order: heart rate, SpO2, temperature
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
