use serde::Serialize;

use crate::entities::status::EntryStatuses;
use crate::entities::vitals::HealthEntry;

/// What the dashboard shows for one user at one moment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub greeting: &'static str,
    /// Newest entry logged on the current day, if any
    pub today: Option<HealthEntry>,
    pub statuses: Option<EntryStatuses>,
    /// Alerts re-evaluated from today's entry
    pub alert_messages: Vec<String>,
}
