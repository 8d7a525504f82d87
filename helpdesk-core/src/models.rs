use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to every newly created request.
pub const STATUS_NEW: &str = "New";
/// Status a request carries while an executor works on it.
pub const STATUS_IN_PROGRESS: &str = "In Progress";
/// The status that triggers the completion-date stamp.
pub const STATUS_COMPLETED: &str = "Completed";
/// Status for requests withdrawn without being worked on.
pub const STATUS_CANCELLED: &str = "Cancelled";

/// A single IT support request (ticket).
///
/// Field names are serialized in camelCase to match the on-disk format of
/// `requests.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Unique sequential identifier, assigned by the repository.
    pub id: i32,

    /// When the request was filed. Never changes after creation.
    pub created_date: DateTime<Utc>,

    /// Person who filed the request.
    pub applicant_name: String,

    /// What the applicant reported.
    pub description: String,

    /// Free-text category label, e.g. "Hardware", "Software", "Network".
    pub category: String,

    /// Lifecycle label. Open-ended: any text is accepted; the `STATUS_*`
    /// constants are hints, not a closed set.
    #[serde(default = "default_status")]
    pub status: String,

    /// Staff member assigned to resolve the request.
    #[serde(default)]
    pub executor_name: String,

    /// Stamped when the status is set to [`STATUS_COMPLETED`]; never cleared
    /// by later transitions.
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,

    /// Executor's note about the resolution.
    #[serde(default)]
    pub executor_comment: String,
}

fn default_status() -> String {
    STATUS_NEW.to_string()
}

impl Request {
    /// Creates a draft request. The repository overwrites `id`,
    /// `created_date`, and `status` when the draft is added.
    pub fn new(applicant_name: String, description: String, category: String) -> Self {
        Self {
            id: 0,
            created_date: Utc::now(),
            applicant_name,
            description,
            category,
            status: STATUS_NEW.to_string(),
            executor_name: String::new(),
            completed_date: None,
            executor_comment: String::new(),
        }
    }
}
