use anyhow::Result;
use chrono::Utc;

use crate::models::{Request, STATUS_COMPLETED};
use crate::repository::RequestRepository;
use crate::storage::Storage;

/// Thin orchestration layer over the repository.
///
/// Holds the one domain rule: a request moved to "Completed" gets its
/// completion date stamped. Everything else is a pass-through.
pub struct RequestService {
    repository: RequestRepository,
}

impl RequestService {
    pub fn new(repository: RequestRepository) -> Self {
        Self { repository }
    }

    /// Creates a request from the three applicant-supplied fields and
    /// returns the assigned id.
    pub fn create_request(&mut self, applicant_name: &str, description: &str, category: &str) -> i32 {
        let request = Request::new(
            applicant_name.to_string(),
            description.to_string(),
            category.to_string(),
        );
        self.repository.add(request)
    }

    /// Sets status, executor, and comment on the request with the given id.
    /// When the new status is exactly "Completed" the completion date is
    /// stamped with the current time; moving away from "Completed" later
    /// does not clear it. Returns false when the id is unknown, leaving
    /// everything untouched.
    pub fn update_request_status(
        &mut self,
        id: i32,
        status: &str,
        executor_name: &str,
        comment: &str,
    ) -> bool {
        let Some(existing) = self.repository.get_by_id(id) else {
            return false;
        };

        let mut updated = existing.clone();
        updated.status = status.to_string();
        updated.executor_name = executor_name.to_string();
        updated.executor_comment = comment.to_string();
        if status == STATUS_COMPLETED {
            updated.completed_date = Some(Utc::now());
        }

        self.repository.update(&updated)
    }

    /// All requests in creation order.
    pub fn all_requests(&self) -> &[Request] {
        self.repository.all()
    }

    /// Requests whose applicant name contains the fragment, ignoring case.
    pub fn search_by_applicant(&self, name_part: &str) -> Vec<&Request> {
        self.repository.find_by_applicant(name_part)
    }

    /// Requests with the given status, compared ignoring case.
    pub fn filter_by_status(&self, status: &str) -> Vec<&Request> {
        self.repository.find_by_status(status)
    }

    pub fn load_from(&mut self, storage: &Storage) -> Result<()> {
        self.repository.load_from(storage)
    }

    pub fn save_to(&self, storage: &Storage) -> Result<()> {
        self.repository.save_to(storage)
    }
}
