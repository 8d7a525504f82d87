use anyhow::{Context, Result};
use chrono::Utc;

use crate::models::{Request, STATUS_NEW};
use crate::storage::Storage;

/// Sole owner of the in-memory request list and the id counter.
///
/// Passed by reference to whoever needs it; there is no global instance.
pub struct RequestRepository {
    requests: Vec<Request>,
    next_id: i32,
}

impl RequestRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a request, assigning the next sequential id and stamping the
    /// creation date. The status is forced to "New" regardless of what the
    /// draft carried. Returns the assigned id.
    pub fn add(&mut self, mut request: Request) -> i32 {
        request.id = self.next_id;
        self.next_id += 1;
        request.created_date = Utc::now();
        request.status = STATUS_NEW.to_string();

        let id = request.id;
        self.requests.push(request);
        id
    }

    /// Gets a request by id
    pub fn get_by_id(&self, id: i32) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Gets a mutable reference to a request by id
    pub fn get_by_id_mut(&mut self, id: i32) -> Option<&mut Request> {
        self.requests.iter_mut().find(|r| r.id == id)
    }

    /// All requests in insertion order.
    pub fn all(&self) -> &[Request] {
        &self.requests
    }

    /// Requests whose status matches exactly, ignoring case.
    pub fn find_by_status(&self, status: &str) -> Vec<&Request> {
        let wanted = status.to_lowercase();
        self.requests
            .iter()
            .filter(|r| r.status.to_lowercase() == wanted)
            .collect()
    }

    /// Requests whose applicant name contains the given fragment, ignoring
    /// case.
    pub fn find_by_applicant(&self, name_part: &str) -> Vec<&Request> {
        let needle = name_part.to_lowercase();
        self.requests
            .iter()
            .filter(|r| r.applicant_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Overwrites the mutable fields of the stored request with the same id:
    /// status, executor, completion date, and comment. Applicant,
    /// description, and category are immutable after creation and stay
    /// untouched. Returns false when no request has the id.
    pub fn update(&mut self, request: &Request) -> bool {
        match self.get_by_id_mut(request.id) {
            Some(existing) => {
                existing.status = request.status.clone();
                existing.executor_name = request.executor_name.clone();
                existing.completed_date = request.completed_date;
                existing.executor_comment = request.executor_comment.clone();
                true
            }
            None => false,
        }
    }

    /// Installs a loaded snapshot, replacing the in-memory state and
    /// recomputing the id counter from the highest id present.
    pub fn replace_all(&mut self, requests: Vec<Request>) {
        self.next_id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.requests = requests;
    }

    /// Loads requests from disk. When the file is absent or holds nothing
    /// usable the current state is left as it is.
    pub fn load_from(&mut self, storage: &Storage) -> Result<()> {
        let loaded = storage
            .load()
            .with_context(|| format!("Failed to load requests from {:?}", storage.path()))?;
        if let Some(requests) = loaded {
            self.replace_all(requests);
        }
        Ok(())
    }

    /// Saves the full request list to disk.
    pub fn save_to(&self, storage: &Storage) -> Result<()> {
        storage
            .save(&self.requests)
            .with_context(|| format!("Failed to save requests to {:?}", storage.path()))
    }
}

impl Default for RequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(applicant: &str) -> Request {
        Request::new(
            applicant.to_string(),
            "printer jam".to_string(),
            "Hardware".to_string(),
        )
    }

    #[test]
    fn ids_are_assigned_sequentially_from_one() {
        let mut repo = RequestRepository::new();
        assert_eq!(repo.add(draft("Ivan Petrov")), 1);
        assert_eq!(repo.add(draft("Anna")), 2);
        assert_eq!(repo.add(draft("Pavel")), 3);
    }

    #[test]
    fn add_forces_new_status_and_stamps_creation_date() {
        let mut repo = RequestRepository::new();
        let mut request = draft("Ivan Petrov");
        request.status = "In Progress".to_string();

        let id = repo.add(request);
        let stored = repo.get_by_id(id).unwrap();
        assert_eq!(stored.status, STATUS_NEW);

        let age = Utc::now().signed_duration_since(stored.created_date);
        assert!(age.num_seconds() < 5);
    }

    #[test]
    fn id_counter_continues_after_replace_all() {
        let mut repo = RequestRepository::new();
        repo.add(draft("Ivan"));
        repo.add(draft("Anna"));
        let snapshot = repo.all().to_vec();

        let mut reloaded = RequestRepository::new();
        reloaded.replace_all(snapshot);
        assert_eq!(reloaded.add(draft("Pavel")), 3);
    }

    #[test]
    fn replace_all_with_empty_snapshot_restarts_at_one() {
        let mut repo = RequestRepository::new();
        repo.add(draft("Ivan"));
        repo.replace_all(Vec::new());
        assert_eq!(repo.add(draft("Anna")), 1);
    }

    #[test]
    fn find_by_status_ignores_case() {
        let mut repo = RequestRepository::new();
        repo.add(draft("Ivan"));
        repo.add(draft("Anna"));

        let lower = repo.find_by_status("new");
        let title = repo.find_by_status("New");
        let upper = repo.find_by_status("NEW");
        assert_eq!(lower.len(), 2);
        assert_eq!(
            lower.iter().map(|r| r.id).collect::<Vec<_>>(),
            title.iter().map(|r| r.id).collect::<Vec<_>>()
        );
        assert_eq!(
            lower.iter().map(|r| r.id).collect::<Vec<_>>(),
            upper.iter().map(|r| r.id).collect::<Vec<_>>()
        );
        assert!(repo.find_by_status("Completed").is_empty());
    }

    #[test]
    fn find_by_applicant_matches_substring_case_insensitively() {
        let mut repo = RequestRepository::new();
        repo.add(draft("Ivan Petrov"));
        repo.add(draft("ANNA"));
        repo.add(draft("Boris"));

        let hits = repo.find_by_applicant("an");
        let names: Vec<_> = hits.iter().map(|r| r.applicant_name.as_str()).collect();
        assert_eq!(names, vec!["Ivan Petrov", "ANNA"]);
    }

    #[test]
    fn update_overwrites_only_mutable_fields() {
        let mut repo = RequestRepository::new();
        let id = repo.add(draft("Ivan Petrov"));

        let mut changed = repo.get_by_id(id).unwrap().clone();
        changed.status = "In Progress".to_string();
        changed.executor_name = "Olga".to_string();
        changed.executor_comment = "on it".to_string();
        changed.applicant_name = "Someone Else".to_string();
        changed.description = "rewritten".to_string();
        changed.category = "Software".to_string();

        assert!(repo.update(&changed));
        let stored = repo.get_by_id(id).unwrap();
        assert_eq!(stored.status, "In Progress");
        assert_eq!(stored.executor_name, "Olga");
        assert_eq!(stored.executor_comment, "on it");
        assert_eq!(stored.applicant_name, "Ivan Petrov");
        assert_eq!(stored.description, "printer jam");
        assert_eq!(stored.category, "Hardware");
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let mut repo = RequestRepository::new();
        repo.add(draft("Ivan"));

        let mut ghost = draft("Nobody");
        ghost.id = 99;
        assert!(!repo.update(&ghost));
        assert_eq!(repo.all().len(), 1);
        assert_eq!(repo.all()[0].applicant_name, "Ivan");
    }
}
