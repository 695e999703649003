//! Complaint store
//!
//! The sink the dialogue engine hands finished complaints to. Each `add`
//! is one new complaint; well-formed values are never rejected.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::PathBuf;

use hostel_nexus_core::{Complaint, ComplaintCategory, ComplaintStatus};

use crate::PersistenceError;

/// Complaint store trait for abstraction
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Append one new complaint
    async fn add(&self, complaint: Complaint) -> Result<(), PersistenceError>;
    async fn get(&self, id: &str) -> Result<Option<Complaint>, PersistenceError>;
    async fn list(&self) -> Result<Vec<Complaint>, PersistenceError>;
    async fn list_for_student(&self, student_id: &str) -> Result<Vec<Complaint>, PersistenceError>;
    async fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> Result<Complaint, PersistenceError>;
}

fn sample_complaints() -> Vec<Complaint> {
    let mut complaint = Complaint::new(
        "1",
        "Water leakage in bathroom",
        "There is water leaking from the ceiling in the bathroom.",
        ComplaintCategory::Room,
    );
    complaint.status = ComplaintStatus::InProgress;
    vec![complaint]
}

/// In-memory complaint store
#[derive(Default)]
pub struct MemoryComplaintStore {
    complaints: RwLock<Vec<Complaint>>,
}

impl MemoryComplaintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo complaint
    pub fn with_sample_data() -> Self {
        Self {
            complaints: RwLock::new(sample_complaints()),
        }
    }
}

#[async_trait]
impl ComplaintStore for MemoryComplaintStore {
    async fn add(&self, complaint: Complaint) -> Result<(), PersistenceError> {
        tracing::debug!(id = %complaint.id, category = %complaint.category, "Complaint added");
        self.complaints.write().push(complaint);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Complaint>, PersistenceError> {
        Ok(self.complaints.read().iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Complaint>, PersistenceError> {
        Ok(self.complaints.read().clone())
    }

    async fn list_for_student(&self, student_id: &str) -> Result<Vec<Complaint>, PersistenceError> {
        Ok(self
            .complaints
            .read()
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> Result<Complaint, PersistenceError> {
        let mut complaints = self.complaints.write();
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PersistenceError::ComplaintNotFound(id.to_string()))?;
        complaint.status = status;
        Ok(complaint.clone())
    }
}

/// Complaint store mirrored to a JSON file on every mutation
///
/// The whole collection is rewritten each time, mirroring how the source
/// system kept its complaint list in browser storage.
pub struct JsonFileComplaintStore {
    path: PathBuf,
    complaints: RwLock<Vec<Complaint>>,
}

impl JsonFileComplaintStore {
    /// Open a store, loading any existing file; a missing file starts the
    /// store with the demo seed data
    pub fn open(path: PathBuf) -> Result<Self, PersistenceError> {
        let complaints = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => sample_complaints(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            complaints: RwLock::new(complaints),
        })
    }

    /// Write the full collection back to disk
    fn persist(&self, complaints: &[Complaint]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(complaints)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[async_trait]
impl ComplaintStore for JsonFileComplaintStore {
    async fn add(&self, complaint: Complaint) -> Result<(), PersistenceError> {
        let mut complaints = self.complaints.write();
        complaints.push(complaint);
        self.persist(&complaints)?;
        tracing::debug!(count = complaints.len(), "Complaint store persisted");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Complaint>, PersistenceError> {
        Ok(self.complaints.read().iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Complaint>, PersistenceError> {
        Ok(self.complaints.read().clone())
    }

    async fn list_for_student(&self, student_id: &str) -> Result<Vec<Complaint>, PersistenceError> {
        Ok(self
            .complaints
            .read()
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> Result<Complaint, PersistenceError> {
        let mut complaints = self.complaints.write();
        let updated = {
            let complaint = complaints
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| PersistenceError::ComplaintNotFound(id.to_string()))?;
            complaint.status = status;
            complaint.clone()
        };
        self.persist(&complaints)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_add_and_list() {
        let store = MemoryComplaintStore::new();
        store
            .add(Complaint::new("1", "Broken fan", "Fan does not spin", ComplaintCategory::Room))
            .await
            .unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Broken fan");
        assert_eq!(all[0].status, ComplaintStatus::Open);
    }

    #[tokio::test]
    async fn test_memory_list_for_student() {
        let store = MemoryComplaintStore::new();
        store
            .add(Complaint::new("1", "a", "b", ComplaintCategory::Other))
            .await
            .unwrap();
        store
            .add(Complaint::new("2", "c", "d", ComplaintCategory::Mess))
            .await
            .unwrap();

        let mine = store.list_for_student("2").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "c");
    }

    #[tokio::test]
    async fn test_memory_update_status() {
        let store = MemoryComplaintStore::new();
        let complaint = Complaint::new("1", "a", "b", ComplaintCategory::Facility);
        let id = complaint.id.clone();
        store.add(complaint).await.unwrap();

        let updated = store
            .update_status(&id, ComplaintStatus::Resolved)
            .await
            .unwrap();
        assert_eq!(updated.status, ComplaintStatus::Resolved);

        assert!(store
            .update_status("missing", ComplaintStatus::Resolved)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_sample_seed() {
        let store = MemoryComplaintStore::with_sample_data();
        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, ComplaintStatus::InProgress);
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complaints.json");

        let id = {
            let store = JsonFileComplaintStore::open(path.clone()).unwrap();
            let complaint = Complaint::new("1", "Leaky tap", "Drips all night", ComplaintCategory::Room);
            let id = complaint.id.clone();
            store.add(complaint).await.unwrap();
            id
        };

        // Reopen and confirm the mutation survived
        let store = JsonFileComplaintStore::open(path).unwrap();
        let found = store.get(&id).await.unwrap().unwrap();
        assert_eq!(found.title, "Leaky tap");
    }

    #[tokio::test]
    async fn test_file_store_update_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complaints.json");

        let store = JsonFileComplaintStore::open(path.clone()).unwrap();
        let complaint = Complaint::new("1", "a", "b", ComplaintCategory::Other);
        let id = complaint.id.clone();
        store.add(complaint).await.unwrap();
        store
            .update_status(&id, ComplaintStatus::InProgress)
            .await
            .unwrap();

        let store = JsonFileComplaintStore::open(path).unwrap();
        let found = store.get(&id).await.unwrap().unwrap();
        assert_eq!(found.status, ComplaintStatus::InProgress);
    }
}
