//! Student directory
//!
//! Identity lookup for the assistant. Login is an email lookup without a
//! credential check, as in the source system.

use async_trait::async_trait;
use parking_lot::RwLock;

use hostel_nexus_core::StudentProfile;

use crate::PersistenceError;

/// Student directory trait for abstraction
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<StudentProfile>, PersistenceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<StudentProfile>, PersistenceError>;
    async fn list(&self) -> Result<Vec<StudentProfile>, PersistenceError>;
}

/// In-memory student directory
#[derive(Default)]
pub struct MemoryStudentDirectory {
    students: RwLock<Vec<StudentProfile>>,
}

impl MemoryStudentDirectory {
    pub fn new(students: Vec<StudentProfile>) -> Self {
        Self {
            students: RwLock::new(students),
        }
    }

    /// Create a directory seeded with the demo roster
    pub fn with_sample_data() -> Self {
        Self::new(vec![
            StudentProfile {
                id: "1".to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "123-456-7890".to_string(),
                room_number: "A101".to_string(),
                hostel_block: "A".to_string(),
                mess_preference: "Vegetarian".to_string(),
                join_date: "2023-09-01".to_string(),
                due_amount: 0,
            },
            StudentProfile {
                id: "2".to_string(),
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                phone: "098-765-4321".to_string(),
                room_number: "B205".to_string(),
                hostel_block: "B".to_string(),
                mess_preference: "Non-Vegetarian".to_string(),
                join_date: "2023-08-15".to_string(),
                due_amount: 1200,
            },
        ])
    }
}

#[async_trait]
impl StudentDirectory for MemoryStudentDirectory {
    async fn get(&self, id: &str) -> Result<Option<StudentProfile>, PersistenceError> {
        Ok(self.students.read().iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StudentProfile>, PersistenceError> {
        Ok(self
            .students
            .read()
            .iter()
            .find(|s| s.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<StudentProfile>, PersistenceError> {
        Ok(self.students.read().clone())
    }
}
