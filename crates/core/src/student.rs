//! Student profile types

use serde::{Deserialize, Serialize};

/// A hostel resident
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    pub hostel_block: String,
    pub mess_preference: String,
    /// Join date, ISO 8601 calendar date
    pub join_date: String,
    /// Outstanding dues in rupees
    pub due_amount: u32,
}

impl StudentProfile {
    /// Does this student have outstanding dues?
    pub fn has_dues(&self) -> bool {
        self.due_amount > 0
    }
}
