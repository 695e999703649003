//! Complaint types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complaint category
///
/// A closed set: guided capture only advances when the input parses as one
/// of these literals, so a stored complaint can never carry a category
/// outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintCategory {
    Room,
    Mess,
    Facility,
    Other,
}

impl ComplaintCategory {
    /// All categories, in the order they are offered to students
    pub const ALL: [ComplaintCategory; 4] = [
        ComplaintCategory::Room,
        ComplaintCategory::Mess,
        ComplaintCategory::Facility,
        ComplaintCategory::Other,
    ];

    /// Get category display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplaintCategory::Room => "Room",
            ComplaintCategory::Mess => "Mess",
            ComplaintCategory::Facility => "Facility",
            ComplaintCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ComplaintCategory {
    type Err = String;

    /// Exact, case-sensitive match against the four literals
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Room" => Ok(ComplaintCategory::Room),
            "Mess" => Ok(ComplaintCategory::Mess),
            "Facility" => Ok(ComplaintCategory::Facility),
            "Other" => Ok(ComplaintCategory::Other),
            other => Err(format!("Unknown complaint category: {}", other)),
        }
    }
}

/// Complaint lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    /// Get status display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A filed complaint
///
/// Constructed once at submission and handed to the complaint store; the
/// engine never mutates it afterwards. Status changes go through the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub student_id: String,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    pub status: ComplaintStatus,
    pub timestamp: DateTime<Utc>,
}

impl Complaint {
    /// Create a new complaint, stamped with a fresh id, `Open` status and
    /// the current time
    pub fn new(
        student_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: ComplaintCategory,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: student_id.into(),
            title: title.into(),
            description: description.into(),
            category,
            status: ComplaintStatus::Open,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_exact() {
        assert_eq!("Room".parse::<ComplaintCategory>(), Ok(ComplaintCategory::Room));
        assert_eq!("Other".parse::<ComplaintCategory>(), Ok(ComplaintCategory::Other));
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!("room".parse::<ComplaintCategory>().is_err());
        assert!("ROOM".parse::<ComplaintCategory>().is_err());
        assert!("Kitchen".parse::<ComplaintCategory>().is_err());
    }

    #[test]
    fn test_new_complaint_defaults() {
        let complaint = Complaint::new("1", "Leaky faucet", "Water everywhere", ComplaintCategory::Room);
        assert_eq!(complaint.status, ComplaintStatus::Open);
        assert_eq!(complaint.student_id, "1");
        assert!(!complaint.id.is_empty());
    }

    #[test]
    fn test_unique_ids() {
        let a = Complaint::new("1", "a", "b", ComplaintCategory::Other);
        let b = Complaint::new("1", "a", "b", ComplaintCategory::Other);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_serde_matches_display() {
        let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
