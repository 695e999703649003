//! Core types for the HostelNexus assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Chat transcript types
//! - Complaint types
//! - Student profiles
//! - Mess menu types
//! - Error types

pub mod chat;
pub mod complaint;
pub mod error;
pub mod menu;
pub mod student;

pub use chat::{ChatMessage, Sender};
pub use complaint::{Complaint, ComplaintCategory, ComplaintStatus};
pub use error::{Error, Result};
pub use menu::MessMenu;
pub use student::StudentProfile;
