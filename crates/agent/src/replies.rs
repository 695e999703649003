//! Bot reply text
//!
//! Canned responses keyed by intent plus the prompts used by the guided
//! complaint capture. The canned table mirrors the assistant's published
//! answers word for word.

use crate::intent::Intent;

/// First bot message of every session
pub const GREETING_SEED: &str =
    "Hello! I'm your HostelNexus assistant. How can I help you today?";

pub const BOOK_ROOM: &str = "To book a room, please visit the Room Management section on the dashboard. You can check available rooms and submit a booking request there.";

pub const MESS_MENU: &str = "You can check the mess menu for the entire week in the Mess Menu section. It includes breakfast, lunch, snacks, and dinner for each day.";

pub const PAYMENT: &str = "You can view your payment details and outstanding dues on your dashboard. For payment methods, please contact the hostel administration office.";

pub const WIFI: &str = "WiFi is available throughout the hostel. The network name is \"HostelNet\" and the password can be obtained from the reception desk.";

pub const LAUNDRY: &str =
    "Laundry services are available on the ground floor. Operating hours are from 8 AM to 8 PM every day.";

pub const GREETING: &str =
    "Hello! How can I assist you with hostel or mess related queries today?";

/// Local fallback when no generation service is configured
pub const FALLBACK: &str = "I'm not sure I understand. Could you please rephrase your question or check the FAQ section for commonly asked questions?";

/// Substituted when the generation service fails or returns nothing usable
pub const GENERATION_APOLOGY: &str =
    "Sorry, I encountered an error. Please try again later.";

// Capture prompts, one per step

pub const TITLE_PROMPT: &str =
    "I can help you file a complaint. What should the title of your complaint be?";

pub const CATEGORY_PROMPT: &str = "Got it. Which category does this fall under? Please reply with one of: Room, Mess, Facility, Other.";

pub const INVALID_CATEGORY_PROMPT: &str = "That category isn't recognized. Please reply with exactly one of: Room, Mess, Facility, Other.";

pub const DESCRIPTION_PROMPT: &str =
    "Thanks. Please describe the issue in a few sentences.";

pub const CAPTURE_COMPLETE: &str = "Thank you! Your complaint has been submitted. You can track its status in the Complaints section.";

pub const MISSING_SESSION: &str =
    "Sorry, you need to be logged in to submit a complaint. Please log in and try again.";

pub const CAPTURE_CANCELLED: &str =
    "Okay, I've discarded the complaint draft. How else can I help you?";

pub const SUBMISSION_FAILED: &str =
    "Sorry, something went wrong while submitting your complaint. Please try again later.";

/// Canned response for an intent
///
/// `Complaint` and `Fallback` return `None`: the first enters capture mode
/// and the second goes through the generation path.
pub fn canned(intent: Intent) -> Option<&'static str> {
    match intent {
        Intent::BookRoom => Some(BOOK_ROOM),
        Intent::MessMenu => Some(MESS_MENU),
        Intent::Payment => Some(PAYMENT),
        Intent::Wifi => Some(WIFI),
        Intent::Laundry => Some(LAUNDRY),
        Intent::Greeting => Some(GREETING),
        Intent::Complaint | Intent::Fallback => None,
    }
}
