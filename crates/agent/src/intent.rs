//! Intent classification
//!
//! Maps free-text user input to one of a fixed intent set. Matching is
//! case-insensitive substring testing over an ordered rule table; the
//! first satisfied rule wins and remaining rules are not evaluated. There
//! is no confidence scoring.

/// Recognized intents, in rule evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    BookRoom,
    MessMenu,
    Complaint,
    Payment,
    Wifi,
    Laundry,
    Greeting,
    Fallback,
}

impl Intent {
    /// Get intent display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Intent::BookRoom => "book_room",
            Intent::MessMenu => "mess_menu",
            Intent::Complaint => "complaint",
            Intent::Payment => "payment",
            Intent::Wifi => "wifi",
            Intent::Laundry => "laundry",
            Intent::Greeting => "greeting",
            Intent::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Keyword intent classifier
///
/// One canonical rule table for every call site; complaint detection
/// accepts "complaint", "issue", "problem" and "report" everywhere.
#[derive(Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify free-form text
    pub fn classify(&self, text: &str) -> Intent {
        let text = text.to_lowercase();
        let has = |needle: &str| text.contains(needle);

        if has("room") && (has("book") || has("reserve")) {
            return Intent::BookRoom;
        }
        if has("mess") && (has("menu") || has("food")) {
            return Intent::MessMenu;
        }
        if has("complaint") || has("issue") || has("problem") || has("report") {
            return Intent::Complaint;
        }
        if has("payment") || has("fee") || has("due") {
            return Intent::Payment;
        }
        if has("wifi") || has("internet") {
            return Intent::Wifi;
        }
        if has("laundry") {
            return Intent::Laundry;
        }
        if has("hello") || has("hi") || has("hey") {
            return Intent::Greeting;
        }

        Intent::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_room_wins_first() {
        let classifier = IntentClassifier::new();

        // "room" + "book" yields BookRoom before any later rule is tested,
        // regardless of case
        assert_eq!(classifier.classify("How do I book a room?"), Intent::BookRoom);
        assert_eq!(classifier.classify("BOOK A ROOM"), Intent::BookRoom);
        assert_eq!(classifier.classify("I want to ReSeRvE a room"), Intent::BookRoom);

        // Even when complaint keywords are also present
        assert_eq!(
            classifier.classify("I want to book a room, there is a problem"),
            Intent::BookRoom
        );
    }

    #[test]
    fn test_mess_menu() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("what food is in the mess today"), Intent::MessMenu);
        assert_eq!(classifier.classify("mess menu please"), Intent::MessMenu);
        // "mess" alone is not enough
        assert_eq!(classifier.classify("my desk is a mess"), Intent::Fallback);
    }

    #[test]
    fn test_complaint_keywords_unified() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("I want to file a complaint"), Intent::Complaint);
        assert_eq!(classifier.classify("I am facing an issue"), Intent::Complaint);
        assert_eq!(classifier.classify("big problem in my bathroom"), Intent::Complaint);
        assert_eq!(classifier.classify("I need to report something"), Intent::Complaint);
    }

    #[test]
    fn test_payment() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("when is my fee payment"), Intent::Payment);
        assert_eq!(classifier.classify("dues pending?"), Intent::Payment);
    }

    #[test]
    fn test_wifi_and_laundry() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("wifi password?"), Intent::Wifi);
        assert_eq!(classifier.classify("no internet in my block"), Intent::Wifi);
        assert_eq!(classifier.classify("where can I do laundry"), Intent::Laundry);
    }

    #[test]
    fn test_greeting() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("hello"), Intent::Greeting);
        assert_eq!(classifier.classify("Hey!"), Intent::Greeting);
    }

    #[test]
    fn test_fallback() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("quantum entanglement"), Intent::Fallback);
    }

    #[test]
    fn test_rule_order_is_deterministic() {
        let classifier = IntentClassifier::new();
        // Contains both mess-menu and complaint keywords; the earlier rule
        // wins
        assert_eq!(
            classifier.classify("the mess food is a problem"),
            Intent::MessMenu
        );
    }
}
