//! Mess menu types

use serde::{Deserialize, Serialize};

/// One day of the weekly mess menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessMenu {
    pub day: String,
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub snacks: Vec<String>,
    pub dinner: Vec<String>,
}

impl MessMenu {
    pub fn new(
        day: impl Into<String>,
        breakfast: &[&str],
        lunch: &[&str],
        snacks: &[&str],
        dinner: &[&str],
    ) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            day: day.into(),
            breakfast: owned(breakfast),
            lunch: owned(lunch),
            snacks: owned(snacks),
            dinner: owned(dinner),
        }
    }
}
