use serde::{Deserialize, Serialize};

/// A named extracurricular offering and its current roster.
///
/// The name is not stored here; it is the key the activity is registered
/// under in the [`ActivityDirectory`](crate::ActivityDirectory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Activity {
    /// Free-text summary shown to students.
    pub description: String,
    /// Free-text meeting times (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Advertised capacity. Stored and reported, never enforced.
    pub max_participants: u32,
    /// Participant emails in signup order. Unique within this activity.
    pub participants: Vec<String>,
}

impl Activity {
    /// Creates an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Replaces the roster with `participants`, dropping repeated emails so
    /// the uniqueness invariant holds from the start.
    #[must_use]
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.clear();
        for email in participants {
            let email = email.into();
            if !self.is_participant(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    /// Returns `true` if `email` is on the roster. Comparison is exact.
    #[must_use]
    pub fn is_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
