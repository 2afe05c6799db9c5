/// Errors produced by [`ActivityDirectory`](crate::ActivityDirectory) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DirectoryError {
    /// No activity is registered under the requested name.
    #[error("Activity not found: {activity}")]
    ActivityNotFound { activity: String },

    /// The email is already on the activity's participant list.
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },

    /// The email is not on the activity's participant list.
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },
}

impl DirectoryError {
    /// Returns `true` if the error refers to an unknown activity rather than
    /// a roster conflict.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActivityNotFound { .. })
    }
}
