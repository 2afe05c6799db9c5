//! The activity directory: every activity keyed by name, in seed order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::error::DirectoryError;

/// Mapping from activity name to [`Activity`].
///
/// Names are matched verbatim: case and whitespace are significant.
/// Iteration follows insertion order, so listings come back in the order
/// activities were seeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityDirectory {
    activities: IndexMap<String, Activity>,
}

impl ActivityDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the school's standard activities.
    #[must_use]
    pub fn seeded() -> Self {
        crate::seed::seed_activities().into_iter().collect()
    }

    /// Register `activity` under `name`, returning the activity it replaced.
    ///
    /// Used while building the directory at startup; the HTTP surface never
    /// adds activities.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        self.activities.insert(name.into(), activity)
    }

    /// All activities in seed order.
    #[must_use]
    pub fn activities(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Look up a single activity by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Append `email` to the roster of `activity`.
    ///
    /// # Errors
    /// Returns [`DirectoryError::ActivityNotFound`] if no activity has that
    /// name, or [`DirectoryError::AlreadySignedUp`] if the email is already
    /// on its roster.
    pub fn enroll(&mut self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let entry = self.entry_mut(activity)?;
        if entry.is_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                email: email.to_owned(),
                activity: activity.to_owned(),
            });
        }
        entry.participants.push(email.to_owned());
        Ok(())
    }

    /// Remove `email` from the roster of `activity`.
    ///
    /// # Errors
    /// Returns [`DirectoryError::ActivityNotFound`] if no activity has that
    /// name, or [`DirectoryError::NotSignedUp`] if the email is not on its
    /// roster.
    pub fn withdraw(&mut self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let entry = self.entry_mut(activity)?;
        let Some(position) = entry.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotSignedUp {
                email: email.to_owned(),
                activity: activity.to_owned(),
            });
        };
        entry.participants.remove(position);
        Ok(())
    }

    fn entry_mut(&mut self, activity: &str) -> Result<&mut Activity, DirectoryError> {
        self.activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: activity.to_owned(),
            })
    }
}

impl<N: Into<String>> FromIterator<(N, Activity)> for ActivityDirectory {
    fn from_iter<T: IntoIterator<Item = (N, Activity)>>(iter: T) -> Self {
        Self {
            activities: iter.into_iter().map(|(name, a)| (name.into(), a)).collect(),
        }
    }
}
