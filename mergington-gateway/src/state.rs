//! Shared, lock-protected handle on the activity directory.
//!
//! Handlers run concurrently on the tokio runtime. Each enroll or withdraw
//! holds the write lock across its existence check and roster update, so
//! two requests against the same activity cannot lose each other's change.

use std::sync::RwLock;

use indexmap::IndexMap;
use mergington_core::{Activity, ActivityDirectory, DirectoryError};

/// Thread-safe wrapper around an [`ActivityDirectory`].
#[derive(Debug, Default)]
pub struct SharedDirectory {
    inner: RwLock<ActivityDirectory>,
}

impl SharedDirectory {
    /// Wrap an existing directory.
    #[must_use]
    pub fn new(directory: ActivityDirectory) -> Self {
        Self { inner: RwLock::new(directory) }
    }

    /// A directory holding the standard seeded activities.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(ActivityDirectory::seeded())
    }

    /// Clone every activity out from under the read lock.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread panicked
    /// while holding the write lock).
    #[must_use]
    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let directory = self.inner.read().expect("activity directory read lock poisoned");
        directory.activities().clone()
    }

    /// Add `email` to `activity`.
    ///
    /// # Errors
    /// Propagates [`DirectoryError`] from [`ActivityDirectory::enroll`].
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn enroll(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut directory = self.inner.write().expect("activity directory write lock poisoned");
        directory.enroll(activity, email)
    }

    /// Remove `email` from `activity`.
    ///
    /// # Errors
    /// Propagates [`DirectoryError`] from [`ActivityDirectory::withdraw`].
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn withdraw(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut directory = self.inner.write().expect("activity directory write lock poisoned");
        directory.withdraw(activity, email)
    }
}
