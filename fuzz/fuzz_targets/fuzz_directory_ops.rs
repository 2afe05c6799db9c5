//! Fuzz target: arbitrary enroll/withdraw sequences against the seeded
//! directory.
//!
//! Each input byte selects an operation, an activity (including one unknown
//! name) and one of a handful of emails. Rosters must stay duplicate-free
//! and no activity may appear or disappear.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mergington_core::ActivityDirectory;

const NAMES: [&str; 4] = ["Chess Club", "Art Club", "Math Club", "Nonexistent Activity"];
const EMAILS: [&str; 4] = [
    "michael@mergington.edu",
    "a@mergington.edu",
    "b@mergington.edu",
    "",
];

fuzz_target!(|data: &[u8]| {
    let mut directory = ActivityDirectory::seeded();
    let activity_count = directory.len();

    for &byte in data {
        let join = byte & 1 == 0;
        let name = NAMES[usize::from((byte >> 1) & 0b11)];
        let email = EMAILS[usize::from((byte >> 3) & 0b11)];

        let was_member = directory.get(name).map(|a| a.is_participant(email));
        let result = if join {
            directory.enroll(name, email)
        } else {
            directory.withdraw(name, email)
        };

        match was_member {
            None => assert!(matches!(result, Err(ref e) if e.is_not_found())),
            Some(member) => assert_eq!(result.is_ok(), join != member),
        }
    }

    assert_eq!(directory.len(), activity_count, "activity set must never change");
    for activity in directory.activities().values() {
        let mut seen = activity.participants.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), activity.participants.len(), "roster must stay unique");
    }
});
