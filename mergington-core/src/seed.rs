//! Activities the directory starts with.
//!
//! The HTTP surface cannot create activities, so this list is the complete
//! catalogue for the lifetime of the process.

use crate::activity::Activity;

/// Returns the school's standard activities in listing order.
#[must_use]
pub fn seed_activities() -> Vec<(&'static str, Activity)> {
    vec![
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Train with the school team and play in the regional league",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            ),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Practice drills and play friendly matches against other schools",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                22,
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and sculpture in the art studio",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform the spring play and winter showcase",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking skills and compete in debate tournaments",
                "Mondays, 3:30 PM - 5:00 PM",
                16,
            ),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math olympiads",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            ),
        ),
    ]
}
