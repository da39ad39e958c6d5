//! The fixed catalog Mergington High seeds at process start.
//!
//! Nine activities, two pre-enrolled students each. The catalog never gains
//! or loses activities after this; only rosters change.

use mergington_domain::activity::Activity;
use mergington_domain::catalog::Catalog;

/// Build the seeded startup catalog.
///
/// # Panics
///
/// Panics if the seed data violates domain invariants, which would be a
/// programming error caught by the tests below.
#[must_use]
pub fn default_catalog() -> Catalog {
    let activities = [
        Activity::builder()
            .name("Chess Club")
            .description("Learn strategies and compete in chess tournaments")
            .schedule("Fridays, 3:30 PM - 5:00 PM")
            .max_participants(12)
            .participant("michael@mergington.edu")
            .participant("daniel@mergington.edu"),
        Activity::builder()
            .name("Programming Class")
            .description("Learn programming fundamentals and build software projects")
            .schedule("Tuesdays and Thursdays, 3:30 PM - 4:30 PM")
            .max_participants(20)
            .participant("emma@mergington.edu")
            .participant("sophia@mergington.edu"),
        Activity::builder()
            .name("Gym Class")
            .description("Physical education and sports activities")
            .schedule("Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM")
            .max_participants(30)
            .participant("john@mergington.edu")
            .participant("olivia@mergington.edu"),
        Activity::builder()
            .name("Soccer Team")
            .description("Competitive soccer training and interschool matches")
            .schedule("Mondays and Thursdays, 4:00 PM - 6:00 PM")
            .max_participants(22)
            .participant("liam@mergington.edu")
            .participant("mia.k@mergington.edu"),
        Activity::builder()
            .name("Basketball Club")
            .description("Skill development, practice, and pickup games")
            .schedule("Wednesdays, 5:00 PM - 7:00 PM")
            .max_participants(16)
            .participant("noah@mergington.edu")
            .participant("ava@mergington.edu"),
        Activity::builder()
            .name("Drama Club")
            .description("Acting, stagecraft, and school theatrical productions")
            .schedule("Tuesdays, 6:00 PM - 8:00 PM")
            .max_participants(25)
            .participant("oliver@mergington.edu")
            .participant("isabella@mergington.edu"),
        Activity::builder()
            .name("Art Workshop")
            .description("Drawing, painting, and mixed-media projects")
            .schedule("Fridays, 3:30 PM - 5:00 PM")
            .max_participants(20)
            .participant("charlotte@mergington.edu")
            .participant("amelia@mergington.edu"),
        Activity::builder()
            .name("Debate Team")
            .description("Prepare for debates, practice public speaking and argumentation")
            .schedule("Thursdays, 5:00 PM - 6:30 PM")
            .max_participants(18)
            .participant("ethan@mergington.edu")
            .participant("harper@mergington.edu"),
        Activity::builder()
            .name("Math Club")
            .description("Problem solving, math contests, and enrichment")
            .schedule("Mondays, 3:30 PM - 4:30 PM")
            .max_participants(20)
            .participant("aiden@mergington.edu")
            .participant("zoe@mergington.edu"),
    ];

    let mut catalog = Catalog::new();
    for builder in activities {
        let activity = builder.build().expect("seed activity must be valid");
        catalog
            .insert(activity)
            .expect("seed activity names must be unique");
    }
    catalog
}
