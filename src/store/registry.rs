use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

/// Registry handle handed to handlers via axum `State`.
///
/// The original deployment assumed effectively sequential requests; the
/// lock makes each operation atomic under a genuinely concurrent runtime.
pub type SharedRegistry = Arc<RwLock<Registry>>;

/// In-memory table of all activities, keyed by name. Rebuilt from the seed
/// on every process start; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Registry {
    activities: HashMap<String, Activity>,
}

impl Registry {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Registry seeded with the school's fixed activity catalog.
    pub fn with_default_activities() -> Self {
        Self::new(default_activities())
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn all(&self) -> &HashMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn default_activities() -> HashMap<String, Activity> {
    HashMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ])
}
