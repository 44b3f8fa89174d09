use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::models::Activity;

/// Shared handle to the in-memory activity directory.
///
/// The directory lives for the process lifetime and is reset to the seed set
/// on restart. Cloning the handle shares the same underlying map, so the
/// router state and every request see one directory.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    /// Directory preloaded with the fixed activity set the school offers.
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed_activities())),
        }
    }

    /// Clone of the full directory, for serialization.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.read().unwrap().clone()
    }

    /// Run `f` under the write lock. Check-then-mutate sequences (duplicate
    /// check + append) must happen inside one call so concurrent signups on
    /// the same activity cannot interleave.
    pub fn update<R>(&self, f: impl FnOnce(&mut BTreeMap<String, Activity>) -> R) -> R {
        let mut directory = self.inner.write().unwrap();
        f(&mut directory)
    }

    /// Restore the seed set. Test isolation hook; the server never calls it.
    pub fn reset(&self) {
        let mut directory = self.inner.write().unwrap();
        *directory = seed_activities();
    }
}

fn seed_activities() -> BTreeMap<String, Activity> {
    let mut directory = BTreeMap::new();
    directory.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );
    directory.insert(
        "Programming Class".to_string(),
        Activity {
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );
    directory.insert(
        "Gym Class".to_string(),
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    );
    directory
}
