use serde::{Deserialize, Serialize};

/// One extracurricular offering as it appears in the directory and on the
/// wire. `participants` keeps signup order; uniqueness is enforced by the
/// enrollment service, not by the container type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
