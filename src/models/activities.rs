use serde::{Deserialize, Serialize};

/// One extracurricular activity as exposed over the JSON API.
///
/// The activity name is the key in the registry map, not a field here,
/// so `GET /activities` serializes straight to `{ name: { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity shown by the frontend; not enforced at signup.
    pub max_participants: u32,
    /// Emails in signup order.
    pub participants: Vec<String>,
}
