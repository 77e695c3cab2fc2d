use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Project owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub owner_id: i64,
}

/// Payload for `POST /projects`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub name: String,
}
