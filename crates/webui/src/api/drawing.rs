use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Drawing inside a project: an image file plus optional pixel dimensions
/// and a scale annotation such as `1:50`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub file_path: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub scale: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Drawing {
    /// `WxH` when both dimensions are known.
    pub fn dimensions(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(format!("{width}x{height}")),
            _ => None,
        }
    }
}

/// Payload for `POST /projects/{id}/drawings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDrawing {
    pub name: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}
