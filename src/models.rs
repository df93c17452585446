//! Frontend Models
//!
//! Wire shapes exchanged with the server and the listing data a page can embed.

use serde::Deserialize;

use crate::error::FavoriteError;

/// Outcome of a toggle, as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteStatus {
    Added,
    Removed,
}

/// Raw toggle response; `status` is kept as a string so an unknown value
/// can be reported instead of surfacing as a generic decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleResponse {
    pub status: String,
}

impl ToggleResponse {
    pub fn into_status(self) -> Result<FavoriteStatus, FavoriteError> {
        match self.status.as_str() {
            "added" => Ok(FavoriteStatus::Added),
            "removed" => Ok(FavoriteStatus::Removed),
            _ => Err(FavoriteError::UnexpectedStatus(self.status)),
        }
    }
}

/// Response of the favorite-count endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteCountResponse {
    pub count: u32,
}

/// A favoritable listing rendered by the client-side grid
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    /// Opaque resource id (UUID or integer, as rendered by the server)
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub favorited: bool,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
