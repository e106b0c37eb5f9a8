use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CafeId(String);

impl CafeId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize)]
pub struct LikeRequest {
    pub cafe_id: CafeId,
}

/// Body of `GET /api/likes`. Anonymous callers get `error` instead of `likes`.
#[derive(Debug, Deserialize)]
pub struct LikeStatusResponse {
    #[serde(default)]
    pub likes: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Liked,
    NotLiked,
}

impl ButtonState {
    pub fn from_liked(liked: bool) -> Self {
        if liked { Self::Liked } else { Self::NotLiked }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Liked => f.write_str("liked"),
            Self::NotLiked => f.write_str("not liked"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub cafe_id: CafeId,
    pub state: ButtonState,
    pub response: serde_json::Value,
}
