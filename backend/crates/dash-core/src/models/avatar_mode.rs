use serde::{Deserialize, Serialize};

/// How the dashboard renders a user's avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarMode {
    /// Initial letter of the display name; no image is kept
    Letter,
    /// Uploaded image stored as base64
    Image,
}

impl AvatarMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for AvatarMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
