//! Post entity and its mutation shapes.

use serde::{Deserialize, Serialize};

/// A persisted article post.
///
/// `description` is fixed at creation and serves only as the prompt source
/// for later image regeneration; no mutation path touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier
    pub id: String,
    /// Article markup
    pub text: String,
    /// Reference (URL) of the illustration, if any
    pub image: Option<String>,
    /// The original topic description
    pub description: String,
}

/// The fields of a post before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Article markup
    pub text: String,
    /// Reference (URL) of the illustration, if any
    pub image: Option<String>,
    /// The original topic description
    pub description: String,
}

impl PostDraft {
    /// Assemble a draft from its parts.
    pub fn new(
        description: impl Into<String>,
        text: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            image,
            description: description.into(),
        }
    }
}

/// A caller-supplied partial update.
///
/// The two fields are deliberately asymmetric: `text` replaces the stored
/// markup verbatim, while a truthy `image` flag requests a fresh
/// illustration generated from the STORED description — the flag carries
/// no image content of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    /// Replacement article markup, applied verbatim when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// When present and true, regenerate the illustration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<bool>,
}

impl PostUpdate {
    /// Whether this update asks for a fresh illustration.
    pub fn regenerate_image(&self) -> bool {
        self.image.unwrap_or(false)
    }
}

/// Resolved field changes applied atomically by the store.
///
/// `Some` replaces the stored value; `None` keeps it. There is no
/// description field: the type rules out mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostPatch {
    /// Replacement article markup
    pub text: Option<String>,
    /// Replacement illustration reference
    pub image: Option<String>,
}
