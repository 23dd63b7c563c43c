//! Auxiliary reference material supplied out-of-band.

use serde::{Deserialize, Serialize};

/// Reference texts a caller can stage ahead of a generation run.
///
/// All three fields are optional and independent; a run embeds whatever is
/// present into its opening instruction. Materials are consumed by exactly
/// one run and do not survive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceMaterials {
    /// Background information the article should draw on
    pub info_content: Option<String>,
    /// A writing sample whose style the article should follow
    pub sample_text: Option<String>,
    /// Sample keywords extracted from earlier material
    pub sample_keywords: Option<String>,
}

impl ReferenceMaterials {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.info_content.is_none() && self.sample_text.is_none() && self.sample_keywords.is_none()
    }

    /// Overlay the set fields of `other` onto `self`.
    ///
    /// Fields left unset in `other` keep their current value, so materials
    /// staged in separate calls accumulate until a run consumes them.
    pub fn merge(&mut self, other: ReferenceMaterials) {
        if other.info_content.is_some() {
            self.info_content = other.info_content;
        }
        if other.sample_text.is_some() {
            self.sample_text = other.sample_text;
        }
        if other.sample_keywords.is_some() {
            self.sample_keywords = other.sample_keywords;
        }
    }
}
