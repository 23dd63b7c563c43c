//! Article generation request types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use vasari_error::{ValidationError, VasariResult};

/// Target article size, expressed as the notional section count.
///
/// The wire format uses the numeric code directly; only the fixed set
/// below is accepted. Each body pass of the pipeline covers two notional
/// sections, so the number of body iterations is `⌈(sections − 2) / 2⌉`.
///
/// # Examples
///
/// ```
/// use vasari_core::ArticleLength;
///
/// let length = ArticleLength::try_from(8).unwrap();
/// assert_eq!(length.section_count(), 8);
/// assert_eq!(length.body_iterations(), 3);
///
/// assert!(ArticleLength::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
pub enum ArticleLength {
    /// Four sections
    Four,
    /// Five sections
    Five,
    /// Six sections
    Six,
    /// Eight sections
    Eight,
    /// Ten sections
    Ten,
}

impl ArticleLength {
    /// The numeric section count this length stands for.
    pub fn section_count(self) -> u32 {
        match self {
            ArticleLength::Four => 4,
            ArticleLength::Five => 5,
            ArticleLength::Six => 6,
            ArticleLength::Eight => 8,
            ArticleLength::Ten => 10,
        }
    }

    /// Number of body passes the pipeline runs for this length.
    ///
    /// The introduction and conclusion account for two sections; every
    /// body pass covers two of the remaining ones.
    pub fn body_iterations(self) -> u32 {
        (self.section_count() - 2).div_ceil(2)
    }
}

impl TryFrom<u32> for ArticleLength {
    type Error = ValidationError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            4 => Ok(ArticleLength::Four),
            5 => Ok(ArticleLength::Five),
            6 => Ok(ArticleLength::Six),
            8 => Ok(ArticleLength::Eight),
            10 => Ok(ArticleLength::Ten),
            other => Err(ValidationError::new(format!(
                "articleLength must be one of 4, 5, 6, 8 or 10, got {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ArticleLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.section_count())
    }
}

impl Serialize for ArticleLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.section_count())
    }
}

// Clients send the code either as a number or as a numeric string, so
// accept both shapes.
impl<'de> Deserialize<'de> for ArticleLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LengthVisitor;

        impl Visitor<'_> for LengthVisitor {
            type Value = ArticleLength;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "an article length code (4, 5, 6, 8 or 10)")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .ok()
                    .and_then(|code| ArticleLength::try_from(code).ok())
                    .ok_or_else(|| E::custom(format!("invalid article length code: {v}")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(format!("invalid article length code: {v}")))
                    .and_then(|code| self.visit_u64(code))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.trim()
                    .parse::<u64>()
                    .map_err(|_| E::custom(format!("invalid article length code: {v:?}")))
                    .and_then(|code| self.visit_u64(code))
            }
        }

        deserializer.deserialize_any(LengthVisitor)
    }
}

/// Optional heading text overrides, each applying to exactly one stage of
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeadingOverrides {
    /// Heading for the introduction stage
    pub introduction: Option<String>,
    /// Heading for the first body stage
    pub main_body: Option<String>,
    /// Heading for the conclusion stage
    pub conclusion: Option<String>,
}

/// A request to generate one article.
///
/// `description` and `layout_structure` are mandatory; everything else is
/// optional and omitted clauses simply do not appear in the composed
/// instructions.
///
/// # Examples
///
/// ```
/// use vasari_core::{ArticleLength, ArticleRequest};
///
/// let request = ArticleRequest::builder()
///     .description("urban beekeeping")
///     .article_length(ArticleLength::Four)
///     .layout_structure("magazine")
///     .build()
///     .unwrap();
///
/// assert!(request.validate().is_ok());
/// assert_eq!(request.article_length().body_iterations(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option))]
pub struct ArticleRequest {
    /// The topic the article is about
    description: String,
    /// Target section count
    article_length: ArticleLength,
    /// Free-text layout directive (e.g. "magazine", "listicle")
    layout_structure: String,
    /// Optional call-to-action phrase to weave in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    call_to_action: Option<String>,
    /// Tone of voice directive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    tone_of_voice: Option<String>,
    /// Language complexity directive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    language_complexity: Option<String>,
    /// Vocabulary level directive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    vocabulary_level: Option<String>,
    /// Formality level directive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    formality_level: Option<String>,
    /// Voice tempo directive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    voice_tempo: Option<String>,
    /// Ordered keywords the article should use
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    keywords: Vec<String>,
    /// Link the article should reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    reference_link: Option<String>,
    /// Per-stage heading overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    headings: Option<HeadingOverrides>,
    /// Subheadings for the first body stage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    subheadings: Vec<String>,
}

impl ArticleRequest {
    /// Start building a request.
    pub fn builder() -> ArticleRequestBuilder {
        ArticleRequestBuilder::default()
    }

    /// Reject requests whose mandatory fields are missing or blank.
    ///
    /// Runs before any orchestration starts, so invalid requests never
    /// reach the external services.
    pub fn validate(&self) -> VasariResult<()> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::new("description must not be empty").into());
        }
        if self.layout_structure.trim().is_empty() {
            return Err(ValidationError::new("layoutStructure must not be empty").into());
        }
        Ok(())
    }

    /// Heading override for the introduction stage, if any.
    pub fn introduction_heading(&self) -> Option<&str> {
        self.headings
            .as_ref()
            .and_then(|h| h.introduction.as_deref())
    }

    /// Heading override for the first body stage, if any.
    pub fn main_body_heading(&self) -> Option<&str> {
        self.headings.as_ref().and_then(|h| h.main_body.as_deref())
    }

    /// Heading override for the conclusion stage, if any.
    pub fn conclusion_heading(&self) -> Option<&str> {
        self.headings.as_ref().and_then(|h| h.conclusion.as_deref())
    }
}
