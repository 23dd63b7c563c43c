//! Provider integrations for Vasari.
//!
//! Currently one backend: an OpenAI-compatible REST client implementing
//! both the text capabilities ([`vasari_interface::VasariDriver`],
//! [`vasari_interface::Streaming`]) and image generation
//! ([`vasari_interface::ImageDriver`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dto;
mod openai;

pub use openai::OpenAiClient;
