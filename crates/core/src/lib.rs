//! base32-codec-core: Base32 encoding/decoding across named alphabet
//! variants, with streaming adapters for incremental transformation.
//!
//! This library provides:
//! - Whole-buffer encode/decode bound to a variant (standard RFC 4648,
//!   base32hex, Crockford, geohash, word-safe, z-base-32)
//! - Streaming adapters that carry partial 40-bit groups across chunk
//!   boundaries, so arbitrarily large inputs never need full buffering
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `variant`: the static variant table (alphabets, default padding)
//! - `codec`: whole-buffer bit packing/unpacking
//! - `stream`: chunk-alignment state machines over the codec
//! - `error`: structured error taxonomy
//!
//! # Design Principles
//!
//! - **No panics**: decode failures are structured errors; encoding is total
//! - **Bounded memory**: stream adapters carry at most one partial group
//! - **Deterministic**: equal configuration always yields equal output
//! - **Fail fast**: a stream error halts processing, nothing is retracted

pub mod codec;
pub mod error;
pub mod stream;
pub mod variant;

// Re-export commonly used types
pub use codec::{DecodeOptions, Decoder, EncodeOptions, Encoder};
pub use error::{Error, Result};
pub use stream::{StreamDecoder, StreamEncoder};
pub use variant::Variant;
