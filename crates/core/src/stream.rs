//! Streaming Base32 adapters.
//!
//! Both adapters carry a small remainder buffer between chunks and hand
//! only group-aligned slices to the whole-buffer codec. The alignment unit
//! is the 40-bit group: 5 raw bytes on the encode side, 8 symbols on the
//! decode side. Interior slices are exact multiples of a group, so an
//! encode stream never emits `=` mid-stream and a decode stream never
//! splits a well-formed symbol group across two codec calls.
//!
//! `finish` consumes the adapter: once the final flush has run, no further
//! input can be pushed.
//!
//! # Example
//! ```
//! use base32_codec_core::codec::EncodeOptions;
//! use base32_codec_core::stream::StreamEncoder;
//!
//! let mut stream = StreamEncoder::new(EncodeOptions::default());
//! let mut out = stream.push(b"foo");
//! out.extend(stream.push(b"bar"));
//! out.extend(stream.finish());
//! assert_eq!(out, b"MZXW6YTBOI======");
//! ```

use crate::codec::{DecodeOptions, Decoder, EncodeOptions, Encoder};
use crate::error::Result;

/// Encode-side alignment: 5 raw bytes make 8 whole symbols
const ENCODE_GROUP: usize = 5;

/// Decode-side alignment: 8 symbols make 5 whole bytes
const DECODE_GROUP: usize = 8;

/// Incremental Base32 encoder.
///
/// # Invariants
/// - `carry` holds fewer than [`ENCODE_GROUP`] bytes between calls
/// - every value returned by `push` is a multiple of 8 symbols with no `=`
#[derive(Debug, Clone)]
pub struct StreamEncoder {
    encoder: Encoder,
    /// Raw bytes not yet forming a complete group (0-4)
    carry: Vec<u8>,
}

impl StreamEncoder {
    /// Create a streaming encoder for the given options.
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            encoder: Encoder::new(options),
            carry: Vec::with_capacity(ENCODE_GROUP),
        }
    }

    /// Feed a chunk of raw bytes; returns the symbols produced so far.
    ///
    /// The largest multiple-of-5 prefix of the buffered bytes is encoded
    /// and returned (possibly empty); 0-4 remainder bytes are retained for
    /// the next call or for [`StreamEncoder::finish`].
    pub fn push(&mut self, chunk: &[u8]) -> Vec<u8> {
        self.carry.extend_from_slice(chunk);
        if self.carry.len() < ENCODE_GROUP {
            return Vec::new();
        }
        let aligned = self.carry.len() / ENCODE_GROUP * ENCODE_GROUP;
        let remainder = self.carry.split_off(aligned);
        let ready = std::mem::replace(&mut self.carry, remainder);
        self.encoder.encode_to_bytes(ready)
    }

    /// Flush the final partial group, applying the configured padding.
    ///
    /// This consumes the encoder.
    pub fn finish(self) -> Vec<u8> {
        self.encoder.encode_to_bytes(self.carry)
    }
}

/// Incremental Base32 decoder.
///
/// # Invariants
/// - `carry` holds fewer than [`DECODE_GROUP`] symbol bytes between calls
///
/// An error returned from `push` means the stream is corrupt; the caller
/// must stop feeding the adapter. Output already returned is not
/// retracted.
#[derive(Debug, Clone)]
pub struct StreamDecoder {
    decoder: Decoder,
    /// Symbol bytes not yet forming a complete group (0-7)
    carry: Vec<u8>,
}

impl StreamDecoder {
    /// Create a streaming decoder for the given options.
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            decoder: Decoder::new(options),
            carry: Vec::with_capacity(DECODE_GROUP),
        }
    }

    /// Feed a chunk of symbol bytes; returns the raw bytes produced so far.
    ///
    /// The largest multiple-of-8 prefix of the buffered symbols is decoded
    /// and returned (possibly empty); 0-7 remainder bytes are retained.
    ///
    /// # Errors
    /// Propagates [`crate::error::Error::InvalidCharacter`] from the codec.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        self.carry.extend_from_slice(chunk);
        if self.carry.len() < DECODE_GROUP {
            return Ok(Vec::new());
        }
        let aligned = self.carry.len() / DECODE_GROUP * DECODE_GROUP;
        let remainder = self.carry.split_off(aligned);
        let ready = std::mem::replace(&mut self.carry, remainder);
        self.decoder.decode_to_bytes(ready)
    }

    /// Decode the final partial group (0-7 symbols, `=` included).
    ///
    /// This consumes the decoder.
    ///
    /// # Errors
    /// Propagates [`crate::error::Error::InvalidCharacter`] from the codec.
    pub fn finish(self) -> Result<Vec<u8>> {
        self.decoder.decode_to_bytes(self.carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn test_encode_small_pushes() {
        let mut stream = StreamEncoder::new(EncodeOptions::default());
        let mut out = Vec::new();
        // 1-byte chunks: nothing is emitted until a 5-byte group completes
        for &byte in b"foob" {
            assert!(stream.push(&[byte]).is_empty());
        }
        out.extend(stream.push(b"ar"));
        assert_eq!(out, b"MZXW6YTB");
        out.extend(stream.finish());
        assert_eq!(out, b"MZXW6YTBOI======");
    }

    #[test]
    fn test_encode_interior_chunks_carry_no_padding() {
        let mut stream = StreamEncoder::new(EncodeOptions::default());
        let emitted = stream.push(&[0u8; 23]);
        assert_eq!(emitted.len(), 32);
        assert!(!emitted.contains(&b'='));
        // 3 bytes carried; the flush pads the final block
        let tail = stream.finish();
        assert_eq!(tail.len(), 8);
        assert!(tail.ends_with(b"==="));
    }

    #[test]
    fn test_encode_empty_stream() {
        let mut stream = StreamEncoder::new(EncodeOptions::default());
        assert!(stream.push(b"").is_empty());
        assert!(stream.finish().is_empty());
    }

    #[test]
    fn test_decode_small_pushes() {
        let mut stream = StreamDecoder::new(DecodeOptions::default());
        let mut out = Vec::new();
        for &symbol in b"MZXW6YTBOI======".as_slice() {
            out.extend(stream.push(&[symbol]).unwrap());
        }
        out.extend(stream.finish().unwrap());
        assert_eq!(out, b"foobar");
    }

    #[test]
    fn test_decode_unaligned_tail_without_padding() {
        let mut stream = StreamDecoder::new(DecodeOptions {
            variant: Variant::Crockford,
        });
        let mut out = stream.push(b"850M2GA1").unwrap();
        out.extend(stream.push(b"84").unwrap());
        out.extend(stream.finish().unwrap());
        assert_eq!(out, b"AAAAAA");
    }

    #[test]
    fn test_decode_error_surfaces_on_the_offending_push() {
        let mut stream = StreamDecoder::new(DecodeOptions::default());
        assert!(stream.push(b"MZXW").is_ok());
        let result = stream.push(b"6YT\x00");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_error_on_finish() {
        let mut stream = StreamDecoder::new(DecodeOptions::default());
        assert!(stream.push(b"MZ").unwrap().is_empty());
        // Carried "MZ" has a non-zero fill bit in the final symbol
        assert!(stream.finish().is_err());
    }
}
