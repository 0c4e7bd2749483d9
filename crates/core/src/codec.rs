//! Whole-buffer Base32 encoding and decoding.
//!
//! Both directions run a bit accumulator in MSB-first order: encode packs
//! 8-bit bytes in and drains 5-bit symbols out, decode packs 5-bit symbol
//! values in and drains 8-bit bytes out. The accumulator is an integer plus
//! a pending-bit count, never a textual bit string.
//!
//! # Padding Rules
//! - Encode: a final partial group of 1-4 bits is zero-padded on the right
//!   to 5 bits before mapping; if the effective padding flag is set, the
//!   output is then `=`-padded to a multiple of 8 symbols.
//! - Decode: every `=` is stripped unconditionally before validation (its
//!   count and position are never checked); leftover tail bits after the
//!   final full byte must all be zero.
//!
//! # Example
//! ```
//! use base32_codec_core::codec::{EncodeOptions, Encoder};
//!
//! let encoder = Encoder::new(EncodeOptions::default());
//! assert_eq!(encoder.encode_to_text("foobar"), "MZXW6YTBOI======");
//! ```

use crate::error::{Error, Result};
use crate::variant::Variant;

/// Options for constructing an [`Encoder`].
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Which Base32 dialect to encode with
    pub variant: Variant,
    /// `=`-padding override; `None` uses the variant's default
    pub padding: Option<bool>,
}

/// Options for constructing a [`Decoder`].
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Which Base32 dialect to decode with
    pub variant: Variant,
}

/// Encodes byte buffers into Base32 symbols.
///
/// Immutable once constructed; the effective padding flag is resolved at
/// construction, so two encoders built from equal options always produce
/// identical output for identical input.
#[derive(Debug, Clone)]
pub struct Encoder {
    variant: Variant,
    alphabet: &'static [u8; 32],
    padding: bool,
}

impl Encoder {
    /// Create an encoder, resolving `padding: None` to the variant default.
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            variant: options.variant,
            alphabet: options.variant.alphabet(),
            padding: options.padding.unwrap_or_else(|| options.variant.default_padding()),
        }
    }

    /// Variant of the encoder.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Effective padding flag of the encoder.
    pub fn padding(&self) -> bool {
        self.padding
    }

    /// Encode to Base32 symbol bytes.
    ///
    /// Never fails: every byte sequence, including the empty one, has an
    /// encoding. Empty input yields empty output regardless of padding.
    pub fn encode_to_bytes(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let mut out = Vec::with_capacity((input.len() + 4) / 5 * 8);

        // acc holds the pending bits in its low end; bits above `pending`
        // are stale and masked off on extraction.
        let mut acc: u32 = 0;
        let mut pending: u32 = 0;

        for &byte in input {
            acc = (acc << 8) | u32::from(byte);
            pending += 8;
            while pending >= 5 {
                pending -= 5;
                out.push(self.alphabet[((acc >> pending) & 0x1f) as usize]);
            }
        }

        // Final 1-4 leftover bits, zero-padded on the right to one symbol
        if pending > 0 {
            let tail = (acc & ((1 << pending) - 1)) << (5 - pending);
            out.push(self.alphabet[tail as usize]);
        }

        if self.padding {
            while out.len() % 8 != 0 {
                out.push(b'=');
            }
        }

        out
    }

    /// Encode to Base32 text.
    pub fn encode_to_text(&self, input: impl AsRef<[u8]>) -> String {
        // Alphabets and `=` are ASCII, so byte-to-char is lossless.
        self.encode_to_bytes(input).into_iter().map(char::from).collect()
    }
}

/// Decodes Base32 symbols back into bytes.
#[derive(Debug, Clone)]
pub struct Decoder {
    variant: Variant,
    alphabet: &'static [u8; 32],
}

impl Decoder {
    /// Create a decoder for the given variant.
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            variant: options.variant,
            alphabet: options.variant.alphabet(),
        }
    }

    /// Variant of the decoder.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Decode Base32 symbols to bytes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCharacter`] if a non-`=` symbol is outside
    /// the active alphabet, or if the tail bits after the last full byte
    /// are non-zero (the encoder only ever zero-pads, so a set tail bit
    /// means the final symbol was out of range for the input length).
    pub fn decode_to_bytes(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let input = input.as_ref();
        let mut out = Vec::with_capacity(input.len() * 5 / 8 + 1);

        let mut acc: u32 = 0;
        let mut pending: u32 = 0;

        for &symbol in input {
            // Padding is positional filler: stripped, never validated
            if symbol == b'=' {
                continue;
            }
            let value = self
                .alphabet
                .iter()
                .position(|&c| c == symbol)
                .ok_or(Error::InvalidCharacter { variant: self.variant })?;
            acc = (acc << 5) | value as u32;
            pending += 5;
            while pending >= 8 {
                pending -= 8;
                out.push(((acc >> pending) & 0xff) as u8);
            }
        }

        // 1-7 tail bits from the final partial group must all be zero
        if pending > 0 && (acc & ((1 << pending) - 1)) != 0 {
            return Err(Error::InvalidCharacter { variant: self.variant });
        }

        Ok(out)
    }

    /// Decode Base32 symbols to text (lossy UTF-8).
    pub fn decode_to_text(&self, input: impl AsRef<[u8]>) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.decode_to_bytes(input)?).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(input: &str) -> String {
        Encoder::new(EncodeOptions::default()).encode_to_text(input)
    }

    fn decode(input: &str) -> Result<String> {
        Decoder::new(DecodeOptions::default()).decode_to_text(input)
    }

    #[test]
    fn test_rfc4648_vectors() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("f"), "MY======");
        assert_eq!(encode("fo"), "MZXQ====");
        assert_eq!(encode("foo"), "MZXW6===");
        assert_eq!(encode("foob"), "MZXW6YQ=");
        assert_eq!(encode("fooba"), "MZXW6YTB");
        assert_eq!(encode("foobar"), "MZXW6YTBOI======");
    }

    #[test]
    fn test_rfc4648_vectors_decode() {
        assert_eq!(decode("").unwrap(), "");
        assert_eq!(decode("MY======").unwrap(), "f");
        assert_eq!(decode("MZXQ====").unwrap(), "fo");
        assert_eq!(decode("MZXW6===").unwrap(), "foo");
        assert_eq!(decode("MZXW6YQ=").unwrap(), "foob");
        assert_eq!(decode("MZXW6YTB").unwrap(), "fooba");
        assert_eq!(decode("MZXW6YTBOI======").unwrap(), "foobar");
    }

    #[test]
    fn test_variant_divergence() {
        let vectors = [
            (Variant::Standard, "IE======"),
            (Variant::Hex, "84======"),
            (Variant::Crockford, "84"),
        ];
        for (variant, expected) in vectors {
            let encoder = Encoder::new(EncodeOptions {
                variant,
                padding: None,
            });
            assert_eq!(encoder.encode_to_text("A"), expected, "variant {}", variant);
        }
    }

    #[test]
    fn test_padding_override() {
        let unpadded = Encoder::new(EncodeOptions {
            variant: Variant::Standard,
            padding: Some(false),
        });
        assert_eq!(unpadded.encode_to_text("f"), "MY");

        let padded = Encoder::new(EncodeOptions {
            variant: Variant::Crockford,
            padding: Some(true),
        });
        assert_eq!(padded.encode_to_text("A"), "84======");
    }

    #[test]
    fn test_no_padding_on_full_block() {
        assert_eq!(encode("fooba"), "MZXW6YTB");
        assert_eq!(encode("fooba").len() % 8, 0);
    }

    #[test]
    fn test_decode_ignores_padding_count_and_position() {
        // Lenient by design: `=` is stripped wherever it appears
        assert_eq!(decode("MY=").unwrap(), "f");
        assert_eq!(decode("MY==========").unwrap(), "f");
        assert_eq!(decode("M=Y=").unwrap(), "f");
        assert_eq!(decode("========").unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_foreign_symbol() {
        let result = decode("MZXW6YT!");
        assert!(matches!(
            result,
            Err(Error::InvalidCharacter {
                variant: Variant::Standard
            })
        ));
    }

    #[test]
    fn test_decode_rejects_lowercase_for_standard() {
        assert!(decode("mzxw6ytb").is_err());
    }

    #[test]
    fn test_decode_rejects_nonzero_tail_bits() {
        // "f" encodes to "MY": M=12 (01100), Y=24 (11000); the last two of
        // the ten bits are the zero fill. Z=25 (11001) sets a fill bit.
        assert!(decode("MY").is_ok());
        let result = decode("MZ");
        assert!(matches!(result, Err(Error::InvalidCharacter { .. })));
    }

    #[test]
    fn test_decode_names_the_chosen_alias() {
        let decoder = Decoder::new(DecodeOptions {
            variant: Variant::Rfc4648_7,
        });
        let err = decoder.decode_to_bytes("!!").unwrap_err();
        assert!(err.to_string().contains("rfc4648-7"), "{}", err);
    }

    #[test]
    fn test_round_trip_all_variants() {
        let payloads: [&[u8]; 6] = [
            b"",
            b"a",
            b"ab",
            b"hello world",
            &[0x00, 0xff, 0x10, 0x80, 0x7f],
            &[0u8; 41],
        ];
        for variant in Variant::ALL {
            let encoder = Encoder::new(EncodeOptions {
                variant,
                padding: None,
            });
            let decoder = Decoder::new(DecodeOptions { variant });
            for payload in payloads {
                let encoded = encoder.encode_to_bytes(payload);
                let decoded = decoder.decode_to_bytes(&encoded).unwrap();
                assert_eq!(decoded, payload, "variant {}", variant);
            }
        }
    }

    #[test]
    fn test_bytes_and_text_agree() {
        let encoder = Encoder::new(EncodeOptions::default());
        let bytes = encoder.encode_to_bytes("foobar");
        assert_eq!(encoder.encode_to_text("foobar").as_bytes(), &bytes[..]);
    }

    #[test]
    fn test_configuration_idempotence() {
        let options = EncodeOptions {
            variant: Variant::Z,
            padding: None,
        };
        let a = Encoder::new(options.clone());
        let b = Encoder::new(options);
        assert_eq!(a.encode_to_bytes("payload"), b.encode_to_bytes("payload"));
    }
}
