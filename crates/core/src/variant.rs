//! The variant table: named Base32 dialects.
//!
//! Each identifier selects an (alphabet, default-padding) pair. Several
//! identifiers alias the same pair (`hex`, `hexadecimal` and `rfc4648-7`
//! share one specification; `standard`, `rfc3548` and `rfc4648-6` share
//! another), but every identifier is its own tag so that errors can name
//! exactly what the caller asked for.
//!
//! Identifiers are case-sensitive. The full set, sorted:
//! `crockford, geohash, hex, hexadecimal, rfc3548, rfc4648-6, rfc4648-7,
//! standard, wordsafe, z`.

use crate::error::{Error, Result};

const STANDARD_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const HEX_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789BCDEFGHJKMNPQRSTUVWXYZ";
const WORDSAFE_ALPHABET: &[u8; 32] = b"23456789CFGHJMPQRVWXcfghjmpqrvwx";
const Z_ALPHABET: &[u8; 32] = b"YBNDRFG8EJKMCPQXOT1UWISZA345H769";

/// A named Base32 dialect.
///
/// Position in the alphabet is the 5-bit symbol value; the padded
/// variants append `=` to encode output up to an 8-symbol block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Crockford's Base32 (unpadded)
    Crockford,
    /// Geohash alphabet (unpadded)
    Geohash,
    /// RFC 4648 base32hex (padded)
    Hex,
    /// Alias of [`Variant::Hex`]
    Hexadecimal,
    /// Alias of [`Variant::Standard`]
    Rfc3548,
    /// Alias of [`Variant::Standard`] (RFC 4648 section 6)
    Rfc4648_6,
    /// Alias of [`Variant::Hex`] (RFC 4648 section 7)
    Rfc4648_7,
    /// RFC 4648 base32 (padded)
    Standard,
    /// Word-safe alphabet (unpadded)
    Wordsafe,
    /// z-base-32 (unpadded)
    Z,
}

impl Variant {
    /// Every variant, in sorted identifier order.
    pub const ALL: [Variant; 10] = [
        Variant::Crockford,
        Variant::Geohash,
        Variant::Hex,
        Variant::Hexadecimal,
        Variant::Rfc3548,
        Variant::Rfc4648_6,
        Variant::Rfc4648_7,
        Variant::Standard,
        Variant::Wordsafe,
        Variant::Z,
    ];

    /// Look up a variant by its identifier (case-sensitive).
    ///
    /// # Errors
    /// Returns [`Error::InvalidVariant`] for an unknown identifier; the
    /// error message lists every valid identifier.
    pub fn from_name(name: &str) -> Result<Variant> {
        match name {
            "crockford" => Ok(Variant::Crockford),
            "geohash" => Ok(Variant::Geohash),
            "hex" => Ok(Variant::Hex),
            "hexadecimal" => Ok(Variant::Hexadecimal),
            "rfc3548" => Ok(Variant::Rfc3548),
            "rfc4648-6" => Ok(Variant::Rfc4648_6),
            "rfc4648-7" => Ok(Variant::Rfc4648_7),
            "standard" => Ok(Variant::Standard),
            "wordsafe" => Ok(Variant::Wordsafe),
            "z" => Ok(Variant::Z),
            _ => Err(Error::InvalidVariant {
                name: name.to_string(),
            }),
        }
    }

    /// The identifier this variant was selected by.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Crockford => "crockford",
            Variant::Geohash => "geohash",
            Variant::Hex => "hex",
            Variant::Hexadecimal => "hexadecimal",
            Variant::Rfc3548 => "rfc3548",
            Variant::Rfc4648_6 => "rfc4648-6",
            Variant::Rfc4648_7 => "rfc4648-7",
            Variant::Standard => "standard",
            Variant::Wordsafe => "wordsafe",
            Variant::Z => "z",
        }
    }

    /// The 32-symbol alphabet; position is the 5-bit value.
    pub fn alphabet(&self) -> &'static [u8; 32] {
        match self {
            Variant::Standard | Variant::Rfc3548 | Variant::Rfc4648_6 => STANDARD_ALPHABET,
            Variant::Hex | Variant::Hexadecimal | Variant::Rfc4648_7 => HEX_ALPHABET,
            Variant::Crockford => CROCKFORD_ALPHABET,
            Variant::Geohash => GEOHASH_ALPHABET,
            Variant::Wordsafe => WORDSAFE_ALPHABET,
            Variant::Z => Z_ALPHABET,
        }
    }

    /// Whether encode output is `=`-padded when the caller does not say.
    pub fn default_padding(&self) -> bool {
        matches!(
            self,
            Variant::Standard
                | Variant::Rfc3548
                | Variant::Rfc4648_6
                | Variant::Hex
                | Variant::Hexadecimal
                | Variant::Rfc4648_7
        )
    }

    /// All valid identifiers joined for error messages and help text.
    pub fn valid_names() -> String {
        Variant::ALL
            .iter()
            .map(|variant| variant.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Standard
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
