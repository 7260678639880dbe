use std::str::FromStr;

use super::UUID;
use crate::error::UuidParseError;

const HYPHEN_POS: [usize; 4] = [8, 13, 18, 23];

impl FromStr for UUID {
    type Err = UuidParseError;

    /// Accepts the canonical 36-char form, the 32-hex-digit form with no
    /// hyphens, either wrapped in braces, and the `urn:uuid:` form.
    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        const URN: &str = "urn:uuid:";
        if s.len() >= URN.len() && s[..URN.len()].eq_ignore_ascii_case(URN) {
            s = &s[URN.len()..];
        }

        if s.starts_with('{') {
            if !s.ends_with('}') {
                return Err(UuidParseError::InvalidBraces);
            }
            s = &s[1..s.len() - 1];
        } else if s.ends_with('}') {
            return Err(UuidParseError::InvalidBraces);
        }

        let expect_hyphens = match s.len() {
            32 => false,
            36 => true,
            _ => return Err(UuidParseError::InvalidLength),
        };

        let mut nibbles = [0u8; 32];
        let mut nib_i = 0;

        for (idx, ch) in s.chars().enumerate() {
            if ch == '-' {
                if !expect_hyphens || !HYPHEN_POS.contains(&idx) {
                    return Err(UuidParseError::InvalidHyphenPlacement);
                }
                continue;
            }

            let val = match ch {
                '0'..='9' => ch as u8 - b'0',
                'a'..='f' => ch as u8 - b'a' + 10,
                'A'..='F' => ch as u8 - b'A' + 10,
                _ => return Err(UuidParseError::InvalidCharacter { ch, idx }),
            };
            if nib_i >= 32 {
                return Err(UuidParseError::InvalidLength);
            }
            nibbles[nib_i] = val;
            nib_i += 1;
        }

        if nib_i != 32 {
            return Err(UuidParseError::InvalidLength);
        }

        let mut bytes = [0u8; 16];
        for i in 0..16 {
            bytes[i] = (nibbles[2 * i] << 4) | nibbles[2 * i + 1];
        }

        Ok(Self::from_bytes(bytes))
    }
}
