use std::fmt;

use super::UUID;

impl fmt::Display for UUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3],
            bytes[4], bytes[5],
            bytes[6], bytes[7],
            bytes[8], bytes[9],
            bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        )
    }
}

impl fmt::Debug for UUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{self}}}")
    }
}

impl UUID {
    /// 32-char lowercase hex, no hyphens.
    #[must_use]
    pub fn to_simple_string(self) -> String {
        crate::bits::hex_bytes(&self.to_bytes())
    }

    /// `urn:uuid:` followed by the canonical form.
    #[must_use]
    pub fn to_urn_string(self) -> String {
        format!("urn:uuid:{self}")
    }
}
