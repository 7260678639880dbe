use super::name::Name;
use super::UUID;
use crate::bits::{dpb, mask};
use crate::error::InvalidNameError;
use crate::helpers::Md5;

const VER_NIB: u64 = mask(4, 12);
const VARIANT_BITS: u64 = mask(2, 62);

/// Generates a version-3 (MD5 name-based) UUID within `namespace`.
///
/// # Errors
/// `InvalidNameError` if `name` is [`Name::None`].
pub fn v3(namespace: UUID, name: Name<'_>) -> Result<UUID, InvalidNameError> {
    let name_bytes = name.to_bytes()?;
    let mut input = namespace.to_bytes().to_vec();
    input.extend_from_slice(&name_bytes);

    let digest = Md5::digest(&input);
    let hi = crate::bits::bytes_be_to_u64(&digest[0..8]);
    let lo = crate::bits::bytes_be_to_u64(&digest[8..16]);

    Ok(UUID {
        hi: dpb(VER_NIB, hi, 3),
        lo: dpb(VARIANT_BITS, lo, 0b10),
    })
}
