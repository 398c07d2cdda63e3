//! The 16-entry nibble S-box and its inverse.

/// Forward substitution table.
const SBOX: [u8; 16] = [
    0x6, 0xB, 0x5, 0x4, 0x2, 0xE, 0x7, 0xA, 0x9, 0xD, 0xF, 0xC, 0x3, 0x1, 0x0, 0x8,
];

/// Inverse substitution table.
const INV_SBOX: [u8; 16] = [
    0xE, 0xD, 0x4, 0xC, 0x3, 0x2, 0x0, 0x6, 0xF, 0x8, 0x7, 0x1, 0xB, 0x9, 0x5, 0xA,
];

/// Substitutes a nibble through the S-box.
///
/// # Panics
///
/// Panics if `nibble` exceeds 0xF.
#[inline]
pub fn sbox(nibble: u8) -> u8 {
    SBOX[usize::from(nibble)]
}

/// Substitutes a nibble through the inverse S-box.
///
/// # Panics
///
/// Panics if `nibble` exceeds 0xF.
#[inline]
pub fn inv_sbox(nibble: u8) -> u8 {
    INV_SBOX[usize::from(nibble)]
}
