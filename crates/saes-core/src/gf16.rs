//! Arithmetic in GF(2^4) under the reduction polynomial x^4 + x + 1.
//!
//! Nibbles are polynomials over GF(2) of degree at most 3; reduction of the
//! overflow bit folds back as 0b0011.

/// Multiplies a nibble by the field generator x.
#[inline]
pub fn mul_x(nibble: u8) -> u8 {
    debug_assert!(nibble <= 0xF, "nibble out of range: {nibble:#x}");
    let hi = nibble & 0x8;
    let shifted = (nibble << 1) & 0xF;
    if hi != 0 {
        shifted ^ 0x3
    } else {
        shifted
    }
}

/// Multiplies a nibble by the n-th power of the generator.
#[inline]
pub fn mul_xn(nibble: u8, n: usize) -> u8 {
    debug_assert!(nibble <= 0xF, "nibble out of range: {nibble:#x}");
    let mut value = nibble;
    for _ in 0..n {
        value = mul_x(value);
    }
    value
}

/// Full carry-less product of two nibbles, reduced modulo x^4 + x + 1.
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    debug_assert!(a <= 0xF && b <= 0xF);
    let mut a = a;
    let mut b = b;
    let mut product = 0;
    for _ in 0..4 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = mul_x(a);
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_x_known_values() {
        assert_eq!(mul_x(0x0), 0x0);
        assert_eq!(mul_x(0x1), 0x2);
        assert_eq!(mul_x(0x8), 0x3);
        assert_eq!(mul_x(0xF), 0xD);
    }

    #[test]
    fn generator_has_multiplicative_order_fifteen() {
        for x in 1u8..16 {
            assert_eq!(mul_xn(x, 15), x);
        }
        for n in 0..20 {
            assert_eq!(mul_xn(0, n), 0);
        }
    }

    #[test]
    fn mul_by_two_matches_mul_x() {
        for x in 0u8..16 {
            assert_eq!(mul(x, 0x2), mul_x(x));
            assert_eq!(mul(0x2, x), mul_x(x));
        }
    }

    #[test]
    fn mul_is_commutative_with_identity_one() {
        for a in 0u8..16 {
            assert_eq!(mul(a, 0x1), a);
            for b in 0u8..16 {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn inverse_mix_coefficients_invert_the_forward_row() {
        // Row (2, 3, 1, 1) against the first column (E, 9, D, B) of the
        // inverse circulant must give the identity's leading one.
        let dot = mul(0x2, 0xE) ^ mul(0x3, 0x9) ^ mul(0x1, 0xD) ^ mul(0x1, 0xB);
        assert_eq!(dot, 0x1);
    }
}
