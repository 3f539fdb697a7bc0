//! BCH codes protecting the QR format information (15,5) and version information (18,6).

use super::mask::MaskPattern;
use super::metadata::{ECLevel, Version};

pub const FORMAT_INFO_BIT_LEN: usize = 15;
pub const VERSION_INFO_BIT_LEN: usize = 18;

const FORMAT_GENERATOR: u32 = 0b101_0011_0111;
const FORMAT_MASK: u32 = 0b101_0100_0001_0010;
const VERSION_GENERATOR: u32 = 0b1_1111_0010_0101;

// Remainder of `data << (deg(gen))` divided by `gen` over GF(2)
fn bch_remainder(data: u32, generator: u32) -> u32 {
    let gen_deg = 31 - generator.leading_zeros();
    let mut rem = data << gen_deg;
    while rem != 0 && 31 - rem.leading_zeros() >= gen_deg {
        let shift = (31 - rem.leading_zeros()) - gen_deg;
        rem ^= generator << shift;
    }
    rem
}

/// 15-bit format word: 2 bits EC level, 3 bits mask, 10 BCH bits, XOR-ed with the format mask.
pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    let data = (ecl.format_bits() << 3) | *mask as u32;
    ((data << 10) | bch_remainder(data, FORMAT_GENERATOR)) ^ FORMAT_MASK
}

/// 18-bit version word, only drawn for versions 7 and above.
pub fn version_info(ver: Version) -> u32 {
    debug_assert!(*ver >= 7, "Version info is only defined for version 7+: {}", *ver);

    let data = *ver as u32;
    (data << 12) | bch_remainder(data, VERSION_GENERATOR)
}

#[cfg(test)]
mod bch_tests {
    use test_case::test_case;

    use super::{format_info, version_info};
    use crate::common::{ECLevel, MaskPattern, Version};

    #[test_case(ECLevel::L, 0, 0b111011111000100)]
    #[test_case(ECLevel::L, 4, 0b110011000101111)]
    #[test_case(ECLevel::M, 0, 0b101010000010010)]
    #[test_case(ECLevel::M, 2, 0b101111001111100)]
    #[test_case(ECLevel::Q, 6, 0b010111011011010)]
    #[test_case(ECLevel::H, 7, 0b000100000111011)]
    fn test_format_info(ecl: ECLevel, mask: u8, exp: u32) {
        assert_eq!(format_info(ecl, MaskPattern::new(mask)), exp);
    }

    #[test_case(7, 0x07C94)]
    #[test_case(8, 0x085BC)]
    #[test_case(21, 0x15683)]
    #[test_case(40, 0x28C69)]
    fn test_version_info(ver: u8, exp: u32) {
        assert_eq!(version_info(Version::new_unchecked(ver)), exp);
    }
}
