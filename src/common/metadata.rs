use std::fmt::{Display, Formatter};
use std::ops::{Deref, Not};

use serde::{Deserialize, Serialize};

use super::codec::Mode;
use super::error::{SymbolError, SymbolResult};

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ECLevel {
    #[serde(alias = "l")]
    L = 0,
    #[serde(alias = "m")]
    M = 1,
    #[serde(alias = "q")]
    Q = 2,
    #[serde(alias = "h")]
    H = 3,
}

impl ECLevel {
    // Bit pattern stored in the format info: L=01, M=00, Q=11, H=10
    pub fn format_bits(self) -> u32 {
        (self as u32) ^ 1
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for ECLevel {
    type Err = SymbolError;

    fn from_str(s: &str) -> SymbolResult<Self> {
        match s.trim() {
            "L" | "l" => Ok(Self::L),
            "M" | "m" => Ok(Self::M),
            "Q" | "q" => Ok(Self::Q),
            "H" | "h" => Ok(Self::H),
            _ => Err(SymbolError::Validation(format!("invalid error correction level {s:?}"))),
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Version {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(40);

    pub fn new(ver: u8) -> SymbolResult<Self> {
        if !(1..=40).contains(&ver) {
            let msg = format!("invalid QR version {ver}, expected 1..=40");
            return Err(SymbolError::Validation(msg));
        }
        Ok(Self(ver))
    }

    #[cfg(test)]
    pub(crate) const fn new_unchecked(ver: u8) -> Self {
        debug_assert!(1 <= ver && ver <= 40, "Invalid version");
        Self(ver)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=40).map(Self)
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let v = self.0;
        match mode {
            Mode::Numeric => match v {
                1..=9 => 10,
                10..=26 => 12,
                _ => 14,
            },
            Mode::Alphanumeric => match v {
                1..=9 => 9,
                10..=26 => 11,
                _ => 13,
            },
            Mode::Byte => match v {
                1..=9 => 8,
                _ => 16,
            },
        }
    }

    // Centre coordinates shared by rows and columns. Empty for version 1
    pub fn alignment_pattern(self) -> Vec<i16> {
        let v = self.0 as i16;
        if v == 1 {
            return vec![];
        }
        let count = v / 7 + 2;
        let step = if v == 32 { 26 } else { (v * 4 + count * 2 + 1) / (count * 2 - 2) * 2 };
        let last = self.width() as i16 - 7;
        let mut res = Vec::with_capacity(count as usize);
        res.push(6);
        res.extend((0..count - 1).rev().map(|i| last - i * step));
        res
    }

    // Modules left for codewords once every function pattern, format and version
    // area is reserved
    pub fn raw_data_modules(self) -> usize {
        let v = self.0 as usize;
        let mut res = (16 * v + 128) * v + 64;
        if v >= 2 {
            let count = v / 7 + 2;
            res -= (25 * count - 10) * count - 55;
            if v >= 7 {
                res -= 36;
            }
        }
        res
    }

    pub fn total_codewords(self) -> usize {
        self.raw_data_modules() >> 3
    }

    pub fn remainder_bits(self) -> usize {
        self.raw_data_modules() & 7
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        ECC_PER_BLOCK[ecl as usize][self.0 as usize] as usize
    }

    pub fn block_count(self, ecl: ECLevel) -> usize {
        BLOCK_COUNT[ecl as usize][self.0 as usize] as usize
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        self.total_codewords() - self.ecc_per_block(ecl) * self.block_count(ecl)
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    // (block1 size, block1 count, block2 size, block2 count), data codewords only.
    // Group 2 blocks carry one more data codeword than group 1
    pub fn data_codewords_per_block(self, ecl: ECLevel) -> (usize, usize, usize, usize) {
        let blocks = self.block_count(ecl);
        let ecc = self.ecc_per_block(ecl);
        let total = self.total_codewords();
        let block2_count = total % blocks;
        let block1_count = blocks - block2_count;
        let block1_size = total / blocks - ecc;
        let block2_size = if block2_count > 0 { block1_size + 1 } else { 0 };
        (block1_size, block1_count, block2_size, block2_count)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


// Global constants
//------------------------------------------------------------------------------

// Indexed by [ECLevel][version]; index 0 is unused
static ECC_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

static BLOCK_COUNT: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23,
        25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];
