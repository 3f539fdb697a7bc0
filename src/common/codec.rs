pub use encode::*;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
}

impl Mode {
    /// Narrowest mode able to hold every byte of the input. Matching is
    /// case-sensitive: lowercase letters select [`Mode::Byte`] so the payload
    /// is encoded exactly as given.
    pub fn detect(data: &[u8]) -> Self {
        if data.iter().all(|&b| Self::Numeric.contains(b)) {
            Self::Numeric
        } else if data.iter().all(|&b| Self::Alphanumeric.contains(b)) {
            Self::Alphanumeric
        } else {
            Self::Byte
        }
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    pub(crate) fn alphanumeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Alphanumeric.contains(char), "Invalid alphanumeric data: {char}");
        match ALPHANUMERIC_CHARSET.iter().position(|&c| c == char) {
            Some(i) => i as u16,
            None => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                debug_assert!(len == 1, "Data is too long for byte conversion: {len}");
                data[0] as u16
            }
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alphanumeric => ALPHANUMERIC_CHARSET.contains(&byte),
            Self::Byte => true,
        }
    }

    // Bits needed for `len` characters, excluding the segment header
    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10 + 2) / 3,
            Self::Alphanumeric => (len * 11 + 1) / 2,
            Self::Byte => len * 8,
        }
    }
}


// Segment
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    mode: Mode,
    mode_bits: usize,
    len_bits: usize, // Bit len of char count
    data: &'a [u8],  // Reference to raw data
}

impl<'a> Segment<'a> {
    pub fn new(mode: Mode, mode_bits: usize, len_bits: usize, data: &'a [u8]) -> Self {
        Self { mode, mode_bits, len_bits, data }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn bit_len(&self) -> usize {
        let encoded_bits = self.mode.encoded_len(self.data.len());
        self.mode_bits + self.len_bits + encoded_bits
    }
}


// Writer for encoded data
//------------------------------------------------------------------------------

mod writer {
    use crate::common::BitStream;

    use super::{Mode, Segment, PADDING_CODEWORDS};

    pub fn push_segment(seg: Segment, out: &mut BitStream) {
        push_header(&seg, out);
        match seg.mode {
            Mode::Numeric => push_numeric_data(seg.data, out),
            Mode::Alphanumeric => push_alphanumeric_data(seg.data, out),
            Mode::Byte => push_byte_data(seg.data, out),
        }
    }

    pub(super) fn push_header(seg: &Segment, out: &mut BitStream) {
        out.push_bits(seg.mode as u8, seg.mode_bits);
        let char_cnt = seg.data.len();
        debug_assert!(
            char_cnt < (1 << seg.len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {}",
            seg.len_bits
        );
        out.push_bits(char_cnt as u16, seg.len_bits);
    }

    // Groups of 3 digits in 10 bits, 2 leftover digits in 7, a single one in 4
    pub(super) fn push_numeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(3) {
            let len = (chunk.len() * 10 + 2) / 3;
            let data = Mode::Numeric.encode_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    // Pairs as c1 * 45 + c2 in 11 bits, a trailing character in 6
    pub(super) fn push_alphanumeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(2) {
            let len = (chunk.len() * 11 + 1) / 2;
            let data = Mode::Alphanumeric.encode_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    pub(super) fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(1) {
            let data = Mode::Byte.encode_chunk(chunk);
            out.push_bits(data, 8);
        }
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0_u8, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    pub(super) fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0_u8, padding_bits_len);
        }
    }

    pub(super) fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(
            offset == 0,
            "Bit offset should be zero before padding codewords: {}",
            offset
        );

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}

// Encoder
//------------------------------------------------------------------------------

mod encode {
    use crate::common::{
        error::{SymbolError, SymbolResult},
        metadata::{ECLevel, Version},
        BitStream,
    };

    use super::{
        writer::{pad_remaining_capacity, push_segment, push_terminator},
        Mode, Segment,
    };

    // Encodes with the smallest version able to hold the data
    pub fn encode(data: &[u8], ecl: ECLevel) -> SymbolResult<(BitStream, Version)> {
        let ver = find_min_version(data, ecl)?;
        let bs = encode_with_version(data, ecl, ver)?;
        Ok((bs, ver))
    }

    // Output length always equals the data bit capacity of (ver, ecl)
    pub fn encode_with_version(data: &[u8], ecl: ECLevel, ver: Version) -> SymbolResult<BitStream> {
        let seg = build_segment(data, ver);
        let bit_capacity = ver.data_bit_capacity(ecl);
        let size = seg.bit_len();
        if size > bit_capacity || data.len() >= 1 << ver.char_cnt_bits(seg.mode()) {
            return Err(SymbolError::Capacity { required_bits: size, available_bits: bit_capacity });
        }

        let mut bs = BitStream::new(bit_capacity);
        push_segment(seg, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);

        if !bs.is_full() {
            return Err(SymbolError::Internal(format!(
                "data stream holds {} bits, capacity is {bit_capacity}",
                bs.len()
            )));
        }
        Ok(bs)
    }

    pub fn find_min_version(data: &[u8], ecl: ECLevel) -> SymbolResult<Version> {
        let mut size = 0;
        for ver in Version::all() {
            let seg = build_segment(data, ver);
            size = seg.bit_len();
            if size <= ver.data_bit_capacity(ecl) {
                return Ok(ver);
            }
        }
        Err(SymbolError::Capacity {
            required_bits: size,
            available_bits: Version::MAX.data_bit_capacity(ecl),
        })
    }

    // Whole payload in a single segment of the detected mode
    fn build_segment(data: &[u8], ver: Version) -> Segment<'_> {
        let mode = Mode::detect(data);
        Segment::new(mode, ver.mode_bits(), ver.char_cnt_bits(mode), data)
    }

}

// Global constants
//------------------------------------------------------------------------------

static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

pub(crate) static ALPHANUMERIC_CHARSET: [u8; 45] =
    *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";
