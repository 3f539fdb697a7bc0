use std::{fmt::Display, mem};

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

// Append-only sequence of bits, most significant bit first within each byte.
// Consumed exactly once by module placement through the `Iterator` impl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
    // Pointer to take bits
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        Self { data: Vec::with_capacity((capacity + 7) >> 3), len: 0, capacity, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..(self.len + 7) >> 3]
    }

    pub fn to_bit_string(&self) -> String {
        let mut res = String::with_capacity(self.len);
        for i in 0..self.len {
            res.push(if self.bit_at(i) { '1' } else { '0' });
        }
        res
    }

    fn bit_at(&self, pos: usize) -> bool {
        (self.data[pos >> 3] << (pos & 7)) & 0b1000_0000 != 0
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    // Appends the lowest `size` bits of `bits`, most significant first
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(size <= 16, "Bits from only u8 and u16 can be pushed: Size {size}");
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        for i in (0..size).rev() {
            let bit = (bits >> i) & T::one() == T::one();
            self.push(bit);
        }
    }

    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + 1
        );

        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b1000_0000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, arr: &[u8]) {
        debug_assert!(
            (self.len & 7) == 0,
            "Bit offset must be zero to extend from another array: Bit offset {}",
            self.len & 7
        );
        let arr_bits = arr.len() << 3;
        debug_assert!(
            self.len + arr_bits <= self.capacity,
            "Extension shouldn't overflow capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + arr_bits
        );
        self.data.extend_from_slice(arr);
        self.len += arr_bits;
    }
}

#[cfg(test)]
mod bit_stream_push_tests {

    use super::BitStream;

    #[test]
    fn test_len() {
        let bit_capacity = 152;
        let mut bs = BitStream::new(bit_capacity);
        assert_eq!(bs.len(), 0);
        bs.push_bits(0, 0);
        assert_eq!(bs.len(), 0);
        bs.push_bits(0b1000, 4);
        assert_eq!(bs.len(), 4);
        bs.push_bits(0b1000, 8);
        assert_eq!(bs.len(), 12);
        bs.push_bits(0b1000, 4);
        assert_eq!(bs.len(), 16);
        bs.push_bits(0b1111111, 7);
        assert_eq!(bs.len(), 23);
        bs.push_bits(0b111111111111_u16, 12);
        assert_eq!(bs.len(), 35);
        bs.push_bits(0b111111111111_u16, 16);
        assert_eq!(bs.len(), 51);
    }

    #[test]
    #[should_panic]
    fn test_invalid_len() {
        let bit_capacity = 152;
        let mut bs = BitStream::new(bit_capacity);
        bs.push_bits(256_u16, 17);
    }

    #[test]
    fn test_push() {
        let mut bs = BitStream::new(2);
        bs.push(false);
        assert_eq!(bs.data(), [0b00000000]);
        bs.push(true);
        assert_eq!(bs.data(), [0b01000000]);
    }

    #[test]
    fn test_push_bits() {
        let mut bs = BitStream::new(32);
        bs.push_bits(0b0010_u8, 4);
        bs.push_bits(0b000001011_u16, 9);
        bs.push_bits(0b01100001011_u16, 11);
        assert_eq!(bs.to_bit_string(), "001000000101101100001011");
        assert_eq!(bs.data(), [0b00100000, 0b01011011, 0b00001011]);
    }

    #[test]
    fn test_extend() {
        let mut bs = BitStream::new(24);
        bs.push_bits(0xAB_u8, 8);
        bs.extend(&[0xEC, 0x11]);
        assert_eq!(bs.data(), [0xAB, 0xEC, 0x11]);
        assert!(bs.is_full());
    }

    #[test]
    #[should_panic]
    fn test_push_bits_capacity_overflow() {
        let bit_capacity = 152;
        let capacity = (bit_capacity + 7) >> 3;
        let mut bs = BitStream::new(bit_capacity);
        for _ in 0..capacity {
            bs.push_bits(0b1_u8, 8);
        }
        bs.push_bits(0b1_u8, 1)
    }
}

// Iterator for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    pub fn remaining(&self) -> usize {
        self.len - self.cursor
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.len {
            return None;
        }

        let bit = self.bit_at(self.cursor);
        self.cursor += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
