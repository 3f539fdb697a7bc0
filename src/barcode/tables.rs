// Code128
//------------------------------------------------------------------------------

pub(crate) const CODE128_START_B: usize = 104;
pub(crate) const CODE128_STOP: usize = 106;
pub(crate) const CODE128_MODULO: usize = 103;

// Indexed by symbol value. Values 0..=94 in code set B are ASCII 32..=126
#[rustfmt::skip]
pub(crate) static CODE128_PATTERNS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100", "10001001100",
    "10011001000", "10011000100", "10001100100", "11001001000", "11001000100", "11000100100",
    "10110011100", "10011011100", "10011001110", "10111001100", "10011101100", "10011100110",
    "11001110010", "11001011100", "11001001110", "11011100100", "11001110100", "11101101110",
    "11101001100", "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000", "10001000110",
    "10110001000", "10001101000", "10001100010", "11010001000", "11000101000", "11000100010",
    "10110111000", "10110001110", "10001101110", "10111011000", "10111000110", "10001110110",
    "11101110110", "11010001110", "11000101110", "11011101000", "11011100010", "11011101110",
    "11101011000", "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100", "10010110000",
    "10010000110", "10000101100", "10000100110", "10110010000", "10110000100", "10011010000",
    "10011000010", "10000110100", "10000110010", "11000010010", "11001010000", "11110111010",
    "11000010100", "10001111010", "10100111100", "10010111100", "10010011110", "10111100100",
    "10011110100", "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110", "10111101000",
    "10111100010", "11110101000", "11110100010", "10111011110", "10111101110", "11101011110",
    "11110101110", "11010000100", "11010010000", "11010011100", "11000111010",
];

pub(crate) fn code128b_value(ch: char) -> Option<usize> {
    match ch {
        ' '..='~' => Some(ch as usize - ' ' as usize),
        _ => None,
    }
}

// Code39
//------------------------------------------------------------------------------

// Start and stop symbol `*`, not part of the encodable alphabet
pub(crate) const CODE39_GUARD_PATTERN: &str = "100101101101";

// Narrow bar 1, wide bar 11, narrow space 0, wide space 00
static CODE39_PATTERNS: [(char, &str); 43] = [
    ('0', "101001101101"),
    ('1', "110100101011"),
    ('2', "101100101011"),
    ('3', "110110010101"),
    ('4', "101001101011"),
    ('5', "110100110101"),
    ('6', "101100110101"),
    ('7', "101001011011"),
    ('8', "110100101101"),
    ('9', "101100101101"),
    ('A', "110101001011"),
    ('B', "101101001011"),
    ('C', "110110100101"),
    ('D', "101011001011"),
    ('E', "110101100101"),
    ('F', "101101100101"),
    ('G', "101010011011"),
    ('H', "110101001101"),
    ('I', "101101001101"),
    ('J', "101011001101"),
    ('K', "110101010011"),
    ('L', "101101010011"),
    ('M', "110110101001"),
    ('N', "101011010011"),
    ('O', "110101101001"),
    ('P', "101101101001"),
    ('Q', "101010110011"),
    ('R', "110101011001"),
    ('S', "101101011001"),
    ('T', "101011011001"),
    ('U', "110010101011"),
    ('V', "100110101011"),
    ('W', "110011010101"),
    ('X', "100101101011"),
    ('Y', "110010110101"),
    ('Z', "100110110101"),
    ('-', "100101011011"),
    ('.', "110010101101"),
    (' ', "100110101101"),
    ('$', "100100100101"),
    ('/', "100100101001"),
    ('+', "100101001001"),
    ('%', "101001001001"),
];

pub(crate) fn code39_pattern(ch: char) -> Option<&'static str> {
    CODE39_PATTERNS.iter().find(|(c, _)| *c == ch).map(|(_, p)| *p)
}

// EAN-13 / UPC-A
//------------------------------------------------------------------------------

pub(crate) const EAN_START_GUARD: &str = "101";
pub(crate) const EAN_CENTER_GUARD: &str = "01010";
pub(crate) const EAN_END_GUARD: &str = "101";

// Odd parity left-hand patterns, R is the complement of L and G the reverse of R
pub(crate) static EAN_L_PATTERNS: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];

// Parity of the six left-hand digits, selected by the implicit first digit
pub(crate) static EAN_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];
