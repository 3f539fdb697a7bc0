// Galois field GF(256), primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//------------------------------------------------------------------------------

const PRIMITIVE_POLY: u16 = 0x11D;

pub(crate) static EXP_TABLE: [u8; 256] = build_exp_table();
pub(crate) static LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    table[255] = table[0];
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_sum = LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize;
    EXP_TABLE[log_sum % 255]
}

// Coefficients of (x - a^0)(x - a^1)..(x - a^(degree-1)), highest degree first,
// without the leading 1
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut poly = vec![1_u8];
    for i in 0..degree {
        let root = EXP_TABLE[i % 255];
        let mut next = vec![0_u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            next[j] ^= coeff;
            next[j + 1] ^= gf_mul(coeff, root);
        }
        poly = next;
    }
    poly.split_off(1)
}


// Reed-Solomon error correction codewords
//------------------------------------------------------------------------------

// Remainder of block(x) * x^ecc_count divided by the generator polynomial
pub fn ecc_per_block(block: &[u8], ecc_count: usize) -> Vec<u8> {
    let len = block.len();
    let gen_poly = generator_polynomial(ecc_count);

    let mut res = block.to_vec();
    res.resize(len + ecc_count, 0);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }

        for (u, &g) in res[i + 1..].iter_mut().zip(gen_poly.iter()) {
            *u ^= gf_mul(g, lead_coeff);
        }
    }

    res.split_off(len)
}
