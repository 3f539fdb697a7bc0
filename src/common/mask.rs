use std::ops::Deref;

use super::error::{SymbolError, SymbolResult};
use super::metadata::Color;
use crate::builder::QR;

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern)
    }

    pub fn try_new(pattern: u8) -> SymbolResult<Self> {
        if pattern >= 8 {
            return Err(SymbolError::Validation(format!(
                "invalid mask pattern {pattern}, expected 0..=7"
            )));
        }
        Ok(Self(pattern))
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// All mask functions take (row, column)
mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        debug_assert!(*self < 8, "Invalid pattern");

        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!(),
        }
    }
}


// Mask selection
//------------------------------------------------------------------------------

// Tries all eight patterns and keeps the lowest penalty, ties going to the lower index
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let mut best = (MaskPattern(0), u32::MAX);
    for m in 0..8 {
        let mask = MaskPattern(m);
        let mut candidate = qr.clone();
        candidate.apply_mask(mask);
        let penalty = compute_total_penalty(&candidate);
        if penalty < best.1 {
            best = (mask, penalty);
        }
    }
    qr.apply_mask(best.0);
    best.0
}

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// 3 points for a run of five same-coloured modules, 1 more per extra module
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width();
    let mut cols = vec![(Color::Dark, 0); w];
    for r in 0..w {
        let mut last = Color::Dark;
        let mut run = 0;
        for (c, col) in cols.iter_mut().enumerate() {
            let clr = *qr.get(r as i16, c as i16);
            if r == 0 || col.0 != clr {
                *col = (clr, 0);
            }
            col.1 += 1;
            match col.1 {
                5 => pen += 3,
                n if n > 5 => pen += 1,
                _ => (),
            }

            if c == 0 || last != clr {
                last = clr;
                run = 0;
            }
            run += 1;
            match run {
                5 => pen += 3,
                n if n > 5 => pen += 1,
                _ => (),
            }
        }
    }
    pen
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// 40 points per dark-light-dark-dark-dark-light-dark run with four light modules on
// either side. Modules outside the symbol count as light
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    static PATTERN: [Color; 7] = [
        Color::Dark,
        Color::Light,
        Color::Dark,
        Color::Dark,
        Color::Dark,
        Color::Light,
        Color::Dark,
    ];

    let mut pen = 0;
    let w = qr.width() as i16;
    for i in 0..w {
        let get = |j: i16| -> Color {
            if j < 0 || j >= w {
                return Color::Light;
            }
            if is_hor {
                *qr.get(i, j)
            } else {
                *qr.get(j, i)
            }
        };
        for j in 0..w - 6 {
            if (j..j + 7).map(get).ne(PATTERN.iter().copied()) {
                continue;
            }
            let light_before = (j - 4..j).all(|k| get(k) == Color::Light);
            let light_after = (j + 7..j + 11).all(|k| get(k) == Color::Light);
            if light_before || light_after {
                pen += 40;
            }
        }
    }
    pen
}

// 10 points for every full 5% the dark ratio strays from 50%
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark = qr.count_dark_modules();
    let w = qr.width();
    let total = w * w;
    let deviation = (dark * 20).abs_diff(total * 10);
    let k = ((deviation + total - 1) / total).saturating_sub(1);
    k as u32 * 10
}
