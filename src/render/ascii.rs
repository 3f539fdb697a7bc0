use crate::builder::QR;

/// Terminal art for `qr`, two characters per module so the symbol keeps its
/// aspect ratio. Dark modules are `█`, light modules and the quiet zone of
/// `margin` modules are spaces.
pub fn qr_to_ascii(qr: &QR, margin: usize) -> String {
    let w = qr.width() as isize;
    let m = margin as isize;
    let side = (w + 2 * m) as usize;

    let mut res = String::with_capacity(side * (2 * side * '█'.len_utf8() + 1));
    for r in -m..w + m {
        for c in -m..w + m {
            let inside = (0..w).contains(&r) && (0..w).contains(&c);
            let dark = inside && qr.get(r as i16, c as i16).is_dark();
            let ch = if dark { '█' } else { ' ' };
            res.push(ch);
            res.push(ch);
        }
        res.push('\n');
    }
    res
}
