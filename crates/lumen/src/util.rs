//! Color helpers used for validating palettes and previewing them in a terminal.

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Terminals without true-color support use this to preview palette colors
/// parsed with [`parse_hex_color`].
///
/// # Example
///
/// ```rust
/// use lumen::{parse_hex_color, rgb_to_ansi256};
///
/// let toast_bg = parse_hex_color("#ffffff").unwrap();
/// assert_eq!(rgb_to_ansi256(toast_bg), 231);
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Parses a `#rgb` or `#rrggbb` CSS hex color.
///
/// Returns `None` for anything else, including named colors.
///
/// # Example
///
/// ```rust
/// use lumen::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#374151"), Some((0x37, 0x41, 0x51)));
/// assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
/// assert_eq!(parse_hex_color("white"), None);
/// ```
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| channel(&c.to_string().repeat(2)));
            Some((digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}
