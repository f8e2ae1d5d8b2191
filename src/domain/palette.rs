//! Note color palette

use rand::seq::SliceRandom;
use rand::Rng;

/// Colors a new note can be assigned
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

/// Used when a pick cannot be made
pub const FALLBACK_COLOR: &str = "#4ECDC4";

/// Pick a palette color uniformly at random
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_COLOR)
        .to_string()
}

/// Check for a `#RRGGBB` string
pub fn is_valid_hex(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
