//! The fixed physical-key-position scheme.
//!
//! A layout's LAYOUT rows address keys by hardware scan code; the onscreen
//! keyboard addresses them by position in a fixed 47-slot grid. This module
//! owns the mapping between the two.

/// Number of character-producing physical key positions.
pub const KEY_SLOT_COUNT: usize = 47;

/// Hardware scan code for each slot, in slot order. Slot 0 is the key left
/// of `1` (scan code `29`), slots 1..=12 the digit row, and so on down the
/// standard 104-key alphanumeric block.
const SLOT_SCAN_CODES: [&str; KEY_SLOT_COUNT] = [
    "29", // row 1: backquote + digits
    "02", "03", "04", "05", "06", "07", "08", "09", "0a", "0b", "0c", "0d",
    "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "1a", "1b", "2b", // row 2
    "1e", "1f", "20", "21", "22", "23", "24", "25", "26", "27", "28", // row 3
    "2c", "2d", "2e", "2f", "30", "31", "32", "33", "34", "35", // row 4
];

/// Half-open slot ranges of the four onscreen rows.
pub const ROW_SPANS: [(usize, usize); 4] = [(0, 13), (13, 26), (26, 37), (37, 47)];

/// Returns the slot index for a hardware scan code token, or `None` when the
/// scan code has no position in the 47-slot grid (numpad, function keys).
pub fn slot_for_scan_code(scan_code: &str) -> Option<usize> {
    SLOT_SCAN_CODES
        .iter()
        .position(|code| code.eq_ignore_ascii_case(scan_code))
}

/// Scan code for a slot index. Panics only on an out-of-range slot, which is
/// a caller bug by construction.
pub fn scan_code_for_slot(slot: usize) -> &'static str {
    SLOT_SCAN_CODES[slot]
}
