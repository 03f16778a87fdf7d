use super::error::{KlcError, Result};
use crate::types::{
    DeadKeyTable, KeyRow, KlcFile, LigatureTable, RawValue, ShiftState, ShiftStateMap,
};
use std::collections::HashMap;

pub struct KlcParser;

impl KlcParser {
    /// Parse .klc layout text into its lookup tables and raw key rows.
    ///
    /// The only fatal condition is a missing `LOCALENAME` declaration; every
    /// other section is optional and degrades to an empty table.
    pub fn parse(raw: &str) -> Result<KlcFile> {
        // NUL bytes are an artifact of UTF-16 sources read as bytewise text.
        let text = raw.replace('\u{0}', "");

        let locale_name = extract_locale_name(&text)?;
        let shift_states = parse_shift_states(section(&text, "SHIFTSTATE", &["LAYOUT"]));
        let rows = parse_key_rows(section(&text, "LAYOUT", &["LIGATURE", "DEADKEY", "KEYNAME"]));
        let ligatures = parse_ligatures(section(&text, "LIGATURE", &["KEYNAME"]));
        let dead_keys = parse_dead_keys(section(&text, "DEADKEY", &["KEYNAME"]));

        log::debug!(
            "parsed layout {:?}: {} rows, {} dead keys, {} ligatures",
            locale_name,
            rows.len(),
            dead_keys.len(),
            ligatures.len()
        );

        Ok(KlcFile {
            locale_name,
            shift_states,
            dead_keys,
            ligatures,
            rows,
        })
    }
}

/// Slice from `start_marker` up to the nearest of `end_markers` (or the end
/// of the text). Returns `None` when the start marker is absent.
fn section<'a>(text: &'a str, start_marker: &str, end_markers: &[&str]) -> Option<&'a str> {
    let start = text.find(start_marker)?;
    let body = &text[start..];
    let end = end_markers
        .iter()
        .filter_map(|marker| body[start_marker.len()..].find(marker))
        .min()
        .map(|offset| offset + start_marker.len());
    Some(match end {
        Some(end) => &body[..end],
        None => body,
    })
}

fn extract_locale_name(text: &str) -> Result<String> {
    for line in text.lines() {
        let Some(at) = line.find("LOCALENAME") else {
            continue;
        };
        let rest = &line[at + "LOCALENAME".len()..];
        let Some(open) = rest.find('"') else {
            continue;
        };
        if !rest[..open].trim().is_empty() {
            continue;
        }
        let quoted = &rest[open + 1..];
        if let Some(close) = quoted.find('"') {
            return Ok(quoted[..close].to_string());
        }
    }
    Err(KlcError::MissingLocaleName)
}

/// Classify each SHIFTSTATE line by modifier-substring containment, checked
/// in fixed priority order so a line matching several substrings is counted
/// once. The line's last digit is its 1-based value-column index.
fn parse_shift_states(body: Option<&str>) -> ShiftStateMap {
    let mut map = ShiftStateMap::default();
    let Some(body) = body else {
        return map;
    };
    for line in body.lines().skip(1) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        let state = if !line.contains(':') {
            ShiftState::Default
        } else if line.contains("Shft  Ctrl Alt") {
            ShiftState::ShiftAltGrp
        } else if line.contains("Shft  Ctrl") {
            ShiftState::CtrlShift
        } else if line.contains("Ctrl Alt") {
            ShiftState::AltGrp
        } else if line.contains("Ctrl") {
            ShiftState::Ctrl
        } else if line.contains("Shft") {
            ShiftState::Shift
        } else {
            continue;
        };
        match trailing_digit(line) {
            Some(column) => map.set(state, column),
            None => log::warn!("shift-state line has no column digit: {trimmed:?}"),
        }
    }
    map
}

fn trailing_digit(line: &str) -> Option<usize> {
    line.chars()
        .rev()
        .find_map(|c| c.to_digit(10))
        .map(|d| d as usize)
}

/// DEADKEY blocks: each chunk opens with the 4-hex-digit dead-key code; data
/// lines pair a follower code (chars 0..4) with a composed code (chars 5..9).
fn parse_dead_keys(body: Option<&str>) -> DeadKeyTable {
    let mut table = DeadKeyTable::new();
    let Some(body) = body else {
        return table;
    };
    for chunk in body.split("DEADKEY").skip(1) {
        let chunk = chunk.trim();
        let code_token: String = chunk.chars().take(4).collect();
        let Some(dead_code) = parse_hex4(&code_token) else {
            log::warn!("dead-key block with unreadable code: {code_token:?}");
            continue;
        };
        let mut followers = HashMap::new();
        for line in chunk.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            let chars: Vec<char> = line.chars().collect();
            if chars.len() < 9 {
                continue;
            }
            let follower: String = chars[0..4].iter().collect();
            let composed: String = chars[5..9].iter().collect();
            match (parse_hex4(&follower), parse_hex4(&composed)) {
                (Some(follower), Some(composed)) => {
                    followers.insert(follower, composed);
                }
                _ => log::warn!("skipping malformed dead-key pair: {line:?}"),
            }
        }
        table.insert(dead_code, followers);
    }
    table
}

/// LIGATURE section: five header lines, then one entry per commented data
/// line. Token 0 is the virtual-key name, token 1 a duplicate that is
/// dropped, the rest the emitted codepoint sequence.
fn parse_ligatures(body: Option<&str>) -> LigatureTable {
    let mut table = LigatureTable::new();
    let Some(body) = body else {
        return table;
    };
    for line in body.lines().skip(5) {
        let Some(comment_at) = line.find("//") else {
            continue;
        };
        if comment_at == 0 {
            continue;
        }
        let mut tokens = line[..comment_at].split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        let mut sequence = Vec::new();
        for token in tokens.skip(1) {
            match parse_hex4(token) {
                Some(code) => sequence.push(code),
                None => log::warn!("ignoring non-hex ligature token {token:?} for {name}"),
            }
        }
        if !sequence.is_empty() {
            table.insert(name.to_string(), sequence);
        }
    }
    table
}

fn parse_key_rows(body: Option<&str>) -> Vec<KeyRow> {
    let Some(body) = body else {
        return Vec::new();
    };
    body.lines().skip(1).filter_map(parse_key_row).collect()
}

/// A key row is positional: scan code, virtual-key name, capability digit,
/// then 3 to 6 value columns, terminated by a `//` comment. Lines that do
/// not match the shape are not rows.
fn parse_key_row(line: &str) -> Option<KeyRow> {
    let comment_at = line.find("//")?;
    let tokens: Vec<&str> = line[..comment_at].split_whitespace().collect();
    if !(6..=9).contains(&tokens.len()) {
        return None;
    }

    let scan_code = tokens[0];
    if !(1..=2).contains(&scan_code.len())
        || !scan_code.starts_with(|c: char| c.is_ascii_digit())
        || !scan_code.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    let virtual_key = tokens[1];
    if !virtual_key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }

    let cap = tokens[2];
    if cap.len() != 1 {
        return None;
    }
    let cap: u8 = cap.parse().ok()?;

    let mut values = Vec::with_capacity(tokens.len() - 3);
    for token in &tokens[3..] {
        values.push(parse_raw_value(token)?);
    }

    Some(KeyRow {
        scan_code: scan_code.to_ascii_lowercase(),
        virtual_key: virtual_key.to_string(),
        cap,
        values,
    })
}

fn parse_raw_value(token: &str) -> Option<RawValue> {
    match token {
        "-1" => Some(RawValue::Empty),
        "%%" => Some(RawValue::LigatureMarker),
        _ => {
            let (core, dead) = match token.strip_suffix('@') {
                Some(core) => (core, true),
                None => (token, false),
            };
            if core.is_empty()
                || !core.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return None;
            }
            Some(match parse_hex4(core) {
                Some(code) if dead => RawValue::DeadCode(code),
                Some(code) => RawValue::Code(code),
                None => RawValue::Literal(token.to_string()),
            })
        }
    }
}

fn parse_hex4(token: &str) -> Option<u16> {
    if token.len() == 4 && token.chars().all(|c| c.is_ascii_hexdigit()) {
        u16::from_str_radix(token, 16).ok()
    } else {
        None
    }
}
