// Bounded reinterpretations: timestamp, IPv4 address, RGB color
use crate::models::Reinterpretations;
use chrono::DateTime;
use std::net::Ipv4Addr;
use tracing::debug;

/// Largest value accepted as an epoch-seconds timestamp.
const MAX_TIMESTAMP: i128 = 2_000_000_000;

/// Reinterpret n as a calendar timestamp, an IPv4 address, and an RGB
/// color. Each reading has its own validity range and degrades to a
/// sentinel on its own, never failing the record.
pub fn reinterpret(n: i128, hexadecimal: &str) -> Reinterpretations {
    let color_hex = pad_color_hex(hexadecimal);
    Reinterpretations {
        timestamp_utc: to_timestamp(n),
        ipv4: to_ipv4(n),
        rgb: parse_rgb(&color_hex),
        color_hex,
    }
}

/// Calendar string for n read as Unix epoch seconds, UTC. Only values
/// in [0, 2_000_000_000] are treated as plausible timestamps.
pub fn to_timestamp(n: i128) -> Option<String> {
    if !(0..=MAX_TIMESTAMP).contains(&n) {
        return None;
    }
    let dt = DateTime::from_timestamp(n as i64, 0)?;
    Some(dt.format("%A, %d %B %Y at %H:%M:%S UTC").to_string())
}

/// Dotted-quad rendering of n as a big-endian 32-bit address.
pub fn to_ipv4(n: i128) -> Option<String> {
    if !(0..=u32::MAX as i128).contains(&n) {
        return None;
    }
    Some(Ipv4Addr::from(n as u32).to_string())
}

/// Left-pad the hex form with zeros to at least 6 digits. Wider values
/// are kept whole rather than truncated.
pub fn pad_color_hex(hexadecimal: &str) -> String {
    if hexadecimal.len() >= 6 {
        hexadecimal.to_string()
    } else {
        format!("{:0>6}", hexadecimal)
    }
}

/// First three byte pairs of the padded hex form as an RGB triple;
/// (0, 0, 0) when the text does not parse as hex bytes.
pub fn parse_rgb(color_hex: &str) -> (u8, u8, u8) {
    let parse_pair = |range: std::ops::Range<usize>| {
        color_hex
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (parse_pair(0..2), parse_pair(2..4), parse_pair(4..6)) {
        (Some(r), Some(g), Some(b)) => (r, g, b),
        _ => {
            debug!("color hex {:?} did not parse, defaulting to black", color_hex);
            (0, 0, 0)
        }
    }
}
