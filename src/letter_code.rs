// Letter-index codec: A=1, B=2, ..., Z=26
//
// A small, unrelated utility carried alongside the number analysis.
// Encoding keeps alphabetic characters only; decoding keeps numeric
// tokens in 1..=26 only. Both silently skip everything else.

/// Encode a word as dot-joined letter indices, case-insensitive.
pub fn encode(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A' + 1).to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Decode a dot-joined index sequence back into uppercase letters.
pub fn decode(sequence: &str) -> String {
    sequence
        .split('.')
        .filter_map(|token| token.trim().parse::<u8>().ok())
        .filter(|&n| (1..=26).contains(&n))
        .map(|n| (n - 1 + b'A') as char)
        .collect()
}
