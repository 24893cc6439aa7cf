// Data model for a single number analysis
use serde::Serialize;

/// Parity of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(n: i128) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

/// Text forms of the input in the positional bases.
#[derive(Debug, Clone, Serialize)]
pub struct BaseForms {
    pub decimal: String,
    /// Uppercase, no prefix. Negative values use the native
    /// two's-complement rendering of i128.
    pub hexadecimal: String,
    pub binary: String,
    pub octal: String,
    /// `0x`-prefixed hexadecimal, as written in C.
    pub c_hex: String,
    /// `$`-prefixed hexadecimal, as written in Delphi/Pascal.
    pub delphi_hex: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberTheory {
    pub parity: Parity,
    /// Prime factors in ascending order with multiplicity; `[n]` for n < 2.
    pub factors: Vec<i128>,
    pub is_prime: bool,
    /// Up to 8 primes strictly below the input, nearest first.
    pub preceding_primes: Vec<i128>,
    /// Sum of the decimal digits of |n|.
    pub digit_sum: u32,
    /// Count of the decimal digits of |n|.
    pub digit_count: usize,
    pub is_fibonacci: bool,
    /// n + 1, None when it would overflow i128.
    pub successor: Option<i128>,
    /// n - 1, None when it would overflow i128.
    pub predecessor: Option<i128>,
    /// n×2 through n×9, truncated at the first overflowing product.
    pub multiples: Vec<i128>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowersAndRoots {
    pub square: Option<i128>,
    pub cube: Option<i128>,
    /// NaN for negative input.
    pub square_root: f64,
    /// Real cube root, defined for negative input.
    pub cube_root: f64,
    /// None for n <= 0.
    pub log10: Option<f64>,
    /// None for n <= 0.
    pub natural_log: Option<f64>,
    pub half: f64,
}

/// Trigonometric evaluations of the input, treated once as a degree
/// measure and once as a radian measure.
#[derive(Debug, Clone, Serialize)]
pub struct TrigReport {
    pub sin_deg: f64,
    pub cos_deg: f64,
    pub tan_deg: f64,
    pub sin_rad: f64,
    pub cos_rad: f64,
    pub tan_rad: f64,
    pub deg_to_rad: f64,
    pub rad_to_deg: f64,
}

/// Digests of the decimal text form of the input (UTF-8 bytes,
/// leading `-` included for negatives).
#[derive(Debug, Clone, Serialize)]
pub struct DigestReport {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    /// 8 uppercase hex digits.
    pub crc32: String,
    pub base64: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reinterpretations {
    /// Calendar string for n in [0, 2_000_000_000] read as epoch seconds.
    pub timestamp_utc: Option<String>,
    /// Dotted quad for n in [0, 2^32 - 1].
    pub ipv4: Option<String>,
    /// Hex form left-padded with zeros to at least 6 digits. Never
    /// truncated, so wider inputs yield more than 6 digits.
    pub color_hex: String,
    /// First three byte pairs of `color_hex`; (0, 0, 0) on parse failure.
    pub rgb: (u8, u8, u8),
}

/// The complete, immutable record produced for one input integer.
///
/// Every field is a pure function of the input; fields whose subdomain
/// excludes the input carry a None/sentinel value instead of failing
/// the record.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub input: i128,
    pub bases: BaseForms,
    pub number_theory: NumberTheory,
    /// English word phrase; None beyond the billion scale.
    pub english_words: Option<String>,
    pub powers: PowersAndRoots,
    pub trig: TrigReport,
    pub digests: DigestReport,
    pub reinterpretations: Reinterpretations,
}
