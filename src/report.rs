// Render an AnalysisResult as text or JSON
use crate::models::AnalysisResult;
use anyhow::{bail, Result};
use colored::Colorize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const INVALID_TIMESTAMP: &str = "invalid or out-of-range timestamp";
const INVALID_IPV4: &str = "invalid IPv4 address";
const OUT_OF_RANGE: &str = "out of range";
const UNDEFINED: &str = "undefined";

pub struct ReportGenerator {
    format: String,
}

impl ReportGenerator {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn generate(&self, result: &AnalysisResult) -> Result<String> {
        match self.format.as_str() {
            "json" => Ok(serde_json::to_string_pretty(result)?),
            "text" => Ok(render_text(result)),
            other => bail!("Unknown report format: {}", other),
        }
    }

    pub fn write_to_file(&self, report: &str, path: &Path) -> Result<()> {
        fs::write(path, report)?;
        Ok(())
    }
}

fn render_text(r: &AnalysisResult) -> String {
    let mut out = String::new();
    let n = r.input;

    let _ = writeln!(out, "{}", "═".repeat(64).cyan());
    let _ = writeln!(out, "{}", format!("ANALYSIS OF NUMBER {}", n).cyan().bold());
    let _ = writeln!(out, "{}", "═".repeat(64).cyan());

    section(&mut out, "NOTATIONS");
    line(&mut out, "Decimal", &r.bases.decimal);
    line(&mut out, "Hexadecimal", &r.bases.hexadecimal);
    line(&mut out, "Binary", &r.bases.binary);
    line(&mut out, "Octal", &r.bases.octal);

    section(&mut out, "ARITHMETIC AND ALGEBRAIC PROPERTIES");
    line(
        &mut out,
        "In English words",
        r.english_words.as_deref().unwrap_or(UNDEFINED),
    );
    line(&mut out, "Parity", &r.number_theory.parity.to_string());
    line(&mut out, "Prime factors", &join(&r.number_theory.factors));
    line(
        &mut out,
        "Prime or composite",
        if r.number_theory.is_prime {
            "Prime"
        } else {
            "Composite"
        },
    );
    line(
        &mut out,
        "First 8 multiples",
        &join(&r.number_theory.multiples),
    );
    line(
        &mut out,
        "8 primes before the number",
        &join(&r.number_theory.preceding_primes),
    );
    line(&mut out, "Digit sum", &r.number_theory.digit_sum.to_string());
    line(
        &mut out,
        "Digit count",
        &r.number_theory.digit_count.to_string(),
    );
    line(
        &mut out,
        "Fibonacci number",
        if r.number_theory.is_fibonacci {
            "Yes"
        } else {
            "No"
        },
    );
    line(&mut out, "Next number", &opt_int(r.number_theory.successor));
    line(
        &mut out,
        "Previous number",
        &opt_int(r.number_theory.predecessor),
    );
    line(&mut out, "Divided by two", &r.powers.half.to_string());

    section(&mut out, "POWERS, ROOTS, LOGARITHMS");
    line(&mut out, "Square", &opt_int(r.powers.square));
    line(&mut out, "Cube", &opt_int(r.powers.cube));
    line(&mut out, "Square root", &r.powers.square_root.to_string());
    line(&mut out, "Cube root", &r.powers.cube_root.to_string());
    line(&mut out, "Decimal logarithm", &opt_float(r.powers.log10));
    line(&mut out, "Natural logarithm", &opt_float(r.powers.natural_log));

    section(&mut out, "TRIGONOMETRY");
    line(&mut out, &format!("sin {}°", n), &format!("{:.10}", r.trig.sin_deg));
    line(&mut out, &format!("cos {}°", n), &format!("{:.10}", r.trig.cos_deg));
    line(&mut out, &format!("tan {}°", n), &format!("{:.10}", r.trig.tan_deg));
    line(&mut out, &format!("sin {} rad", n), &r.trig.sin_rad.to_string());
    line(&mut out, &format!("cos {} rad", n), &r.trig.cos_rad.to_string());
    line(&mut out, &format!("tan {} rad", n), &r.trig.tan_rad.to_string());
    line(
        &mut out,
        &format!("{}° in radians", n),
        &r.trig.deg_to_rad.to_string(),
    );
    line(
        &mut out,
        &format!("{} rad in degrees", n),
        &r.trig.rad_to_deg.to_string(),
    );

    section(&mut out, "CHECKSUMS, HASHES, CRYPTOGRAPHY");
    line(&mut out, "MD5", &r.digests.md5);
    line(&mut out, "CRC-32", &r.digests.crc32);
    line(&mut out, "SHA-256", &r.digests.sha256);
    line(&mut out, "SHA-1", &r.digests.sha1);
    line(&mut out, "Base64", &r.digests.base64);

    section(&mut out, "PROGRAMMING NOTATIONS");
    line(&mut out, "C, C++", &r.bases.c_hex);
    line(&mut out, "Delphi, Pascal", &r.bases.delphi_hex);

    section(&mut out, "DATE AND TIME");
    line(
        &mut out,
        "As UNIX timestamp",
        r.reinterpretations
            .timestamp_utc
            .as_deref()
            .unwrap_or(INVALID_TIMESTAMP),
    );

    section(&mut out, "INTERNET");
    line(
        &mut out,
        "As IPv4 address",
        r.reinterpretations.ipv4.as_deref().unwrap_or(INVALID_IPV4),
    );

    section(&mut out, "COLOR");
    let (red, green, blue) = r.reinterpretations.rgb;
    line(
        &mut out,
        "Color code",
        &format!("#{}", r.reinterpretations.color_hex),
    );
    line(
        &mut out,
        "RGB",
        &format!("({}, {}, {})", red, green, blue),
    );

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title.cyan().bold());
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "    {}", label);
    let _ = writeln!(out, "        {}", value);
}

fn join(values: &[i128]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn opt_int(value: Option<i128>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| OUT_OF_RANGE.to_string())
}

fn opt_float(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNDEFINED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;

    #[test]
    fn test_text_report_contains_all_sections() {
        let result = Analyzer::new().analyze(255);
        let report = ReportGenerator::new("text").generate(&result).unwrap();

        for heading in [
            "NOTATIONS",
            "ARITHMETIC AND ALGEBRAIC PROPERTIES",
            "POWERS, ROOTS, LOGARITHMS",
            "TRIGONOMETRY",
            "CHECKSUMS, HASHES, CRYPTOGRAPHY",
            "PROGRAMMING NOTATIONS",
            "DATE AND TIME",
            "INTERNET",
            "COLOR",
        ] {
            assert!(report.contains(heading), "missing section {}", heading);
        }
        assert!(report.contains("#0000FF"));
        assert!(report.contains("3, 5, 17"));
    }

    #[test]
    fn test_sentinels_render_as_markers() {
        let result = Analyzer::new().analyze(-5);
        let report = ReportGenerator::new("text").generate(&result).unwrap();
        assert!(report.contains(INVALID_TIMESTAMP));
        assert!(report.contains(INVALID_IPV4));
    }

    #[test]
    fn test_json_report_round_trips() {
        let result = Analyzer::new().analyze(7);
        let report = ReportGenerator::new("json").generate(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["input"], 7);
        assert_eq!(value["bases"]["hexadecimal"], "7");
        assert_eq!(value["reinterpretations"]["ipv4"], "0.0.0.7");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Analyzer::new().analyze(1);
        assert!(ReportGenerator::new("yaml").generate(&result).is_err());
    }
}
