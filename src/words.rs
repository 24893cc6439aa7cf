// English word rendering of an integer
const UNITS: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 4] = ["", "thousand", "million", "billion"];

/// English word phrase for n. Negative values get a "negative " prefix;
/// zero is the literal "zero". Magnitudes needing a scale word beyond
/// "billion" are out of scope and yield None.
pub fn to_english(n: i128) -> Option<String> {
    if n == 0 {
        return Some("zero".to_string());
    }

    let magnitude = n.unsigned_abs();

    let mut parts: Vec<String> = Vec::new();
    let mut remaining = magnitude;
    let mut scale = 0usize;
    while remaining > 0 {
        if scale >= SCALES.len() {
            return None;
        }
        let chunk = (remaining % 1000) as u16;
        if chunk > 0 {
            let words = render_chunk(chunk);
            if SCALES[scale].is_empty() {
                parts.push(words);
            } else {
                parts.push(format!("{} {}", words, SCALES[scale]));
            }
        }
        remaining /= 1000;
        scale += 1;
    }
    parts.reverse();

    let phrase = parts.join(" ");
    if n < 0 {
        Some(format!("negative {}", phrase))
    } else {
        Some(phrase)
    }
}

// chunk is 1..=999
fn render_chunk(chunk: u16) -> String {
    let chunk = chunk as usize;
    if chunk < 10 {
        UNITS[chunk].to_string()
    } else if chunk < 20 {
        TEENS[chunk - 10].to_string()
    } else if chunk < 100 {
        let rest = chunk % 10;
        if rest == 0 {
            TENS[chunk / 10].to_string()
        } else {
            format!("{} {}", TENS[chunk / 10], UNITS[rest])
        }
    } else {
        let rest = chunk % 100;
        if rest == 0 {
            format!("{} hundred", UNITS[chunk / 100])
        } else {
            format!("{} hundred {}", UNITS[chunk / 100], render_chunk(rest as u16))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(to_english(0).unwrap(), "zero");
        assert_eq!(to_english(7).unwrap(), "seven");
        assert_eq!(to_english(13).unwrap(), "thirteen");
        assert_eq!(to_english(40).unwrap(), "forty");
        assert_eq!(to_english(99).unwrap(), "ninety nine");
    }

    #[test]
    fn test_hundreds_and_chunking() {
        assert_eq!(to_english(123).unwrap(), "one hundred twenty three");
        assert_eq!(to_english(200).unwrap(), "two hundred");
        assert_eq!(to_english(1_000).unwrap(), "one thousand");
        assert_eq!(
            to_english(1_612_519).unwrap(),
            "one million six hundred twelve thousand five hundred nineteen"
        );
        // Zero chunks are omitted entirely
        assert_eq!(to_english(1_000_001).unwrap(), "one million one");
    }

    #[test]
    fn test_negative_prefix() {
        assert_eq!(to_english(-42).unwrap(), "negative forty two");
    }

    #[test]
    fn test_billion_scale_bound() {
        assert_eq!(
            to_english(2_000_000_000).unwrap(),
            "two billion"
        );
        assert_eq!(
            to_english(999_999_999_999).unwrap(),
            "nine hundred ninety nine billion nine hundred ninety nine million \
             nine hundred ninety nine thousand nine hundred ninety nine"
        );
        assert_eq!(to_english(1_000_000_000_000), None);
        assert_eq!(to_english(-1_000_000_000_000), None);
    }
}
