// Positional-base text forms of the input
use crate::models::BaseForms;

/// Render n in decimal, hexadecimal, binary, and octal, plus the C and
/// Delphi hex notations. Hex is uppercase with no prefix; negatives take
/// whatever the native signed formatting of i128 produces.
pub fn convert(n: i128) -> BaseForms {
    let hexadecimal = format!("{:X}", n);
    BaseForms {
        decimal: n.to_string(),
        c_hex: format!("0x{}", hexadecimal),
        delphi_hex: format!("${}", hexadecimal),
        hexadecimal,
        binary: format!("{:b}", n),
        octal: format!("{:o}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_forms() {
        let forms = convert(255);
        assert_eq!(forms.decimal, "255");
        assert_eq!(forms.hexadecimal, "FF");
        assert_eq!(forms.binary, "11111111");
        assert_eq!(forms.octal, "377");
        assert_eq!(forms.c_hex, "0xFF");
        assert_eq!(forms.delphi_hex, "$FF");
    }

    #[test]
    fn test_zero() {
        let forms = convert(0);
        assert_eq!(forms.hexadecimal, "0");
        assert_eq!(forms.binary, "0");
        assert_eq!(forms.octal, "0");
    }

    #[test]
    fn test_round_trip() {
        for n in [1i128, 7, 255, 4096, 1_612_519, 4_294_967_295] {
            let forms = convert(n);
            assert_eq!(i128::from_str_radix(&forms.hexadecimal, 16).unwrap(), n);
            assert_eq!(i128::from_str_radix(&forms.binary, 2).unwrap(), n);
            assert_eq!(i128::from_str_radix(&forms.octal, 8).unwrap(), n);
        }
    }

    #[test]
    fn test_negative_uses_native_rendering() {
        let forms = convert(-1);
        // Two's-complement width of i128
        assert_eq!(forms.hexadecimal.len(), 32);
        assert!(forms.hexadecimal.chars().all(|c| c == 'F'));
    }
}
