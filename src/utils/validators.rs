//! CPF (Cadastro de Pessoas Físicas) checksum, display masking and e-mail syntax checks.
//!
//! Every function here is total: malformed input yields `false` or a
//! best-effort string, never a panic.

use regex::Regex;
use std::sync::OnceLock;

/// Number of digits in a canonical CPF.
pub const IDENTIFIER_LENGTH: usize = 11;

/// 移除所有非數字字元，得到標準形式
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Weighted mod-11 check digit over `digits`, with weights counting down from `start_weight`.
fn check_digit(digits: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=start_weight).rev())
        .map(|(d, w)| d * w)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Returns `true` when `input` reduces to a valid 11-digit CPF.
///
/// Punctuation is ignored. Repeated-digit numbers such as `000.000.000-00`
/// satisfy the checksum but are rejected.
pub fn is_valid_identifier(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != IDENTIFIER_LENGTH {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    // 第一個驗證碼：前 9 碼，權重 10..2
    if digits[9] != check_digit(&digits[..9], 10) {
        return false;
    }

    // 第二個驗證碼：前 10 碼，權重 11..2
    digits[10] == check_digit(&digits[..10], 11)
}

/// Formats a CPF as `AAA.BBB.CCC-DD`.
///
/// The input is stripped to digits first. When the result is not exactly
/// 11 digits it is returned unformatted.
pub fn format_identifier(input: &str) -> String {
    let digits = strip_non_digits(input);

    if digits.len() != IDENTIFIER_LENGTH {
        return digits;
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Progressive mask for a CPF being typed.
///
/// Keeps at most 11 digits and only emits a separator once a digit follows it,
/// so `"5299"` becomes `"529.9"` and `"529"` stays `"529"`.
pub fn mask_identifier_partial(input: &str) -> String {
    let mut masked = String::with_capacity(IDENTIFIER_LENGTH + 3);

    for (i, c) in input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(IDENTIFIER_LENGTH)
        .enumerate()
    {
        match i {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(c);
    }

    masked
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern is a valid regex")
    })
}

/// Syntactic e-mail check: `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email_syntax(input: &str) -> bool {
    email_regex().is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CPF: &str = "52998224725";

    #[test]
    fn test_known_valid_identifier() {
        assert!(is_valid_identifier(VALID_CPF));
        assert!(is_valid_identifier("529.982.247-25"));
        assert!(is_valid_identifier(" 529 982 247 25 "));
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("abc"));
        assert!(!is_valid_identifier("5299822472"));
        assert!(!is_valid_identifier("529982247250"));
        assert!(!is_valid_identifier("529.982.247-2"));
        for len in 0..20 {
            if len == IDENTIFIER_LENGTH {
                continue;
            }
            assert!(!is_valid_identifier(&"1".repeat(len)), "length {}", len);
        }
    }

    #[test]
    fn test_repeated_digits_are_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(IDENTIFIER_LENGTH);
            assert!(!is_valid_identifier(&cpf), "{}", cpf);
        }
    }

    #[test]
    fn test_check_digit_corruption_is_detected() {
        for pos in [9usize, 10] {
            for replacement in b'0'..=b'9' {
                let mut bytes = VALID_CPF.as_bytes().to_vec();
                if bytes[pos] == replacement {
                    continue;
                }
                bytes[pos] = replacement;
                let corrupted = String::from_utf8(bytes).unwrap();
                assert!(!is_valid_identifier(&corrupted), "{}", corrupted);
            }
        }
    }

    #[test]
    fn test_remainder_below_two_yields_zero_check_digit() {
        // 987.654.321-00 的餘數為 0 和 1；111.111.112-00 為 1 和 0
        assert!(is_valid_identifier("987.654.321-00"));
        assert!(is_valid_identifier("11111111200"));
        assert!(!is_valid_identifier("98765432110"));
        assert!(!is_valid_identifier("11111111201"));
        // 一般情況：餘數 8 和 6
        assert!(is_valid_identifier("111.444.777-35"));
        assert!(is_valid_identifier("00000000191"));
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        // 全形數字不算數字
        assert!(!is_valid_identifier("５２９９８２２４７２５"));
        assert_eq!(strip_non_digits("５2٣9"), "29");
    }

    #[test]
    fn test_format_identifier() {
        assert_eq!(format_identifier(VALID_CPF), "529.982.247-25");
    }

    #[test]
    fn test_format_identifier_strips_punctuated_input() {
        let once = format_identifier("529.982.247-25");
        assert_eq!(once, "529.982.247-25");
        assert_eq!(format_identifier(&once), strip_then_format(&once));
        assert_eq!(format_identifier("529-982 247/25"), "529.982.247-25");
    }

    fn strip_then_format(input: &str) -> String {
        format_identifier(&strip_non_digits(input))
    }

    #[test]
    fn test_format_identifier_wrong_length_returns_digits() {
        assert_eq!(format_identifier(""), "");
        assert_eq!(format_identifier("529.98"), "52998");
        assert_eq!(format_identifier("529982247251"), "529982247251");
    }

    #[test]
    fn test_mask_identifier_partial() {
        assert_eq!(mask_identifier_partial(""), "");
        assert_eq!(mask_identifier_partial("529"), "529");
        assert_eq!(mask_identifier_partial("5299"), "529.9");
        assert_eq!(mask_identifier_partial("5299822"), "529.982.2");
        assert_eq!(mask_identifier_partial("5299822472"), "529.982.247-2");
        assert_eq!(mask_identifier_partial(VALID_CPF), "529.982.247-25");
        assert_eq!(mask_identifier_partial("52998224725999"), "529.982.247-25");
        assert_eq!(mask_identifier_partial("529.9"), "529.9");
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email_syntax("a@b.co"));
        assert!(is_valid_email_syntax("maria.silva@exemplo.com.br"));
        assert!(!is_valid_email_syntax("a@b"));
        assert!(!is_valid_email_syntax("a.b"));
        assert!(!is_valid_email_syntax(""));
        assert!(!is_valid_email_syntax("a b@c.com"));
        assert!(!is_valid_email_syntax("a@@b.com"));
        assert!(!is_valid_email_syntax("a@b."));
    }
}
