//! # Tax Document Checksums
//!
//! Mod-11 check digit validation for the two Brazilian tax identifiers.
//!
//! ## Document Layouts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CPF (individual, 11 digits)                       │
//! │                                                                         │
//! │   5 2 9 . 9 8 2 . 2 4 7 - 2 5                                          │
//! │   └──────── base (9) ───────┘   └┬┘                                    │
//! │                                  check digits                           │
//! │                                                                         │
//! │   check1 = (Σ d[i]·(10-i)           · 10) mod 11   (10 → 0)            │
//! │   check2 = (Σ d[i]·(11-i) + 2·check1) · 10) mod 11   (10 → 0)          │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                       CNPJ (business, 14 digits)                        │
//! │                                                                         │
//! │   1 1 . 2 2 2 . 3 3 3 / 0 0 0 1 - 8 1                                  │
//! │   └──── root (8) ───┘   └branch┘   └┬┘                                 │
//! │                                      check digits                       │
//! │                                                                         │
//! │   weights1 = 5 4 3 2 9 8 7 6 5 4 3 2                                   │
//! │   weights2 = 6 5 4 3 2 9 8 7 6 5 4 3 2                                 │
//! │   check = r < 2 ? 0 : 11 - r      where r = Σ d[i]·w[i] mod 11         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sequences made of one repeated digit (`000.000.000-00`, `11.111.111/1111-11`)
//! satisfy the arithmetic but are never issued, so both validators reject them.

/// Number of digits in a cleaned CPF.
pub const CPF_LEN: usize = 11;

/// Number of digits in a cleaned CNPJ.
pub const CNPJ_LEN: usize = 14;

const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

// =============================================================================
// Normalization
// =============================================================================

/// Strips every character that is not an ASCII digit.
///
/// ```rust
/// use cadastro_core::document::only_digits;
///
/// assert_eq!(only_digits("529.982.247-25"), "52998224725");
/// assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
/// ```
pub fn only_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Converts an all-digit string into numeric digits.
///
/// Callers pass the output of [`only_digits`], so every byte is `0..=9`.
fn to_digits(clean: &str) -> Vec<u32> {
    clean.bytes().map(|b| u32::from(b - b'0')).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

// =============================================================================
// CPF
// =============================================================================

/// Computes the two CPF check digits for a 9-digit base.
///
/// ## Returns
/// `None` when `base` is not exactly 9 ASCII digits.
pub fn cpf_check_digits(base: &str) -> Option<(u32, u32)> {
    if base.len() != 9 || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = to_digits(base);

    let first_sum: u32 = digits
        .iter()
        .zip((2..=10).rev())
        .map(|(d, w)| d * w)
        .sum();
    let first = cpf_digit(first_sum);

    let second_sum: u32 = digits
        .iter()
        .zip((3..=11).rev())
        .map(|(d, w)| d * w)
        .sum::<u32>()
        + first * 2;
    let second = cpf_digit(second_sum);

    Some((first, second))
}

fn cpf_digit(sum: u32) -> u32 {
    match (sum * 10) % 11 {
        10 => 0,
        d => d,
    }
}

/// Validates an individual taxpayer ID (CPF).
///
/// ## Rules
/// - Formatting characters are ignored (`529.982.247-25` == `52998224725`)
/// - Exactly 11 digits must remain
/// - Repeated-digit sequences are rejected
/// - Both check digits must match
///
/// ## Example
/// ```rust
/// use cadastro_core::document::validate_cpf;
///
/// assert!(validate_cpf("529.982.247-25"));
/// assert!(!validate_cpf("529.982.247-26"));
/// assert!(!validate_cpf("000.000.000-00"));
/// ```
pub fn validate_cpf(raw: &str) -> bool {
    let clean = only_digits(raw);
    if clean.len() != CPF_LEN {
        return false;
    }

    let digits = to_digits(&clean);
    if all_same(&digits) {
        return false;
    }

    match cpf_check_digits(&clean[..9]) {
        Some((first, second)) => digits[9] == first && digits[10] == second,
        None => false,
    }
}

// =============================================================================
// CNPJ
// =============================================================================

/// Computes the two CNPJ check digits for a 12-digit base.
///
/// ## Returns
/// `None` when `base` is not exactly 12 ASCII digits.
pub fn cnpj_check_digits(base: &str) -> Option<(u32, u32)> {
    if base.len() != 12 || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut digits = to_digits(base);

    let first = cnpj_digit(&digits, &CNPJ_WEIGHTS_FIRST);
    digits.push(first);
    let second = cnpj_digit(&digits, &CNPJ_WEIGHTS_SECOND);

    Some((first, second))
}

fn cnpj_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Validates a business taxpayer ID (CNPJ).
///
/// Cleaning is idempotent: an already clean input is accepted or rejected
/// exactly as its formatted counterpart.
///
/// ## Example
/// ```rust
/// use cadastro_core::document::validate_cnpj;
///
/// assert!(validate_cnpj("11.222.333/0001-81"));
/// assert!(validate_cnpj("11222333000181"));
/// assert!(!validate_cnpj("11222333000182"));
/// ```
pub fn validate_cnpj(raw: &str) -> bool {
    let clean = only_digits(raw);
    if clean.len() != CNPJ_LEN {
        return false;
    }

    let digits = to_digits(&clean);
    if all_same(&digits) {
        return false;
    }

    match cnpj_check_digits(&clean[..12]) {
        Some((first, second)) => digits[12] == first && digits[13] == second,
        None => false,
    }
}

/// Masks a document for logging, keeping only the last two digits.
///
/// ```rust
/// use cadastro_core::document::mask;
///
/// assert_eq!(mask("529.982.247-25"), "*********25");
/// ```
pub fn mask(raw: &str) -> String {
    let clean = only_digits(raw);
    let keep = clean.len().min(2);
    let hidden = clean.len() - keep;
    format!("{}{}", "*".repeat(hidden), &clean[hidden..])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_only_digits() {
        assert_eq!(only_digits("111.444.777-35"), "11144477735");
        assert_eq!(only_digits("abc"), "");
        assert_eq!(only_digits(""), "");
    }

    #[test]
    fn test_valid_cpfs() {
        assert!(validate_cpf("52998224725"));
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf("111.444.777-35"));
        assert!(validate_cpf(" 111 444 777 35 "));
    }

    #[test]
    fn test_cpf_wrong_check_digits() {
        assert!(!validate_cpf("52998224726"));
        assert!(!validate_cpf("52998224715"));
        // first base digit bumped 5 → 6
        assert!(!validate_cpf("62998224725"));
    }

    #[test]
    fn test_cpf_wrong_length() {
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247250"));
        assert!(!validate_cpf(""));
    }

    #[test]
    fn test_cpf_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(CPF_LEN);
            assert!(!validate_cpf(&cpf), "{cpf} should be rejected");
        }
    }

    #[test]
    fn test_cpf_check_digits() {
        assert_eq!(cpf_check_digits("529982247"), Some((2, 5)));
        assert_eq!(cpf_check_digits("111444777"), Some((3, 5)));
        assert_eq!(cpf_check_digits("12345678"), None);
        assert_eq!(cpf_check_digits("12345678a"), None);
    }

    #[test]
    fn test_valid_cnpjs() {
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(validate_cnpj("11222333000181"));
        assert!(validate_cnpj("45.723.174/0001-10"));
    }

    #[test]
    fn test_cnpj_invalid() {
        assert!(!validate_cnpj("11222333000182"));
        assert!(!validate_cnpj("11222333000191"));
        assert!(!validate_cnpj("1122233300018"));
        assert!(!validate_cnpj(""));
    }

    #[test]
    fn test_cnpj_repeated_digits_rejected() {
        for d in 0..=9 {
            let cnpj = d.to_string().repeat(CNPJ_LEN);
            assert!(!validate_cnpj(&cnpj), "{cnpj} should be rejected");
        }
    }

    #[test]
    fn test_cnpj_check_digits() {
        assert_eq!(cnpj_check_digits("112223330001"), Some((8, 1)));
        assert_eq!(cnpj_check_digits("457231740001"), Some((1, 0)));
        assert_eq!(cnpj_check_digits("11222333000"), None);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("11.222.333/0001-81"), "************81");
        assert_eq!(mask("7"), "7");
        assert_eq!(mask(""), "");
    }

    fn build_cpf(base: &str) -> String {
        let (a, b) = cpf_check_digits(base).unwrap();
        format!("{base}{a}{b}")
    }

    fn build_cnpj(base: &str) -> String {
        let (a, b) = cnpj_check_digits(base).unwrap();
        format!("{base}{a}{b}")
    }

    proptest! {
        #[test]
        fn prop_generated_cpf_is_valid(base in "[0-9]{9}") {
            let cpf = build_cpf(&base);
            let repeated = cpf.bytes().all(|b| b == cpf.as_bytes()[0]);
            prop_assert_eq!(validate_cpf(&cpf), !repeated);
        }

        #[test]
        fn prop_cpf_check_digit_mutation_fails(
            base in "[0-9]{9}",
            pos in 9usize..11,
            bump in 1u8..10,
        ) {
            let cpf = build_cpf(&base);
            let mut bytes = cpf.into_bytes();
            bytes[pos] = b'0' + (bytes[pos] - b'0' + bump) % 10;
            let mutated = String::from_utf8(bytes).unwrap();
            prop_assert!(!validate_cpf(&mutated));
        }

        #[test]
        fn prop_cpf_agrees_with_recomputed_digits(
            base in "[0-9]{9}",
            pos in 0usize..9,
            bump in 1u8..10,
        ) {
            let cpf = build_cpf(&base);
            let mut bytes = cpf.clone().into_bytes();
            bytes[pos] = b'0' + (bytes[pos] - b'0' + bump) % 10;
            let mutated = String::from_utf8(bytes).unwrap();
            let expected = build_cpf(&mutated[..9]);
            let repeated = mutated.bytes().all(|b| b == mutated.as_bytes()[0]);
            prop_assert_eq!(validate_cpf(&mutated), expected == mutated && !repeated);
        }

        #[test]
        fn prop_cnpj_cleaning_is_idempotent(base in "[0-9]{12}") {
            let clean = build_cnpj(&base);
            let formatted = format!(
                "{}.{}.{}/{}-{}",
                &clean[..2], &clean[2..5], &clean[5..8], &clean[8..12], &clean[12..]
            );
            prop_assert_eq!(validate_cnpj(&clean), validate_cnpj(&formatted));
            prop_assert_eq!(validate_cnpj(&only_digits(&clean)), validate_cnpj(&clean));
        }

        #[test]
        fn prop_cnpj_check_digit_mutation_fails(
            base in "[0-9]{12}",
            pos in 12usize..14,
            bump in 1u8..10,
        ) {
            let cnpj = build_cnpj(&base);
            let mut bytes = cnpj.into_bytes();
            bytes[pos] = b'0' + (bytes[pos] - b'0' + bump) % 10;
            let mutated = String::from_utf8(bytes).unwrap();
            prop_assert!(!validate_cnpj(&mutated));
        }
    }
}
