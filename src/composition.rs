//! Structural analysis of example credential values.
//! Infers the length, character classes and a probable token prefix
//! (as popularised by GitHub: `ghp_`, `github_pat_`, `glpat-`) of a sample secret.

use log::debug;
use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::constants::{MIN_PREFIX_SAMPLE_LEN, PREFIX_DELIMITERS, PREFIX_WINDOW_LEN};

/// Character classes present in a credential value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Charset {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

/// Inferred shape of a credential value.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValueComposition {
    /// Number of characters (not bytes)
    pub length: usize,
    pub charset: Charset,
    /// Detected token prefix, `None` when nothing plausible was found
    pub prefix: Option<String>,
}

/// Classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

fn classify(c: char) -> Option<CharClass> {
    match get_general_category(c) {
        GeneralCategory::UppercaseLetter => Some(CharClass::Uppercase),
        GeneralCategory::LowercaseLetter => Some(CharClass::Lowercase),
        GeneralCategory::DecimalNumber => Some(CharClass::Digit),
        GeneralCategory::MathSymbol
        | GeneralCategory::CurrencySymbol
        | GeneralCategory::ModifierSymbol
        | GeneralCategory::OtherSymbol => Some(CharClass::Symbol),
        _ => None,
    }
}

/// Whether `c` is an uppercase letter (general category Lu).
pub fn is_uppercase_letter(c: char) -> bool {
    classify(c) == Some(CharClass::Uppercase)
}

/// Whether `c` is a lowercase letter (general category Ll).
pub fn is_lowercase_letter(c: char) -> bool {
    classify(c) == Some(CharClass::Lowercase)
}

/// Analyzes an example credential value.
///
/// # Arguments
/// * `sample` - Example credential as pasted by the user
///
/// # Returns
/// * `ValueComposition` - Length, charset and possible prefix of the sample
pub fn analyze(sample: &str) -> ValueComposition {
    let mut charset = Charset::default();
    let mut length = 0;

    for c in sample.chars() {
        length += 1;
        match classify(c) {
            Some(CharClass::Uppercase) => charset.uppercase = true,
            Some(CharClass::Lowercase) => charset.lowercase = true,
            Some(CharClass::Digit) => charset.digits = true,
            Some(CharClass::Symbol) => charset.symbols = true,
            None => {}
        }
    }

    let composition = ValueComposition { length, charset, prefix: detect_prefix(sample) };
    debug!("Analyzed example credential: {:?}", composition);
    composition
}

/// Tries to find a token prefix at the start of `sample`.
///
/// The prefix must start with a lowercase letter and end with a delimiter
/// within the first [`PREFIX_WINDOW_LEN`] characters. Samples shorter than
/// [`MIN_PREFIX_SAMPLE_LEN`] characters are too short to carry one.
pub fn detect_prefix(sample: &str) -> Option<String> {
    if sample.chars().count() < MIN_PREFIX_SAMPLE_LEN {
        return None;
    }

    let window: String = sample.chars().take(PREFIX_WINDOW_LEN).collect();
    if !window.chars().next().is_some_and(is_lowercase_letter) {
        return None;
    }

    let prefix = window.trim_end_matches(|c: char| !PREFIX_DELIMITERS.contains(&c));
    if prefix.is_empty() {
        None
    } else {
        Some(prefix.to_string())
    }
}
