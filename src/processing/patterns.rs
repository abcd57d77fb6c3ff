// Compiled pattern tables for field extraction. Keyword alternations are built
// from the tables in `models::keywords`, so locale coverage lives there.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::keywords::*;

/// Joins keywords into a non-capturing regex alternation.
pub fn alternation(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|word| regex::escape(word)).collect();
    format!("(?:{})", escaped.join("|"))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {}: {}", pattern, e))
}

const DATE: &str = r"([0-9]{2}/[0-9]{2}/[0-9]{4})";
const NAME_RUN: &str = r"([A-Z][a-zA-Z. ]+)";

lazy_static! {
    // Date of birth, in precedence order
    pub static ref DOB_LABELLED: Regex =
        compile(&format!(r"(?i){}\s*:?\s*{}", alternation(DOB_LABELS), DATE));
    pub static ref DOB_BARE: Regex = compile(DATE);
    pub static ref DOB_REORDERED: Regex =
        compile(&format!(r"(?i){}\s*{}", alternation(DOB_SHORT_LABELS), DATE));

    // Identification number
    pub static ref ID_SPACED: Regex = compile(r"([0-9]{4}\s+[0-9]{4}\s+[0-9]{4})");
    pub static ref ID_SINGLE_SPACED: Regex = compile(r"([0-9]{4}\s[0-9]{4}\s[0-9]{4})");
    pub static ref ID_CONTIGUOUS: Regex = compile(r"([0-9]{12})");
    pub static ref ID_GROUPS: Regex = compile(r"^([0-9]{4})([0-9]{4})([0-9]{4})$");

    // Gender
    pub static ref GENDER_WORD: Regex =
        compile(&format!(r"(?i)\b({})\b", alternation(GENDER_WORDS)));
    pub static ref GENDER_LETTER: Regex =
        compile(&format!(r"(?i)\b({})\b", alternation(GENDER_LETTERS)));

    // Name
    pub static ref NAME_LINE_DOB_MARKER: Regex = compile(&format!("(?i){}", alternation(DOB_LABELS)));
    pub static ref NAME_LINE_NOISE: Regex = compile(&format!("(?i){}", alternation(NAME_NOISE_WORDS)));
    pub static ref NAME_BEFORE_DOB: Regex = compile(&format!(
        r"(?i)([A-Z][a-zA-Z\s]+)\s+{}",
        alternation(NAME_TRAILING_DOB)
    ));
    pub static ref NAME_BEFORE_GENDER: Regex = compile(&format!(
        r"(?i)([A-Z][a-zA-Z\s]+)\s+{}",
        alternation(NAME_TRAILING_GENDER)
    ));
    pub static ref EDGE_FILLER_START: Regex = compile(r"^[=\-\s]+");
    pub static ref EDGE_FILLER_END: Regex = compile(r"[=\-\s]+$");
    // ASCII word class: a leading Hindi rendering of the name is stripped too
    pub static ref EDGE_NON_WORD_START: Regex = compile(r"^[^A-Za-z0-9_]+");
    pub static ref EDGE_NON_WORD_END: Regex = compile(r"[^A-Za-z0-9_]+$");

    // Guardian name
    pub static ref GUARDIAN_RELATION: Regex = compile(&format!(
        r"(?i)\b[{}]/O[:\-]?\s*{}",
        GUARDIAN_PREFIX_LETTERS, NAME_RUN
    ));
    pub static ref GUARDIAN_FATHER: Regex = compile(&format!(
        r"(?i){}\s*:?\s*{}",
        alternation(FATHER_LABELS),
        NAME_RUN
    ));
    pub static ref GUARDIAN_CARE_OF: Regex = compile(&format!(r"(?i)C/O[:\-]?\s*{}", NAME_RUN));

    // Address
    pub static ref ADDRESS_LABELLED: Vec<Regex> = ADDRESS_LABELS
        .iter()
        .map(|label| compile(&format!(r"(?is){}\s*:?\s*(.*?)(?:[0-9]{{6}}|$)", regex::escape(label))))
        .collect();
    pub static ref ADDRESS_GUARDIAN_FRAGMENT: Regex = compile(&format!(
        r"(?i)\b[{}]/O[:\-]?\s*[^\n,]+,?",
        GUARDIAN_PREFIX_LETTERS
    ));
    pub static ref ADDRESS_GUARDIAN_LINE: Regex =
        compile(&format!(r"(?i)[{}]/O", GUARDIAN_PREFIX_LETTERS));
    pub static ref ADDRESS_BOILERPLATE: Regex =
        compile(&format!("(?i){}", alternation(ADDRESS_BOILERPLATE_WORDS)));
    pub static ref DIGITS_ONLY: Regex = compile(r"^[0-9]+$");
    pub static ref SYMBOLS_ONLY: Regex = compile(r"^[^\w\s]*$");
    pub static ref HAS_LATIN_LETTER: Regex = compile(r"[A-Za-z]");
    pub static ref DISALLOWED_ADDRESS_CHARS: Regex = compile(r"[^\w\s,.\-]");
    pub static ref WHITESPACE_RUN: Regex = compile(r"\s+");
    pub static ref REPEATED_COMMAS: Regex = compile(r",(?:\s*,)+");
}
