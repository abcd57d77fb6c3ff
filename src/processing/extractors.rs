// Field-specific extraction for the front and back of an Aadhaar card.
// Every field is an ordered list of strategies; the first one that yields a
// value wins and the rest are never tried.
use log::trace;

use super::normalizer::collapse_whitespace;
use super::patterns::*;
use super::strategy::{capture, first_success, DocumentSide, Strategy};
use crate::models::keywords::{FEMALE_WORDS, MALE_WORDS};
use crate::models::{Field, Gender};

pub const DOB_STRATEGIES: &[Strategy] = &[
    Strategy::new("labelled date", dob_labelled),
    Strategy::new("bare date", dob_bare),
    Strategy::new("reordered label", dob_reordered),
];

// The first two overlap; both are kept so precedence matches the observed behaviour.
pub const ID_NUMBER_STRATEGIES: &[Strategy] = &[
    Strategy::new("spaced groups", id_spaced),
    Strategy::new("single-spaced groups", id_single_spaced),
    Strategy::new("contiguous digits", id_contiguous),
];

pub const GENDER_STRATEGIES: &[Strategy] = &[
    Strategy::new("gender word", gender_word),
    Strategy::new("gender letter", gender_letter),
];

pub const NAME_STRATEGIES: &[Strategy] = &[
    Strategy::new("line above date of birth", name_above_dob_line),
    Strategy::new("words before date label", name_before_dob_label),
    Strategy::new("words before gender", name_before_gender),
];

// C/O is also covered by the relation pattern; the dedicated one stays last.
pub const GUARDIAN_STRATEGIES: &[Strategy] = &[
    Strategy::new("relation prefix", guardian_relation),
    Strategy::new("father label", guardian_father),
    Strategy::new("care-of prefix", guardian_care_of),
];

pub const ADDRESS_STRATEGIES: &[Strategy] = &[
    Strategy::new("address label", address_after_label),
    Strategy::new("free lines", address_from_lines),
];

pub struct FieldExtractor;

impl FieldExtractor {
    /// Date of birth from the front side, verbatim as printed (DD/MM/YYYY).
    pub fn extract_dob(front: &DocumentSide<'_>) -> Option<String> {
        first_success(Field::DateOfBirth, front, DOB_STRATEGIES)
    }

    /// Twelve-digit card number from the front side, in `#### #### ####` form
    /// when it was read without separators.
    pub fn extract_id_number(front: &DocumentSide<'_>) -> Option<String> {
        first_success(Field::IdNumber, front, ID_NUMBER_STRATEGIES).map(|matched| canonical_id_number(&matched))
    }

    pub fn extract_gender(front: &DocumentSide<'_>) -> Option<Gender> {
        first_success(Field::Gender, front, GENDER_STRATEGIES).map(|token| classify_gender(&token))
    }

    /// Holder's name from the front side. The line-position heuristic runs
    /// first; the regex fallbacks only run when it finds nothing.
    pub fn extract_name(front: &DocumentSide<'_>) -> Option<String> {
        first_success(Field::Name, front, NAME_STRATEGIES)
    }

    pub fn extract_guardian_name(back: &DocumentSide<'_>) -> Option<String> {
        first_success(Field::GuardianName, back, GUARDIAN_STRATEGIES)
    }

    pub fn extract_address(back: &DocumentSide<'_>) -> Option<String> {
        first_success(Field::Address, back, ADDRESS_STRATEGIES)
    }
}

fn dob_labelled(side: &DocumentSide<'_>) -> Option<String> {
    capture(&DOB_LABELLED, side.collapsed())
}

fn dob_bare(side: &DocumentSide<'_>) -> Option<String> {
    capture(&DOB_BARE, side.collapsed())
}

fn dob_reordered(side: &DocumentSide<'_>) -> Option<String> {
    capture(&DOB_REORDERED, side.collapsed())
}

fn id_spaced(side: &DocumentSide<'_>) -> Option<String> {
    capture(&ID_SPACED, side.collapsed())
}

fn id_single_spaced(side: &DocumentSide<'_>) -> Option<String> {
    capture(&ID_SINGLE_SPACED, side.collapsed())
}

fn id_contiguous(side: &DocumentSide<'_>) -> Option<String> {
    capture(&ID_CONTIGUOUS, side.collapsed())
}

/// Regroups a 12-character digit run as `#### #### ####`; anything else is
/// already spaced and kept verbatim.
pub fn canonical_id_number(matched: &str) -> String {
    if matched.len() == 12 {
        ID_GROUPS.replace(matched, "$1 $2 $3").into_owned()
    } else {
        matched.to_string()
    }
}

fn gender_word(side: &DocumentSide<'_>) -> Option<String> {
    capture(&GENDER_WORD, side.collapsed())
}

fn gender_letter(side: &DocumentSide<'_>) -> Option<String> {
    capture(&GENDER_LETTER, side.collapsed())
}

pub fn classify_gender(token: &str) -> Gender {
    let token = token.to_lowercase();
    if MALE_WORDS.contains(&token.as_str()) {
        Gender::Male
    } else if FEMALE_WORDS.contains(&token.as_str()) {
        Gender::Female
    } else {
        Gender::Others
    }
}

fn name_above_dob_line(side: &DocumentSide<'_>) -> Option<String> {
    let lines = side.lines();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| NAME_LINE_DOB_MARKER.is_match(line))
        .find_map(|(index, _)| {
            let candidate = lines.get(index.checked_sub(1)?)?;
            if NAME_LINE_NOISE.is_match(candidate) {
                trace!("skipping name candidate with boilerplate: {:?}", candidate);
                return None;
            }
            accept_name(clean_name_line(candidate))
        })
}

fn name_before_dob_label(side: &DocumentSide<'_>) -> Option<String> {
    capture(&NAME_BEFORE_DOB, side.collapsed()).and_then(|name| accept_name(strip_edge_filler(&name)))
}

fn name_before_gender(side: &DocumentSide<'_>) -> Option<String> {
    capture(&NAME_BEFORE_GENDER, side.collapsed()).and_then(|name| accept_name(strip_edge_filler(&name)))
}

/// Removes `=`/`-`/whitespace runs at both ends.
fn strip_edge_filler(text: &str) -> String {
    let text = EDGE_FILLER_START.replace(text.trim(), "");
    EDGE_FILLER_END.replace(&text, "").into_owned()
}

/// Strips filler and then anything outside `[A-Za-z0-9_]` from both ends of a line.
pub fn clean_name_line(line: &str) -> String {
    let text = strip_edge_filler(line);
    let text = EDGE_NON_WORD_START.replace(&text, "");
    let text = EDGE_NON_WORD_END.replace(&text, "");
    text.trim().to_string()
}

fn accept_name(name: String) -> Option<String> {
    if name.chars().count() > 1 {
        Some(name)
    } else {
        trace!("rejecting name candidate too short: {:?}", name);
        None
    }
}

fn guardian_relation(side: &DocumentSide<'_>) -> Option<String> {
    capture(&GUARDIAN_RELATION, side.collapsed()).map(|name| name.trim().to_string())
}

fn guardian_father(side: &DocumentSide<'_>) -> Option<String> {
    capture(&GUARDIAN_FATHER, side.collapsed()).map(|name| name.trim().to_string())
}

fn guardian_care_of(side: &DocumentSide<'_>) -> Option<String> {
    capture(&GUARDIAN_CARE_OF, side.collapsed()).map(|name| name.trim().to_string())
}

fn address_after_label(side: &DocumentSide<'_>) -> Option<String> {
    ADDRESS_LABELLED.iter().find_map(|pattern| {
        let span = capture(pattern, side.raw)?;
        let span = ADDRESS_GUARDIAN_FRAGMENT.replace(&span, "");
        non_empty(clean_address(&span))
    })
}

fn address_from_lines(side: &DocumentSide<'_>) -> Option<String> {
    let kept: Vec<&str> = side
        .lines()
        .iter()
        .map(String::as_str)
        .filter(|line| is_address_line(line))
        .collect();
    if kept.is_empty() {
        return None;
    }
    non_empty(clean_address(&kept.join(", ")))
}

fn is_address_line(line: &str) -> bool {
    if ADDRESS_BOILERPLATE.is_match(line) || ADDRESS_GUARDIAN_LINE.is_match(line) {
        trace!("skipping address line: {:?}", line);
        return false;
    }
    if DIGITS_ONLY.is_match(line) || SYMBOLS_ONLY.is_match(line) {
        return false;
    }
    line.chars().count() >= 3 && HAS_LATIN_LETTER.is_match(line)
}

/// Single-spaced address with stray symbols blanked and comma runs merged.
pub fn clean_address(text: &str) -> String {
    let text = collapse_whitespace(text);
    let text = DISALLOWED_ADDRESS_CHARS.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = REPEATED_COMMAS.replace_all(&text, ",");
    text.trim().to_string()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
