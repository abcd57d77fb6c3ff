// Keyword tables per field. Each table lists the English label first and the
// Hindi variants after it; adding a locale means adding entries here.

/// Labels that introduce the date of birth on the front side.
pub const DOB_LABELS: &[&str] = &["Date of Birth", "DOB", "जन्म तिथि"];

/// Labels that may directly precede the date in the reordered fallback form.
pub const DOB_SHORT_LABELS: &[&str] = &["जन्म तिथि", "DOB"];

/// Lower-case gender tokens, including the single-letter forms.
pub const MALE_WORDS: &[&str] = &["male", "m", "पुरुष"];
pub const FEMALE_WORDS: &[&str] = &["female", "f", "महिला"];

/// Whole words accepted by the primary gender pattern.
pub const GENDER_WORDS: &[&str] = &["Male", "Female", "Others", "Other", "पुरुष", "महिला", "अन्य"];

/// Single-letter gender tokens tried when no full word is present.
pub const GENDER_LETTERS: &[&str] = &["M", "F"];

/// Words that mark a line above the date of birth as not being a name.
pub const NAME_NOISE_WORDS: &[&str] = &[
    "Government",
    "India",
    "Male",
    "Female",
    "DOB",
    "Date",
    "Year",
    "Month",
    "Day",
    "Unique",
    "Identification",
    "Authority",
];

/// Words that may follow a name in the collapsed front text.
pub const NAME_TRAILING_GENDER: &[&str] = &["Male", "Female"];

/// Name-anchoring date labels used by the regex fallback (English only).
pub const NAME_TRAILING_DOB: &[&str] = &["DOB", "Date of Birth"];

/// Relation prefixes printed before the guardian's name: son/care/daughter of.
pub const GUARDIAN_PREFIX_LETTERS: &str = "SCD";

pub const FATHER_LABELS: &[&str] = &["Father", "पिता"];

pub const ADDRESS_LABELS: &[&str] = &["Address", "पता"];

/// Issuer wording that never belongs to an address.
pub const ADDRESS_BOILERPLATE_WORDS: &[&str] =
    &["Government", "India", "Authority", "Unique", "Identification"];
