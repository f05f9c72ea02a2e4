//! Drug name normalization
//!
//! Reduces a spoken or typed drug name to a consonant skeleton so that
//! Persian transliterations, vowel differences and common spelling
//! confusions still compare equal:
//!
//! 1. lower-case, strip whitespace (including the Persian zero-width non-joiner)
//! 2. transliterate Persian letters and digits to Latin
//! 3. rewrite acoustically confusable Latin sequences
//! 4. drop vowels
//! 5. collapse runs of the same character
//!
//! Steps 3 and 5 are repeated until the skeleton is stable, so a sequence
//! exposed by vowel removal (`"upaha"` -> `"ph"`) is folded too and
//! `normalize(normalize(x)) == normalize(x)` holds.

/// Persian (and Arabic variant) letters and digits to Latin
pub const TRANSLITERATION: &[(char, &str)] = &[
    ('ا', "a"),
    ('آ', "a"),
    ('أ', "a"),
    ('إ', "e"),
    ('ب', "b"),
    ('پ', "p"),
    ('ت', "t"),
    ('ث', "s"),
    ('ج', "j"),
    ('چ', "ch"),
    ('ح', "h"),
    ('خ', "kh"),
    ('د', "d"),
    ('ذ', "z"),
    ('ر', "r"),
    ('ز', "z"),
    ('ژ', "zh"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "s"),
    ('ض', "z"),
    ('ط', "t"),
    ('ظ', "z"),
    ('ع', "a"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "gh"),
    ('ک', "k"),
    ('ك', "k"),
    ('گ', "g"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('و', "o"),
    ('ه', "h"),
    ('ة', "h"),
    ('ی', "i"),
    ('ي', "i"),
    ('ى', "i"),
    ('ئ', "i"),
    ('ء', ""),
    ('۰', "0"),
    ('۱', "1"),
    ('۲', "2"),
    ('۳', "3"),
    ('۴', "4"),
    ('۵', "5"),
    ('۶', "6"),
    ('۷', "7"),
    ('۸', "8"),
    ('۹', "9"),
];

/// Confusable Latin sequences, applied in order
pub const CONFUSABLE_PAIRS: &[(&str, &str)] = &[
    ("ck", "k"),
    ("ph", "f"),
    ("x", "ks"),
    ("w", "v"),
    ("c", "s"),
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

const ZERO_WIDTH_NON_JOINER: char = '\u{200c}';

/// Normalize a drug name into its comparable skeleton.
///
/// Returns an empty string for empty or whitespace-only input; callers
/// must treat that as "no search term", never as a wildcard.
pub fn normalize(raw_name: &str) -> String {
    let lowered: String = raw_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ZERO_WIDTH_NON_JOINER)
        .collect();

    let mut skeleton = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match transliterate(c) {
            Some(latin) => skeleton.push_str(latin),
            None => skeleton.push(c),
        }
    }

    let mut skeleton = fold_confusables(&skeleton);
    skeleton.retain(|c| !VOWELS.contains(&c));
    skeleton = collapse_runs(&skeleton);

    loop {
        let next = collapse_runs(&fold_confusables(&skeleton));
        if next == skeleton {
            return skeleton;
        }
        skeleton = next;
    }
}

fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATION
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

fn fold_confusables(input: &str) -> String {
    CONFUSABLE_PAIRS
        .iter()
        .fold(input.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn collapse_runs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = None;
    for c in input.chars() {
        if last != Some(c) {
            out.push(c);
        }
        last = Some(c);
    }
    out
}
