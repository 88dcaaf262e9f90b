//! Individual suspicion heuristics. Each predicate looks at one aspect of an
//! address and is deliberately conservative: ordinary names, years and
//! light punctuation never match.

use regex::Regex;
use std::sync::LazyLock;

static LOWER_ALNUM_35: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{35,}$").expect("valid pattern"));

static LOWER_ALNUM_25: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{25,}$").expect("valid pattern"));

static REPEATED_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3,}|_{3,}|-{3,}").expect("valid pattern"));

static RANDOM_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{25,}\.(com|net|org)$").expect("valid pattern"));

static UPPER_ALNUM_25: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{25,}$").expect("valid pattern"));

static DOTTED_NUMERIC_SEGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]+\.[0-9]+\.[0-9]+\.[0-9]+@").expect("valid pattern")
});

const MARKETING_KEYWORDS: [&str; 7] = [
    "unsub",
    "unsubscribe",
    "remove",
    "optout",
    "noreply",
    "no-reply",
    "donotreply",
];

/// Longest run of one repeated character that is still considered normal.
const MAX_NORMAL_RUN: usize = 8;

/// An address split at its first `@`; both halves are empty when there is none.
#[derive(Debug, Clone, Copy)]
pub struct AddressParts<'a> {
    pub email: &'a str,
    pub local: &'a str,
    pub domain: &'a str,
}

impl<'a> AddressParts<'a> {
    pub fn split(email: &'a str) -> Self {
        let (local, domain) = email.split_once('@').unwrap_or(("", ""));
        Self {
            email,
            local,
            domain,
        }
    }

    fn local_len(&self) -> usize {
        self.local.chars().count()
    }
}

/// Fewer than 15% of the characters are `a`, `e`, `i`, `o` or `u`.
fn low_vowel_density(text: &str) -> bool {
    let len = text.chars().count();
    let vowels = text.chars().filter(|c| "aeiou".contains(*c)).count();
    vowels * 100 < len * 15
}

pub fn random_long_local(parts: &AddressParts) -> bool {
    parts.local_len() > 40 && LOWER_ALNUM_35.is_match(parts.local) && low_vowel_density(parts.local)
}

pub fn repeated_separators(parts: &AddressParts) -> bool {
    REPEATED_SEPARATORS.is_match(parts.local)
}

/// More than 70% digits in a local part longer than 15 characters.
pub fn mostly_digits(parts: &AddressParts) -> bool {
    let len = parts.local_len();
    if len <= 15 {
        return false;
    }
    let digits = parts.local.chars().filter(|c| c.is_numeric()).count();
    digits * 10 > len * 7
}

pub fn random_domain(parts: &AddressParts) -> bool {
    RANDOM_DOMAIN.is_match(parts.domain)
}

pub fn marketing_noise(parts: &AddressParts) -> bool {
    let email = parts.email.to_lowercase();
    MARKETING_KEYWORDS.iter().any(|keyword| email.contains(keyword))
        && parts.local_len() > 30
        && LOWER_ALNUM_25.is_match(parts.local)
        && low_vowel_density(parts.local)
}

pub fn long_character_run(parts: &AddressParts) -> bool {
    let mut previous = None;
    let mut run = 0;

    for c in parts.email.to_lowercase().chars() {
        // A run never spans a line break
        if c == '\n' {
            previous = None;
            run = 0;
            continue;
        }
        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run > MAX_NORMAL_RUN {
            return true;
        }
    }

    false
}

/// Matches the whole address against an upper-case alphanumeric run. An
/// address always contains `@`, so this never fires.
pub fn encoded_uppercase(parts: &AddressParts) -> bool {
    parts.local_len() > 30
        && UPPER_ALNUM_25.is_match(parts.email)
        && parts.local.chars().any(|c| c.is_ascii_uppercase())
        && parts.local.chars().any(|c| c.is_ascii_digit())
}

pub fn dotted_numeric_segments(parts: &AddressParts) -> bool {
    parts.local_len() > 35 && DOTTED_NUMERIC_SEGMENTS.is_match(parts.email)
}
