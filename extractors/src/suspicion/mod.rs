mod rules;

pub use rules::AddressParts;

use std::fmt;

/// The heuristics, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuspicionRule {
    RandomLongLocal,
    RepeatedSeparators,
    MostlyDigits,
    RandomDomain,
    MarketingNoise,
    LongCharacterRun,
    EncodedUppercase,
    DottedNumericSegments,
}

impl SuspicionRule {
    pub const ALL: [SuspicionRule; 8] = [
        SuspicionRule::RandomLongLocal,
        SuspicionRule::RepeatedSeparators,
        SuspicionRule::MostlyDigits,
        SuspicionRule::RandomDomain,
        SuspicionRule::MarketingNoise,
        SuspicionRule::LongCharacterRun,
        SuspicionRule::EncodedUppercase,
        SuspicionRule::DottedNumericSegments,
    ];

    pub fn matches(&self, parts: &AddressParts) -> bool {
        match self {
            SuspicionRule::RandomLongLocal => rules::random_long_local(parts),
            SuspicionRule::RepeatedSeparators => rules::repeated_separators(parts),
            SuspicionRule::MostlyDigits => rules::mostly_digits(parts),
            SuspicionRule::RandomDomain => rules::random_domain(parts),
            SuspicionRule::MarketingNoise => rules::marketing_noise(parts),
            SuspicionRule::LongCharacterRun => rules::long_character_run(parts),
            SuspicionRule::EncodedUppercase => rules::encoded_uppercase(parts),
            SuspicionRule::DottedNumericSegments => rules::dotted_numeric_segments(parts),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SuspicionRule::RandomLongLocal => "random_long_local",
            SuspicionRule::RepeatedSeparators => "repeated_separators",
            SuspicionRule::MostlyDigits => "mostly_digits",
            SuspicionRule::RandomDomain => "random_domain",
            SuspicionRule::MarketingNoise => "marketing_noise",
            SuspicionRule::LongCharacterRun => "long_character_run",
            SuspicionRule::EncodedUppercase => "encoded_uppercase",
            SuspicionRule::DottedNumericSegments => "dotted_numeric_segments",
        }
    }
}

impl fmt::Display for SuspicionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The first rule that flags `email`, if any.
pub fn first_matching_rule(email: &str) -> Option<SuspicionRule> {
    let parts = AddressParts::split(email);
    SuspicionRule::ALL
        .into_iter()
        .find(|rule| rule.matches(&parts))
}

pub fn is_suspicious(email: &str) -> bool {
    first_matching_rule(email).is_some()
}
