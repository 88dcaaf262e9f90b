use crate::email_scan::is_email_shaped;
use regex::Regex;
use std::sync::LazyLock;

static CARD_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)BEGIN:VCARD(.*?)END:VCARD").expect("valid vCard span pattern")
});

/// Bodies of every `BEGIN:VCARD … END:VCARD` block. Content without any
/// block is treated as a single card body.
pub fn split_cards(content: &str) -> Vec<&str> {
    let bodies: Vec<&str> = CARD_SPAN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|body| body.as_str())
        .collect();

    if bodies.is_empty() {
        vec![content]
    } else {
        bodies
    }
}

/// Join folded continuation lines (leading space or tab) onto the line before them.
pub fn unfold_lines(body: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw in body.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some(previous) = lines.last_mut() {
                previous.push_str(continuation);
            }
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

/// Split `NAME;PARAM=..:value` into the bare property name and its value.
fn property(line: &str) -> Option<(&str, &str)> {
    let (head, value) = line.split_once(':')?;
    let name = head.split(';').next().unwrap_or(head);
    Some((name, value))
}

/// The fields of one contact card that matter for address extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub full_name: Option<String>,
    pub name_parts: Option<Vec<String>>,
    pub emails: Vec<String>,
}

impl Card {
    pub fn parse(body: &str) -> Self {
        let mut card = Card::default();

        for line in unfold_lines(body) {
            let Some((name, value)) = property(&line) else {
                continue;
            };

            if name.eq_ignore_ascii_case("FN") {
                if card.full_name.is_none() {
                    card.full_name = Some(value.trim().to_string());
                }
            } else if name.eq_ignore_ascii_case("N") {
                if card.name_parts.is_none() {
                    card.name_parts = Some(value.split(';').map(|part| part.trim().to_string()).collect());
                }
            } else if name.eq_ignore_ascii_case("EMAIL") {
                card.emails.push(value.to_string());
            }
        }

        card
    }

    /// `(first, last)` from the structured name, falling back to splitting
    /// the display name when the structured one gave nothing.
    pub fn names(&self) -> (String, String) {
        let mut first_name = String::new();
        let mut last_name = String::new();

        match self.name_parts.as_deref() {
            Some([last, first, ..]) => {
                last_name = last.clone();
                first_name = first.clone();
            }
            Some([only]) => last_name = only.clone(),
            _ => {}
        }

        if first_name.is_empty() && last_name.is_empty() {
            if let Some(full_name) = self.full_name.as_deref().filter(|name| !name.is_empty()) {
                match full_name.split_once(char::is_whitespace) {
                    Some((first, rest)) => {
                        first_name = first.to_string();
                        last_name = rest.trim_start().to_string();
                    }
                    None => first_name = full_name.to_string(),
                }
            }
        }

        (first_name, last_name)
    }

    /// Cleaned `EMAIL` values that look like real addresses.
    pub fn valid_emails(&self) -> Vec<String> {
        self.emails
            .iter()
            .map(|raw| raw.trim().trim_end_matches([';', ':', ' ', '\t']))
            .filter(|email| email.contains('@') && is_email_shaped(email))
            .map(str::to_string)
            .collect()
    }
}
