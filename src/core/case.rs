//! Case conversion for variable names.
//!
//! `lower` and `upper` change the case of the whole name. The other modes
//! first split the name into words and then rejoin them:
//!
//! - a lowercase letter or digit followed by an uppercase letter starts a word
//!   (`apiKey` → `api Key`)
//! - the last capital of an acronym starts a word when a lowercase letter
//!   follows it (`XMLHttp` → `XML Http`)
//! - any run of characters other than ASCII letters and digits separates words

use std::fmt;
use std::str::FromStr;

/// Supported case conversion modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Constant,
    Pascal,
    Snake,
}

impl Case {
    /// Every mode, in the order they are documented.
    pub const ALL: [Case; 6] = [
        Case::Lower,
        Case::Upper,
        Case::Camel,
        Case::Constant,
        Case::Pascal,
        Case::Snake,
    ];

    /// Name used in the `convert` input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Lower => "lower",
            Case::Upper => "upper",
            Case::Camel => "camel",
            Case::Constant => "constant",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
        }
    }

    /// Convert `input` to this case.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Case::Lower => input.to_lowercase(),
            Case::Upper => input.to_uppercase(),
            Case::Snake => join(input, "_", |_, word| word.to_lowercase()),
            Case::Constant => join(input, "_", |_, word| word.to_uppercase()),
            Case::Pascal => join(input, "", pascal_word),
            Case::Camel => join(input, "", |i, word| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    pascal_word(i, word)
                }
            }),
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .into_iter()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| format!("unknown case '{}'", s))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capitalize a word; a digit-led word after the first is joined with `_`
/// instead, so `version 1 2` stays readable as `Version_1_2`.
fn pascal_word(index: usize, word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_lowercase();

    if index > 0 && first.is_ascii_digit() {
        format!("_{}{}", first, rest)
    } else {
        format!("{}{}", first.to_ascii_uppercase(), rest)
    }
}

fn join(input: &str, delimiter: &str, transform: impl Fn(usize, &str) -> String) -> String {
    split_words(input)
        .into_iter()
        .enumerate()
        .map(|(i, word)| transform(i, word))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Split a name into words.
///
/// Word characters are ASCII, so every slice boundary falls on a char
/// boundary even when the name contains multi-byte characters.
fn split_words(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&input[s..i]);
            }
            continue;
        }

        let Some(s) = start else {
            start = Some(i);
            continue;
        };

        let prev = bytes[i - 1];
        let next = bytes.get(i + 1).copied();
        let hump = (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && b.is_ascii_uppercase();
        let acronym_end = prev.is_ascii_uppercase()
            && b.is_ascii_uppercase()
            && next.is_some_and(|n| n.is_ascii_lowercase());

        if hump || acronym_end {
            words.push(&input[s..i]);
            start = Some(i);
        }
    }

    if let Some(s) = start {
        words.push(&input[s..]);
    }

    words
}
