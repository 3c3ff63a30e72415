//! Prefix tokenizer
//!
//! Splits a command's argument string into a preamble and prefixed
//! values. A prefix such as `n/` is only recognized at the start of the
//! argument text or straight after whitespace, so slashes inside values
//! pass through untouched. Values run until the next recognized prefix
//! and are trimmed.

/// Prefix for the transaction name
pub const PREFIX_NAME: &str = "n/";
/// Prefix for the transaction type
pub const PREFIX_TYPE: &str = "t/";
/// Prefix for the amount
pub const PREFIX_AMOUNT: &str = "a/";
/// Prefix for the date-time
pub const PREFIX_DATETIME: &str = "d/";
/// Prefix for the location
pub const PREFIX_LOCATION: &str = "l/";
/// Prefix for a category; may repeat
pub const PREFIX_CATEGORY: &str = "c/";

/// Tokenized arguments: the preamble plus every prefixed value in the
/// order the user typed them
#[derive(Debug, Clone, Default)]
pub struct ArgumentMap {
    preamble: String,
    values: Vec<(&'static str, String)>,
}

impl ArgumentMap {
    /// Text before the first recognized prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The value of the last occurrence of `prefix`, if any.
    ///
    /// Typing a prefix twice is treated as correcting the earlier value.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in input order
    pub fn all(&self, prefix: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }
}

/// Split `args` around the given prefixes
pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentMap {
    let mut occurrences: Vec<(usize, &'static str)> = Vec::new();
    for &prefix in prefixes {
        let mut from = 0;
        while let Some(found) = args[from..].find(prefix) {
            let at = from + found;
            if at == 0 || args[..at].ends_with(char::is_whitespace) {
                occurrences.push((at, prefix));
            }
            from = at + prefix.len();
        }
    }
    occurrences.sort_by_key(|&(at, _)| at);

    let preamble_end = occurrences.first().map_or(args.len(), |&(at, _)| at);
    let mut map = ArgumentMap {
        preamble: args[..preamble_end].trim().to_string(),
        values: Vec::with_capacity(occurrences.len()),
    };

    for (i, &(at, prefix)) in occurrences.iter().enumerate() {
        let value_start = at + prefix.len();
        let value_end = occurrences
            .get(i + 1)
            .map_or(args.len(), |&(next_at, _)| next_at);
        let value = args[value_start..value_end].trim().to_string();
        map.values.push((prefix, value));
    }
    map
}
