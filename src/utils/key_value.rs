// ============================================================================
// Key/Value String
// Parallel key and value lists encoded as `keys:k1,k2;values:v1,v2`
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValueError {
    /// Input does not follow `keys:...;values:...`
    Malformed(String),
    /// Lists that must pair up have different lengths
    CountMismatch { keys: usize, values: usize },
    /// Update index beyond the list
    IndexOutOfRange { index: usize, len: usize },
    /// Lookup of a key that is not present
    KeyNotFound(String),
}

impl fmt::Display for KeyValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValueError::Malformed(input) => {
                write!(f, "expected `keys:...;values:...`, found {:?}", input)
            },
            KeyValueError::CountMismatch { keys, values } => write!(
                f,
                "the number of keys and values must match ({} vs {})",
                keys, values
            ),
            KeyValueError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for length {}", index, len)
            },
            KeyValueError::KeyNotFound(key) => write!(f, "key {:?} isn't found", key),
        }
    }
}

impl std::error::Error for KeyValueError {}

/// Ordered string-to-string pairs parsed from a delimited string.
///
/// Keys are looked up by first occurrence; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValueString {
    keys: Vec<String>,
    values: Vec<String>,
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ','
}

fn split_list(list: &str) -> Vec<String> {
    if list.is_empty() {
        Vec::new()
    } else {
        list.split(',').map(str::to_string).collect()
    }
}

impl KeyValueString {
    /// Parse `keys:a,b;values:1,2`. Either list may be empty.
    ///
    /// # Errors
    /// - `Malformed` if the layout or a character is wrong
    /// - `CountMismatch` if the lists differ in length
    pub fn parse(input: &str) -> Result<Self, KeyValueError> {
        let malformed = || KeyValueError::Malformed(input.to_string());
        let (keys, values) = input
            .strip_prefix("keys:")
            .and_then(|rest| rest.split_once(";values:"))
            .ok_or_else(malformed)?;
        if !keys.chars().chain(values.chars()).all(is_token_char) {
            return Err(malformed());
        }

        let (keys, values) = (split_list(keys), split_list(values));
        if keys.len() != values.len() {
            return Err(KeyValueError::CountMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self { keys, values })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| self.values[i].as_str())
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Value for `key`.
    ///
    /// # Errors
    /// Returns `KeyNotFound` when absent.
    pub fn value_of(&self, key: &str) -> Result<&str, KeyValueError> {
        self.get(key)
            .ok_or_else(|| KeyValueError::KeyNotFound(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.keys
            .iter()
            .zip(&self.values)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace the keys at `indexes` with `replacements`, pairwise.
    ///
    /// Nothing changes unless every index is valid.
    pub fn update_keys<T: ToString>(&mut self, indexes: &[usize], replacements: &[T]) -> Result<(), KeyValueError> {
        Self::update(&mut self.keys, indexes, replacements)
    }

    /// Replace the values at `indexes` with `replacements`, pairwise.
    pub fn update_values<T: ToString>(&mut self, indexes: &[usize], replacements: &[T]) -> Result<(), KeyValueError> {
        Self::update(&mut self.values, indexes, replacements)
    }

    fn update<T: ToString>(target: &mut [String], indexes: &[usize], replacements: &[T]) -> Result<(), KeyValueError> {
        if indexes.len() != replacements.len() {
            return Err(KeyValueError::CountMismatch {
                keys: indexes.len(),
                values: replacements.len(),
            });
        }
        if let Some(&index) = indexes.iter().find(|&&i| i >= target.len()) {
            return Err(KeyValueError::IndexOutOfRange {
                index,
                len: target.len(),
            });
        }
        for (&i, replacement) in indexes.iter().zip(replacements) {
            target[i] = replacement.to_string();
        }
        tracing::trace!(updated = indexes.len(), "updated key/value entries");
        Ok(())
    }
}

impl FromStr for KeyValueString {
    type Err = KeyValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyValueString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keys:{};values:{}", self.keys.join(","), self.values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let kv = KeyValueString::parse("keys:1,2,3;values:4,5,6").unwrap();
        assert_eq!(kv.len(), 3);
        assert_eq!(kv.keys(), ["1", "2", "3"]);
        assert_eq!(kv.get("2"), Some("5"));
        assert_eq!(kv.get("9"), None);
        assert_eq!(kv.get_or("9", "Not found"), "Not found");
        assert_eq!(kv.value_of("3").unwrap(), "6");
        assert_eq!(
            kv.value_of("x").unwrap_err(),
            KeyValueError::KeyNotFound("x".to_string())
        );
        let pairs: Vec<_> = kv.iter().collect();
        assert_eq!(pairs[0], ("1", "4"));
    }

    #[test]
    fn test_empty_lists() {
        let kv: KeyValueString = "keys:;values:".parse().unwrap();
        assert!(kv.is_empty());
        assert_eq!(kv.to_string(), "keys:;values:");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            KeyValueString::parse("keys:a;vals:1"),
            Err(KeyValueError::Malformed(_))
        ));
        assert!(matches!(
            KeyValueString::parse("keys:a-b;values:1"),
            Err(KeyValueError::Malformed(_))
        ));
        assert_eq!(
            KeyValueString::parse("keys:a,b;values:1").unwrap_err(),
            KeyValueError::CountMismatch { keys: 2, values: 1 }
        );
    }

    #[test]
    fn test_updates_rerender() {
        let mut kv = KeyValueString::parse("keys:1,2,3;values:4,5,6").unwrap();
        kv.update_values(&[0, 1], &["[1, 2]", "8"]).unwrap();
        assert_eq!(kv.to_string(), "keys:1,2,3;values:[1, 2],8,6");
        assert_eq!(kv.get("1"), Some("[1, 2]"));

        kv.update_keys(&[2], &[30]).unwrap();
        assert_eq!(kv.get("30"), Some("6"));

        assert_eq!(
            kv.update_keys(&[0, 7], &["a", "b"]).unwrap_err(),
            KeyValueError::IndexOutOfRange { index: 7, len: 3 }
        );
        assert_eq!(kv.keys()[0], "1");
        assert!(kv.update_values(&[0], &["a", "b"]).is_err());
    }
}
