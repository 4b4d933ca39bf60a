//! Ordered argument maps with absent values pruned.
//!
//! Every mapping the renderer produces (action inputs, trigger fields, job and
//! step records, the top-level document) goes through [`filter_arguments`], so
//! an unset field never shows up as a key in the generated YAML.

use indexmap::IndexMap;
use indexmap::map::Iter;

/// Escape hatch for keys the typed model doesn't know about yet.
///
/// Entries keep their insertion order. Inserting a key twice keeps the first
/// position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomArguments {
    entries: IndexMap<String, String>,
}

impl CustomArguments {
    /// Create an empty set of custom arguments
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an argument, overriding the value of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`CustomArguments::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up the value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of arguments
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no arguments are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the arguments in insertion order
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CustomArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Self::new();
        for (key, value) in iter {
            arguments.insert(key, value);
        }
        arguments
    }
}

impl<'a> IntoIterator for &'a CustomArguments {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Build an ordered map from `(key, optional value)` pairs.
///
/// Pairs whose value is `None` are dropped. A key seen again replaces the
/// earlier value but keeps the earlier position. `custom` entries are applied
/// last with the same rule, so they land after every declared key unless they
/// override one.
pub fn filter_arguments<K, V, C>(
    pairs: impl IntoIterator<Item = (K, Option<V>)>,
    custom: impl IntoIterator<Item = (C, V)>,
) -> IndexMap<String, V>
where
    K: Into<String>,
    C: Into<String>,
{
    let mut map: IndexMap<String, V> = pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.into(), v)))
        .collect();

    for (key, value) in custom {
        map.insert(key.into(), value);
    }

    map
}

/// Shorthand for [`filter_arguments`] without custom entries.
pub fn present_arguments<K, V>(pairs: impl IntoIterator<Item = (K, Option<V>)>) -> IndexMap<String, V>
where
    K: Into<String>,
{
    filter_arguments(pairs, std::iter::empty::<(String, V)>())
}

/// Map an empty collection to `None` so it gets pruned like any absent value.
pub fn non_empty<T: HasLen>(value: T) -> Option<T> {
    if value.is_empty_value() {
        None
    } else {
        Some(value)
    }
}

/// Collections that count as absent when empty.
pub trait HasLen {
    /// Whether the collection holds no items
    fn is_empty_value(&self) -> bool;
}

impl<T> HasLen for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> HasLen for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> HasLen for IndexMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: HasLen + ?Sized> HasLen for &T {
    fn is_empty_value(&self) -> bool {
        (*self).is_empty_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_dropped() {
        let map = present_arguments([
            ("install_url", Some("https://nixos.org/nix/install")),
            ("install_options", None),
            ("nix_path", Some("nixpkgs=channel:nixos-unstable")),
        ]);

        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["install_url", "nix_path"]
        );
    }

    #[test]
    fn test_later_duplicate_overrides_in_place() {
        let map = present_arguments([("a", Some(1)), ("b", Some(2)), ("a", Some(3))]);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map["a"], 3);
    }

    #[test]
    fn test_absent_duplicate_keeps_earlier_value() {
        let map = present_arguments([("a", Some(1)), ("a", None)]);
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn test_custom_arguments_appended_last() {
        let custom = CustomArguments::new()
            .with("zeta", "z")
            .with("alpha", "a");
        let map = filter_arguments(
            [("path", Some("dist".to_string())), ("name", None)],
            custom.iter().map(|(k, v)| (k.clone(), v.clone())),
        );

        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["path", "zeta", "alpha"]
        );
    }

    #[test]
    fn test_custom_argument_overrides_declared_key() {
        let custom = CustomArguments::new().with("path", "override");
        let map = filter_arguments(
            [("path", Some("dist".to_string())), ("retention", Some("5".to_string()))],
            custom.iter().map(|(k, v)| (k.clone(), v.clone())),
        );

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["path", "retention"]);
        assert_eq!(map["path"], "override");
    }

    #[test]
    fn test_custom_arguments_last_write_wins() {
        let custom: CustomArguments = [("k", "1"), ("other", "x"), ("k", "2")]
            .into_iter()
            .collect();

        assert_eq!(custom.len(), 2);
        assert_eq!(custom.get("k"), Some("2"));
        assert_eq!(
            custom.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            vec!["k", "other"]
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Vec::<String>::new()), None);
        assert_eq!(non_empty(vec![1]), Some(vec![1]));

        let empty: IndexMap<String, String> = IndexMap::new();
        assert!(non_empty(&empty).is_none());

        let patterns = ["main".to_string()];
        assert_eq!(non_empty(&patterns[..0]), None);
        assert_eq!(non_empty(&patterns[..]).map(<[String]>::len), Some(1));
    }
}
