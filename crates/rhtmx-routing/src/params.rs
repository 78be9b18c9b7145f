/// Insertion-ordered parameter map
///
/// Used for both generation inputs and query-string parameters. Lists are
/// short (a handful of entries per URL), so lookups scan linearly and the map
/// keeps the exact order in which keys were first inserted.

use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: Vec<(String, Value)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_routing::Parameters;
    ///
    /// let params = Parameters::new()
    ///     .with("userId", 117)
    ///     .with("tab", "posts");
    ///
    /// assert_eq!(params.len(), 2);
    /// assert_eq!(params.keys().collect::<Vec<_>>(), vec!["userId", "tab"]);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value; an existing key keeps its position and gets the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose key is not in `consumed`, in insertion order
    pub fn without<S: AsRef<str>>(&self, consumed: &[S]) -> Parameters {
        self.entries
            .iter()
            .filter(|(k, _)| !consumed.iter().any(|c| c.as_ref() == k))
            .cloned()
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut params = Parameters::new().with("a", 1).with("b", 2);
        let old = params.insert("a", 3);

        assert_eq!(old, Some(Value::Int(1)));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_without_consumed_keys() {
        let params = Parameters::new().with("id", 1).with("q", "x").with("page", 2);
        let rest = params.without(&["id".to_string()]);
        assert_eq!(rest.keys().collect::<Vec<_>>(), vec!["q", "page"]);
    }
}
