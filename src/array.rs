//! Ordered key-value container with positional operations
//!
//! [`FluentArray`] keeps entries in insertion order; each entry carries an
//! optional string key and a dynamic [`Value`]. Positional inserts are
//! described by an immutable [`Placement`] built from locator constructors
//! and consumed by a single insert call, so there is no hidden state
//! between the "locate" and "insert" steps.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Equality policy for value and key matching
///
/// `Strict` is plain [`Value`] equality. `Loose` additionally coerces
/// numeric strings to numbers, so `"3"` matches `3` and `3` matches `3.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Match {
    /// Exact type and value equality
    #[default]
    Strict,
    /// Numeric-string coercion on top of strict equality
    Loose,
}

/// A lookup key: an explicit name or an ordinal index
///
/// Unkeyed entries answer to `Index(n)` where `n` is their current ordinal
/// position in the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrayKey {
    /// Ordinal position of an unkeyed entry
    Index(usize),
    /// Explicit string key
    Name(String),
}

impl ArrayKey {
    fn canonical(&self) -> String {
        match self {
            ArrayKey::Index(index) => index.to_string(),
            ArrayKey::Name(name) => name.trim().to_string(),
        }
    }

    fn matches(&self, other: &ArrayKey, mode: Match) -> bool {
        match mode {
            Match::Strict => self == other,
            Match::Loose => self == other || self.canonical() == other.canonical(),
        }
    }
}

impl From<usize> for ArrayKey {
    fn from(index: usize) -> Self {
        ArrayKey::Index(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(name: &str) -> Self {
        ArrayKey::Name(name.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(name: String) -> Self {
        ArrayKey::Name(name)
    }
}

/// One container entry: an optional key plus a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    key: Option<String>,
    value: Value,
}

impl Entry {
    /// The entry's explicit key, if it has one
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The entry's value
    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Debug, Clone)]
enum PlacementTarget {
    Value(Value),
    Key(ArrayKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

/// Immutable insertion request consumed by [`FluentArray::insert`]
///
/// Built from one of the locator constructors; carries the anchor, the
/// side to insert on and the equality policy used to find the anchor.
///
/// # Example
///
/// ```rust
/// use fluent_utils::array::{FluentArray, Placement};
/// use serde_json::json;
///
/// let arr = FluentArray::from_values([1, 2, 4])
///     .insert(&Placement::before(4), 3);
/// assert_eq!(arr.values(), vec![json!(1), json!(2), json!(3), json!(4)]);
/// ```
#[derive(Debug, Clone)]
pub struct Placement {
    target: PlacementTarget,
    side: Side,
    mode: Match,
}

impl Placement {
    /// Insert before the first entry matching `anchor`
    pub fn before(anchor: impl Into<Value>) -> Self {
        Placement {
            target: PlacementTarget::Value(anchor.into()),
            side: Side::Before,
            mode: Match::Strict,
        }
    }

    /// Insert after the first entry matching `anchor`
    pub fn after(anchor: impl Into<Value>) -> Self {
        Placement {
            target: PlacementTarget::Value(anchor.into()),
            side: Side::After,
            mode: Match::Strict,
        }
    }

    /// Insert before the entry with the given key
    pub fn before_key(key: impl Into<ArrayKey>) -> Self {
        Placement {
            target: PlacementTarget::Key(key.into()),
            side: Side::Before,
            mode: Match::Strict,
        }
    }

    /// Insert after the entry with the given key
    pub fn after_key(key: impl Into<ArrayKey>) -> Self {
        Placement {
            target: PlacementTarget::Key(key.into()),
            side: Side::After,
            mode: Match::Strict,
        }
    }

    /// Set the equality policy used to locate the anchor
    pub fn with_match(mut self, mode: Match) -> Self {
        self.mode = mode;
        self
    }
}

/// Ordered key-value container with chainable positional operations
///
/// All mutating methods consume `self` and return the updated owned value,
/// so calls chain without intermediate bindings. Lookups that find nothing
/// leave the container untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FluentArray {
    entries: Vec<Entry>,
}

impl FluentArray {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container of unkeyed entries from any value iterator
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::array::FluentArray;
    ///
    /// let arr = FluentArray::from_values(["a", "b", "c"]);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        FluentArray {
            entries: values
                .into_iter()
                .map(|value| Entry {
                    key: None,
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Build a container of keyed entries from (key, value) pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        FluentArray {
            entries: pairs
                .into_iter()
                .map(|(key, value)| Entry {
                    key: Some(key.into()),
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The values in order, cloned
    pub fn values(&self) -> Vec<Value> {
        self.entries.iter().map(|entry| entry.value.clone()).collect()
    }

    /// The values in order, consuming the container
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_iter().map(|entry| entry.value).collect()
    }

    /// Value at an ordinal position
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|entry| &entry.value)
    }

    /// Value of the entry with the given explicit key
    pub fn get_keyed(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.key.as_deref() == Some(key))
            .map(|entry| &entry.value)
    }

    /// Append an unkeyed value
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.entries.push(Entry {
            key: None,
            value: value.into(),
        });
        self
    }

    /// Append a keyed value, replacing the value of an existing key in place
    pub fn push_keyed(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.key.as_deref() == Some(key.as_str()))
        {
            entry.value = value;
        } else {
            self.entries.push(Entry {
                key: Some(key),
                value,
            });
        }
        self
    }

    /// 0-based position of the first entry whose value matches
    ///
    /// # Arguments
    ///
    /// * `value` - The value to look for
    /// * `mode` - Equality policy
    ///
    /// # Returns
    ///
    /// The position of the first match, or `None` when absent
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::array::{FluentArray, Match};
    /// use serde_json::json;
    ///
    /// let arr = FluentArray::from_values([1, 2, 3]);
    /// assert_eq!(arr.position_of(&json!(3), Match::Strict), Some(2));
    /// assert_eq!(arr.position_of(&json!("3"), Match::Strict), None);
    /// assert_eq!(arr.position_of(&json!("3"), Match::Loose), Some(2));
    /// ```
    pub fn position_of(&self, value: &Value, mode: Match) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| value_matches(&entry.value, value, mode))
    }

    /// 0-based position of the entry with the given key
    ///
    /// Unkeyed entries answer to their ordinal position, so `Index(2)`
    /// finds the third entry of a plain list. In loose mode `Name("4")`
    /// and `Index(4)` match each other.
    pub fn position_of_key<K: Into<ArrayKey>>(&self, key: K, mode: Match) -> Option<usize> {
        self.position_of_key_ref(&key.into(), mode)
    }

    fn position_of_key_ref(&self, key: &ArrayKey, mode: Match) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .position(|(index, entry)| implicit_key(index, entry).matches(key, mode))
    }

    /// Splice an unkeyed value at the position described by `placement`
    ///
    /// When the placement anchor is not found the container is returned
    /// unchanged. Inserting before the first entry prepends; inserting
    /// after the last entry appends.
    pub fn insert(self, placement: &Placement, value: impl Into<Value>) -> Self {
        self.insert_entry(
            placement,
            Entry {
                key: None,
                value: value.into(),
            },
        )
    }

    /// Splice a keyed value at the position described by `placement`
    ///
    /// A key that already exists in the container makes this a no-op.
    pub fn insert_keyed(
        self,
        placement: &Placement,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let key = key.into();
        if self.has_key(&key) {
            return self;
        }
        self.insert_entry(
            placement,
            Entry {
                key: Some(key),
                value: value.into(),
            },
        )
    }

    /// Drop every entry whose value matches
    ///
    /// Removing an absent value is a no-op, so the operation is idempotent.
    pub fn remove(mut self, value: impl Into<Value>, mode: Match) -> Self {
        let target = value.into();
        self.entries
            .retain(|entry| !value_matches(&entry.value, &target, mode));
        self
    }

    /// Drop every entry whose value matches any of the given values
    pub fn remove_all(mut self, values: &[Value], mode: Match) -> Self {
        self.entries.retain(|entry| {
            !values
                .iter()
                .any(|value| value_matches(&entry.value, value, mode))
        });
        self
    }

    /// Recursively flatten nested arrays and objects into unkeyed leaves
    ///
    /// Leaves arrive in encounter order; keys are discarded. Already-flat
    /// containers come back unchanged, so the operation is idempotent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluent_utils::array::FluentArray;
    /// use serde_json::json;
    ///
    /// let arr = FluentArray::from_values([json!([1, [2, 3]]), json!(4)]).flatten();
    /// assert_eq!(arr.values(), vec![json!(1), json!(2), json!(3), json!(4)]);
    /// ```
    pub fn flatten(self) -> Self {
        let mut flat = Vec::new();
        for entry in self.entries {
            flatten_value(entry.value, &mut flat);
        }
        FluentArray {
            entries: flat
                .into_iter()
                .map(|value| Entry { key: None, value })
                .collect(),
        }
    }

    /// Flatten into a pre-seeded accumulator, consuming the container
    pub fn flatten_into(self, mut seed: Vec<Value>) -> Vec<Value> {
        for entry in self.entries {
            flatten_value(entry.value, &mut seed);
        }
        seed
    }

    fn has_key(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.key.as_deref() == Some(key))
    }

    fn insert_entry(mut self, placement: &Placement, entry: Entry) -> Self {
        let position = match &placement.target {
            PlacementTarget::Value(anchor) => self.position_of(anchor, placement.mode),
            PlacementTarget::Key(key) => self.position_of_key_ref(key, placement.mode),
        };
        let Some(position) = position else {
            return self;
        };
        let at = match placement.side {
            Side::Before => position,
            Side::After => position + 1,
        };
        self.entries.insert(at, entry);
        self
    }
}

impl From<Vec<Value>> for FluentArray {
    fn from(values: Vec<Value>) -> Self {
        FluentArray::from_values(values)
    }
}

fn implicit_key(index: usize, entry: &Entry) -> ArrayKey {
    entry
        .key
        .clone()
        .map_or(ArrayKey::Index(index), ArrayKey::Name)
}

fn value_matches(candidate: &Value, target: &Value, mode: Match) -> bool {
    match mode {
        Match::Strict => candidate == target,
        Match::Loose => loose_eq(candidate, target),
    }
}

/// Loose equality between two dynamic values
///
/// True when the values are strictly equal, or when both have a numeric
/// reading (numbers, or strings that parse as numbers) and those readings
/// are equal. This is the crate's entire coercion surface; booleans and
/// null never coerce.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    if a == b {
        return true;
    }
    match (numeric_view(a), numeric_view(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn numeric_view(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}

/// Append every non-container leaf under `value` to `out`, in order
pub fn flatten_value(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_value(item, out);
            }
        }
        Value::Object(map) => {
            for (_, item) in map {
                flatten_value(item, out);
            }
        }
        leaf => out.push(leaf),
    }
}
