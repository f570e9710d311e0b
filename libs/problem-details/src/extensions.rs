//! Extension members: caller-defined fields flattened next to the well-known ones.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ProblemError;

/// Member names defined by RFC 7807 §3.1, in wire order.
pub const WELL_KNOWN_MEMBERS: [&str; 5] = ["type", "title", "status", "detail", "instance"];

#[must_use]
pub fn is_well_known(key: &str) -> bool {
    WELL_KNOWN_MEMBERS.contains(&key)
}

/// Ordered bag of extension members.
///
/// Iteration and wire order follow insertion order. Keys never collide with
/// [`WELL_KNOWN_MEMBERS`]; every insertion path enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Extensions(Map<String, Value>);

impl Extensions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member, returning the previous value stored under `key`.
    ///
    /// # Errors
    /// Returns [`ProblemError::ReservedExtensionKey`] if `key` is a well-known member name.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ProblemError> {
        let key = key.into();
        if is_well_known(&key) {
            return Err(ProblemError::ReservedExtensionKey(key));
        }
        Ok(self.0.insert(key, value.into()))
    }

    /// Serialize `value` into a JSON value and insert it.
    ///
    /// # Errors
    /// Returns [`ProblemError::ReservedExtensionKey`] for a well-known key and
    /// [`ProblemError::Encode`] if `value` has no JSON representation
    /// (for example a map with non-string keys).
    pub fn insert_serialize<T>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Option<Value>, ProblemError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(ProblemError::Encode)?;
        self.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Convert the member stored under `key` into a concrete type.
    ///
    /// # Errors
    /// Returns [`ProblemError::Decode`] if the stored value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ProblemError> {
        self.0
            .get(key)
            .map(|v| T::deserialize(v).map_err(ProblemError::Decode))
            .transpose()
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Caller guarantees `key` is not a well-known member.
    pub(crate) fn insert_unchecked(&mut self, key: String, value: Value) {
        debug_assert!(!is_well_known(&key));
        self.0.insert(key, value);
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Map<String, Value>> for Extensions {
    type Error = ProblemError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some(key) = map.keys().find(|k| is_well_known(k)) {
            return Err(ProblemError::ReservedExtensionKey(key.clone()));
        }
        Ok(Self(map))
    }
}
