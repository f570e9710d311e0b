//! RFC 7807 Problem Details for HTTP APIs (pure data model, no HTTP framework dependencies)

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ProblemError, json_kind};
use crate::extensions::{Extensions, is_well_known};

/// Extension member carrying the request trace id.
pub const TRACE_ID_MEMBER: &str = "trace_id";

/// RFC 7807 Problem Details for HTTP APIs.
///
/// Encodes as a single flat JSON object: the well-known members `type`,
/// `title`, `status`, `detail` and `instance` (in that order, each omitted
/// when empty or zero), followed by the extension members in insertion order.
///
/// ```
/// use problem_details::Problem;
///
/// let p = Problem::default()
///     .with_title("You do not have enough credit.")
///     .with_status(403)
///     .with_extension("balance", 30)
///     .unwrap();
/// assert_eq!(
///     p.to_json_string().unwrap(),
///     r#"{"title":"You do not have enough credit.","status":403,"balance":30}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem, 0 when unset.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    pub instance: String,
    /// Caller-defined members, flattened next to the well-known ones.
    pub extensions: Extensions,
}

impl Problem {
    /// Create a new Problem with the given status, title, and detail.
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.extensions
            .insert_unchecked(TRACE_ID_MEMBER.to_owned(), Value::String(id.into()));
        self
    }

    /// Add an extension member.
    ///
    /// # Errors
    /// Returns [`ProblemError::ReservedExtensionKey`] if `key` is a well-known member name.
    pub fn with_extension(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, ProblemError> {
        self.extensions.insert(key, value)?;
        Ok(self)
    }

    /// Typed view of an extension member.
    ///
    /// # Errors
    /// Returns [`ProblemError::Decode`] if the member does not fit `T`.
    pub fn extension<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ProblemError> {
        self.extensions.get_as(key)
    }

    /// `status` as an HTTP status code; `None` when unset or out of range.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        if self.status == 0 {
            return None;
        }
        StatusCode::from_u16(self.status).ok()
    }

    /// # Errors
    /// Returns [`ProblemError::Encode`] if an extension value cannot be serialized.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, ProblemError> {
        serde_json::to_vec(self).map_err(ProblemError::Encode)
    }

    /// # Errors
    /// Returns [`ProblemError::Encode`] if an extension value cannot be serialized.
    pub fn to_json_string(&self) -> Result<String, ProblemError> {
        serde_json::to_string(self).map_err(ProblemError::Encode)
    }

    /// # Errors
    /// Returns [`ProblemError::Decode`] for malformed JSON,
    /// [`ProblemError::NotAnObject`] when the top-level value is not an object and
    /// [`ProblemError::InvalidField`] when a well-known member has the wrong type.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ProblemError> {
        let value: Value = serde_json::from_slice(bytes).map_err(ProblemError::Decode)?;
        Self::try_from(value)
    }

    /// # Errors
    /// Same as [`Problem::from_json_slice`].
    pub fn from_json_str(s: &str) -> Result<Self, ProblemError> {
        Self::from_json_slice(s.as_bytes())
    }

    fn member_count(&self) -> usize {
        let well_known = [
            !self.type_url.is_empty(),
            !self.title.is_empty(),
            self.status != 0,
            !self.detail.is_empty(),
            !self.instance.is_empty(),
        ];
        well_known.iter().filter(|set| **set).count() + self.extensions.len()
    }
}

impl Serialize for Problem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.member_count()))?;
        if !self.type_url.is_empty() {
            map.serialize_entry("type", &self.type_url)?;
        }
        if !self.title.is_empty() {
            map.serialize_entry("title", &self.title)?;
        }
        if self.status != 0 {
            map.serialize_entry("status", &self.status)?;
        }
        if !self.detail.is_empty() {
            map.serialize_entry("detail", &self.detail)?;
        }
        if !self.instance.is_empty() {
            map.serialize_entry("instance", &self.instance)?;
        }
        for (key, value) in &self.extensions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Problem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Value> for Problem {
    type Error = ProblemError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => Self::try_from(members),
            other => Err(ProblemError::NotAnObject {
                actual: json_kind(&other),
            }),
        }
    }
}

impl TryFrom<Map<String, Value>> for Problem {
    type Error = ProblemError;

    fn try_from(members: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut problem = Self::default();
        for (key, value) in members {
            match key.as_str() {
                "type" => problem.type_url = string_member("type", value)?,
                "title" => problem.title = string_member("title", value)?,
                "status" => problem.status = status_member(&value)?,
                "detail" => problem.detail = string_member("detail", value)?,
                "instance" => problem.instance = string_member("instance", value)?,
                _ => {
                    debug_assert!(!is_well_known(&key));
                    problem.extensions.insert_unchecked(key, value);
                }
            }
        }
        Ok(problem)
    }
}

fn string_member(field: &'static str, value: Value) -> Result<String, ProblemError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Err(ProblemError::InvalidField {
            field,
            expected: "string",
            actual: json_kind(&other).to_owned(),
        }),
    }
}

/// Numeric statuses are truncated toward zero and must fit in `u16`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn status_member(value: &Value) -> Result<u16, ProblemError> {
    let invalid = |actual: String| ProblemError::InvalidField {
        field: "status",
        expected: "integer status code",
        actual,
    };
    let number = match value {
        Value::Null => return Ok(0),
        Value::Number(n) => n,
        other => return Err(invalid(json_kind(other).to_owned())),
    };
    if let Some(n) = number.as_u64() {
        return u16::try_from(n).map_err(|_| invalid(number.to_string()));
    }
    match number.as_f64().map(f64::trunc) {
        Some(f) if (0.0..=f64::from(u16::MAX)).contains(&f) => Ok(f as u16),
        _ => Err(invalid(number.to_string())),
    }
}

// Optional convenience constructors that return `Problem` directly
pub fn bad_request(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
}

pub fn not_found(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Not Found", detail)
}

pub fn conflict(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::CONFLICT, "Conflict", detail)
}

pub fn internal_error(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        detail,
    )
}
