//! Configuration for writing problem responses.

use http::StatusCode;
use serde::Deserialize;

use crate::encoding::Encoding;
use crate::error::ProblemError;

/// Response writer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProblemResponseConfig {
    /// Body encoding; only `json` is implemented.
    pub encoding: Encoding,
    /// Status used when the problem carries none.
    pub default_status: u16,
}

impl Default for ProblemResponseConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Json,
            default_status: default_status(),
        }
    }
}

impl ProblemResponseConfig {
    /// Status to send for a problem whose `status` member is `status`.
    ///
    /// # Errors
    /// Returns [`ProblemError::InvalidStatus`] if the selected code is not a
    /// valid HTTP status code.
    pub fn resolve_status(&self, status: u16) -> Result<StatusCode, ProblemError> {
        let code = if status == 0 {
            self.default_status
        } else {
            status
        };
        StatusCode::from_u16(code).map_err(|_| ProblemError::InvalidStatus(code))
    }
}

fn default_status() -> u16 {
    StatusCode::BAD_REQUEST.as_u16()
}
