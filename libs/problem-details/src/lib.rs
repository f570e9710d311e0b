//! RFC 7807 problem details for HTTP APIs
//!
//! This crate provides the `Problem` data type and its flat JSON codec, with no
//! dependencies on HTTP frameworks. It includes:
//! - `Problem` with well-known members plus ordered extension members
//! - Static problem type definitions (`ProblemType`)
//! - A response writer over the minimal `ResponseSink` capability
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod config;
pub mod encoding;
pub mod error;
pub mod extensions;
pub mod problem;
pub mod response;

// Re-export commonly used types
pub use catalog::ProblemType;
pub use config::ProblemResponseConfig;
pub use encoding::{APPLICATION_PROBLEM_JSON, APPLICATION_PROBLEM_XML, Encoding};
pub use error::{ErrorKind, ProblemError};
pub use extensions::{Extensions, WELL_KNOWN_MEMBERS};
pub use problem::{Problem, TRACE_ID_MEMBER, bad_request, conflict, internal_error, not_found};
pub use response::{ResponseSink, write_response, write_response_with};

/// Helper to attach instance and `trace_id` to a Problem
///
/// This is a convenience function for enriching Problem instances with
/// request-specific context before writing them as HTTP responses.
pub fn finalize(mut p: Problem, instance: &str, trace_id: Option<String>) -> Problem {
    p = p.with_instance(instance);
    if let Some(tid) = trace_id {
        p = p.with_trace_id(tid);
    }
    p
}
