//! Static problem type definitions

use crate::problem::Problem;

/// Static problem type definition, usually declared as a `const` per error kind.
///
/// ```
/// use problem_details::ProblemType;
///
/// const OUT_OF_CREDIT: ProblemType = ProblemType {
///     status: 403,
///     title: "You do not have enough credit.",
///     type_url: "https://example.io/problems/out-of-credit",
/// };
///
/// let p = OUT_OF_CREDIT.as_problem("Your current balance is 30, but that costs 50.");
/// assert_eq!(p.status, 403);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemType {
    pub status: u16,
    pub title: &'static str,
    pub type_url: &'static str,
}

impl ProblemType {
    /// Convert this definition into a Problem with the given detail
    #[inline]
    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        Problem::default()
            .with_type(self.type_url)
            .with_title(self.title)
            .with_status(self.status)
            .with_detail(detail)
    }

    /// Whether `problem` was produced from this definition.
    #[must_use]
    pub fn matches(&self, problem: &Problem) -> bool {
        problem.type_url == self.type_url
    }
}
