//! Typed execution outcomes for request-handling code.
//!
//! A handler concludes with an [`Outcome<T>`]: a success with an optional
//! payload, a redirection, or a failure carrying one or more
//! [`ErrorDetail`]s. The status-code registry in [`status`] is the only
//! source of legal codes; an adapter outside this crate turns the folded
//! `(code, value | details, metadata)` triple into an actual HTTP response.
//!
//! ```
//! use outcome::{ErrorDetail, Outcome};
//!
//! fn parse_age(input: &str) -> Outcome<u8> {
//!     match input.parse() {
//!         Ok(age) => Outcome::from_value(age),
//!         Err(_) => Outcome::from_detail(ErrorDetail::new("age must be a number").with_code("E-AGE")),
//!     }
//! }
//!
//! let (code, body) = parse_age("42").fold(
//!     |code, value, _| (code, format!("{:?}", value)),
//!     |code, _| (code, String::new()),
//!     |code, details, _| (code, format!("{} error(s)", details.len())),
//! );
//! assert_eq!((code, body.as_str()), (200, "Some(42)"));
//! ```

pub mod detail;
pub mod outcome;
pub mod status;

pub use detail::ErrorDetail;
pub use outcome::{
    Completion, Diversion, Failure, Metadata, Outcome, Redirection, Success, Variant,
};
pub use status::{Category, ErrorStatus, RedirectStatus, Status, SuccessStatus};
