use log::debug;

use crate::detail::ErrorDetail;
use crate::status::{ErrorStatus, RedirectStatus, SuccessStatus};

/// Opaque metadata attached to an outcome. The core never inspects it and
/// hands it to the consumer unchanged.
pub type Metadata = serde_json::Value;

/// Carrier of a successful outcome: a 2xx registry entry plus an optional
/// payload. "No payload" is `None`, distinct from any payload value.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    code: u16,
    value: Option<T>,
    metadata: Option<Metadata>,
}

impl<T> Success<T> {
    /// Success without a payload.
    pub fn new(status: SuccessStatus) -> Self {
        Self {
            code: status.code(),
            value: None,
            metadata: None,
        }
    }

    /// Success carrying a payload.
    pub fn with_value(status: SuccessStatus, value: T) -> Self {
        Self {
            code: status.code(),
            value: Some(value),
            metadata: None,
        }
    }

    /// Attaches opaque metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

/// Carrier of a redirection outcome: a 3xx registry entry, no payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Redirection {
    code: u16,
    metadata: Option<Metadata>,
}

impl Redirection {
    pub fn new(status: RedirectStatus) -> Self {
        Self {
            code: status.code(),
            metadata: None,
        }
    }

    /// Attaches opaque metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn code(&self) -> u16 {
        self.code
    }
}

/// Carrier of a failed outcome: a 4xx/5xx registry entry plus one or more
/// [`ErrorDetail`]s. The detail list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    code: u16,
    details: Vec<ErrorDetail>,
    metadata: Option<Metadata>,
}

impl Failure {
    /// Failure carrying a list of details, order preserved. An empty list
    /// is replaced with a single blank detail.
    pub fn new(status: ErrorStatus, details: impl IntoIterator<Item = ErrorDetail>) -> Self {
        let mut details: Vec<ErrorDetail> = details.into_iter().collect();
        if details.is_empty() {
            details.push(ErrorDetail::default());
        }
        Self {
            code: status.code(),
            details,
            metadata: None,
        }
    }

    /// Failure carrying a single detail.
    pub fn from_detail(status: ErrorStatus, detail: ErrorDetail) -> Self {
        Self {
            code: status.code(),
            details: vec![detail],
            metadata: None,
        }
    }

    /// Failure carrying a single `(message, message code)` detail.
    pub fn from_message(
        status: ErrorStatus,
        message: impl Into<String>,
        message_code: impl Into<String>,
    ) -> Self {
        Self::from_detail(status, ErrorDetail::new(message).with_code(message_code))
    }

    /// Attaches opaque metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }
}

/// Tag of an [`Outcome`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Success,
    Redirection,
    Failure,
}

/// Terminal result of a request-handling operation, before an adapter turns
/// it into an actual HTTP response.
///
/// Built either directly from a registry carrier ([`Success`],
/// [`Redirection`], [`Failure`], each `Into<Outcome<T>>`) or by promoting a
/// bare value or error detail with [`Outcome::from_value`],
/// [`Outcome::from_detail`] and [`Outcome::from_details`]. Consumed with
/// [`Outcome::fold`], or narrowed to a two-variant pairing first.
///
/// ```
/// use outcome::{Outcome, Success, SuccessStatus};
///
/// let outcome: Outcome<&str> = Success::with_value(SuccessStatus::Created, "id-123").into();
/// let line = outcome.fold(
///     |code, value, _| format!("{} {:?}", code, value),
///     |code, _| format!("{} redirect", code),
///     |code, details, _| format!("{} with {} detail(s)", code, details.len()),
/// );
/// assert_eq!(line, "201 Some(\"id-123\")");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(Success<T>),
    Redirection(Redirection),
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Promotes a bare value into a `200 OK` success with the value as
    /// payload and no metadata.
    pub fn from_value(value: T) -> Self {
        debug!("promoting bare value to 200 OK success");
        Self::Success(Success::with_value(SuccessStatus::Ok, value))
    }

    /// Promotes a single error detail into a `400 Bad Request` failure.
    pub fn from_detail(detail: ErrorDetail) -> Self {
        debug!("promoting error detail to 400 Bad Request failure");
        Self::Failure(Failure::from_detail(ErrorStatus::BadRequest, detail))
    }

    /// Promotes a detail list into a `400 Bad Request` failure. Order is
    /// preserved and nothing is dropped; an empty list becomes a single
    /// blank detail.
    pub fn from_details(details: impl IntoIterator<Item = ErrorDetail>) -> Self {
        let failure = Failure::new(ErrorStatus::BadRequest, details);
        debug!(
            "promoting {} error detail(s) to 400 Bad Request failure",
            failure.details().len()
        );
        Self::Failure(failure)
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Redirection(_) => Variant::Redirection,
            Self::Failure(_) => Variant::Failure,
        }
    }

    /// Status code of the outcome, whichever variant carries it.
    pub fn code(&self) -> u16 {
        match self {
            Self::Success(s) => s.code,
            Self::Redirection(r) => r.code,
            Self::Failure(f) => f.code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_redirection(&self) -> bool {
        matches!(self, Self::Redirection(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Folds the outcome into a single value, one handler per variant.
    ///
    /// This is the one total match over the union and the sanctioned way to
    /// take data out of it. Pure dispatch: exactly one handler runs, no I/O,
    /// cannot panic on well-formed outcomes.
    pub fn fold<R>(
        self,
        success: impl FnOnce(u16, Option<T>, Option<Metadata>) -> R,
        redirection: impl FnOnce(u16, Option<Metadata>) -> R,
        failure: impl FnOnce(u16, Vec<ErrorDetail>, Option<Metadata>) -> R,
    ) -> R {
        match self {
            Self::Success(s) => success(s.code, s.value, s.metadata),
            Self::Redirection(r) => redirection(r.code, r.metadata),
            Self::Failure(f) => failure(f.code, f.details, f.metadata),
        }
    }

    /// Narrows to the success/failure pairing. A redirection comes back in
    /// `Err`, so a two-handler [`Completion::fold`] can never be handed the
    /// wrong variant.
    pub fn completion(self) -> Result<Completion<T>, Redirection> {
        match self {
            Self::Success(s) => Ok(Completion::Success(s)),
            Self::Failure(f) => Ok(Completion::Failure(f)),
            Self::Redirection(r) => Err(r),
        }
    }

    /// Narrows to the redirection/failure pairing, symmetric to
    /// [`Outcome::completion`]. A success comes back in `Err`.
    pub fn diversion(self) -> Result<Diversion, Success<T>> {
        match self {
            Self::Redirection(r) => Ok(Diversion::Redirection(r)),
            Self::Failure(f) => Ok(Diversion::Failure(f)),
            Self::Success(s) => Err(s),
        }
    }
}

impl<T> From<Success<T>> for Outcome<T> {
    fn from(success: Success<T>) -> Self {
        Self::Success(success)
    }
}

impl<T> From<Redirection> for Outcome<T> {
    fn from(redirection: Redirection) -> Self {
        Self::Redirection(redirection)
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

/// Reduced two-variant profile of [`Outcome`]: success or failure, no
/// redirection channel. Obtained through [`Outcome::completion`].
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    Success(Success<T>),
    Failure(Failure),
}

impl<T> Completion<T> {
    /// Folds the pairing into a single value; the redirection case does not
    /// exist here by construction.
    pub fn fold<R>(
        self,
        success: impl FnOnce(u16, Option<T>, Option<Metadata>) -> R,
        failure: impl FnOnce(u16, Vec<ErrorDetail>, Option<Metadata>) -> R,
    ) -> R {
        match self {
            Self::Success(s) => success(s.code, s.value, s.metadata),
            Self::Failure(f) => failure(f.code, f.details, f.metadata),
        }
    }
}

impl<T> From<Completion<T>> for Outcome<T> {
    fn from(completion: Completion<T>) -> Self {
        match completion {
            Completion::Success(s) => Self::Success(s),
            Completion::Failure(f) => Self::Failure(f),
        }
    }
}

/// Redirection/failure pairing of [`Outcome`], obtained through
/// [`Outcome::diversion`].
#[derive(Debug, Clone, PartialEq)]
pub enum Diversion {
    Redirection(Redirection),
    Failure(Failure),
}

impl Diversion {
    /// Folds the pairing into a single value; the success case does not
    /// exist here by construction.
    pub fn fold<R>(
        self,
        redirection: impl FnOnce(u16, Option<Metadata>) -> R,
        failure: impl FnOnce(u16, Vec<ErrorDetail>, Option<Metadata>) -> R,
    ) -> R {
        match self {
            Self::Redirection(r) => redirection(r.code, r.metadata),
            Self::Failure(f) => failure(f.code, f.details, f.metadata),
        }
    }
}

impl<T> From<Diversion> for Outcome<T> {
    fn from(diversion: Diversion) -> Self {
        match diversion {
            Diversion::Redirection(r) => Self::Redirection(r),
            Diversion::Failure(f) => Self::Failure(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_detail_list_becomes_one_blank_detail() {
        let failure = Failure::new(ErrorStatus::Conflict, []);
        assert_eq!(failure.details(), &[ErrorDetail::default()]);

        let outcome = Outcome::<()>::from_details([]);
        outcome.fold(
            |_, _, _| panic!("expected failure"),
            |_, _| panic!("expected failure"),
            |code, details, _| {
                assert_eq!(code, 400);
                assert_eq!(details, vec![ErrorDetail::default()]);
            },
        );
    }

    #[test]
    fn metadata_passes_through_unchanged() {
        let meta = json!({"trace_id": "abc-123", "attempt": 2});

        let outcome: Outcome<&str> =
            Success::with_value(SuccessStatus::Ok, "payload").metadata(meta.clone()).into();
        outcome.fold(
            |_, _, metadata| assert_eq!(metadata, Some(meta.clone())),
            |_, _| panic!("expected success"),
            |_, _, _| panic!("expected success"),
        );

        let outcome: Outcome<&str> =
            Redirection::new(RedirectStatus::SeeOther).metadata(meta.clone()).into();
        outcome.fold(
            |_, _, _| panic!("expected redirection"),
            |code, metadata| {
                assert_eq!(code, 303);
                assert_eq!(metadata, Some(meta.clone()));
            },
            |_, _, _| panic!("expected redirection"),
        );
    }

    #[test]
    fn observers_report_the_populated_variant() {
        let success = Outcome::from_value(1);
        assert_eq!(success.variant(), Variant::Success);
        assert_eq!(success.code(), 200);
        assert!(success.is_success() && !success.is_redirection() && !success.is_failure());

        let redirection: Outcome<i32> = Redirection::new(RedirectStatus::Found).into();
        assert_eq!(redirection.variant(), Variant::Redirection);
        assert_eq!(redirection.code(), 302);
        assert!(redirection.is_redirection());

        let failure: Outcome<i32> =
            Failure::from_message(ErrorStatus::Locked, "locked", "E-LOCK").into();
        assert_eq!(failure.variant(), Variant::Failure);
        assert_eq!(failure.code(), 423);
        assert!(failure.is_failure());
    }

    #[test]
    fn completion_rejects_redirections_by_type() {
        let outcome: Outcome<&str> = Redirection::new(RedirectStatus::MovedPermanently).into();
        let redirection = outcome.completion().expect_err("redirection must not narrow");
        assert_eq!(redirection.code(), 301);

        let outcome: Outcome<&str> = Success::new(SuccessStatus::NoContent).into();
        let completion = outcome.completion().expect("success must narrow");
        completion.fold(
            |code, value, _| {
                assert_eq!(code, 204);
                assert_eq!(value, None);
            },
            |_, _, _| panic!("expected success"),
        );
    }

    #[test]
    fn diversion_rejects_successes_by_type() {
        let outcome = Outcome::from_value("payload");
        let success = outcome.diversion().expect_err("success must not narrow");
        assert_eq!(success.code(), 200);
        assert_eq!(success.value(), Some(&"payload"));

        let outcome: Outcome<&str> =
            Failure::from_detail(ErrorStatus::GatewayTimeout, ErrorDetail::new("upstream")).into();
        let diversion = outcome.diversion().expect("failure must narrow");
        diversion.fold(
            |_, _| panic!("expected failure"),
            |code, details, _| {
                assert_eq!(code, 504);
                assert_eq!(details, vec![ErrorDetail::new("upstream")]);
            },
        );
    }

    #[test]
    fn widening_a_narrowed_pairing_restores_the_outcome() {
        let outcome: Outcome<&str> =
            Failure::from_detail(ErrorStatus::NotFound, ErrorDetail::new("missing")).into();
        let widened: Outcome<&str> = outcome.clone().completion().expect("failure narrows").into();
        assert_eq!(widened, outcome);

        let widened: Outcome<&str> = outcome.clone().diversion().expect("failure narrows").into();
        assert_eq!(widened, outcome);
    }
}
