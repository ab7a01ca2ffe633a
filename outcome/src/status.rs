use anyhow::bail;
use std::fmt::{self, Display};

/// Category of a registry entry. Determines which [`crate::Outcome`]
/// variant an entry produces: `Success` and `Redirection` map to their
/// namesake variants, both error categories map to `Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Redirection,
    ClientError,
    ServerError,
}

/// Expands a status table into an enum with code/reason accessors and a
/// reverse lookup. One entry per line: `<code> <Variant> <reason phrase>`.
macro_rules! registry {
    (
        $(#[$outer:meta])*
        $name:ident {
            $( $code:literal $variant:ident $reason:literal, )+
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Numeric code of the entry, fixed by the HTTP specification.
            pub fn code(self) -> u16 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            /// Canonical reason phrase of the entry.
            pub fn reason(self) -> &'static str {
                match self {
                    $( Self::$variant => $reason, )+
                }
            }

            /// Looks an entry up by its numeric code.
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.code(), self.reason())
            }
        }
    };
}

registry! {
    /// 2xx entries. Constructing a [`crate::Success`] carrier.
    SuccessStatus {
        200 Ok "OK",
        201 Created "Created",
        202 Accepted "Accepted",
        203 NonAuthoritativeInformation "Non-Authoritative Information",
        204 NoContent "No Content",
        205 ResetContent "Reset Content",
        206 PartialContent "Partial Content",
        207 MultiStatus "Multi-Status",
        208 AlreadyReported "Already Reported",
        226 ImUsed "IM Used",
    }
}

registry! {
    /// 3xx entries. Constructing a [`crate::Redirection`] carrier.
    RedirectStatus {
        300 MultipleChoices "Multiple Choices",
        301 MovedPermanently "Moved Permanently",
        302 Found "Found",
        303 SeeOther "See Other",
        304 NotModified "Not Modified",
        307 TemporaryRedirect "Temporary Redirect",
        308 PermanentRedirect "Permanent Redirect",
    }
}

registry! {
    /// 4xx and 5xx entries. Constructing a [`crate::Failure`] carrier.
    ErrorStatus {
        400 BadRequest "Bad Request",
        401 Unauthorized "Unauthorized",
        402 PaymentRequired "Payment Required",
        403 Forbidden "Forbidden",
        404 NotFound "Not Found",
        405 MethodNotAllowed "Method Not Allowed",
        406 NotAcceptable "Not Acceptable",
        407 ProxyAuthenticationRequired "Proxy Authentication Required",
        408 RequestTimeout "Request Timeout",
        409 Conflict "Conflict",
        410 Gone "Gone",
        411 LengthRequired "Length Required",
        412 PreconditionFailed "Precondition Failed",
        413 ContentTooLarge "Content Too Large",
        414 UriTooLong "URI Too Long",
        415 UnsupportedMediaType "Unsupported Media Type",
        416 RangeNotSatisfiable "Range Not Satisfiable",
        417 ExpectationFailed "Expectation Failed",
        421 MisdirectedRequest "Misdirected Request",
        422 UnprocessableContent "Unprocessable Content",
        423 Locked "Locked",
        424 FailedDependency "Failed Dependency",
        425 TooEarly "Too Early",
        426 UpgradeRequired "Upgrade Required",
        428 PreconditionRequired "Precondition Required",
        429 TooManyRequests "Too Many Requests",
        431 RequestHeaderFieldsTooLarge "Request Header Fields Too Large",
        451 UnavailableForLegalReasons "Unavailable For Legal Reasons",
        500 InternalServerError "Internal Server Error",
        501 NotImplemented "Not Implemented",
        502 BadGateway "Bad Gateway",
        503 ServiceUnavailable "Service Unavailable",
        504 GatewayTimeout "Gateway Timeout",
        505 HttpVersionNotSupported "HTTP Version Not Supported",
        506 VariantAlsoNegotiates "Variant Also Negotiates",
        507 InsufficientStorage "Insufficient Storage",
        508 LoopDetected "Loop Detected",
        510 NotExtended "Not Extended",
        511 NetworkAuthenticationRequired "Network Authentication Required",
    }
}

impl SuccessStatus {
    pub fn category(self) -> Category {
        Category::Success
    }
}

impl RedirectStatus {
    pub fn category(self) -> Category {
        Category::Redirection
    }
}

impl ErrorStatus {
    /// 4xx entries are client errors, 5xx entries are server errors.
    pub fn category(self) -> Category {
        if self.code() < 500 {
            Category::ClientError
        } else {
            Category::ServerError
        }
    }
}

/// Any entry of the registry. Mostly useful to adapters that start from a
/// bare numeric code and need the entry back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success(SuccessStatus),
    Redirection(RedirectStatus),
    Error(ErrorStatus),
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Self::Success(s) => s.code(),
            Self::Redirection(r) => r.code(),
            Self::Error(e) => e.code(),
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::Success(s) => s.reason(),
            Self::Redirection(r) => r.reason(),
            Self::Error(e) => e.reason(),
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Success(s) => s.category(),
            Self::Redirection(r) => r.category(),
            Self::Error(e) => e.category(),
        }
    }
}

impl TryFrom<u16> for Status {
    type Error = anyhow::Error;

    fn try_from(value: u16) -> Result<Self, anyhow::Error> {
        if let Some(s) = SuccessStatus::from_code(value) {
            return Ok(Self::Success(s));
        }
        if let Some(r) = RedirectStatus::from_code(value) {
            return Ok(Self::Redirection(r));
        }
        if let Some(e) = ErrorStatus::from_code(value) {
            return Ok(Self::Error(e));
        }
        bail!("unknown http status code: {}", value)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}
