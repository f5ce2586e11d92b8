use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Input string could not be parsed")]
    UnparsableInput,

    #[error("Input string is not a well-formed domain name")]
    MalformedDomainName,

    #[error("Input string is not a valid IP address")]
    InvalidIpAddress,

    #[error("Invalid DNS query type")]
    InvalidQueryType,

    /// Carries the transport detail for logging; the public message is fixed.
    #[error("DNS server could not be reached")]
    ServerUnreachable(String),

    #[error("The name server encountered an internal failure while processing this request (SERVFAIL)")]
    ServerFailure,

    #[error("Some name that ought to exist, does not exist (NXDOMAIN)")]
    NxDomain,

    #[error("The name server refuses to perform the specified operation for policy or security reasons (REFUSED)")]
    Refused,
}

impl DomainError {
    /// Application error code reported in the JSON error body.
    pub fn code(&self) -> u16 {
        match self {
            DomainError::UnparsableInput => 401,
            DomainError::MalformedDomainName => 402,
            DomainError::InvalidIpAddress => 403,
            DomainError::InvalidQueryType => 404,
            DomainError::ServerUnreachable(_) => 501,
            DomainError::ServerFailure => 502,
            DomainError::NxDomain => 503,
            DomainError::Refused => 505,
        }
    }

    /// True for errors caused by the request input rather than the upstream.
    pub fn is_client_error(&self) -> bool {
        self.code() < 500
    }

    pub fn unreachable(detail: impl Into<String>) -> Self {
        DomainError::ServerUnreachable(detail.into())
    }
}
