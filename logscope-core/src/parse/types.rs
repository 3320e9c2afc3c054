use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the request's authentication was judged valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CredentialStatus {
    #[serde(rename = "Valid credentials")]
    Valid,
    #[serde(rename = "Invalid Credentials")]
    Invalid,
}

impl CredentialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialStatus::Valid => "Valid credentials",
            CredentialStatus::Invalid => "Invalid Credentials",
        }
    }

    /// Recognise a credential marker taken from the raw line.
    ///
    /// Access logs in the wild disagree on capitalisation, so the comparison
    /// ignores case and surrounding whitespace.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let marker = marker.trim();
        if marker.eq_ignore_ascii_case("invalid credentials") {
            Some(CredentialStatus::Invalid)
        } else if marker.eq_ignore_ascii_case("valid credentials") {
            Some(CredentialStatus::Valid)
        } else {
            None
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed request. Field order matches the report columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRecord {
    pub ip_address: String,
    pub request_method: String,
    pub endpoint: String,
    pub protocol: String,
    pub status_code: u16,
    pub credential_status: CredentialStatus,
}

impl RequestRecord {
    /// A request counts as a failed login when the server answered 401 or
    /// the line carried an invalid-credentials marker.
    pub fn is_failed_login(&self) -> bool {
        self.status_code == UNAUTHORIZED || self.credential_status == CredentialStatus::Invalid
    }
}

pub const UNAUTHORIZED: u16 = 401;

/// Behaviour of the record builder when a line cannot be tokenized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Log a diagnostic and keep going.
    #[default]
    Skip,
    /// Stop at the first malformed line.
    Abort,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Reject 401 lines that do not carry an explicit credential marker
    /// instead of treating them as invalid credentials.
    pub strict_credentials: bool,
}
