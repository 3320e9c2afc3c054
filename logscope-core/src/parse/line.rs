use crate::parse::error::ParseError;
use crate::parse::types::{CredentialStatus, ParseOptions, RequestRecord, UNAUTHORIZED};

const QUOTE: char = '"';
const NO_CREDENTIALS: &str = "-";

/// Tokenize one access log line.
///
/// The expected shape is
/// `<ip> <ignored...> "[marker] <method> <endpoint> <protocol>" <status> <trailing...> ["<marker>"]`.
/// `line_number` is 1-based and only used for diagnostics.
pub fn parse_line(
    line: &str,
    line_number: usize,
    options: &ParseOptions,
) -> Result<RequestRecord, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let segments: Vec<&str> = line.split(QUOTE).collect();

    if segments.len() < 3 {
        return Err(ParseError::malformed(
            line_number,
            format!(
                "expected a quoted request line, found {} quote-delimited segment(s)",
                segments.len()
            ),
        ));
    }

    let ip_address = segments[0]
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::malformed(line_number, "missing ip address"))?;

    let request = parse_request_line(segments[1], line_number)?;
    let status_code = parse_status_code(segments[2], line_number)?;

    let inline_marker = match request.marker.as_deref() {
        None | Some(NO_CREDENTIALS) => None,
        Some(marker) => Some(CredentialStatus::from_marker(marker).ok_or_else(|| {
            ParseError::malformed(
                line_number,
                format!("unrecognised credential marker '{marker}'"),
            )
        })?),
    };

    // Quoted segments after the status block sit at odd indices; even ones are
    // the unquoted gaps between them. Referer and user agent also live here.
    let trailing_marker = segments
        .iter()
        .skip(3)
        .step_by(2)
        .find_map(|s| CredentialStatus::from_marker(s));

    let credential_status = match inline_marker.or(trailing_marker) {
        Some(status) => status,
        None if status_code != UNAUTHORIZED => CredentialStatus::Valid,
        None if options.strict_credentials => {
            return Err(ParseError::malformed(
                line_number,
                "status 401 without an explicit credential marker",
            ));
        }
        None => CredentialStatus::Invalid,
    };

    Ok(RequestRecord {
        ip_address: ip_address.to_string(),
        request_method: request.method.to_string(),
        endpoint: request.endpoint.to_string(),
        protocol: request.protocol.to_string(),
        status_code,
        credential_status,
    })
}

struct RequestLine<'a> {
    marker: Option<String>,
    method: &'a str,
    endpoint: &'a str,
    protocol: &'a str,
}

fn parse_request_line(segment: &str, line_number: usize) -> Result<RequestLine<'_>, ParseError> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();

    let [prefix @ .., method, endpoint, protocol] = tokens.as_slice() else {
        return Err(ParseError::malformed(
            line_number,
            format!(
                "request line '{}' has {} token(s), expected method, endpoint and protocol",
                segment.trim(),
                tokens.len()
            ),
        ));
    };

    let marker = (!prefix.is_empty()).then(|| prefix.join(" "));

    Ok(RequestLine {
        marker,
        method: *method,
        endpoint: *endpoint,
        protocol: *protocol,
    })
}

fn parse_status_code(segment: &str, line_number: usize) -> Result<u16, ParseError> {
    let token = segment
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::malformed(line_number, "missing status code"))?;

    token.parse::<u16>().map_err(|_| {
        ParseError::malformed(line_number, format!("status code '{token}' is not an integer"))
    })
}
