use crate::parse::error::ParseError;
use crate::parse::line::parse_line;
use crate::parse::types::{MalformedLinePolicy, ParseOptions, RequestRecord};

/// The parsed contents of one log file, in file order.
///
/// Built once and only read afterwards; lines that failed to parse are kept
/// alongside so they can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<RequestRecord>,
    rejected: Vec<ParseError>,
}

impl RecordSet {
    pub fn from_text(
        text: &str,
        options: &ParseOptions,
        policy: MalformedLinePolicy,
    ) -> Result<Self, ParseError> {
        build_record_set(text.lines(), options, policy)
    }

    pub fn from_bytes(
        bytes: &[u8],
        options: &ParseOptions,
        policy: MalformedLinePolicy,
    ) -> Result<Self, ParseError> {
        build_record_set_from_bytes(bytes, options, policy)
    }

    pub fn records(&self) -> &[RequestRecord] {
        &self.records
    }

    pub fn rejected(&self) -> &[ParseError] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequestRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a RequestRecord;
    type IntoIter = std::slice::Iter<'a, RequestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Tokenize every line and collect the results.
///
/// Blank lines are not requests and are passed over silently. Under
/// [`MalformedLinePolicy::Skip`] each bad line is logged and remembered;
/// under [`MalformedLinePolicy::Abort`] the first one is returned.
pub fn build_record_set<'a, I>(
    lines: I,
    options: &ParseOptions,
    policy: MalformedLinePolicy,
) -> Result<RecordSet, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set = RecordSet::default();

    for (idx, line) in lines.into_iter().enumerate() {
        set.push_line(Ok(line), idx + 1, options, policy)?;
    }

    Ok(set.finish())
}

/// Same as [`build_record_set`], over the raw bytes of a log file.
///
/// A line that is not valid UTF-8 is malformed on its own and goes through
/// the policy like any other bad line; its neighbours are unaffected.
pub fn build_record_set_from_bytes(
    bytes: &[u8],
    options: &ParseOptions,
    policy: MalformedLinePolicy,
) -> Result<RecordSet, ParseError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut set = RecordSet::default();

    for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let line_number = idx + 1;
        let line = std::str::from_utf8(raw)
            .map_err(|_| ParseError::malformed(line_number, "line is not valid UTF-8"));
        set.push_line(line, line_number, options, policy)?;
    }

    Ok(set.finish())
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl RecordSet {
    fn push_line(
        &mut self,
        line: Result<&str, ParseError>,
        line_number: usize,
        options: &ParseOptions,
        policy: MalformedLinePolicy,
    ) -> Result<(), ParseError> {
        let parsed = line.and_then(|line| {
            let line = if line_number == 1 {
                line.trim_start_matches('\u{feff}')
            } else {
                line
            };
            if line.trim().is_empty() {
                return Ok(None);
            }
            parse_line(line, line_number, options).map(Some)
        });

        match parsed {
            Ok(Some(record)) => self.records.push(record),
            Ok(None) => {}
            Err(err) => match policy {
                MalformedLinePolicy::Abort => return Err(err),
                MalformedLinePolicy::Skip => {
                    tracing::warn!(
                        line_number = err.line_number,
                        reason = %err.reason,
                        "skipping malformed log line"
                    );
                    self.rejected.push(err);
                }
            },
        }

        Ok(())
    }

    fn finish(self) -> Self {
        tracing::debug!(
            records = self.records.len(),
            rejected = self.rejected.len(),
            "record set built"
        );
        self
    }
}
