mod endpoint_tests;

use crate::parse::{MalformedLinePolicy, ParseOptions, RecordSet};

/// Build a record set from `(ip, endpoint, status)` triples.
fn records(rows: &[(&str, &str, u16)]) -> RecordSet {
    let text: String = rows
        .iter()
        .map(|(ip, endpoint, status)| {
            format!("{ip} - - [03/Dec/2024:10:12:34 +0000] \"GET {endpoint} HTTP/1.1\" {status} 128\n")
        })
        .collect();

    RecordSet::from_text(&text, &ParseOptions::default(), MalformedLinePolicy::Abort).unwrap()
}

fn repeat<'a>(row: (&'a str, &'a str, u16), n: usize) -> Vec<(&'a str, &'a str, u16)> {
    std::iter::repeat_n(row, n).collect()
}
