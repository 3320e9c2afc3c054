use super::{records, repeat};
use crate::analysis::{EndpointHit, endpoint_frequency, top_endpoint};
use pretty_assertions::assert_eq;

#[test]
fn finds_most_requested_endpoint() {
    let set = records(&[
        ("10.0.0.1", "/home", 200),
        ("10.0.0.2", "/login", 200),
        ("10.0.0.3", "/login", 200),
        ("10.0.0.1", "/about", 200),
    ]);

    let top = top_endpoint(&set);

    assert_eq!(
        top,
        Some(EndpointHit {
            endpoint: "/login".into(),
            count: 2,
        })
    );
}

#[test]
fn tie_goes_to_first_seen_endpoint() {
    // Arrange: /a and /b both hit five times, /a first
    let mut rows = Vec::new();
    for _ in 0..5 {
        rows.push(("10.0.0.1", "/a", 200));
        rows.push(("10.0.0.1", "/b", 200));
    }
    let set = records(&rows);

    // Act
    let top = top_endpoint(&set).unwrap();

    // Assert
    assert_eq!(top.endpoint, "/a");
    assert_eq!(top.count, 5);
}

#[test]
fn top_count_is_the_maximum() {
    let mut rows = repeat(("10.0.0.1", "/x", 200), 2);
    rows.extend(repeat(("10.0.0.1", "/y", 200), 4));
    rows.extend(repeat(("10.0.0.1", "/z", 200), 3));
    let set = records(&rows);

    let top = top_endpoint(&set).unwrap();
    let all = endpoint_frequency(&set);

    assert!(all.iter().all(|e| e.count <= top.count));
    assert_eq!(top.endpoint, "/y");
}

#[test]
fn no_records_means_no_top_endpoint() {
    assert_eq!(top_endpoint(&records(&[])), None);
}

#[test]
fn full_table_lists_every_endpoint() {
    let set = records(&[
        ("10.0.0.1", "/a", 200),
        ("10.0.0.1", "/b", 200),
        ("10.0.0.1", "/b", 200),
    ]);

    let all = endpoint_frequency(&set);

    assert_eq!(all.len(), 2);
    assert_eq!(all.get("/b"), Some(2));
    assert_eq!(all.get("/a"), Some(1));
}
