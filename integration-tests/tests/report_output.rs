use integration_tests::harness::{LogFixture, config_for};
use logscope_core::pipeline::run_analysis;
use logscope_core::report::{render_console, write_spreadsheet};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn writes_spreadsheet_next_to_the_log() {
    // Arrange
    let (_dir, path) = LogFixture::new()
        .request("192.168.1.1", "/home", 200)
        .request("192.168.1.1", "/home", 200)
        .request("10.0.0.2", "/about", 200)
        .repeat(11, |f| f.failed_login("203.0.113.5"))
        .write();
    let cfg = config_for(&path);

    // Act
    let report = run_analysis(&cfg).unwrap();
    write_spreadsheet(&cfg.output, &report).unwrap();

    // Assert
    let csv = fs::read_to_string(&cfg.output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "IP address,Request Count,,,Most Frequently Accessed Endpoint,Frequency,,,IP address,Failed Login Count",
            "203.0.113.5,11,,,/login,11,,,203.0.113.5,11",
            "192.168.1.1,2,,,,,,,,",
            "10.0.0.2,1,,,,,,,,",
        ]
    );
}

#[test]
fn console_report_for_clean_log() {
    let (_dir, path) = LogFixture::new()
        .repeat(3, |f| f.request("10.0.0.1", "/home", 200))
        .write();

    let report = run_analysis(&config_for(&path)).unwrap();
    let out = render_console(&report, false);

    assert!(out.contains("10.0.0.1"));
    assert!(out.contains("/home (Accessed 3 times)"));
    assert!(out.contains("No suspicious activity"));
}
