use spotitab::utils::*;

#[test]
fn test_remove_duplicate_ids() {
    let mut ids = vec![
        "id1".to_string(),
        "id2".to_string(),
        "id1".to_string(),
        "id3".to_string(),
        "id2".to_string(),
    ];

    remove_duplicate_ids(&mut ids);

    // Should keep the first occurrence of each id, in order
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_remove_duplicate_ids_edge_cases() {
    // Empty list stays empty
    let mut empty: Vec<String> = Vec::new();
    remove_duplicate_ids(&mut empty);
    assert!(empty.is_empty());

    // All-unique list is left untouched
    let mut unique = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    remove_duplicate_ids(&mut unique);
    assert_eq!(unique, vec!["a", "b", "c"]);

    // A list of one repeated id collapses to one entry
    let mut repeated = vec!["x".to_string(), "x".to_string(), "x".to_string()];
    remove_duplicate_ids(&mut repeated);
    assert_eq!(repeated, vec!["x"]);
}

#[test]
fn test_format_duration_ms() {
    // Zero and sub-second durations truncate to 0:00
    assert_eq!(format_duration_ms(0), "0:00");
    assert_eq!(format_duration_ms(999), "0:00");

    // Seconds are zero-padded to two digits
    assert_eq!(format_duration_ms(61_000), "1:01");
    assert_eq!(format_duration_ms(59_999), "0:59");

    // Typical track length
    assert_eq!(format_duration_ms(225_000), "3:45");

    // Minutes do not roll over into hours
    assert_eq!(format_duration_ms(3_600_000), "60:00");
}

#[test]
fn test_parse_positive_count_valid_inputs() {
    // Typical flag values
    assert_eq!(parse_positive_count("1").unwrap(), 1);
    assert_eq!(parse_positive_count("50").unwrap(), 50);
    assert_eq!(parse_positive_count("500").unwrap(), 500);

    // Surrounding whitespace is tolerated
    assert_eq!(parse_positive_count(" 25 ").unwrap(), 25);
}

#[test]
fn test_parse_positive_count_invalid_inputs() {
    // Test zero; the page loop advances by the page size each request, so a
    // zero count would hold it at offset 0 forever
    let result = parse_positive_count("0");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("must be at least 1"));

    // Test non-numeric input
    let result = parse_positive_count("fifty");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'fifty'"));

    // Test negative numbers
    let result = parse_positive_count("-1");
    assert!(result.is_err());

    // Test empty string
    let result = parse_positive_count("");
    assert!(result.is_err());
}
