use super::*;

fn gaps(tokens: &[&str]) -> Vec<String> {
    find_gaps(tokens, SortOrder::Ascending).unwrap()
}

#[test]
fn single_gap_is_padded_to_max_width() {
    assert_eq!(gaps(&["001", "002", "004"]), vec!["003"]);
}

#[test]
fn width_follows_max_value_not_token_width() {
    assert_eq!(
        gaps(&["1", "2", "10"]),
        vec!["03", "04", "05", "06", "07", "08", "09"]
    );
}

#[test]
fn padded_and_unpadded_tokens_are_equivalent() {
    assert_eq!(gaps(&["1", "002", "0003", "5"]), vec!["4"]);
}

#[test]
fn complete_sequence_has_no_gaps() {
    assert!(gaps(&["1", "2", "3"]).is_empty());
}

#[test]
fn lone_maximum_reports_everything_below() {
    assert_eq!(gaps(&["4"]), vec!["1", "2", "3"]);
}

#[test]
fn zero_is_ignored() {
    assert!(gaps(&["0"]).is_empty());
    assert_eq!(gaps(&["0", "2"]), vec!["1"]);
}

#[test]
fn descending_order_reverses_result() {
    let asc = find_gaps(["1", "2", "10"], SortOrder::Ascending).unwrap();
    let mut desc = find_gaps(["1", "2", "10"], SortOrder::Descending).unwrap();
    assert_eq!(desc.first().map(String::as_str), Some("09"));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn empty_input_has_no_maximum() {
    let err = find_gaps(Vec::<String>::new(), SortOrder::Ascending).unwrap_err();
    assert!(matches!(err, SeqGapError::EmptySequence));
}

#[test]
fn non_numeric_token_is_rejected() {
    let err = find_gaps(["1", "two"], SortOrder::Ascending).unwrap_err();
    match err {
        SeqGapError::NonNumericToken { token, .. } => assert_eq!(token, "two"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn negative_token_is_rejected() {
    assert!(find_gaps(["-3"], SortOrder::Ascending).is_err());
}

#[test]
fn fullwidth_digits_count_as_numbers() {
    assert_eq!(gaps(&["１", "３"]), vec!["2"]);
}

#[test]
fn mixed_script_digits_share_one_sequence() {
    // Arabic-Indic 3, Devanagari 4, mathematical bold 6
    assert_eq!(gaps(&["1", "٣", "४", "𝟔"]), vec!["2", "5"]);
}

#[test]
fn parse_token_reads_unicode_digits() {
    assert_eq!(parse_token("１２").unwrap(), 12);
    assert_eq!(parse_token("٠٧").unwrap(), 7);
    assert_eq!(parse_token("𝟗").unwrap(), 9);
}

#[test]
fn parse_token_rejects_signs_and_empty() {
    assert!(matches!(
        parse_token("+3"),
        Err(SeqGapError::NonNumericToken { .. })
    ));
    assert!(matches!(
        parse_token(""),
        Err(SeqGapError::NonNumericToken { .. })
    ));
}

#[test]
fn oversized_token_is_too_large_not_non_numeric() {
    let err = find_gaps(["123456789012345678901"], SortOrder::Ascending).unwrap_err();
    match err {
        SeqGapError::TokenTooLarge { token } => assert_eq!(token, "123456789012345678901"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn u64_max_still_parses() {
    assert_eq!(parse_token("18446744073709551615").unwrap(), u64::MAX);
    assert!(parse_token("18446744073709551616").is_err());
}

#[test]
fn detection_is_idempotent() {
    let tokens = ["03", "07", "12"];
    let first = find_gaps(tokens, SortOrder::Ascending).unwrap();
    let second = find_gaps(tokens, SortOrder::Ascending).unwrap();
    assert_eq!(first, second);
}

#[test]
fn gaps_and_input_cover_full_range() {
    let tokens = ["002", "005", "006", "011", "100"];
    let missing = gaps(&tokens);

    let mut covered: BTreeSet<u64> = missing.iter().map(|s| s.parse().unwrap()).collect();
    covered.extend(tokens.iter().map(|s| s.parse::<u64>().unwrap()));
    assert_eq!(covered, (1..=100).collect::<BTreeSet<u64>>());

    assert!(missing.iter().all(|s| s.len() == 3));
    assert!(tokens.iter().all(|t| !missing.contains(&(*t).to_string())));
}

#[test]
fn digit_count_values() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(999), 3);
    assert_eq!(digit_count(u64::MAX), 20);
}

#[test]
fn sort_order_from_reverse_flag() {
    assert_eq!(SortOrder::from_reverse(false), SortOrder::Ascending);
    assert_eq!(SortOrder::from_reverse(true), SortOrder::Descending);
}
