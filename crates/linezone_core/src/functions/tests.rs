use super::*;
use crate::pattern::Pattern;

fn run(function: &Function, text: &str) -> (Outcome, String) {
    run_in_zone(function, text, None)
}

fn run_in_zone(
    function: &Function,
    text: &str,
    zone: Option<std::ops::Range<usize>>,
) -> (Outcome, String) {
    let mut buffer = ZoneBuffer::new(256);
    buffer.load(text).expect("load");
    if let Some(zone) = zone {
        buffer.set_zone(zone);
    }
    let outcome = function.apply(&mut buffer).expect("apply");
    buffer.commit();
    (outcome, buffer.source().to_string())
}

fn output(function: &Function, text: &str) -> String {
    run(function, text).1
}

#[test]
fn case_functions_touch_only_the_zone() {
    assert_eq!(output(&Function::Upper, "hello world"), "HELLO WORLD");
    assert_eq!(
        run_in_zone(&Function::Upper, "hello world", Some(6..11)).1,
        "hello WORLD"
    );
    assert_eq!(
        run_in_zone(&Function::Lower, "ABC DEF", Some(0..3)).1,
        "abc DEF"
    );
}

#[test]
fn trim_strips_surrounding_whitespace() {
    assert_eq!(output(&Function::Trim, "   hi  "), "hi");
    assert_eq!(output(&Function::Trim, "\t\t"), "");
}

#[test]
fn camel_joins_words() {
    assert_eq!(output(&Function::Camel, "hello big-world"), "helloBigWorld");
    assert_eq!(output(&Function::Camel, "HTTP request_id"), "httpRequest_id");
    assert_eq!(output(&Function::Camel, "--"), "");
}

#[test]
fn substitute_rewrites_the_whole_unit() {
    let pattern = Pattern::compile("/to/").expect("pattern");
    let substitute = Function::Substitute(Substitute::new(pattern, "/via/".to_string(), 0));
    assert_eq!(output(&substitute, "path/to/file"), "path/via/file");
}

#[test]
fn substitute_honors_limit_and_groups() {
    let pattern = Pattern::compile("([a-z])([0-9])").expect("pattern");
    let all = Function::Substitute(Substitute::new(pattern.clone(), "$2$1".to_string(), 0));
    assert_eq!(output(&all, "a1 b2 c3"), "1a 2b 3c");
    let first = Function::Substitute(Substitute::new(pattern, "$2$1".to_string(), 1));
    assert_eq!(output(&first, "a1 b2 c3"), "1a b2 c3");
}

#[test]
fn range_sel_counts_negative_starts_from_the_end() {
    let last_three = Function::RangeSel(CharRange::new(-3, None));
    assert_eq!(output(&last_three, "0123456789"), "789");
    let past_start = Function::RangeSel(CharRange::new(-20, None));
    assert_eq!(output(&past_start, "0123456789"), "0123456789");
    let middle = Function::RangeSel(CharRange::new(2, Some(3)));
    assert_eq!(output(&middle, "0123456789"), "234");
    let beyond = Function::RangeSel(CharRange::new(50, None));
    assert_eq!(output(&beyond, "0123456789"), "");
}

#[test]
fn range_unsel_deletes_the_range() {
    let head = Function::RangeUnsel(CharRange::new(0, Some(2)));
    assert_eq!(output(&head, "abcdef"), "cdef");
    let tail = Function::RangeUnsel(CharRange::new(-2, None));
    assert_eq!(output(&tail, "abcdef"), "abcd");
}

#[test]
fn ranges_count_characters_not_bytes() {
    let last_two = Function::RangeSel(CharRange::new(-2, None));
    assert_eq!(output(&last_two, "naïve café"), "fé");
}

#[test]
fn insert_and_append() {
    let at_two = Function::Insert(Insert::new("--".to_string(), 2));
    assert_eq!(output(&at_two, "abcd"), "ab--cd");
    let from_end = Function::Insert(Insert::new("!".to_string(), -1));
    assert_eq!(output(&from_end, "abcd"), "abc!d");
    let past_end = Function::Insert(Insert::new("!".to_string(), 99));
    assert_eq!(output(&past_end, "abcd"), "abcd!");
    assert_eq!(output(&Function::Append(";".to_string()), "x = 1"), "x = 1;");
}

#[test]
fn replace_and_extract_use_the_zone() {
    assert_eq!(
        run_in_zone(&Function::Replace("N".to_string()), "id=42;", Some(3..5)).1,
        "id=N;"
    );
    assert_eq!(
        run_in_zone(&Function::Extract, "id=42;", Some(3..5)).1,
        "42"
    );
}

#[test]
fn translate_maps_characters() {
    let rot = Function::Translate(Translate::new("a-c", "x-z"));
    assert_eq!(output(&rot, "abcabd"), "xyzxyd");
}

#[test]
fn quote_escapes_marks_and_backslashes() {
    let quote = Function::Quote(Quote::new(None));
    assert_eq!(output(&quote, r#"say "hi""#), r#""say \"hi\"""#);
    let single = Function::Quote(Quote::new(Some('\'')));
    assert_eq!(output(&single, r"a\b"), r"'a\\b'");
}

#[test]
fn quote_then_unquote_restores_the_zone() {
    let mut buffer = ZoneBuffer::new(256);
    buffer.load(r#"a "b" \c"#).expect("load");
    Function::Quote(Quote::new(None))
        .apply(&mut buffer)
        .expect("quote");
    buffer.commit();
    Function::Unquote(Unquote::new(None))
        .apply(&mut buffer)
        .expect("unquote");
    buffer.commit();
    assert_eq!(buffer.source(), r#"a "b" \c"#);
}

#[test]
fn unquote_leaves_unquoted_zones_alone() {
    let unquote = Function::Unquote(Unquote::new(None));
    assert_eq!(output(&unquote, "plain"), "plain");
    assert_eq!(
        run_in_zone(&unquote, "key='v'", Some(4..7)).1,
        "key=v"
    );
}

#[test]
fn quote_overflow_is_reported_before_writing() {
    let mut buffer = ZoneBuffer::new(5);
    buffer.load("abcde").expect("load");
    let err = Function::Quote(Quote::new(None))
        .apply(&mut buffer)
        .expect_err("overflow");
    assert_eq!(err, OverflowError { needed: 7, limit: 5 });
    assert_eq!(buffer.dest(), "");
}

#[test]
fn remove_drops_the_unit() {
    let mut buffer = ZoneBuffer::new(16);
    buffer.load("gone").expect("load");
    assert_eq!(Function::Remove.apply(&mut buffer), Ok(Outcome::Drop));
    let (outcome, _) = run(&Function::Upper, "kept");
    assert_eq!(outcome, Outcome::Continue);
}

#[test]
fn base64_encode_and_decode() {
    assert_eq!(output(&Function::Base64Encode, "hello"), "aGVsbG8=");
    assert_eq!(output(&Function::Base64Decode, "aGVsbG8="), "hello");
    assert_eq!(
        run_in_zone(&Function::Base64Decode, "v=aGk=", Some(2..6)).1,
        "v=hi"
    );
}

#[test]
fn invalid_base64_passes_through() {
    assert_eq!(output(&Function::Base64Decode, "not base64!"), "not base64!");
}

#[test]
fn url_encode_and_decode() {
    assert_eq!(output(&Function::UrlEncode, "a b&c"), "a%20b%26c");
    assert_eq!(output(&Function::UrlDecode, "a%20b%26c"), "a b&c");
    assert_eq!(output(&Function::UrlDecode, "%FF"), "%FF");
}
