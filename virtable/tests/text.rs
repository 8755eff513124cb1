use virtable::text::{char_width, display_width, wrapped_line_count};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are two columns wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_wrap_fits_on_one_line() {
    assert_eq!(wrapped_line_count("hello world", 20), 1);
}

#[test]
fn test_wrap_breaks_between_words() {
    // "hello world" / "foo bar"
    assert_eq!(wrapped_line_count("hello world foo bar", 11), 2);
}

#[test]
fn test_wrap_exact_fit() {
    assert_eq!(wrapped_line_count("hello", 5), 1);
}

#[test]
fn test_wrap_preserves_newlines() {
    assert_eq!(wrapped_line_count("line1\nline2", 20), 2);
    assert_eq!(wrapped_line_count("a\n\nb", 20), 3);
}

#[test]
fn test_wrap_cjk() {
    // "日本" / "語"
    assert_eq!(wrapped_line_count("日本語", 4), 2);
}

#[test]
fn test_wrap_empty_takes_one_line() {
    assert_eq!(wrapped_line_count("", 10), 1);
    assert_eq!(wrapped_line_count("   ", 10), 1);
}

#[test]
fn test_wrap_zero_width() {
    assert_eq!(wrapped_line_count("anything", 0), 0);
}

#[test]
fn test_wrap_wide_char_wider_than_line() {
    // A wide char that cannot fit still takes a single line
    assert_eq!(wrapped_line_count("日", 1), 1);
    assert_eq!(wrapped_line_count("日本", 1), 2);
}
