//! Regex adapter: compile once, match, report the matched range.

use crate::constants::WHOLE_UNIT_PATTERN;
use crate::error::PatternError;
use regex::Regex;
use std::collections::HashMap;
use std::ops::Range;

/// A compiled pattern together with the text it was compiled from.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `text` without going through a cache.
    pub fn compile(text: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(text).map_err(|err| pattern_error(text, err))?;
        Ok(Self {
            text: text.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Byte range of the first full match.
    pub fn find(&self, haystack: &str) -> Option<Range<usize>> {
        self.regex.find(haystack).map(|found| found.range())
    }
}

/// Process-lifetime cache of compiled patterns keyed by pattern text.
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: HashMap<String, Regex>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `text`, reusing an earlier compilation of the same text.
    pub fn compile(&mut self, text: &str) -> Result<Pattern, PatternError> {
        if let Some(regex) = self.compiled.get(text) {
            return Ok(Pattern {
                text: text.to_string(),
                regex: regex.clone(),
            });
        }
        let pattern = Pattern::compile(text)?;
        tracing::debug!(pattern = text, "compiled pattern");
        self.compiled
            .insert(text.to_string(), pattern.regex.clone());
        Ok(pattern)
    }

    /// Pattern used for an empty scoping slot: matches the entire unit.
    pub fn whole_unit(&mut self) -> Result<Pattern, PatternError> {
        self.compile(WHOLE_UNIT_PATTERN)
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

fn pattern_error(pattern: &str, err: regex::Error) -> PatternError {
    match err {
        regex::Error::Syntax(rendered) => PatternError {
            pattern: pattern.to_string(),
            offset: caret_offset(pattern, &rendered),
            message: syntax_message(&rendered),
        },
        regex::Error::CompiledTooBig(limit) => PatternError {
            pattern: pattern.to_string(),
            offset: None,
            message: format!("compiled pattern exceeds the {} byte size limit", limit),
        },
        other => PatternError {
            pattern: pattern.to_string(),
            offset: None,
            message: other.to_string(),
        },
    }
}

/// The engine renders syntax errors as the indented pattern followed by a
/// caret line; the caret column is the offset. Multi-line patterns are
/// rendered with line numbers, so no offset is derived for them.
fn caret_offset(pattern: &str, rendered: &str) -> Option<usize> {
    if pattern.contains('\n') {
        return None;
    }
    let mut lines = rendered.lines();
    while let Some(line) = lines.next() {
        // The pattern itself may start with spaces; only the rest is indent.
        let Some(indent) = line.strip_suffix(pattern).map(str::len) else {
            continue;
        };
        if indent == 0 || !line[..indent].bytes().all(|b| b == b' ') {
            continue;
        }
        let caret_line = lines.next()?;
        let column = caret_line.find('^')?;
        return Some(caret_line[..column].chars().count().saturating_sub(indent));
    }
    None
}

fn syntax_message(rendered: &str) -> String {
    rendered
        .lines()
        .find_map(|line| line.strip_prefix("error: "))
        .map(str::to_string)
        .unwrap_or_else(|| rendered.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_reports_byte_range_of_full_match() {
        let pattern = Pattern::compile("b+").expect("compile");
        assert_eq!(pattern.find("aabbbc"), Some(2..5));
        assert_eq!(pattern.find("xyz"), None);
        assert!(pattern.is_match("abc"));
        assert_eq!(pattern.as_str(), "b+");
    }

    #[test]
    fn whole_unit_pattern_covers_multiline_blocks() {
        let mut cache = PatternCache::new();
        let pattern = cache.whole_unit().expect("compile");
        assert_eq!(pattern.find("one\ntwo"), Some(0..7));
        assert_eq!(pattern.find(""), Some(0..0));
    }

    #[test]
    fn cache_compiles_each_distinct_pattern_once() {
        let mut cache = PatternCache::new();
        cache.compile("a+").expect("first");
        cache.compile("a+").expect("second");
        cache.compile("b+").expect("third");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn syntax_errors_carry_offset_and_message() {
        let err = Pattern::compile("ab(cd").expect_err("unclosed group");
        assert_eq!(err.pattern, "ab(cd");
        assert!(err.message.contains("unclosed group"), "{}", err.message);
        assert_eq!(err.offset, Some(2));
    }

    #[test]
    fn caret_offset_reads_indented_rendering() {
        let rendered = "regex parse error:\n    x[\n     ^\nerror: unclosed character class";
        assert_eq!(caret_offset("x[", rendered), Some(1));
        assert_eq!(syntax_message(rendered), "unclosed character class");
        assert_eq!(caret_offset("a\nb", rendered), None);
    }

    #[test]
    fn offset_counts_leading_whitespace_in_the_pattern() {
        let err = Pattern::compile(" (a").expect_err("unclosed group");
        assert_eq!(err.offset, Some(1));

        let rendered = "regex parse error:\n      x[\n       ^\nerror: unclosed character class";
        assert_eq!(caret_offset("  x[", rendered), Some(3));
    }
}
