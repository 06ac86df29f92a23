use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::{debug, warn};

pub const DEFAULT_MAX_LINES: usize = 1000;
pub const DEFAULT_LINES_BEFORE: usize = 10;
pub const DEFAULT_LINES_AFTER: usize = 20;
pub const DEFAULT_KEYWORDS: [&str; 6] = [
    "ERROR",
    "Exception",
    "Traceback",
    "FAILED",
    "Build failed",
    "Segmentation fault",
];

/// # Extract Options
///
/// How much of a console log survives [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// upper bound of the excerpt, the tail is kept on overflow.
    pub max_lines: usize,

    /// case-insensitive substrings marking a failure line.
    pub keywords: Vec<String>,

    pub lines_before: usize,

    /// window end offset (exclusive) counted from the matched line.
    pub lines_after: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            lines_before: DEFAULT_LINES_BEFORE,
            lines_after: DEFAULT_LINES_AFTER,
        }
    }
}

impl ExtractOptions {
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Every line boundary a console can carry, bare `\r` from progress bars included.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Split into lines without their terminators. A trailing terminator opens no extra line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

enum KeywordMatcher {
    Pattern(Regex),
    Lowercase(Vec<String>),
}

impl KeywordMatcher {
    fn new(keywords: &[String]) -> Option<Self> {
        if keywords.is_empty() {
            return None;
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        match RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(KeywordMatcher::Pattern(pattern)),
            Err(e) => {
                warn!("keyword pattern rejected, falling back to plain matching: {}", e);
                Some(KeywordMatcher::Lowercase(
                    keywords.iter().map(|k| k.to_lowercase()).collect(),
                ))
            }
        }
    }

    fn is_match(&self, line: &str) -> bool {
        match self {
            KeywordMatcher::Pattern(pattern) => pattern.is_match(line),
            KeywordMatcher::Lowercase(keywords) => {
                let line = line.to_lowercase();
                keywords.iter().any(|k| line.contains(k.as_str()))
            }
        }
    }
}

/// # extract
///
/// Cut a console log down to the lines around failure keywords.
///
/// Every matching line `i` pulls in `[i - lines_before, i + lines_after)` clipped to the log.
/// Lines are kept once each, in the order they were first pulled in. When more than
/// `max_lines` are collected only the last `max_lines` survive.
///
/// A log without any keyword hit yields an empty string, never the full log.
pub fn extract(log_text: &str, options: &ExtractOptions) -> String {
    let Some(matcher) = KeywordMatcher::new(&options.keywords) else {
        return String::new();
    };

    let lines = split_lines(log_text);
    let mut seen = vec![false; lines.len()];
    let mut picked: Vec<usize> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !matcher.is_match(line) {
            continue;
        }

        let start = i.saturating_sub(options.lines_before);
        let end = i.saturating_add(options.lines_after).min(lines.len());
        for j in start..end {
            if !seen[j] {
                seen[j] = true;
                picked.push(j);
            }
        }
    }

    let skip = picked.len().saturating_sub(options.max_lines);
    let excerpt = picked[skip..]
        .iter()
        .map(|&j| lines[j])
        .collect::<Vec<_>>()
        .join("\n");

    debug!(
        "extracted {} of {} lines ({} dropped by max_lines {})",
        picked.len() - skip,
        lines.len(),
        skip,
        options.max_lines
    );

    excerpt
}

/// [`extract`] with the default keywords, windows and line cap.
pub fn extract_error_block(log_text: &str) -> String {
    extract(log_text, &ExtractOptions::default())
}
