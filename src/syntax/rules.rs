//! Matchers compiled from language profiles
//!
//! Each token category gets one matcher built from the alternation of the
//! profile's patterns. Keyword matchers enforce the boundary contract
//! themselves: a keyword only counts when it starts at the beginning of
//! the text or after whitespace, and ends at the end of the text or
//! before whitespace. Keywords may contain punctuation (`end-if`,
//! `else:`), so `\b` is not a substitute.

use regex::{Match, Regex, RegexBuilder};

use super::profile::{ComprehensionDelimiter, IgnoreRegion, LanguageProfile};
use super::tokens::{Token, TokenCategory};
use crate::error::{RainbowError, Result};

/// Boundary-anchored matcher for one keyword category
pub struct KeywordMatcher {
    /// `\A(?P<kw>alternation)(?:\s|\z)`, tried at each candidate start
    pattern: Regex,
}

impl KeywordMatcher {
    /// Compile a keyword alternation, or `None` when there are no patterns
    pub fn new(patterns: &[String], case_sensitive: bool) -> std::result::Result<Option<Self>, regex::Error> {
        if patterns.is_empty() {
            return Ok(None);
        }
        let source = format!(r"\A(?P<kw>{})(?:\s|\z)", alternation(patterns));
        let pattern = build(&source, case_sensitive)?;
        Ok(Some(Self { pattern }))
    }

    /// Length of the keyword starting exactly at `start`, if any
    ///
    /// The caller is responsible for the prefix half of the boundary check.
    pub fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        let caps = self.pattern.captures(&text[start..])?;
        let kw = caps.name("kw")?;
        (!kw.is_empty()).then(|| kw.len())
    }

    /// Push every non-overlapping keyword in `text` as a token of `category`
    pub fn find_all(&self, text: &str, category: TokenCategory, tokens: &mut Vec<Token>) {
        let mut after_space = true;
        let mut next_free = 0;

        for (i, ch) in text.char_indices() {
            if after_space && i >= next_free {
                if let Some(len) = self.match_at(text, i) {
                    tokens.push(Token::new(i, len, category));
                    next_free = i + len;
                }
            }
            after_space = ch.is_whitespace();
        }
    }
}

/// Matcher for comments and strings
///
/// Block regions may span lines and stop at the nearest close; line
/// regions run to the end of their line.
pub struct IgnoreMatcher {
    block: Option<Regex>,
    line: Option<Regex>,
}

impl IgnoreMatcher {
    pub fn new(regions: &[IgnoreRegion], case_sensitive: bool) -> std::result::Result<Self, regex::Error> {
        let blocks: Vec<String> = regions
            .iter()
            .filter(|r| !r.single_line)
            .map(|r| {
                let close = r.close.as_deref().unwrap_or(&r.open);
                format!("(?:{})(?s:.*?)(?:{})", r.open, close)
            })
            .collect();
        let lines: Vec<String> = regions
            .iter()
            .filter(|r| r.single_line)
            .map(|r| r.open.clone())
            .collect();

        let block = if blocks.is_empty() {
            None
        } else {
            Some(build(&alternation(&blocks), case_sensitive)?)
        };
        let line = if lines.is_empty() {
            None
        } else {
            Some(build(&format!("(?:{}).*", alternation(&lines)), case_sensitive)?)
        };

        Ok(Self { block, line })
    }

    /// Push an open/close marker pair for every region found
    ///
    /// Line and block regions are searched together, leftmost first, so
    /// regions never overlap: an apostrophe inside a line comment does not
    /// open a string. A block region wins a tie (`#=` over `#`).
    pub fn find_all(&self, text: &str, tokens: &mut Vec<Token>) {
        let mut block = Pending::new(self.block.as_ref());
        let mut line = Pending::new(self.line.as_ref());
        let mut pos = 0;
        while pos < text.len() {
            let found = match (block.next(text, pos), line.next(text, pos)) {
                (Some(b), Some(l)) if l.start() < b.start() => l,
                (Some(b), _) => b,
                (None, Some(l)) => l,
                (None, None) => break,
            };

            push_markers(text, found.start(), found.end(), tokens);
            pos = if found.is_empty() {
                next_boundary(text, found.start())
            } else {
                found.end()
            };
        }
    }
}

/// Next match of one regex at or after a moving scan position
///
/// A match is searched for again only once the scan has moved past its
/// start, and a failed search ends the regex for the rest of the text, so
/// each part of the text is searched a bounded number of times.
struct Pending<'r, 't> {
    regex: Option<&'r Regex>,
    found: Option<Match<'t>>,
}

impl<'r, 't> Pending<'r, 't> {
    fn new(regex: Option<&'r Regex>) -> Self {
        Self { regex, found: None }
    }

    fn next(&mut self, text: &'t str, pos: usize) -> Option<Match<'t>> {
        let regex = self.regex?;
        if self.found.map_or(true, |m| m.start() < pos) {
            self.found = regex.find_at(text, pos);
            if self.found.is_none() {
                self.regex = None;
            }
        }
        self.found
    }
}

/// Matchers for comprehension brackets
///
/// Opens and closes are kept apart rather than paired, since a single scan
/// cannot presume the brackets balance.
pub struct ComprehensionMatcher {
    open: Regex,
    close: Regex,
}

impl ComprehensionMatcher {
    pub fn new(
        delimiters: &[ComprehensionDelimiter],
        case_sensitive: bool,
    ) -> std::result::Result<Option<Self>, regex::Error> {
        if delimiters.is_empty() {
            return Ok(None);
        }
        let opens: Vec<String> = delimiters.iter().map(|d| d.open.clone()).collect();
        let closes: Vec<String> = delimiters.iter().map(|d| d.close.clone()).collect();
        Ok(Some(Self {
            open: build(&alternation(&opens), case_sensitive)?,
            close: build(&alternation(&closes), case_sensitive)?,
        }))
    }

    pub fn find_all(&self, text: &str, tokens: &mut Vec<Token>) {
        let passes = [
            (&self.open, TokenCategory::OpenComprehension),
            (&self.close, TokenCategory::CloseComprehension),
        ];
        for (regex, category) in passes {
            tokens.extend(
                regex
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(|m| Token::new(m.start(), m.len(), category)),
            );
        }
    }
}

/// All matchers for one language
pub struct CompiledProfile {
    /// Language id this profile was registered under
    pub language: String,
    pub(crate) open: Option<KeywordMatcher>,
    pub(crate) close: Option<KeywordMatcher>,
    pub(crate) neutral: Option<KeywordMatcher>,
    pub(crate) ignore: IgnoreMatcher,
    pub(crate) comprehension: Option<ComprehensionMatcher>,
}

impl CompiledProfile {
    /// Compile every matcher of a profile
    ///
    /// A profile with any invalid pattern is rejected as a whole.
    pub fn compile(language: &str, profile: &LanguageProfile) -> Result<Self> {
        let invalid = |source| RainbowError::InvalidProfile {
            language: language.to_string(),
            source,
        };
        let cs = profile.case_sensitive;

        Ok(Self {
            language: language.to_string(),
            open: KeywordMatcher::new(&profile.open_tokens, cs).map_err(invalid)?,
            close: KeywordMatcher::new(&profile.close_tokens, cs).map_err(invalid)?,
            neutral: KeywordMatcher::new(&profile.neutral_tokens, cs).map_err(invalid)?,
            ignore: IgnoreMatcher::new(&profile.ignore_regions, cs).map_err(invalid)?,
            comprehension: ComprehensionMatcher::new(&profile.comprehension_delimiters, cs)
                .map_err(invalid)?,
        })
    }
}

/// Unit-length markers at the first and last character of a region
fn push_markers(text: &str, start: usize, end: usize, tokens: &mut Vec<Token>) {
    if start >= end {
        return;
    }
    let first_len = text[start..].chars().next().map_or(1, char::len_utf8);
    tokens.push(Token::new(start, first_len, TokenCategory::OpenIgnore));

    if let Some((last, ch)) = text[..end].char_indices().next_back() {
        tokens.push(Token::new(last, ch.len_utf8(), TokenCategory::CloseIgnore));
    }
}

fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(text.len(), |ch| pos + ch.len_utf8())
}

fn alternation(patterns: &[String]) -> String {
    patterns
        .iter()
        .map(|p| format!("(?:{})", p))
        .collect::<Vec<_>>()
        .join("|")
}

fn build(source: &str, case_sensitive: bool) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(source)
        .case_insensitive(!case_sensitive)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn keywords(items: &[&str], text: &str) -> Vec<(usize, usize)> {
        let matcher = KeywordMatcher::new(&strings(items), true).unwrap().unwrap();
        let mut tokens = Vec::new();
        matcher.find_all(text, TokenCategory::OpenBlock, &mut tokens);
        tokens.iter().map(|t| (t.start, t.length)).collect()
    }

    #[test]
    fn test_keyword_boundaries() {
        assert_eq!(keywords(&["if"], "if x"), vec![(0, 2)]);
        assert!(keywords(&["if"], "ifdef x").is_empty());
        assert!(keywords(&["if"], "elif x").is_empty());
        assert!(keywords(&["if"], "(if x)").is_empty());
        assert_eq!(keywords(&["if"], "x\n\tif"), vec![(3, 2)]);
    }

    #[test]
    fn test_adjacent_keywords() {
        assert_eq!(keywords(&["end"], "end end\nend"), vec![(0, 3), (4, 3), (8, 3)]);
    }

    #[test]
    fn test_alternation_backtracks_to_longer_keyword() {
        // "do" fails the suffix check, "done" must still be found
        assert_eq!(keywords(&["do", "done"], "done"), vec![(0, 4)]);
        assert_eq!(keywords(&["do", "done"], "do done"), vec![(0, 2), (3, 4)]);
    }

    #[test]
    fn test_punctuation_keywords() {
        assert_eq!(keywords(&["end-if"], "x end-if"), vec![(2, 6)]);
        assert_eq!(keywords(&["else:"], "else: x"), vec![(0, 5)]);
        assert!(keywords(&["else:"], "else x").is_empty());
    }

    #[test]
    fn test_case_insensitive_keeps_offsets() {
        let matcher = KeywordMatcher::new(&strings(&["end"]), false).unwrap().unwrap();
        let mut tokens = Vec::new();
        matcher.find_all("ÉÉ END", TokenCategory::CloseBlock, &mut tokens);
        assert_eq!(tokens, vec![Token::new(5, 3, TokenCategory::CloseBlock)]);
    }

    #[test]
    fn test_length_changing_fold_keeps_offsets() {
        // "İ" is two bytes but lowercases to three ("i̇")
        let text = "İ İf İ END";
        let matcher = KeywordMatcher::new(&strings(&["if", "end"]), false).unwrap().unwrap();
        let mut tokens = Vec::new();
        matcher.find_all(text, TokenCategory::OpenBlock, &mut tokens);

        assert_eq!(tokens.len(), 1);
        let token = tokens[0];
        assert_eq!(token.start, 10);
        assert_eq!(&text[token.start..token.end()], "END");
    }

    #[test]
    fn test_empty_patterns_compile_to_none() {
        assert!(KeywordMatcher::new(&[], true).unwrap().is_none());
        assert!(ComprehensionMatcher::new(&[], true).unwrap().is_none());
    }

    #[test]
    fn test_ignore_markers() {
        let regions = vec![IgnoreRegion::line("#"), IgnoreRegion::block("\"", "\"")];
        let matcher = IgnoreMatcher::new(&regions, true).unwrap();
        let mut tokens = Vec::new();
        matcher.find_all("a # end\n\"x\ny\"", &mut tokens);
        tokens.sort_by_key(|t| t.sort_key());

        let got: Vec<_> = tokens.iter().map(|t| (t.start, t.category)).collect();
        assert_eq!(
            got,
            vec![
                (2, TokenCategory::OpenIgnore),
                (6, TokenCategory::CloseIgnore),
                (8, TokenCategory::OpenIgnore),
                (12, TokenCategory::CloseIgnore),
            ]
        );
    }

    #[test]
    fn test_line_comment_hides_string_opener() {
        let regions = vec![IgnoreRegion::line("#"), IgnoreRegion::block("'", "'")];
        let matcher = IgnoreMatcher::new(&regions, true).unwrap();
        let mut tokens = Vec::new();
        matcher.find_all("# don't\nif x\nend\n'a'", &mut tokens);

        let starts: Vec<_> = tokens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0, 6, 17, 19]);
    }

    #[test]
    fn test_block_region_wins_tie() {
        let regions = vec![IgnoreRegion::line("#"), IgnoreRegion::block("#=", "=#")];
        let matcher = IgnoreMatcher::new(&regions, true).unwrap();
        let mut tokens = Vec::new();
        matcher.find_all("#= a\nb =# end", &mut tokens);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].start, 8);
    }

    #[test]
    fn test_block_region_stops_at_nearest_close() {
        let regions = vec![IgnoreRegion::block(r"=begin", r"=end")];
        let matcher = IgnoreMatcher::new(&regions, true).unwrap();
        let mut tokens = Vec::new();
        matcher.find_all("=begin a =end b =end", &mut tokens);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].start, 12);
    }

    #[test]
    fn test_many_regions_with_rare_block() {
        let regions = vec![IgnoreRegion::line("#"), IgnoreRegion::block("\"", "\"")];
        let matcher = IgnoreMatcher::new(&regions, true).unwrap();
        let mut text = String::new();
        for i in 0..20_000 {
            text.push_str(&format!("def f{} # comment number {}\nend\n", i, i));
        }
        text.push_str("\"tail\"");

        let started = std::time::Instant::now();
        let mut tokens = Vec::new();
        matcher.find_all(&text, &mut tokens);

        assert_eq!(tokens.len(), 2 * 20_001);
        let last = tokens[tokens.len() - 1];
        assert_eq!(last.start, text.len() - 1);
        assert!(
            started.elapsed() < std::time::Duration::from_secs(2),
            "ignore scan took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn test_cached_match_reused_after_overlap() {
        // The block match found alongside the first comment lies inside it,
        // so it must be searched for again past the comment
        let regions = vec![IgnoreRegion::line("#"), IgnoreRegion::block("'", "'")];
        let matcher = IgnoreMatcher::new(&regions, true).unwrap();
        let mut tokens = Vec::new();
        matcher.find_all("# it's
'a' # b
'c'", &mut tokens);

        let starts: Vec<_> = tokens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0, 5, 7, 9, 11, 13, 15, 17]);
    }

    #[test]
    fn test_comprehension_matches() {
        let delimiters = vec![ComprehensionDelimiter {
            open: r"\[".to_string(),
            close: r"\]".to_string(),
        }];
        let matcher = ComprehensionMatcher::new(&delimiters, true).unwrap().unwrap();
        let mut tokens = Vec::new();
        matcher.find_all("[a [b]]", &mut tokens);
        let opens = tokens
            .iter()
            .filter(|t| t.category == TokenCategory::OpenComprehension)
            .count();
        assert_eq!(opens, 2);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_invalid_profile() {
        let profile = LanguageProfile::new(&["(unclosed"], &["end"], &[]);
        let err = CompiledProfile::compile("broken", &profile).err().unwrap();
        assert!(err.is_configuration());
        assert!(matches!(err, RainbowError::InvalidProfile { ref language, .. } if language == "broken"));
    }
}
