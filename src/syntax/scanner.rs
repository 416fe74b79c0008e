//! Document scanner
//!
//! Runs every compiled matcher over the full text and merges the results
//! into one token stream ordered by offset, with ties broken by
//! `TokenCategory` precedence. Matchers do not share a pass, so tokens
//! from different categories may overlap; the classifier copes with that.

use super::rules::CompiledProfile;
use super::tokens::{Token, TokenCategory};

/// Produce the sorted token stream for one document snapshot
pub fn scan(text: &str, profile: &CompiledProfile) -> Vec<Token> {
    let mut tokens = Vec::new();
    if text.trim().is_empty() {
        return tokens;
    }

    if let Some(comprehension) = &profile.comprehension {
        comprehension.find_all(text, &mut tokens);
    }
    profile.ignore.find_all(text, &mut tokens);

    let keywords = [
        (&profile.open, TokenCategory::OpenBlock),
        (&profile.close, TokenCategory::CloseBlock),
        (&profile.neutral, TokenCategory::Neutral),
    ];
    for (matcher, category) in keywords {
        if let Some(matcher) = matcher {
            matcher.find_all(text, category, &mut tokens);
        }
    }

    tokens.sort_by_key(Token::sort_key);

    // A word listed under two keyword categories keeps the higher precedence
    let mut keyword_end = 0;
    tokens.retain(|token| {
        if !token.category.is_keyword() {
            return true;
        }
        if token.start < keyword_end {
            return false;
        }
        keyword_end = token.end();
        true
    });
    tokens
}
