//! Natural-language to [`StructuredFilter`] translation.
//!
//! The translator is an ordered rule chain. Each [`Rule`] pairs a regex with
//! an [`Effect`] on the filter being built. Rules run in order against the
//! lowercased query, and rules tagged with the same exclusive group stop
//! after the first one that applies. Later rules may overwrite fields set by
//! earlier ones; the numeric word-count rule relies on this to take priority
//! over the spelled-out phrases.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::structured::StructuredFilter;

const SPELLED_WORD_COUNT: &str = "spelled_word_count";

static STANDARD: Lazy<Translator> =
    Lazy::new(|| Translator::standard().expect("built-in translator patterns compile"));

/// Translate `text` with the built-in rule chain.
///
/// Never fails; text matching no rule yields an empty filter.
pub fn translate(text: &str) -> StructuredFilter {
    STANDARD.translate(text)
}

/// What a rule does to the filter once its pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Require palindromes. No rule ever requires non-palindromes.
    Palindrome,
    /// Fixed word count from a spelled-out phrase.
    WordCount(usize),
    /// Word count parsed from capture group 1.
    CapturedWordCount,
    /// Minimum length parsed from capture group 1.
    MinLength,
    /// Maximum length parsed from capture group 1.
    MaxLength,
    /// Containment token taken verbatim from capture group 1.
    ContainsCharacter,
}

impl Effect {
    /// Returns false when the capture could not be used (e.g. digits that
    /// overflow), in which case the rule counts as not applied.
    fn apply(self, caps: &Captures<'_>, filter: &mut StructuredFilter) -> bool {
        match self {
            Effect::Palindrome => filter.is_palindrome = Some(true),
            Effect::WordCount(count) => filter.word_count = Some(count),
            Effect::CapturedWordCount => match captured_number(caps) {
                Some(count) => filter.word_count = Some(count),
                None => return false,
            },
            Effect::MinLength => match captured_number(caps) {
                Some(min) => filter.min_length = Some(min),
                None => return false,
            },
            Effect::MaxLength => match captured_number(caps) {
                Some(max) => filter.max_length = Some(max),
                None => return false,
            },
            Effect::ContainsCharacter => match caps.get(1) {
                Some(token) => filter.contains_character = Some(token.as_str().to_string()),
                None => return false,
            },
        }
        true
    }
}

fn captured_number(caps: &Captures<'_>) -> Option<usize> {
    caps.get(1).and_then(|m| m.as_str().parse().ok())
}

/// One `(matcher, effect)` pair in the chain.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    effect: Effect,
    group: Option<&'static str>,
}

impl Rule {
    /// Compile a rule. Patterns are matched against lowercased input.
    pub fn new(name: &'static str, pattern: &str, effect: Effect) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            effect,
            group: None,
        })
    }

    /// Put the rule in an exclusive group: once any rule of the group
    /// applies, the remaining rules of that group are skipped.
    pub fn exclusive(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }
}

/// Filter plus the names of the rules that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub filter: StructuredFilter,
    pub applied_rules: Vec<&'static str>,
}

/// Ordered rule chain.
#[derive(Debug, Clone)]
pub struct Translator {
    rules: Vec<Rule>,
}

impl Translator {
    /// Build a translator from a custom chain, evaluated in the given order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in chain.
    pub fn standard() -> Result<Self, regex::Error> {
        let spelled = [
            ("single_word", r"\bsingle\s+word\b", 1),
            ("one_word", r"\bone\s+word\b", 1),
            ("two_words", r"\btwo\s+words?\b", 2),
            ("three_words", r"\bthree\s+words?\b", 3),
            ("four_words", r"\bfour\s+words?\b", 4),
            ("five_words", r"\bfive\s+words?\b", 5),
        ];

        let mut rules = Vec::with_capacity(spelled.len() + 5);
        rules.push(Rule::new(
            "palindrome",
            r"\bpalindrom(?:e|es|ic)\b",
            Effect::Palindrome,
        )?);
        for (name, pattern, count) in spelled {
            let rule = Rule::new(name, pattern, Effect::WordCount(count))?;
            rules.push(rule.exclusive(SPELLED_WORD_COUNT));
        }
        rules.push(Rule::new(
            "numeric_words",
            r"\b(\d+)\s+words?\b",
            Effect::CapturedWordCount,
        )?);
        rules.push(Rule::new(
            "min_length",
            r"\b(?:longer than|more than|at least)\s+(\d+)\s+(?:characters?|chars?|letters?)\b",
            Effect::MinLength,
        )?);
        rules.push(Rule::new(
            "max_length",
            r"\b(?:shorter than|less than|at most)\s+(\d+)\s+(?:characters?|chars?|letters?)\b",
            Effect::MaxLength,
        )?);
        rules.push(Rule::new(
            "contains",
            r#"\bcontain(?:s|ing)?\s+(?:the\s+(?:letter|character|word)\s+)?["']?(\w+)["']?"#,
            Effect::ContainsCharacter,
        )?);

        Ok(Self::with_rules(rules))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn translate(&self, text: &str) -> StructuredFilter {
        self.explain(text).filter
    }

    /// Translate and report which rules applied, in evaluation order.
    pub fn explain(&self, text: &str) -> Translation {
        let lower = text.to_lowercase();
        let mut filter = StructuredFilter::default();
        let mut applied_rules = Vec::new();
        let mut closed_groups: Vec<&'static str> = Vec::new();

        for rule in &self.rules {
            if rule.group.is_some_and(|g| closed_groups.contains(&g)) {
                continue;
            }
            let Some(caps) = rule.pattern.captures(&lower) else {
                continue;
            };
            if rule.effect.apply(&caps, &mut filter) {
                applied_rules.push(rule.name);
                if let Some(group) = rule.group {
                    closed_groups.push(group);
                }
            }
        }

        Translation {
            filter,
            applied_rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_compile() {
        let translator = Translator::standard().expect("standard rules");
        assert_eq!(translator.rules().len(), 11);
        assert_eq!(translator.rules()[0].name(), "palindrome");
    }

    #[test]
    fn single_word_palindrome() {
        assert_eq!(
            translate("find a single word palindrome"),
            StructuredFilter::new().with_palindrome(true).with_word_count(1)
        );
    }

    #[test]
    fn longer_than_sets_min_length() {
        assert_eq!(
            translate("strings longer than 10 characters"),
            StructuredFilter::new().with_min_length(10)
        );
    }

    #[test]
    fn three_words_containing_quoted_char() {
        assert_eq!(
            translate("three words containing 'x'"),
            StructuredFilter::new()
                .with_word_count(3)
                .with_contains_character("x")
        );
    }

    #[test]
    fn palindrome_variants() {
        for query in ["palindromic strings", "all palindromes", "PALINDROME please"] {
            assert_eq!(translate(query).is_palindrome, Some(true), "{query}");
        }
        assert_eq!(translate("not a palindromex").is_palindrome, None);
    }

    #[test]
    fn spelled_out_first_match_wins() {
        let translation = STANDARD.explain("one word or two words");
        assert_eq!(translation.filter.word_count, Some(1));
        assert_eq!(translation.applied_rules, vec!["one_word"]);

        assert_eq!(translate("single word, not five words").word_count, Some(1));
    }

    #[test]
    fn numeric_word_count_overrides_spelled_out() {
        let translation = STANDARD.explain("two words, actually 4 words");
        assert_eq!(translation.filter.word_count, Some(4));
        assert_eq!(translation.applied_rules, vec!["two_words", "numeric_words"]);
    }

    #[test]
    fn overflowing_digits_are_ignored() {
        let filter = translate("three words or 99999999999999999999999 words");
        assert_eq!(filter.word_count, Some(3));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(
            translate("at least 3 chars and at most 8 letters"),
            StructuredFilter::new().with_min_length(3).with_max_length(8)
        );
        assert_eq!(translate("shorter than 5 characters").max_length, Some(5));
        assert_eq!(translate("more than 2 characters").min_length, Some(2));
        // Units are required.
        assert!(translate("longer than 10").is_empty());
    }

    #[test]
    fn contains_captures_token_verbatim() {
        assert_eq!(
            translate("strings that contain \"abc\"").contains_character,
            Some("abc".to_string())
        );
        assert_eq!(
            translate("strings containing the letter z").contains_character,
            Some("z".to_string())
        );
        assert_eq!(
            translate("strings containing the word fox").contains_character,
            Some("fox".to_string())
        );
        assert_eq!(
            translate("Contains Q").contains_character,
            Some("q".to_string())
        );
    }

    #[test]
    fn unparseable_text_yields_empty_filter() {
        for query in ["", "   ", "show me everything", "12345", "words words"] {
            assert!(translate(query).is_empty(), "{query}");
        }
    }

    #[test]
    fn custom_rule_chain() {
        let translator = Translator::with_rules(vec![Rule::new(
            "tiny",
            r"\btiny\b",
            Effect::WordCount(1),
        )
        .expect("rule")]);

        assert_eq!(translator.translate("tiny palindrome").word_count, Some(1));
        assert_eq!(translator.translate("tiny palindrome").is_palindrome, None);
    }
}
