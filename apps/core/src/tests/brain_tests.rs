//! Brain Module Tests
//!
//! Prompt-level tests for the tagger, the intent rules and the analyzer.

use crate::brain::{Intent, LexiconTagger, PosTag, PosTagger, TaggedToken, TextAnalyzer};
use crate::composer::compose;

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[test]
    fn test_describe_prompts() {
        let analyzer = TextAnalyzer::new();

        let prompts = vec![
            "What is this image?",
            "what's in the picture",
            "Describe the scene",
            "describe this",
            "What do you see?",
        ];

        for prompt in prompts {
            let result = analyzer.analyze(prompt);
            assert_eq!(
                result.intent,
                Intent::Describe,
                "Expected Describe for '{}'",
                prompt
            );
        }
    }

    #[test]
    fn test_classify_prompts() {
        let analyzer = TextAnalyzer::new();

        let prompts = vec![
            "Classify this",
            "identify the animal",
            "Please classify the object in the photo",
            "can you identify it?",
        ];

        for prompt in prompts {
            let result = analyzer.analyze(prompt);
            assert_eq!(
                result.intent,
                Intent::Classify,
                "Expected Classify for '{}'",
                prompt
            );
        }
    }

    #[test]
    fn test_last_trigger_wins_in_prompt() {
        let analyzer = TextAnalyzer::new();

        let result = analyzer.analyze("what should I classify");
        assert_eq!(result.intent, Intent::Classify);

        let result = analyzer.analyze("identify it, or describe it");
        assert_eq!(result.intent, Intent::Describe);
    }

    #[test]
    fn test_noun_only_prompt_is_promoted_to_describe() {
        let analyzer = TextAnalyzer::new();

        let result = analyzer.analyze("dog or cat?");
        assert_eq!(result.intent, Intent::Describe);
        assert_eq!(result.keywords, vec!["dog", "cat"]);
    }

    #[test]
    fn test_no_noun_no_trigger_stays_unknown() {
        let analyzer = TextAnalyzer::new();

        for prompt in ["hello there", "", "   ", "?!", "please"] {
            let result = analyzer.analyze(prompt);
            assert_eq!(result.intent, Intent::Unknown, "Expected Unknown for '{}'", prompt);
            assert!(result.keywords.is_empty(), "Expected no keywords for '{}'", prompt);
        }
    }

    #[test]
    fn test_nouns_with_modifier_endings_are_keywords() {
        let analyzer = TextAnalyzer::new();

        let cases = [
            ("is this a firefly?", "firefly", "This image shows a X."),
            ("is that a vegetable?", "vegetable", "This is a X."),
            ("is it a locomotive", "locomotive", "This is a X."),
            ("a turntable", "turntable", "This is a X."),
            ("is that a portable?", "portable", "This is a X."),
            ("the assembly", "assembly", "This is a X."),
        ];

        for (prompt, noun, expected) in cases {
            let result = analyzer.analyze(prompt);
            assert_eq!(result.intent, Intent::Describe, "Expected Describe for '{}'", prompt);
            assert_eq!(result.keywords, vec![noun], "Unexpected keywords for '{}'", prompt);
            assert_eq!(compose(&result, "X", prompt), expected);
        }
    }

    #[test]
    fn test_duplicate_keywords_are_kept() {
        let analyzer = TextAnalyzer::new();

        let result = analyzer.analyze("dog dog cat dog");
        assert_eq!(result.keywords, vec!["dog", "dog", "cat", "dog"]);
    }

    #[test]
    fn test_image_keyword_extracted() {
        let analyzer = TextAnalyzer::new();

        let result = analyzer.analyze("What is this image?");
        assert_eq!(result.keywords, vec!["image"]);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = TextAnalyzer::new();

        for prompt in ["what is this dog", "classify the cat and dog", "", "hello"] {
            assert_eq!(analyzer.analyze(prompt), analyzer.analyze(prompt));
        }
    }

    #[test]
    fn test_intent_is_always_one_of_three() {
        let analyzer = TextAnalyzer::new();

        let prompts = [
            "",
            "🐶",
            "a",
            "WHAT WHAT WHAT",
            "The quick brown fox jumps over the lazy dog.",
            "identify\tdescribe\nclassify",
            "12 34 $$",
        ];

        for prompt in prompts {
            let intent = analyzer.analyze(prompt).intent;
            assert!(matches!(
                intent,
                Intent::Describe | Intent::Classify | Intent::Unknown
            ));
        }
    }
}

#[cfg(test)]
mod custom_tagger_tests {
    use super::*;

    /// Tags every whitespace-separated word with a fixed tag
    struct UniformTagger(PosTag);

    impl PosTagger for UniformTagger {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            text.split_whitespace()
                .map(|w| TaggedToken::new(w, self.0))
                .collect()
        }
    }

    #[test]
    fn test_keywords_come_from_tagger() {
        let analyzer = TextAnalyzer::with_tagger(UniformTagger(PosTag::Noun));

        let result = analyzer.analyze("Hello There");
        assert_eq!(result.keywords, vec!["hello", "there"]);
        assert_eq!(result.intent, Intent::Describe);
    }

    #[test]
    fn test_triggers_do_not_depend_on_tags() {
        let analyzer = TextAnalyzer::with_tagger(UniformTagger(PosTag::Punct));

        let result = analyzer.analyze("please classify");
        assert_eq!(result.intent, Intent::Classify);
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_analyzer_lowercases_before_tagging() {
        let tokens = LexiconTagger::new().tag("Describe");
        assert_eq!(tokens[0].text, "Describe");

        let analyzer = TextAnalyzer::with_tagger(UniformTagger(PosTag::Verb));
        assert_eq!(analyzer.analyze("DESCRIBE").intent, Intent::Describe);
    }
}
