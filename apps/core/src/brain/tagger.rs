//! Part-of-speech tagging with static English lexicons.
//!
//! Tokenizes lowercased text with a regex and tags each token using
//! closed-class word lists, a small open-class lexicon, one context rule and
//! suffix heuristics. Unrecognized words default to `Noun`.
//! No ML model required - pure Rust lookup tables.

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Coarse part-of-speech tag (universal POS subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    CConj,
    SConj,
    Part,
    Num,
    Intj,
    Punct,
    Sym,
}

impl PosTag {
    /// Universal dependencies style label
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::CConj => "CCONJ",
            PosTag::SConj => "SCONJ",
            PosTag::Part => "PART",
            PosTag::Num => "NUM",
            PosTag::Intj => "INTJ",
            PosTag::Punct => "PUNCT",
            PosTag::Sym => "SYM",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A token together with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Defines the tokenizer/POS-tagger capability consumed by the text analyzer.
///
/// Implementations must at least tell nouns apart from everything else; the
/// rest of the tag set is advisory.
pub trait PosTagger: Send + Sync {
    /// Splits `text` into tokens, in order, each with a tag.
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

// Clitics ('s, 're, 't) split off the host word; hyphenated words stay whole.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'(?:s|re|m|ve|d|ll|t)\b|[\p{L}\p{N}]+(?:[-.][\p{L}\p{N}]+)*|\S")
        .expect("Invalid regex: token pattern")
});

fn lexicon(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "is", "am", "are", "was", "were", "be", "been", "being", "'s", "'re", "'m", "'ve", "'d",
        "'ll", "do", "does", "did", "have", "has", "had", "will", "would", "shall", "should",
        "can", "could", "may", "might", "must", "ca", "wo",
    ])
});

static PARTICLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| lexicon(&["not", "n't", "'t"]));

static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
        "all", "both", "either", "neither", "another", "such",
    ])
});

static POSSESSIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&["my", "your", "his", "her", "its", "our", "their", "whose"])
});

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "my",
        "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "what", "who",
        "whom", "which", "whose", "whatever", "whichever", "someone", "something", "anyone",
        "anything", "everyone", "everything", "nobody", "nothing", "somebody", "anybody",
        "everybody",
    ])
});

static ADPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "in", "on", "at", "to", "from", "by", "with", "about", "of", "for", "into", "onto",
        "over", "under", "above", "below", "between", "behind", "near", "through", "during",
        "before", "after", "without", "within", "across", "along", "around", "against", "among",
        "beside", "beyond", "like", "toward", "towards", "upon", "via", "off", "up", "down",
        "out", "inside", "outside",
    ])
});

static COORDINATORS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| lexicon(&["and", "or", "but", "nor", "yet", "so", "plus"]));

static SUBORDINATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "if", "because", "although", "though", "while", "whether", "unless", "until", "since",
        "as", "than",
    ])
});

static INTERJECTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "hello", "hi", "hey", "oh", "wow", "yes", "ok", "okay", "please", "thanks", "bye",
        "goodbye", "ah", "hmm", "yeah", "yep", "nope", "um", "uh", "greetings",
    ])
});

static NUMBER_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "twenty", "hundred", "thousand", "million",
    ])
});

static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "there", "here", "now", "then", "very", "too", "also", "just", "only", "really", "quite",
        "again", "always", "never", "often", "sometimes", "maybe", "perhaps", "how", "why",
        "when", "where", "well", "almost", "already", "still", "even", "ever", "soon", "rather",
        "back", "away", "together", "else", "instead", "anyway", "exactly", "actually",
    ])
});

static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "big", "small", "large", "little", "tiny", "huge", "old", "new", "young", "good", "bad",
        "great", "nice", "cute", "pretty", "beautiful", "ugly", "happy", "sad", "red", "blue",
        "green", "yellow", "black", "white", "brown", "gray", "grey", "pink", "purple", "dark",
        "light", "bright", "long", "short", "tall", "high", "low", "hot", "cold", "fast", "slow",
        "main", "same", "different", "other", "several", "many", "much", "few", "more", "most",
        "less", "least", "first", "second", "last", "next", "real", "sure", "clear", "funny",
        "strange", "wild", "fluffy", "furry", "whole", "certain",
    ])
});

/// Base forms and irregular inflections of common verbs.
static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "describe", "classify", "identify", "show", "tell", "see", "look", "explain",
        "recognize", "recognise", "detect", "name", "find", "give", "say", "know", "think",
        "want", "need", "make", "take", "get", "go", "come", "guess", "determine", "analyze",
        "analyse", "check", "help", "let", "label", "categorize", "categorise", "predict",
        "spot", "watch", "read", "write", "seem", "appear", "contain", "depict", "display",
        "call", "mean", "try", "use", "sit", "run", "stand", "hold", "eat", "play", "sleep",
        "saw", "seen", "told", "shown", "found", "gave", "given", "said", "knew", "known",
        "thought", "made", "took", "taken", "got", "gotten", "went", "gone", "came", "meant",
        "sat", "ran", "stood", "held", "ate", "eaten", "slept",
    ])
});

/// Words whose endings would otherwise trip the suffix heuristics.
static NOUN_EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    lexicon(&[
        "thing", "string", "spring", "ceiling", "morning", "evening", "wedding", "pudding",
        "family", "butterfly", "jelly", "belly", "lily", "bully", "dragonfly", "sled", "bread",
        "seed", "weed", "speed", "steed", "firefly", "fly", "vegetable", "table",
        "turntable", "cable", "stable", "vehicle", "locomotive", "detective", "olive",
        "hive", "knife", "wife", "cabbage", "collie", "sweatshirt", "jersey", "monopoly",
        "anomaly", "ally", "rally", "trolley", "valley", "alley", "bell", "shell",
    ])
});

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ship", "ism"];

/// Rule-based tagger backed by static lexicons
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    /// Split text into raw tokens, in order of appearance.
    pub fn tokenize(text: &str) -> Vec<String> {
        let normalized = text.replace('\u{2019}', "'");
        let mut tokens: Vec<String> = TOKEN_PATTERN
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .collect();

        // "don't" -> "do" + "n't", "can't" -> "ca" + "n't"
        for i in 1..tokens.len() {
            if tokens[i] == "'t" && tokens[i - 1].len() > 1 && tokens[i - 1].ends_with('n') {
                tokens[i - 1].pop();
                tokens[i] = "n't".to_string();
            }
        }

        tokens
    }

    fn tag_token(token: &str, previous: Option<&TaggedToken>) -> PosTag {
        if !token.chars().any(char::is_alphanumeric) {
            return if token.chars().all(|c| c.is_ascii_punctuation() && !is_symbol(c)) {
                PosTag::Punct
            } else {
                PosTag::Sym
            };
        }

        if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
            return PosTag::Num;
        }

        if let Some(tag) = closed_class(token) {
            return tag;
        }

        if ADJECTIVES.contains(token) {
            return PosTag::Adj;
        }

        if NOUN_EXCEPTIONS.contains(token) {
            return PosTag::Noun;
        }

        if is_verb_form(token) {
            return if follows_nominal_modifier(previous) {
                PosTag::Noun
            } else {
                PosTag::Verb
            };
        }

        if let Some(tag) = modifier_suffix(token) {
            return tag;
        }

        if NOUN_SUFFIXES.iter().any(|s| token.ends_with(s)) {
            return PosTag::Noun;
        }

        PosTag::Noun
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::new();

        for token in Self::tokenize(text) {
            let pos = Self::tag_token(&token, tagged.last());
            tagged.push(TaggedToken::new(token, pos));
        }

        // "a locomotive?", "my firefly": a suffix-guessed modifier in a noun
        // slot with nothing nominal after it heads the phrase.
        for i in 0..tagged.len() {
            let guessed = matches!(tagged[i].pos, PosTag::Adj | PosTag::Adv)
                && !ADJECTIVES.contains(tagged[i].text.as_str())
                && closed_class(&tagged[i].text).is_none()
                && modifier_suffix(&tagged[i].text).is_some();
            if !guessed || !follows_nominal_modifier(i.checked_sub(1).map(|j| &tagged[j])) {
                continue;
            }

            let modifies_next = tagged
                .get(i + 1)
                .is_some_and(|next| matches!(next.pos, PosTag::Noun | PosTag::Adj));
            if !modifies_next {
                tagged[i].pos = PosTag::Noun;
            }
        }

        tagged
    }
}

/// Adverb/adjective guess from the word ending alone.
fn modifier_suffix(token: &str) -> Option<PosTag> {
    if token.len() > 4 && token.ends_with("ly") {
        return Some(PosTag::Adv);
    }
    if token.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return Some(PosTag::Adj);
    }
    None
}

fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '$' | '%' | '&' | '+' | '<' | '=' | '>' | '@' | '^' | '`' | '|' | '~' | '#' | '*'
    )
}

fn closed_class(token: &str) -> Option<PosTag> {
    let tables: [(&HashSet<&'static str>, PosTag); 10] = [
        (&*AUXILIARIES, PosTag::Aux),
        (&*PARTICLES, PosTag::Part),
        (&*DETERMINERS, PosTag::Det),
        (&*PRONOUNS, PosTag::Pron),
        (&*ADPOSITIONS, PosTag::Adp),
        (&*COORDINATORS, PosTag::CConj),
        (&*SUBORDINATORS, PosTag::SConj),
        (&*INTERJECTIONS, PosTag::Intj),
        (&*NUMBER_WORDS, PosTag::Num),
        (&*ADVERBS, PosTag::Adv),
    ];

    tables
        .iter()
        .find(|(table, _)| table.contains(token))
        .map(|(_, tag)| *tag)
}

/// Known verb, an inflection of one, or an `-ing`/`-ed` form.
fn is_verb_form(token: &str) -> bool {
    if VERBS.contains(token) {
        return true;
    }

    let mut stems: Vec<String> = Vec::new();
    if let Some(stem) = token.strip_suffix("ies").or_else(|| token.strip_suffix("ied")) {
        stems.push(format!("{}y", stem));
    }
    for suffix in ["s", "es", "ed", "d", "ing"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            stems.push(stem.to_string());
        }
    }
    if let Some(stem) = token.strip_suffix("ing") {
        stems.push(format!("{}e", stem));
        // spotting -> spot
        let mut chars = stem.chars().rev();
        if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
            if a == b {
                stems.push(stem[..stem.len() - a.len_utf8()].to_string());
            }
        }
    }

    if stems.iter().any(|stem| VERBS.contains(stem.as_str())) {
        return true;
    }

    token.len() > 4 && (token.ends_with("ing") || token.ends_with("ed"))
}

/// A verb-looking word right after a determiner, adjective, number or
/// possessive is used as a noun ("the show", "a painting", "my guess").
fn follows_nominal_modifier(previous: Option<&TaggedToken>) -> bool {
    match previous {
        Some(prev) => {
            matches!(prev.pos, PosTag::Det | PosTag::Adj | PosTag::Num)
                || POSSESSIVES.contains(prev.text.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        LexiconTagger::new()
            .tag(text)
            .into_iter()
            .map(|t| (t.text, t.pos))
            .collect()
    }

    #[test]
    fn test_tokenize_splits_clitics_and_punctuation() {
        assert_eq!(
            LexiconTagger::tokenize("what's this?"),
            vec!["what", "'s", "this", "?"]
        );
        assert_eq!(
            LexiconTagger::tokenize("don't   stop"),
            vec!["do", "n't", "stop"]
        );
        assert_eq!(LexiconTagger::tokenize("a well-known dog"), vec!["a", "well-known", "dog"]);
        assert_eq!(LexiconTagger::tokenize("'hello'"), vec!["'", "hello", "'"]);
        assert!(LexiconTagger::tokenize("").is_empty());
        assert!(LexiconTagger::tokenize("   ").is_empty());
    }

    #[test]
    fn test_curly_apostrophe_is_normalized() {
        assert_eq!(LexiconTagger::tokenize("what\u{2019}s"), vec!["what", "'s"]);
    }

    #[test]
    fn test_basic_question() {
        let tagged = tags("what is this dog");
        assert_eq!(
            tagged,
            vec![
                ("what".to_string(), PosTag::Pron),
                ("is".to_string(), PosTag::Aux),
                ("this".to_string(), PosTag::Det),
                ("dog".to_string(), PosTag::Noun),
            ]
        );
    }

    #[test]
    fn test_imperative_verb_and_nouns() {
        let tagged = tags("classify the cat and dog");
        let pos: Vec<PosTag> = tagged.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            pos,
            vec![
                PosTag::Verb,
                PosTag::Det,
                PosTag::Noun,
                PosTag::CConj,
                PosTag::Noun
            ]
        );
    }

    #[test]
    fn test_verb_after_determiner_becomes_noun() {
        let tagged = tags("identify the breed in my picture");
        assert_eq!(tagged[0].1, PosTag::Verb);
        assert_eq!(tagged[2], ("breed".to_string(), PosTag::Noun));
        assert_eq!(tagged[5], ("picture".to_string(), PosTag::Noun));

        let tagged = tags("what is the name of this");
        assert_eq!(tagged[3], ("name".to_string(), PosTag::Noun));
    }

    #[test]
    fn test_inflected_verbs() {
        for word in ["describes", "classified", "identifies", "showing", "spotting", "describing"] {
            let tagged = tags(word);
            assert_eq!(tagged[0].1, PosTag::Verb, "Expected Verb for '{}'", word);
        }
    }

    #[test]
    fn test_punctuation_and_symbols() {
        let tagged = tags("? ! , $ 42");
        let pos: Vec<PosTag> = tagged.iter().map(|(_, p)| *p).collect();
        assert_eq!(
            pos,
            vec![PosTag::Punct, PosTag::Punct, PosTag::Punct, PosTag::Sym, PosTag::Num]
        );
    }

    #[test]
    fn test_no_nouns_in_greeting() {
        let tagged = tags("hello there");
        assert!(tagged.iter().all(|(_, p)| *p != PosTag::Noun));
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tags("quickly")[0].1, PosTag::Adv);
        assert_eq!(tags("dangerous")[0].1, PosTag::Adj);
        assert_eq!(tags("recognition")[0].1, PosTag::Noun);
        assert_eq!(tags("butterfly")[0].1, PosTag::Noun);
        assert_eq!(tags("the building")[1].1, PosTag::Noun);
    }

    #[test]
    fn test_suffix_modifier_in_noun_slot_is_noun() {
        assert_eq!(tags("is it a locomotive")[3].1, PosTag::Noun);
        assert_eq!(tags("the portable?")[1].1, PosTag::Noun);
        assert_eq!(tags("my assembly")[1].1, PosTag::Noun);

        // still modifiers when something nominal follows
        assert_eq!(tags("a portable radio")[1].1, PosTag::Adj);
        assert_eq!(tags("a dangerous wild dog")[1].1, PosTag::Adj);
        assert_eq!(tags("it is dangerous")[2].1, PosTag::Adj);
        assert_eq!(tags("a big")[1].1, PosTag::Adj);
    }

    #[test]
    fn test_unknown_words_default_to_noun() {
        assert_eq!(tags("retriever")[0].1, PosTag::Noun);
        assert_eq!(tags("zebra")[0].1, PosTag::Noun);
    }
}
