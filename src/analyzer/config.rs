//! Analyzer configuration

/// Default bound on parenthesis nesting while flattening queries
pub const DEFAULT_MAX_DEPTH: usize = 256;

const DEFAULT_JOIN_PHRASES: &[&str] = &[
    "join",
    "inner join",
    "left join",
    "right join",
    "full join",
    "left outer join",
    "right outer join",
    "full outer join",
    "cross join",
    "natural join",
    "straight_join",
];

/// Settings shared by the analysis operations
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Maximum subquery nesting depth before flattening gives up
    pub max_depth: usize,
    /// Keyword phrases recognized as joins in FROM clauses
    pub join_keywords: JoinVocabulary,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            join_keywords: JoinVocabulary::default(),
        }
    }
}

/// Set of join keyword phrases, matched case-insensitively word by word.
///
/// Each phrase is stored as a list of lowercase words. When several phrases
/// match at the same position the longest one wins, so `left outer join`
/// is never read as a table named `left outer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinVocabulary {
    phrases: Vec<Vec<String>>,
}

impl JoinVocabulary {
    /// An empty vocabulary
    pub fn empty() -> Self {
        Self {
            phrases: Vec::new(),
        }
    }

    /// Add a phrase such as `"left semi join"`. Blank phrases and duplicates
    /// are ignored.
    pub fn with_phrase(mut self, phrase: &str) -> Self {
        let words: Vec<String> = phrase
            .split_whitespace()
            .map(|w| w.to_ascii_lowercase())
            .collect();
        if !words.is_empty() && !self.phrases.contains(&words) {
            self.phrases.push(words);
            self.phrases.sort_by(|a, b| b.len().cmp(&a.len()));
        }
        self
    }

    /// Phrases ordered longest first
    pub fn phrases(&self) -> impl Iterator<Item = &[String]> {
        self.phrases.iter().map(|p| p.as_slice())
    }

    /// Whether `word` can begin any phrase
    pub fn starts_phrase(&self, word: &str) -> bool {
        self.phrases
            .iter()
            .any(|p| p[0].eq_ignore_ascii_case(word))
    }
}

impl Default for JoinVocabulary {
    fn default() -> Self {
        DEFAULT_JOIN_PHRASES
            .iter()
            .fold(Self::empty(), |vocab, phrase| vocab.with_phrase(phrase))
    }
}
