use indexmap::IndexMap;

use crate::vectorizer::stop_words::is_stop_word;

/// Minimum token length, in characters.
const MIN_TOKEN_CHARS: usize = 2;

/// Split text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters or `_` that is at
/// least two characters long. Stop words are removed.
///
/// # Examples
/// ```
/// use tf_idf_similarity::vectorizer::token::tokenize;
/// let tokens: Vec<String> = tokenize("Machine learning for fraud-detection").collect();
/// assert_eq!(tokens, vec!["machine", "learning", "fraud", "detection"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.chars().nth(MIN_TOKEN_CHARS - 1).is_some())
        .map(str::to_lowercase)
        .filter(|word| !is_stop_word(word))
}

/// TokenFrequency struct
/// Counts how often each token occurs within one document.
/// Tokens are kept in first-seen order.
///
/// # Examples
/// ```
/// use tf_idf_similarity::vectorizer::token::TokenFrequency;
/// let mut token_freq = TokenFrequency::new();
/// token_freq.add_token("token1");
/// token_freq.add_token("token2");
/// token_freq.add_token("token1");
///
/// assert_eq!(token_freq.token_count("token1"), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    /// Create an empty TokenFrequency
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Tokenize `text` and count its tokens
    pub fn from_text(text: &str) -> Self {
        let mut freq = TokenFrequency::new();
        for token in tokenize(text) {
            freq.add_owned_token(token);
        }
        freq
    }

    /// Add a token
    ///
    /// # Arguments
    /// * `token` - token to add
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        match self.token_count.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.token_count.insert(token.to_string(), 1);
            }
        }
        self.total_token_count += 1;
        self
    }

    /// Add multiple tokens
    ///
    /// # Arguments
    /// * `tokens` - tokens to add
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    #[inline]
    fn add_owned_token(&mut self, token: String) {
        *self.token_count.entry(token).or_insert(0) += 1;
        self.total_token_count += 1;
    }
}

/// Read access
impl TokenFrequency {
    /// Iterate `(token, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
    }

    /// Occurrence count of `token`, 0 if absent
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens counted
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }
}
