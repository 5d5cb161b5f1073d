use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use rand::Rng;

use super::CatalogError;

const DATA: &str = include_str!("../../data/words.txt");

/// The word the player has to reveal.
///
/// Always non-empty and made of lowercase ascii letters.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SecretWord(String);

impl SecretWord {
    /// Validate a candidate word.
    ///
    /// # Example
    ///
    /// ```
    /// use assembly_endgame::catalog::SecretWord;
    /// assert!(SecretWord::new("react").is_ok());
    /// assert!(SecretWord::new("React").is_err());
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self, CatalogError> {
        if word.is_empty() {
            return Err(CatalogError::EmptyWord);
        }
        if let Some(letter) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(CatalogError::InvalidLetter {
                word: word.to_string(),
                letter,
            });
        }
        Ok(SecretWord(word.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// Letters by position, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for SecretWord {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecretWord::new(s)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The candidate secret words.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<SecretWord>,
}

impl WordBank {
    /// The word list compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(DATA).context("Parsing the embedded word list")
    }

    /// Read one word per line. Blank lines and lines starting with `#` are
    /// skipped, everything else is trimmed and lowercased.
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let words = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| SecretWord::new(&line.to_ascii_lowercase()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_secret_words(words)
    }

    pub fn from_words<I, S>(words: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| SecretWord::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_secret_words(words)
    }

    fn from_secret_words(words: Vec<SecretWord>) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::EmptyWordBank);
        }
        Ok(WordBank { words })
    }

    /// Pick a word uniformly at random. Consecutive picks may repeat.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        // never empty, see `from_secret_words`
        &self.words[rng.gen_range(0..self.words.len())]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecretWord> {
        self.words.iter()
    }
}
