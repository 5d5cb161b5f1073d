//! The game itself.
//!
//! Only two things are stored: the secret word and the letters guessed so
//! far, in order. Everything the front ends show is derived from those two on
//! demand, starting with [`compute_status`].

use std::borrow::Cow;

use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::catalog::{Catalog, Language, SecretWord, WordBank};

/// Letters on the keyboard, in display order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Guessed letters in the order they were entered, without repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    order: Vec<char>,
    seen: FxHashSet<char>,
}

impl GuessedLetters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the letter was already there.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.seen.insert(letter) {
            self.order.push(letter);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        self.seen.contains(&letter)
    }

    /// The most recent guess.
    pub fn last(&self) -> Option<char> {
        self.order.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

impl FromIterator<char> for GuessedLetters {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut letters = GuessedLetters::new();
        for letter in iter {
            letters.insert(letter);
        }
        letters
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

/// Derived view of a game. Never stored.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Status {
    pub wrong_guess_count: usize,
    pub is_won: bool,
    pub is_lost: bool,
    pub is_over: bool,
    /// `None` until the first guess.
    pub last_guess_correct: Option<bool>,
}

impl Status {
    /// Loss wins the tie, although normal play never produces one.
    pub fn phase(&self) -> Phase {
        if self.is_lost {
            Phase::Lost
        } else if self.is_won {
            Phase::Won
        } else {
            Phase::Playing
        }
    }
}

/// Derive the status of a game from the secret word and the guesses so far.
///
/// The game is lost once only one language is left standing, i.e. after
/// `language_count - 1` wrong guesses.
///
/// # Example
///
/// ```
/// use assembly_endgame::catalog::SecretWord;
/// use assembly_endgame::endgame::{compute_status, GuessedLetters};
///
/// let word = SecretWord::new("react").unwrap();
/// let guessed: GuessedLetters = "rx".chars().collect();
/// let status = compute_status(&word, &guessed, 8);
/// assert_eq!(status.wrong_guess_count, 1);
/// assert_eq!(status.last_guess_correct, Some(false));
/// assert!(!status.is_over);
/// ```
pub fn compute_status(
    secret: &SecretWord,
    guessed: &GuessedLetters,
    language_count: usize,
) -> Status {
    let wrong_guess_count = guessed.iter().filter(|&l| !secret.contains(l)).count();
    let is_won = secret.letters().all(|l| guessed.contains(l));
    let is_lost = wrong_guess_count >= language_count.saturating_sub(1);
    Status {
        wrong_guess_count,
        is_won,
        is_lost,
        is_over: is_won || is_lost,
        last_guess_correct: guessed.last().map(|l| secret.contains(l)),
    }
}

/// What happened to a guess. Only informational, nothing is ever refused
/// loudly.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// Already guessed, nothing changed.
    Repeated,
    /// Not a lowercase ascii letter.
    Invalid,
    /// The game is over, nothing changed.
    Finished,
}

/// Message for the status banner.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Banner {
    /// No guesses yet.
    Instructions,
    /// The last guess was in the word.
    Encouragement,
    /// The last guess eliminated a language.
    Farewell(Cow<'static, str>),
    Won,
    Lost,
}

impl Banner {
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Banner::Won => Some("You win!"),
            Banner::Lost => Some("Game Over!"),
            _ => None,
        }
    }

    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Banner::Instructions => Cow::Borrowed("Pick a letter to start guessing."),
            Banner::Encouragement => Cow::Borrowed("Nice one, keep going!"),
            Banner::Farewell(text) => text.clone(),
            Banner::Won => Cow::Borrowed("Well done!"),
            Banner::Lost => Cow::Borrowed("You lose! Better start learning Assembly"),
        }
    }
}

/// A language chip and whether it has already fallen.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Chip<'a> {
    pub language: &'a Language,
    pub lost: bool,
}

/// One position of the secret word.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tile {
    pub letter: char,
    /// Guessed, or shown because the game is lost.
    pub revealed: bool,
    /// Never guessed and the game is lost.
    pub missed: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum KeyState {
    Untouched,
    Correct,
    Wrong,
}

/// A single round of the game.
#[derive(Clone, Debug)]
pub struct Game {
    secret: SecretWord,
    guessed: GuessedLetters,
    language_count: usize,
}

impl Game {
    pub fn new(secret: SecretWord, language_count: usize) -> Self {
        Game {
            secret,
            guessed: GuessedLetters::new(),
            language_count,
        }
    }

    /// Start a game on a random word from the catalog.
    pub fn start<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Self {
        let secret = catalog.words().random_word(rng).clone();
        info!(length = secret.len(), "new game");
        Game::new(secret, catalog.languages().len())
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    pub fn language_count(&self) -> usize {
        self.language_count
    }

    pub fn status(&self) -> Status {
        compute_status(&self.secret, &self.guessed, self.language_count)
    }

    pub fn phase(&self) -> Phase {
        self.status().phase()
    }

    /// Add a letter to the guesses.
    ///
    /// Repeats, anything that isn't a lowercase ascii letter and guesses
    /// after the game is over leave the game untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use assembly_endgame::catalog::SecretWord;
    /// use assembly_endgame::endgame::{Game, GuessOutcome};
    ///
    /// let mut game = Game::new(SecretWord::new("react").unwrap(), 8);
    /// assert_eq!(game.guess('r'), GuessOutcome::Correct);
    /// assert_eq!(game.guess('r'), GuessOutcome::Repeated);
    /// assert_eq!(game.guess('R'), GuessOutcome::Invalid);
    /// assert_eq!(game.guessed().len(), 1);
    /// ```
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status().is_over {
            return GuessOutcome::Finished;
        }
        if !letter.is_ascii_lowercase() {
            return GuessOutcome::Invalid;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        let outcome = if self.secret.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };
        let status = self.status();
        debug!(%letter, ?outcome, wrong = status.wrong_guess_count, "guess");
        match status.phase() {
            Phase::Won => info!(guesses = self.guessed.len(), "game won"),
            Phase::Lost => info!(word = %self.secret, "game lost"),
            Phase::Playing => {}
        }
        outcome
    }

    /// Start over on a fresh random word. The new word may be the old one.
    pub fn reset<R: Rng + ?Sized>(&mut self, words: &WordBank, rng: &mut R) {
        self.secret = words.random_word(rng).clone();
        self.guessed.clear();
        info!(length = self.secret.len(), "new game");
    }

    /// The language knocked out by the latest wrong guess.
    ///
    /// Languages fall in catalog order, so the `n`th wrong guess takes out
    /// the entry at index `n - 1`. [`Game::chips`] marks losses with the same
    /// rule; the two have to change together.
    pub fn eliminated_language<'a>(&self, languages: &'a [Language]) -> Option<&'a Language> {
        self.status()
            .wrong_guess_count
            .checked_sub(1)
            .and_then(|i| languages.get(i))
    }

    pub fn banner(&self, catalog: &Catalog) -> Banner {
        let status = self.status();
        match (status.phase(), status.last_guess_correct) {
            (Phase::Won, _) => Banner::Won,
            (Phase::Lost, _) => Banner::Lost,
            (Phase::Playing, None) => Banner::Instructions,
            (Phase::Playing, Some(true)) => Banner::Encouragement,
            (Phase::Playing, Some(false)) => {
                let text = match self.eliminated_language(catalog.languages()) {
                    Some(language) => catalog.farewells().text(language.name),
                    None => Cow::Borrowed("Farewell, old friend"),
                };
                Banner::Farewell(text)
            }
        }
    }

    pub fn chips<'a>(&self, languages: &'a [Language]) -> impl Iterator<Item = Chip<'a>> {
        let wrong = self.status().wrong_guess_count;
        languages.iter().enumerate().map(move |(i, language)| Chip {
            language,
            lost: i < wrong,
        })
    }

    pub fn tiles(&self) -> Vec<Tile> {
        let lost = self.status().is_lost;
        self.secret
            .letters()
            .map(|letter| {
                let guessed = self.guessed.contains(letter);
                Tile {
                    letter,
                    revealed: guessed || lost,
                    missed: lost && !guessed,
                }
            })
            .collect()
    }

    pub fn key_state(&self, letter: char) -> KeyState {
        match (self.guessed.contains(letter), self.secret.contains(letter)) {
            (false, _) => KeyState::Untouched,
            (true, true) => KeyState::Correct,
            (true, false) => KeyState::Wrong,
        }
    }

    pub fn keyboard(&self) -> impl Iterator<Item = (char, KeyState)> + '_ {
        ALPHABET.chars().map(|letter| (letter, self.key_state(letter)))
    }

    /// Plain-language feedback about the latest guess.
    pub fn announcement(&self) -> Option<String> {
        let letter = self.guessed.last()?;
        Some(if self.secret.contains(letter) {
            format!("Correct! The letter {letter} is in the word.")
        } else {
            format!("Sorry, the letter {letter} is not in the word.")
        })
    }

    /// The word spelled out for screen readers, e.g.
    /// `Current word: r. blank. a. blank. blank.`
    pub fn word_readout(&self) -> String {
        let letters: Vec<String> = self
            .secret
            .letters()
            .map(|l| match self.guessed.contains(l) {
                true => format!("{l}."),
                false => "blank.".to_string(),
            })
            .collect();
        format!("Current word: {}", letters.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FarewellTable, LANGUAGES};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn react() -> SecretWord {
        SecretWord::new("react").unwrap()
    }

    fn status_of(guesses: &str) -> Status {
        compute_status(&react(), &guesses.chars().collect(), 8)
    }

    fn catalog(languages: usize) -> Catalog {
        Catalog::new(
            LANGUAGES[..languages].to_vec(),
            WordBank::from_words(["react"]).unwrap(),
            FarewellTable::builtin(),
        )
        .unwrap()
    }

    fn game_after(guesses: &str) -> Game {
        let mut game = Game::new(react(), 8);
        for letter in guesses.chars() {
            game.guess(letter);
        }
        game
    }

    #[test]
    fn guessing_every_letter_wins() {
        let status = status_of("react");
        assert!(status.is_won);
        assert!(!status.is_lost);
        assert!(status.is_over);
        assert_eq!(status.wrong_guess_count, 0);
        assert_eq!(status.phase(), Phase::Won);
    }

    #[test]
    fn seven_misses_lose_with_eight_languages() {
        let status = status_of("xyzqwvu");
        assert_eq!(status.wrong_guess_count, 7);
        assert!(status.is_lost);
        assert!(status.is_over);
        assert!(!status.is_won);

        assert!(!status_of("xyzqwv").is_lost);
    }

    #[test]
    fn miss_after_hit_shows_first_farewell() {
        let catalog = catalog(8);
        let game = game_after("rx");
        let status = game.status();
        assert_eq!(status.wrong_guess_count, 1);
        assert_eq!(status.last_guess_correct, Some(false));
        assert_eq!(
            game.eliminated_language(catalog.languages()).unwrap().name,
            "HTML"
        );
        assert_eq!(
            game.banner(&catalog),
            Banner::Farewell(Cow::Borrowed("Farewell, HTML"))
        );
    }

    #[test]
    fn fresh_game_shows_instructions() {
        let game = game_after("");
        let status = game.status();
        assert!(!status.is_over);
        assert_eq!(status.last_guess_correct, None);
        assert_eq!(game.banner(&catalog(8)), Banner::Instructions);
        assert_eq!(game.announcement(), None);
    }

    #[test]
    fn repeated_guesses_are_ignored() {
        let mut game = Game::new(react(), 8);
        assert_eq!(game.guess('r'), GuessOutcome::Correct);
        assert_eq!(game.guess('r'), GuessOutcome::Repeated);
        assert_eq!(game.guess('r'), GuessOutcome::Repeated);
        assert_eq!(game.guessed().iter().collect::<String>(), "r");
        assert_eq!(game.status().wrong_guess_count, 0);
    }

    #[test]
    fn invalid_letters_are_ignored() {
        let mut game = Game::new(react(), 8);
        for letter in ['R', '1', ' ', 'é'] {
            assert_eq!(game.guess(letter), GuessOutcome::Invalid);
        }
        assert!(game.guessed().is_empty());
    }

    #[test]
    fn correct_guess_encourages() {
        let game = game_after("xr");
        assert_eq!(game.banner(&catalog(8)), Banner::Encouragement);
        assert_eq!(
            game.announcement().unwrap(),
            "Correct! The letter r is in the word."
        );
    }

    #[test]
    fn over_game_ignores_guesses() {
        let mut game = game_after("react");
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.guess('z'), GuessOutcome::Finished);
        assert_eq!(game.guessed().len(), 5);

        let mut game = game_after("xyzqwvu");
        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.guess('r'), GuessOutcome::Finished);
        assert_eq!(game.status().wrong_guess_count, 7);
    }

    #[test]
    fn loss_leaves_only_assembly() {
        let catalog = Catalog::new(
            LANGUAGES.to_vec(),
            WordBank::from_words(["react"]).unwrap(),
            FarewellTable::builtin(),
        )
        .unwrap();
        let mut game = Game::new(react(), catalog.languages().len());
        for letter in "bdfghijk".chars() {
            game.guess(letter);
        }
        assert_eq!(game.phase(), Phase::Lost);
        assert_eq!(game.banner(&catalog), Banner::Lost);
        let standing: Vec<&str> = game
            .chips(catalog.languages())
            .filter(|chip| !chip.lost)
            .map(|chip| chip.language.name)
            .collect();
        assert_eq!(standing, vec!["Assembly"]);
    }

    #[test]
    fn lost_game_reveals_missed_letters() {
        let game = game_after("rxyzqwvu");
        let tiles = game.tiles();
        assert!(tiles.iter().all(|t| t.revealed));
        assert!(!tiles[0].missed);
        assert!(tiles[1..].iter().all(|t| t.missed));
    }

    #[test]
    fn tiles_and_readout_follow_guesses() {
        let game = game_after("ra");
        let revealed: Vec<bool> = game.tiles().iter().map(|t| t.revealed).collect();
        assert_eq!(revealed, vec![true, false, true, false, false]);
        assert!(game.tiles().iter().all(|t| !t.missed));
        assert_eq!(
            game.word_readout(),
            "Current word: r. blank. a. blank. blank."
        );
    }

    #[test]
    fn keyboard_marks_guesses() {
        let game = game_after("rx");
        assert_eq!(game.key_state('r'), KeyState::Correct);
        assert_eq!(game.key_state('x'), KeyState::Wrong);
        assert_eq!(game.key_state('e'), KeyState::Untouched);
        assert_eq!(game.keyboard().count(), 26);
        assert_eq!(
            game.keyboard()
                .filter(|(_, state)| *state != KeyState::Untouched)
                .count(),
            2
        );
    }

    #[test]
    fn misaligned_farewell_falls_back() {
        // a game that thinks it has more lives than the catalog has languages
        let catalog = catalog(2);
        let mut game = Game::new(react(), 8);
        for letter in "xyz".chars() {
            game.guess(letter);
        }
        assert_eq!(game.eliminated_language(catalog.languages()), None);
        assert_eq!(
            game.banner(&catalog),
            Banner::Farewell(Cow::Borrowed("Farewell, old friend"))
        );
    }

    #[test]
    fn reset_starts_over() {
        let catalog = catalog(8);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = game_after("xyzqwvu");
        assert!(game.status().is_over);
        game.reset(catalog.words(), &mut rng);
        assert!(game.guessed().is_empty());
        assert!(!game.status().is_over);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.banner(&catalog), Banner::Instructions);
    }

    #[test]
    fn start_uses_catalog_size() {
        let catalog = Catalog::load().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let game = Game::start(&catalog, &mut rng);
        assert_eq!(game.language_count(), 9);
        assert!(catalog.words().iter().any(|w| w == game.secret()));
    }

    proptest! {
        #[test]
        fn wrong_count_ignores_order_and_repeats(guesses in "[a-z]{0,20}") {
            let secret = react();
            let guessed: GuessedLetters = guesses.chars().collect();
            let mut distinct: Vec<char> = guesses.chars().collect();
            distinct.sort_unstable();
            distinct.dedup();
            let expected = distinct.iter().filter(|&&l| !secret.contains(l)).count();

            prop_assert_eq!(compute_status(&secret, &guessed, 8).wrong_guess_count, expected);

            let reversed: GuessedLetters = guesses.chars().rev().collect();
            prop_assert_eq!(compute_status(&secret, &reversed, 8).wrong_guess_count, expected);
        }

        #[test]
        fn won_iff_every_letter_guessed(word in "[a-z]{1,8}", guesses in "[a-z]{0,26}") {
            let secret = SecretWord::new(&word).unwrap();
            let guessed: GuessedLetters = guesses.chars().collect();
            let status = compute_status(&secret, &guessed, 9);
            prop_assert_eq!(status.is_won, word.chars().all(|l| guesses.contains(l)));
            prop_assert_eq!(status.is_lost, status.wrong_guess_count >= 8);
            prop_assert_eq!(status.is_over, status.is_won || status.is_lost);
        }

        #[test]
        fn played_games_stay_consistent(word in "[a-z]{1,8}", guesses in "[a-z]{0,40}") {
            let mut game = Game::new(SecretWord::new(&word).unwrap(), 9);
            for letter in guesses.chars() {
                let before = game.guessed().len();
                let over = game.status().is_over;
                game.guess(letter);
                if over {
                    prop_assert_eq!(game.guessed().len(), before);
                }
            }
            let status = game.status();
            prop_assert!(!(status.is_won && status.is_lost));
            prop_assert!(status.wrong_guess_count <= 8);
        }
    }
}
