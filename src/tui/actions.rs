use super::*;
use assembly_endgame::endgame::GuessOutcome;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Exit,
    Guess(char),
    NewGame,
    /// Nothing changed, but the screen has to be drawn again.
    Render,
}

impl App {
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Exit => {
                self.token.cancel();
                self.exit = true;
            }
            Action::Guess(letter) => {
                let outcome = self.game.guess(letter);
                if matches!(outcome, GuessOutcome::Invalid | GuessOutcome::Finished) {
                    tracing::trace!(%letter, ?outcome, "ignored key");
                }
            }
            Action::NewGame => self.new_game(),
            Action::Render => {}
        }
    }

    /// Only a finished game can be replaced.
    fn new_game(&mut self) {
        if self.game.status().is_over {
            self.game.reset(self.catalog.words(), &mut self.rng);
        }
    }
}
