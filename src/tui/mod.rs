use std::io::{self, stdout, Stdout};

use assembly_endgame::catalog::Catalog;
use assembly_endgame::endgame::Game;

use crossterm::{execute, terminal::*};
use rand_chacha::ChaCha8Rng;
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use actions::Action;

mod actions;
mod events;
mod ui;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Install color-eyre, making sure a panic leaves the terminal usable
/// before the report is printed.
pub fn install_hooks() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        panic_hook(panic_info);
    }));
    eyre_hook.install()?;
    Ok(())
}

/// Initialize the terminal
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct App {
    exit: bool,
    catalog: Catalog,
    game: Game,
    rng: ChaCha8Rng,
    token: CancellationToken,
}

impl App {
    pub fn new(catalog: Catalog, mut rng: ChaCha8Rng) -> Self {
        let game = Game::start(&catalog, &mut rng);

        App {
            exit: false,
            catalog,
            game,
            rng,
            token: CancellationToken::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub async fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        // the input task holds the only sender
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let task = self.handle_events(action_tx);

        let result = self
            .process_actions(&mut action_rx, |app| {
                terminal.draw(|frame| app.render_frame(frame)).map(|_| ())
            })
            .await;

        self.token.cancel();
        if let Err(err) = task.await {
            tracing::warn!(%err, "input task did not shut down cleanly");
        }
        result
    }

    /// Draw, wait for the next action, apply it. Stops on exit or once every
    /// sender is gone.
    async fn process_actions<F>(
        &mut self,
        actions: &mut mpsc::UnboundedReceiver<Action>,
        mut draw: F,
    ) -> io::Result<()>
    where
        F: FnMut(&App) -> io::Result<()>,
    {
        while !self.exit {
            draw(self)?;

            match actions.recv().await {
                Some(action) => self.update(action),
                None => {
                    tracing::warn!("input task ended, leaving");
                    break;
                }
            }
        }
        Ok(())
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}

#[cfg(test)]
impl App {
    /// An app playing a known word.
    pub(crate) fn with_word(word: &str) -> Self {
        use assembly_endgame::catalog::SecretWord;
        use rand::SeedableRng;

        let catalog = Catalog::load().unwrap();
        let mut app = App::new(catalog, ChaCha8Rng::seed_from_u64(0));
        app.game = Game::new(SecretWord::new(word).unwrap(), app.catalog.languages().len());
        app
    }
}
