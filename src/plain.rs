//! Line-by-line front end for terminals where the full-screen interface is
//! not an option.

use std::io::{self, BufRead, Write};

use assembly_endgame::catalog::Catalog;
use assembly_endgame::endgame::{Banner, Game, KeyState};
use colored::*;
use rand::Rng;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Command {
    Guess(char),
    NewGame,
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Command {
        let line = line.trim().to_ascii_lowercase();
        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Command::Guess(letter),
            _ => match line.as_str() {
                "new" => Command::NewGame,
                "quit" | "exit" => Command::Quit,
                _ => Command::Unknown,
            },
        }
    }
}

/// Play until the input runs out or the player quits.
pub fn run<R, I, O>(catalog: &Catalog, rng: &mut R, input: I, mut output: O) -> io::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut game = Game::start(catalog, rng);
    render(&game, catalog, &mut output)?;

    for line in input.lines() {
        match Command::parse(&line?) {
            Command::Quit => break,
            Command::Guess(letter) => {
                game.guess(letter);
            }
            Command::NewGame if game.status().is_over => game.reset(catalog.words(), rng),
            Command::NewGame => {}
            Command::Unknown => {
                writeln!(output, "{}", "Type a letter, `new` or `quit`.".dimmed())?;
                continue;
            }
        }
        render(&game, catalog, &mut output)?;
    }
    Ok(())
}

fn render<O: Write>(game: &Game, catalog: &Catalog, output: &mut O) -> io::Result<()> {
    let status = game.status();
    writeln!(output)?;
    writeln!(output, "{}", "Assembly: Endgame".bold())?;

    let banner = game.banner(catalog);
    let message = banner.message();
    let message = match &banner {
        Banner::Won => message.as_ref().green().bold(),
        Banner::Lost => message.as_ref().red().bold(),
        Banner::Farewell(_) => message.as_ref().magenta().italic(),
        Banner::Instructions | Banner::Encouragement => message.as_ref().normal(),
    };
    match banner.headline() {
        Some(headline) => writeln!(output, "{} {}", headline.bold(), message)?,
        None => writeln!(output, "{}", message)?,
    }

    let chips: Vec<String> = game
        .chips(catalog.languages())
        .map(|chip| {
            let label = format!(" {} ", chip.language.name);
            let (fg, bg) = (chip.language.color, chip.language.background);
            match chip.lost {
                true => label.as_str().strikethrough().dimmed().to_string(),
                false => label
                    .as_str()
                    .truecolor(fg.0, fg.1, fg.2)
                    .on_truecolor(bg.0, bg.1, bg.2)
                    .to_string(),
            }
        })
        .collect();
    writeln!(output, "{}", chips.join(" "))?;

    let tiles: Vec<String> = game
        .tiles()
        .iter()
        .map(|tile| {
            let letter = tile.letter.to_ascii_uppercase().to_string();
            match (tile.revealed, tile.missed) {
                (false, _) => "_".to_string(),
                (true, true) => letter.as_str().red().to_string(),
                (true, false) => letter.as_str().bold().to_string(),
            }
        })
        .collect();
    writeln!(output, "{}", tiles.join(" "))?;

    let keys: Vec<String> = game
        .keyboard()
        .map(|(letter, state)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match state {
                KeyState::Correct => letter.as_str().black().on_green().to_string(),
                KeyState::Wrong => letter.as_str().white().on_red().to_string(),
                KeyState::Untouched if status.is_over => letter.as_str().dimmed().to_string(),
                KeyState::Untouched => letter,
            }
        })
        .collect();
    writeln!(output, "{}", keys.join(" "))?;

    if let Some(announcement) = game.announcement() {
        writeln!(output, "{}", announcement.as_str().dimmed())?;
    }

    match status.is_over {
        true => write!(output, "`new` for another round, `quit` to leave > ")?,
        false => write!(output, "> ")?,
    }
    output.flush()
}
