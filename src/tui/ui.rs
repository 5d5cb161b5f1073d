use super::App;
use assembly_endgame::catalog::Rgb;
use assembly_endgame::endgame::{Banner, KeyState, Tile};
use ratatui::{
    prelude::*,
    widgets::{block::*, *},
};

const KEYS_PER_ROW: usize = 13;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = self.create_border();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .split(border.inner(area));

        self.render_header(rows[0], buf);
        self.render_status(rows[1], buf);
        self.render_chips(rows[2], buf);
        self.render_word(rows[3], buf);
        self.render_keyboard(rows[4], buf);
        self.render_announcement(rows[5], buf);

        border.render(area, buf);
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" Assembly: Endgame ".bold());
        let mut hints = vec![" Quit ".into(), "<Esc> ".blue().bold()];
        if self.game.status().is_over {
            hints.push(" New game ".into());
            hints.push("<Enter> ".blue().bold());
        }
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                Title::from(Line::from(hints))
                    .alignment(Alignment::Center)
                    .position(block::Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let tagline = format!(
            "Guess the word within {} attempts to keep the programming world safe from Assembly!",
            self.catalog.attempts()
        );
        Paragraph::new(Line::from(tagline).dark_gray())
            .centered()
            .wrap(Wrap { trim: true })
            .block(Block::new().padding(Padding::new(1, 1, 1, 0)))
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(60)])
            .flex(layout::Flex::Center)
            .split(area)[0];

        let banner = self.game.banner(&self.catalog);
        let style = match &banner {
            Banner::Won => Style::new().bg(Color::Green).fg(Color::White),
            Banner::Lost => Style::new().bg(Color::Red).fg(Color::White),
            Banner::Farewell(_) => Style::new().bg(Color::Magenta).fg(Color::White).italic(),
            Banner::Instructions | Banner::Encouragement => Style::new(),
        };

        let mut lines: Vec<Line<'_>> = vec![];
        if let Some(headline) = banner.headline() {
            lines.push(Line::from(headline.bold()));
        }
        lines.push(Line::from(banner.message().into_owned()));
        let padding = if lines.len() > 1 { 0 } else { 1 };

        Paragraph::new(lines)
            .centered()
            .style(style)
            .block(Block::new().padding(Padding::new(0, 0, padding, 0)))
            .render(area, buf);
    }

    fn render_chips(&self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span<'_>> = vec![];
        for chip in self.game.chips(self.catalog.languages()) {
            let style = if chip.lost {
                Style::new()
                    .fg(Color::DarkGray)
                    .bg(Color::Black)
                    .crossed_out()
            } else {
                Style::new()
                    .fg(color(chip.language.color))
                    .bg(color(chip.language.background))
            };
            spans.push(Span::styled(format!(" {} ", chip.language.name), style));
            spans.push(" ".into());
        }
        spans.pop();
        Paragraph::new(Line::from(spans))
            .centered()
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn render_word(&self, area: Rect, buf: &mut Buffer) {
        let tiles = self.game.tiles();
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(5); tiles.len()])
            .flex(layout::Flex::Center)
            .split(area);
        for (tile, area) in tiles.iter().zip(layout.iter()) {
            tile.render(*area, buf);
        }
    }

    fn render_keyboard(&self, area: Rect, buf: &mut Buffer) {
        let area = Block::new().padding(Padding::new(0, 0, 1, 0)).inner(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); 2])
            .split(area);

        let disabled = self.game.status().is_over;
        let keys: Vec<(char, KeyState)> = self.game.keyboard().collect();
        for (row, keys) in rows.iter().zip(keys.chunks(KEYS_PER_ROW)) {
            let layout = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(5); keys.len()])
                .flex(layout::Flex::Center)
                .split(*row);
            for ((letter, state), area) in keys.iter().zip(layout.iter()) {
                render_key(*letter, *state, disabled, *area, buf);
            }
        }
    }

    fn render_announcement(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(self.game.announcement().unwrap_or_default()),
            Line::from(self.game.word_readout()),
        ];
        Paragraph::new(lines)
            .centered()
            .dark_gray()
            .render(area, buf);
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn render_key(letter: char, state: KeyState, disabled: bool, area: Rect, buf: &mut Buffer) {
    let style = match state {
        KeyState::Correct => Style::new().bg(Color::Green).fg(Color::Black),
        KeyState::Wrong => Style::new().bg(Color::Red).fg(Color::White),
        KeyState::Untouched if disabled => Style::new().dark_gray(),
        KeyState::Untouched => Style::new(),
    };
    Paragraph::new(letter.to_ascii_uppercase().to_string())
        .style(style)
        .bold()
        .centered()
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}

trait RenderTile {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

impl RenderTile for Tile {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let text_style = if self.missed {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::LightGreen)
        };
        let letter = match self.revealed {
            true => self.letter.to_ascii_uppercase().to_string(),
            false => " ".to_string(),
        };
        Paragraph::new(Text::styled(letter, text_style))
            .bold()
            .centered()
            .block(
                Block::new()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().dark_gray()),
            )
            .render(area, buf);
    }
}
