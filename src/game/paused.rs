use crate::button::Button;
use crate::command::{click_position, Command};
use crate::util::EnumExt;
use crossterm::event::Event;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Clear, Padding, Widget},
};

/// Pop-up menu shown over the frozen board while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    selection: PauseOpt,
}

impl Paused {
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 22;

    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle an input event, where `area` is the rectangle the pop-up was
    /// last drawn in.  Returns `Some` once the player picks an option.
    pub(super) fn handle_event(&mut self, event: &Event, area: Rect) -> Option<PauseOpt> {
        if let Some(pos) = click_position(event) {
            return PauseOpt::iter().find(|&opt| opt.area(area).contains(pos));
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::P | Command::Esc => return Some(PauseOpt::Resume),
            Command::R => return Some(PauseOpt::Restart),
            Command::M => return Some(PauseOpt::MainMenu),
            Command::Q | Command::Quit => return Some(PauseOpt::Quit),
            Command::Enter | Command::Space => return Some(self.selection),
            Command::Up | Command::Prev => {
                self.selection = self.selection.prev().unwrap_or_else(PauseOpt::max);
            }
            Command::Down | Command::Next => {
                self.selection = self.selection.next().unwrap_or_else(PauseOpt::min);
            }
            Command::Home => self.selection = PauseOpt::min(),
            Command::End => self.selection = PauseOpt::max(),
            _ => (),
        }
        None
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .title_top(Line::from(" PAUSED ").centered())
            .padding(Padding::horizontal(2))
            .style(Style::reset())
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    Resume,
    Restart,
    MainMenu,
    Quit,
}

impl PauseOpt {
    fn button(self) -> Button {
        match self {
            PauseOpt::Resume => Button::new("Resume", "p"),
            PauseOpt::Restart => Button::new("Restart", "r"),
            PauseOpt::MainMenu => Button::new("Main Menu", "m"),
            PauseOpt::Quit => Button::new("Quit", "q"),
        }
    }

    /// The rectangle occupied by this option's button when the pop-up is
    /// drawn in `popup`
    fn area(self, popup: Rect) -> Rect {
        let inner = Paused::block().inner(popup);
        let Some(mut row) = inner.rows().nth(self.into_usize()) else {
            return Rect::ZERO;
        };
        row.width = row.width.min(self.button().width());
        row
    }
}

impl Widget for Paused {
    /*
     * ┌────── PAUSED ──────┐
     * │  [Resume (p)]      │
     * │  [Restart (r)]     │
     * │  [Main Menu (m)]   │
     * │  [Quit (q)]        │
     * └────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paused::block().render(area, buf);
        for opt in PauseOpt::iter() {
            opt.button()
                .selected(opt == self.selection)
                .render(opt.area(area), buf);
        }
    }
}
