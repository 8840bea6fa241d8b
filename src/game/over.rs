use crate::button::Button;
use crate::command::{click_position, Command};
use crate::consts;
use crate::util::EnumExt;
use crossterm::event::Event;
use enum_map::{Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

/// How a run came to an end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Ending {
    /// The snake ran into a wall or into itself
    Collision,

    /// The snake filled the whole board, leaving nowhere to put food
    BoardFull,
}

/// The two message lines shown under the board once a run has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    pub(super) ending: Ending,
    selection: OverOpt,
}

impl GameOver {
    pub(super) fn new(ending: Ending) -> GameOver {
        GameOver {
            ending,
            selection: OverOpt::min(),
        }
    }

    /// Handle an input event, where `buttons_row` is the line the buttons
    /// were last drawn on
    pub(super) fn handle_event(&mut self, event: &Event, buttons_row: Rect) -> Option<OverOpt> {
        if let Some(pos) = click_position(event) {
            let areas = OverOpt::areas(buttons_row);
            return OverOpt::iter().find(|&opt| areas[opt].contains(pos));
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::R => return Some(OverOpt::Restart),
            Command::Esc | Command::M => return Some(OverOpt::MainMenu),
            Command::Q | Command::Quit => return Some(OverOpt::Quit),
            Command::Enter | Command::Space => return Some(self.selection),
            Command::Left | Command::Prev => {
                self.selection = self.selection.prev().unwrap_or_else(OverOpt::max);
            }
            Command::Right | Command::Next => {
                self.selection = self.selection.next().unwrap_or_else(OverOpt::min);
            }
            Command::Home => self.selection = OverOpt::min(),
            Command::End => self.selection = OverOpt::max(),
            _ => (),
        }
        None
    }

    /// Draw the banner with the final `score` on `banner_row` and the
    /// buttons on `buttons_row`
    pub(super) fn render(self, score: u32, banner_row: Rect, buttons_row: Rect, buf: &mut Buffer) {
        let banner = match self.ending {
            Ending::Collision => " GAME OVER",
            Ending::BoardFull => " BOARD CLEARED",
        };
        Line::from_iter([
            Span::styled(banner, consts::BANNER_STYLE),
            Span::raw(format!("  Final score: {score}")),
        ])
        .render(banner_row, buf);
        for (opt, area) in OverOpt::areas(buttons_row) {
            opt.button()
                .selected(opt == self.selection)
                .render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum OverOpt {
    Restart,
    MainMenu,
    Quit,
}

impl OverOpt {
    const SPACING: u16 = 2;

    fn button(self) -> Button {
        match self {
            OverOpt::Restart => Button::new("Restart", "r"),
            OverOpt::MainMenu => Button::new("Main Menu", "Esc"),
            OverOpt::Quit => Button::new("Quit", "q"),
        }
    }

    fn areas(row: Rect) -> EnumMap<OverOpt, Rect> {
        let rects = Layout::horizontal(OverOpt::iter().map(|opt| opt.button().width()))
            .flex(Flex::Center)
            .spacing(OverOpt::SPACING)
            .split(row);
        EnumMap::from_fn(|opt: OverOpt| {
            rects
                .get(opt.into_usize())
                .copied()
                .unwrap_or_default()
        })
    }
}
