mod difficulty;
mod widgets;
pub(crate) use self::difficulty::DifficultyMenu;
use self::widgets::{Instructions, Logo};
use crate::app::{Scene, Transition};
use crate::button::Button;
use crate::command::{click_position, Command};
use crate::util::{get_display_area, EnumExt, Globals};
use crossterm::event::{read, Event};
use enum_map::{Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    text::Line,
    widgets::Widget,
    Frame,
};

/// The title screen
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
    globals: Globals,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        MainMenu {
            selection: Selection::default(),
            globals,
        }
    }

    fn handle_event(&mut self, event: Event, area: Rect) -> Option<Transition> {
        if let Some(pos) = click_position(&event) {
            let buttons = MenuAreas::new(area).buttons;
            let clicked = Selection::iter().find(|&sel| buttons[sel].contains(pos))?;
            return Some(self.activate(clicked));
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Transition::Quit),
            Command::P => return Some(self.activate(Selection::PlayButton)),
            Command::Enter | Command::Space => return Some(self.activate(self.selection)),
            Command::Up | Command::Prev => {
                self.selection = self.selection.prev().unwrap_or_else(Selection::max);
            }
            Command::Down | Command::Next => {
                self.selection = self.selection.next().unwrap_or_else(Selection::min);
            }
            Command::Home => self.selection = Selection::min(),
            Command::End => self.selection = Selection::max(),
            _ => (),
        }
        None
    }

    fn activate(&self, selection: Selection) -> Transition {
        match selection {
            Selection::PlayButton => Transition::Goto(DifficultyMenu::new(self.globals).into()),
            Selection::QuitButton => Transition::Quit,
        }
    }
}

impl Scene for MainMenu {
    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn process_input(&mut self, area: Rect) -> std::io::Result<Option<Transition>> {
        Ok(self.handle_event(read()?, area))
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = MenuAreas::new(area);
        Logo.render(areas.logo, buf);
        Instructions.render(areas.instructions, buf);
        Line::from(format!("High Score: {}", self.globals.high_score))
            .centered()
            .render(areas.high_score, buf);
        for (sel, button_area) in areas.buttons {
            sel.button()
                .selected(sel == self.selection)
                .render(button_area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
enum Selection {
    #[default]
    PlayButton,
    QuitButton,
}

impl Selection {
    fn button(self) -> Button {
        match self {
            Selection::PlayButton => Button::new("Play", "p"),
            Selection::QuitButton => Button::new("Quit", "q"),
        }
    }
}

/// Where each part of the main menu goes within a given frame area
#[derive(Clone, Debug, Eq, PartialEq)]
struct MenuAreas {
    logo: Rect,
    instructions: Rect,
    high_score: Rect,
    buttons: EnumMap<Selection, Rect>,
}

impl MenuAreas {
    fn new(area: Rect) -> MenuAreas {
        let display = get_display_area(area);
        let [logo, instructions, high_score, play, quit] =
            Layout::vertical([Logo::HEIGHT, Instructions::HEIGHT, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);
        let [logo] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo);
        let [instructions] = Layout::horizontal([Instructions::WIDTH])
            .flex(Flex::Center)
            .areas(instructions);
        let buttons = EnumMap::from_fn(|sel: Selection| {
            let row = match sel {
                Selection::PlayButton => play,
                Selection::QuitButton => quit,
            };
            sel.button().center_in(row)
        });
        MenuAreas {
            logo,
            instructions,
            high_score,
            buttons,
        }
    }
}
