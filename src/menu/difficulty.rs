use super::widgets::Logo;
use super::MainMenu;
use crate::app::{Scene, Transition};
use crate::button::Button;
use crate::command::{click_position, Command};
use crate::difficulty::Difficulty;
use crate::game::Game;
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

/// The screen shown between the main menu and a new game, where the player
/// picks how fast the snake moves
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DifficultyMenu {
    selection: Choice,
    globals: Globals,
}

impl DifficultyMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        DifficultyMenu {
            selection: Choice::from(globals.difficulty),
            globals,
        }
    }

    fn handle_event(&mut self, event: Event, area: Rect) -> Option<Transition> {
        if let Some(pos) = click_position(&event) {
            let buttons = MenuAreas::new(area).buttons;
            let clicked = Choice::iter().find(|&c| buttons[c].contains(pos))?;
            return Some(self.activate(clicked));
        }
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Transition::Quit),
            Command::Esc => return Some(self.activate(Choice::Back)),
            Command::Digit(c) => return Difficulty::from_hotkey(c).map(|d| self.start(d)),
            Command::Enter | Command::Space => return Some(self.activate(self.selection)),
            Command::Up | Command::Prev => {
                self.selection = self.selection.prev().unwrap_or_else(Choice::max);
            }
            Command::Down | Command::Next => {
                self.selection = self.selection.next().unwrap_or_else(Choice::min);
            }
            Command::Home => self.selection = Choice::min(),
            Command::End => self.selection = Choice::max(),
            _ => (),
        }
        None
    }

    fn activate(&self, choice: Choice) -> Transition {
        match choice.difficulty() {
            Some(d) => self.start(d),
            None => Transition::Goto(MainMenu::new(self.globals).into()),
        }
    }

    fn start(&self, difficulty: Difficulty) -> Transition {
        let mut globals = self.globals;
        globals.difficulty = difficulty;
        Transition::Goto(Game::new(globals).into())
    }
}

impl Scene for DifficultyMenu {
    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn process_input(&mut self, area: Rect) -> std::io::Result<Option<Transition>> {
        Ok(self.handle_event(read()?, area))
    }
}

impl Widget for &DifficultyMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = MenuAreas::new(area);
        Logo.render(areas.logo, buf);
        Line::from("Choose a difficulty:")
            .centered()
            .render(areas.title, buf);
        for (choice, button_area) in areas.buttons {
            choice
                .button()
                .selected(choice == self.selection)
                .render(button_area, buf);
        }
        if let Some(d) = self.selection.difficulty() {
            Line::from(format!(
                "Snake speed: one cell every {:>3} ms",
                d.interval().as_millis()
            ))
            .centered()
            .render(areas.speed, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum Choice {
    Beginner,
    Medium,
    Advanced,
    Back,
}

impl Choice {
    fn difficulty(self) -> Option<Difficulty> {
        match self {
            Choice::Beginner => Some(Difficulty::Beginner),
            Choice::Medium => Some(Difficulty::Medium),
            Choice::Advanced => Some(Difficulty::Advanced),
            Choice::Back => None,
        }
    }

    fn button(self) -> Button {
        match self.difficulty() {
            Some(d) => Button::new(d.label(), d.hotkey()),
            None => Button::new("Back", "Esc"),
        }
    }
}

impl From<Difficulty> for Choice {
    fn from(value: Difficulty) -> Choice {
        match value {
            Difficulty::Beginner => Choice::Beginner,
            Difficulty::Medium => Choice::Medium,
            Difficulty::Advanced => Choice::Advanced,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct MenuAreas {
    logo: Rect,
    title: Rect,
    speed: Rect,
    buttons: EnumMap<Choice, Rect>,
}

impl MenuAreas {
    fn new(area: Rect) -> MenuAreas {
        let display = get_display_area(area);
        let [logo, title, beginner, medium, advanced, speed, back] =
            Layout::vertical([Logo::HEIGHT, 1, 1, 1, 1, 1, 1])
                .flex(Flex::Start)
                .spacing(1)
                .areas(display);
        let [logo] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo);
        let buttons = EnumMap::from_fn(|choice: Choice| {
            let row = match choice {
                Choice::Beginner => beginner,
                Choice::Medium => medium,
                Choice::Advanced => advanced,
                Choice::Back => back,
            };
            choice.button().center_in(row)
        });
        MenuAreas {
            logo,
            title,
            speed,
            buttons,
        }
    }
}
