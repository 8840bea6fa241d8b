use crate::command::Command;
use crate::game::Game;
use crate::menu::{DifficultyMenu, MainMenu};
use crate::util::Globals;
use crate::warning::Warning;
use crossterm::event::read;
use enum_dispatch::enum_dispatch;
use ratatui::{backend::Backend, layout::Rect, Frame, Terminal};
use std::io;

/// Owns whichever screen is showing and drives the draw/input loop
#[derive(Debug)]
pub(crate) struct App {
    screen: Screen,
    /// A problem to show the player before anything else
    warning: Option<Warning>,
    quitting: bool,
}

impl App {
    pub(crate) fn new(globals: Globals, warning: Option<Warning>) -> App {
        App {
            screen: MainMenu::new(globals).into(),
            warning,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            let area = terminal.draw(|frame| self.draw(frame))?.area;
            self.process_input(area)?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        self.screen.draw(frame);
        if let Some(ref warning) = self.warning {
            frame.render_widget(warning, frame.area());
        }
    }

    fn process_input(&mut self, area: Rect) -> io::Result<()> {
        if self.warning.is_some() {
            if let Some(cmd) = read()?.as_key_press_event().and_then(Command::from_key_event) {
                self.handle_warning_command(cmd);
            }
            return Ok(());
        }
        match self.screen.process_input(area)? {
            Some(Transition::Goto(screen)) => self.screen = screen,
            Some(Transition::Quit) => self.quitting = true,
            None => (),
        }
        Ok(())
    }

    fn handle_warning_command(&mut self, cmd: Command) {
        match cmd {
            Command::Enter | Command::Esc => self.warning = None,
            Command::Quit => self.quitting = true,
            _ => (),
        }
    }
}

/// Behavior shared by every screen of the app
#[enum_dispatch]
pub(crate) trait Scene {
    fn draw(&self, frame: &mut Frame<'_>);

    /// Wait for input (or for the next game tick) and return where to go
    /// next, if anywhere.  `area` is the size of the frame last drawn, for
    /// locating mouse clicks.
    fn process_input(&mut self, area: Rect) -> io::Result<Option<Transition>>;
}

#[enum_dispatch(Scene)]
#[derive(Debug)]
pub(crate) enum Screen {
    MainMenu,
    DifficultyMenu,
    Game,
}

#[derive(Debug)]
pub(crate) enum Transition {
    Goto(Screen),
    Quit,
}
