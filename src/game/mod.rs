mod clock;
mod direction;
mod food;
mod grid;
mod over;
mod paused;
mod snake;
use self::clock::TickGate;
use self::direction::Direction;
use self::food::Food;
use self::grid::{Cell, Grid};
use self::over::{Ending, GameOver, OverOpt};
use self::paused::{PauseOpt, Paused};
use self::snake::Snake;
use crate::app::{Scene, Transition};
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Color,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    score: u32,
    snake: Snake,
    /// `None` only once the snake has filled the board
    food: Option<Food>,
    grid: Grid,
    state: GameState,
    globals: Globals,
    gate: TickGate,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, mut rng: R) -> Game<R> {
        let grid = Grid::default();
        let snake = Snake::new();
        let food = Food::relocate(&mut rng, grid, &snake);
        let mut gate = TickGate::new(globals.difficulty.interval());
        gate.start(Instant::now());
        Game {
            rng,
            score: 0,
            snake,
            food,
            grid,
            state: GameState::Running,
            globals,
            gate,
        }
    }

    /// Move the snake one cell and resolve whatever it runs into
    fn step(&mut self) {
        if !self.running() {
            return;
        }
        self.snake.advance();
        if self.snake.hit_edge(self.grid) || self.snake.hit_self() {
            self.end(Ending::Collision);
            return;
        }
        if self.food.is_some_and(|f| f.cell == self.snake.head()) {
            self.score += 1;
            self.snake.grow();
            self.food = Food::relocate(&mut self.rng, self.grid, &self.snake);
            if self.food.is_none() {
                self.end(Ending::BoardFull);
            }
        }
    }
}

impl<R> Game<R> {
    #[cfg(test)]
    pub(crate) fn globals(&self) -> Globals {
        self.globals
    }

    fn handle_event(&mut self, event: Event, area: Rect) -> Option<Transition> {
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                    return None;
                }
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::Quit | Command::Q => return Some(Transition::Quit),
                    Command::Up => self.snake.turn(Direction::North),
                    Command::Left => self.snake.turn(Direction::West),
                    Command::Down => self.snake.turn(Direction::South),
                    Command::Right => self.snake.turn(Direction::East),
                    Command::P | Command::Space => self.pause(),
                    Command::Esc => return Some(self.main_menu()),
                    _ => (),
                }
            }
            GameState::Paused(ref mut paused) => {
                match paused.handle_event(&event, ScreenAreas::new(area).popup)? {
                    PauseOpt::Resume => self.resume(),
                    PauseOpt::Restart => return Some(self.restart()),
                    PauseOpt::MainMenu => return Some(self.main_menu()),
                    PauseOpt::Quit => return Some(Transition::Quit),
                }
            }
            GameState::Over(ref mut over) => {
                match over.handle_event(&event, ScreenAreas::new(area).buttons)? {
                    OverOpt::Restart => return Some(self.restart()),
                    OverOpt::MainMenu => return Some(self.main_menu()),
                    OverOpt::Quit => return Some(Transition::Quit),
                }
            }
        }
        None
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.gate.stop();
        self.state = GameState::Paused(Paused::new());
    }

    fn resume(&mut self) {
        self.state = GameState::Running;
        self.gate.start(Instant::now());
    }

    fn end(&mut self, ending: Ending) {
        self.gate.stop();
        self.globals.record_score(self.score);
        self.state = GameState::Over(GameOver::new(ending));
    }

    fn restart(&self) -> Transition {
        Transition::Goto(Game::new(self.globals).into())
    }

    fn main_menu(&self) -> Transition {
        Transition::Goto(MainMenu::new(self.globals).into())
    }
}

impl<R: Rng> Scene for Game<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn process_input(&mut self, area: Rect) -> std::io::Result<Option<Transition>> {
        if let Some(wait) = self.gate.remaining(Instant::now()) {
            if wait.is_zero() || !poll(wait)? {
                if self.gate.admit(Instant::now()) {
                    self.step();
                }
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?, area))
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = ScreenAreas::new(area);
        let Globals {
            difficulty,
            high_score,
        } = self.globals;
        let score = self.score;
        Line::styled(
            format!(" Score: {score}   High Score: {high_score}   Difficulty: {difficulty}"),
            consts::SCORE_BAR_STYLE,
        )
        .render(areas.score, buf);

        Block::bordered().render(areas.board, buf);
        let mut canvas = Canvas {
            area: areas.board.inner(Margin::new(1, 1)),
            buf,
        };
        canvas.fill();
        if let Some(food) = self.food {
            food.paint(&mut canvas);
        }
        self.snake.paint(&mut canvas);

        match self.state {
            GameState::Running => (),
            GameState::Paused(paused) => paused.render(areas.popup, buf),
            GameState::Over(over) => {
                if over.ending == Ending::Collision {
                    // A head that went through the wall can't be drawn, so
                    // mark the segment that hit it instead
                    let crash = if self.grid.contains(self.snake.head()) {
                        Some(self.snake.head())
                    } else {
                        self.snake.body.front().copied()
                    };
                    if let Some(cell) = crash {
                        canvas.paint(cell, consts::COLLISION_COLOR);
                    }
                }
                over.render(self.score, areas.banner, areas.buttons, buf);
            }
        }
    }
}

/// Where each part of the game screen goes within a given frame area
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ScreenAreas {
    score: Rect,
    /// The board, including its border
    board: Rect,
    banner: Rect,
    buttons: Rect,
    popup: Rect,
}

impl ScreenAreas {
    fn new(area: Rect) -> ScreenAreas {
        let display = get_display_area(area);
        let [score, board, banner, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let side = u16::try_from(consts::GRID_COUNT).unwrap_or(u16::MAX);
        let board = center_rect(
            board,
            Size {
                width: side.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
                height: side.div_ceil(2).saturating_add(2),
            },
        );
        let popup = center_rect(
            display,
            Size {
                width: Paused::WIDTH,
                height: Paused::HEIGHT,
            },
        );
        ScreenAreas {
            score,
            board,
            banner,
            buttons,
            popup,
        }
    }
}

/// The inside of the board's border.  Each terminal cell shows two grid
/// rows with an upper half block: the foreground colors the upper row, the
/// background the lower one.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn fill(&mut self) {
        for p in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(p) {
                cell.set_symbol(consts::HALF_BLOCK_SYMBOL)
                    .set_fg(consts::FIELD_COLOR)
                    .set_bg(consts::FIELD_COLOR);
            }
        }
    }

    /// Color grid cell `cell`.  Cells outside the canvas are ignored.
    fn paint(&mut self, cell: Cell, color: Color) {
        let (Ok(gx), Ok(gy)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        let Some(col) = gx.checked_mul(consts::CELL_WIDTH) else {
            return;
        };
        let row = gy / 2;
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        for dx in 0..consts::CELL_WIDTH {
            let x = self.area.x.saturating_add(col).saturating_add(dx);
            let pos = Position::new(x, self.area.y.saturating_add(row));
            if !self.area.contains(pos) {
                continue;
            }
            if let Some(c) = self.buf.cell_mut(pos) {
                if gy % 2 == 0 {
                    c.set_fg(color);
                } else {
                    c.set_bg(color);
                }
            }
        }
    }
}

/// Something that can be drawn on the board
trait Sprite {
    fn paint(&self, canvas: &mut Canvas<'_>);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
    Over(GameOver),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use crate::difficulty::Difficulty;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::style::Style;
    use rstest::rstest;
    use std::cmp::Ordering;
    use std::collections::{HashSet, VecDeque};
    use std::ops::Range;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;
    const AREA: Rect = Rect::new(0, 0, 80, 24);

    fn new_game(globals: Globals) -> Game<ChaCha12Rng> {
        let mut game = Game::new_with_rng(globals, ChaCha12Rng::seed_from_u64(RNG_SEED));
        game.food = Some(Food {
            cell: Cell::new(20, 4),
        });
        game
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    fn render(game: &Game<ChaCha12Rng>) -> Buffer {
        let mut buffer = Buffer::empty(AREA);
        game.render(AREA, &mut buffer);
        buffer
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        span_text(buffer, y, 0..buffer.area.width)
    }

    fn span_text(buffer: &Buffer, y: u16, xs: Range<u16>) -> String {
        xs.map(|x| buffer[(x, y)].symbol()).collect()
    }

    /// An empty board with the given status bar
    fn board(status: &str) -> Buffer {
        let mut lines = vec![status.to_owned(), String::new(), String::new()];
        lines.push(format!("         ┌{}┐", "─".repeat(60)));
        for _ in 0..15 {
            lines.push(format!("         │{}│", "▀".repeat(60)));
        }
        lines.push(format!("         └{}┘", "─".repeat(60)));
        lines.resize(23, String::new());
        lines.push(" ".repeat(80));
        let mut buffer = Buffer::with_lines(lines);
        buffer.set_style(Rect::new(0, 0, 80, 1), consts::SCORE_BAR_STYLE);
        buffer.set_style(
            Rect::new(10, 4, 60, 15),
            Style::new().fg(consts::FIELD_COLOR).bg(consts::FIELD_COLOR),
        );
        buffer
    }

    #[test]
    fn new_game_layout() {
        let game = new_game(Globals::default());
        let mut expected = board(" Score: 0   High Score: 0   Difficulty: Medium");
        // Snake on grid row 9: the lower half of terminal row 8
        for x in 18..22 {
            expected[(x, 8)].set_bg(consts::SNAKE_COLOR);
        }
        for x in 22..24 {
            expected[(x, 8)].set_bg(consts::SNAKE_HEAD_COLOR);
        }
        // Food on grid row 4: the upper half of terminal row 6
        for x in 50..52 {
            expected[(x, 6)].set_fg(consts::FOOD_COLOR);
        }
        pretty_assertions::assert_eq!(render(&game), expected);
    }

    #[test]
    fn fresh_food_is_free() {
        let game = Game::new_with_rng(Globals::default(), ChaCha12Rng::seed_from_u64(RNG_SEED));
        let food = game.food.unwrap();
        assert!(game.grid.contains(food.cell));
        assert!(!game.snake.contains(food.cell));
        assert_eq!(game.score, 0);
        assert!(game.gate.running());
    }

    #[test]
    fn step_moves_snake() {
        let mut game = new_game(Globals::default());
        game.step();
        assert_eq!(game.snake.head(), Cell::new(7, 9));
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.score, 0);
        assert!(game.running());
    }

    #[test]
    fn eat_food() {
        let mut game = new_game(Globals::default());
        game.food = Some(Food {
            cell: Cell::new(7, 9),
        });
        game.step();
        assert_eq!(game.score, 1);
        assert!(game.snake.growing);
        let food = game.food.unwrap();
        assert!(!game.snake.contains(food.cell));
        game.step();
        assert_eq!(game.snake.len(), 4);
    }

    #[test]
    fn edge_collision_records_high_score() {
        let mut game = new_game(Globals {
            difficulty: Difficulty::Medium,
            high_score: 5,
        });
        game.score = 7;
        game.snake.head = Cell::new(29, 9);
        game.snake.body = VecDeque::from([Cell::new(28, 9), Cell::new(27, 9)]);
        game.step();
        assert_eq!(game.snake.head(), Cell::new(30, 9));
        assert_eq!(
            game.state,
            GameState::Over(GameOver::new(Ending::Collision))
        );
        assert_eq!(game.score, 7);
        assert_eq!(game.globals.high_score, 7);
        assert!(!game.gate.running());

        game.step();
        assert_eq!(game.snake.head(), Cell::new(30, 9), "a finished run stays put");

        let buffer = render(&game);
        // The neck at (29, 9) is marked where the head left the board
        assert_eq!(buffer[(68, 8)].bg, consts::COLLISION_COLOR);
        assert_eq!(buffer[(69, 8)].bg, consts::COLLISION_COLOR);
        assert_eq!(
            row_text(&buffer, 0).trim_end(),
            " Score: 7   High Score: 7   Difficulty: Medium"
        );
        assert_eq!(row_text(&buffer, 22).trim_end(), " GAME OVER  Final score: 7");
        assert_eq!(
            row_text(&buffer, 23).trim(),
            "[Restart (r)]  [Main Menu (Esc)]  [Quit (q)]"
        );
    }

    #[test]
    fn self_collision() {
        let mut game = new_game(Globals::default());
        game.score = 3;
        game.snake.head = Cell::new(10, 10);
        game.snake.body = VecDeque::from([
            Cell::new(11, 10),
            Cell::new(11, 11),
            Cell::new(10, 11),
            Cell::new(9, 11),
            Cell::new(9, 10),
        ]);
        game.snake.direction = Direction::West;
        game.snake.next_direction = Direction::West;
        assert!(game.handle_event(key(KeyCode::Down), AREA).is_none());
        game.step();
        assert_eq!(
            game.state,
            GameState::Over(GameOver::new(Ending::Collision))
        );
        assert_eq!(game.globals.high_score, 3);
        let buffer = render(&game);
        // Head at (10, 11): lower half of terminal row 9, columns 30-31
        assert_eq!(buffer[(30, 9)].bg, consts::COLLISION_COLOR);
        assert_eq!(buffer[(31, 9)].bg, consts::COLLISION_COLOR);
    }

    #[test]
    fn board_full() {
        let mut game = new_game(Globals::default());
        game.grid = Grid::new(2);
        game.snake.head = Cell::new(1, 1);
        game.snake.body = VecDeque::from([Cell::new(0, 1), Cell::new(0, 0)]);
        game.snake.direction = Direction::East;
        game.snake.next_direction = Direction::North;
        game.snake.growing = true;
        game.food = Some(Food {
            cell: Cell::new(1, 0),
        });
        game.step();
        assert_eq!(game.score, 1);
        assert_eq!(game.food, None);
        assert_eq!(
            game.state,
            GameState::Over(GameOver::new(Ending::BoardFull))
        );
        assert_eq!(game.globals.high_score, 1);
    }

    #[test]
    fn turn_keys() {
        let mut game = new_game(Globals::default());
        assert!(game.handle_event(key(KeyCode::Char('w')), AREA).is_none());
        assert_eq!(game.snake.next_direction, Direction::North);
        assert!(game.handle_event(key(KeyCode::Char('h')), AREA).is_none());
        assert_eq!(
            game.snake.next_direction,
            Direction::North,
            "west is the reverse of the committed direction"
        );
        game.step();
        assert_eq!(game.snake.head(), Cell::new(6, 8));
    }

    #[test]
    fn esc_leaves_high_score_alone() {
        let globals = Globals {
            difficulty: Difficulty::Beginner,
            high_score: 5,
        };
        let mut game = new_game(globals);
        game.score = 9;
        let Some(Transition::Goto(Screen::MainMenu(menu))) =
            game.handle_event(key(KeyCode::Esc), AREA)
        else {
            panic!("Esc did not return to the main menu");
        };
        assert_eq!(menu, MainMenu::new(globals));
    }

    #[test]
    fn pause_and_resume() {
        let mut game = new_game(Globals::default());
        assert!(game.handle_event(key(KeyCode::Char('p')), AREA).is_none());
        assert_eq!(game.state, GameState::Paused(Paused::new()));
        assert!(!game.gate.running());
        game.step();
        assert_eq!(game.snake.head(), Cell::new(6, 9), "paused snake stays put");

        let buffer = render(&game);
        assert_eq!(span_text(&buffer, 9, 29..51), "┌────── PAUSED ──────┐");
        assert_eq!(span_text(&buffer, 10, 29..51), "│  [Resume (p)]      │");

        assert!(game.handle_event(key(KeyCode::Char('p')), AREA).is_none());
        assert!(game.running());
        assert!(game.gate.running());
    }

    #[test]
    fn focus_lost_pauses() {
        let mut game = new_game(Globals::default());
        assert!(game.handle_event(Event::FocusLost, AREA).is_none());
        assert!(matches!(game.state, GameState::Paused(_)));
        assert!(game.handle_event(Event::FocusGained, AREA).is_none());
        assert!(matches!(game.state, GameState::Paused(_)));
    }

    #[test]
    fn restart_keeps_difficulty() {
        let globals = Globals {
            difficulty: Difficulty::Advanced,
            high_score: 2,
        };
        let mut game = new_game(globals);
        assert_eq!(game.gate.interval(), Duration::from_millis(80));
        game.score = 4;
        game.end(Ending::Collision);
        let Some(Transition::Goto(Screen::Game(next))) =
            game.handle_event(key(KeyCode::Char('r')), AREA)
        else {
            panic!("'r' did not restart the game");
        };
        assert_eq!(next.score, 0);
        assert_eq!(next.snake, Snake::new());
        assert_eq!(next.gate.interval(), Duration::from_millis(80));
        assert_eq!(
            next.globals,
            Globals {
                difficulty: Difficulty::Advanced,
                high_score: 4,
            }
        );
    }

    #[test]
    fn restart_from_pause_menu() {
        let mut game = new_game(Globals::default());
        game.score = 2;
        assert!(game.handle_event(key(KeyCode::Char(' ')), AREA).is_none());
        let Some(Transition::Goto(Screen::Game(next))) =
            game.handle_event(key(KeyCode::Char('r')), AREA)
        else {
            panic!("'r' did not restart the game");
        };
        assert_eq!(next.score, 0);
        assert_eq!(next.globals.high_score, 0, "abandoned runs don't count");
    }

    #[test]
    fn quit_while_running() {
        let mut game = new_game(Globals::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            game.handle_event(Event::Key(ctrl_c), AREA),
            Some(Transition::Quit)
        ));
        let mut game = new_game(Globals::default());
        assert!(matches!(
            game.handle_event(key(KeyCode::Char('q')), AREA),
            Some(Transition::Quit)
        ));
    }

    /// Turn towards the food most of the time, otherwise in a random
    /// direction
    fn steer(game: &mut Game<ChaCha12Rng>, turns: &mut ChaCha12Rng) {
        let head = game.snake.head();
        let direction = match game.food {
            Some(food) if !turns.random_bool(0.25) => {
                match (food.cell.x.cmp(&head.x), food.cell.y.cmp(&head.y)) {
                    (Ordering::Greater, _) => Direction::East,
                    (Ordering::Less, _) => Direction::West,
                    (_, Ordering::Greater) => Direction::South,
                    _ => Direction::North,
                }
            }
            _ => [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ][turns.random_range(0..4)],
        };
        game.snake.turn(direction);
    }

    #[test]
    fn long_runs_keep_snake_consistent() {
        let mut turns = ChaCha12Rng::seed_from_u64(!RNG_SEED);
        for run in 0..40 {
            let rng = ChaCha12Rng::seed_from_u64(RNG_SEED + run);
            let mut game = Game::new_with_rng(Globals::default(), rng);
            for _ in 0..2000 {
                steer(&mut game, &mut turns);
                let len = game.snake.len();
                let growing = game.snake.growing;
                game.step();
                if !game.running() {
                    break;
                }
                let cells = game.snake.cells().collect::<HashSet<_>>();
                assert_eq!(cells.len(), game.snake.len(), "snake overlaps itself");
                assert_eq!(game.snake.len(), len + usize::from(growing));
                let food = game.food.unwrap();
                assert!(!game.snake.contains(food.cell), "food placed on snake");
            }
        }
    }

    #[test]
    fn screen_areas() {
        let areas = ScreenAreas::new(AREA);
        assert_eq!(areas.score, Rect::new(0, 0, 80, 1));
        assert_eq!(areas.board, Rect::new(9, 3, 62, 17));
        assert_eq!(areas.banner, Rect::new(0, 22, 80, 1));
        assert_eq!(areas.buttons, Rect::new(0, 23, 80, 1));
        assert_eq!(areas.popup, Rect::new(29, 9, 22, 6));
    }

    #[rstest]
    #[case(Cell::new(0, 0), (10, 4), true)]
    #[case(Cell::new(0, 1), (10, 4), false)]
    #[case(Cell::new(29, 29), (68, 18), false)]
    #[case(Cell::new(3, 6), (16, 7), true)]
    fn canvas_paint(#[case] cell: Cell, #[case] pos: (u16, u16), #[case] upper: bool) {
        let mut buffer = Buffer::empty(AREA);
        let mut canvas = Canvas {
            area: Rect::new(10, 4, 60, 15),
            buf: &mut buffer,
        };
        canvas.fill();
        canvas.paint(cell, Color::Red);
        let (x, y) = pos;
        for c in [&buffer[(x, y)], &buffer[(x + 1, y)]] {
            if upper {
                assert_eq!(c.fg, Color::Red);
                assert_eq!(c.bg, consts::FIELD_COLOR);
            } else {
                assert_eq!(c.fg, consts::FIELD_COLOR);
                assert_eq!(c.bg, Color::Red);
            }
        }
    }

    #[test]
    fn canvas_ignores_outside_cells() {
        let mut buffer = Buffer::empty(AREA);
        let mut canvas = Canvas {
            area: Rect::new(10, 4, 60, 15),
            buf: &mut buffer,
        };
        canvas.paint(Cell::new(-1, 3), Color::Red);
        canvas.paint(Cell::new(30, 3), Color::Red);
        canvas.paint(Cell::new(3, 30), Color::Red);
        assert_eq!(buffer, Buffer::empty(AREA));
    }
}
