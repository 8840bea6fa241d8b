//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of cells along each side of the (square) playing field
pub(crate) const GRID_COUNT: i32 = 30;

/// Number of terminal columns used to draw one grid cell.  Terminal cells are
/// roughly twice as tall as they are wide, and each terminal row holds two
/// grid rows (see [`HALF_BLOCK_SYMBOL`]), so this keeps the cells square.
pub(crate) const CELL_WIDTH: u16 = 2;

/// The cells occupied by a fresh snake, head first
pub(crate) const INITIAL_SNAKE: [(i32, i32); 3] = [(6, 9), (5, 9), (4, 9)];

/// How many random cells to try when placing food before falling back to
/// picking from an enumeration of all free cells
pub(crate) const MAX_FOOD_SAMPLES: usize = 64;

/// Glyph used to draw two vertically-stacked grid cells in one terminal cell:
/// the foreground color paints the upper cell, the background the lower.
pub(crate) const HALF_BLOCK_SYMBOL: &str = "▀";

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Color of empty grid cells
pub(crate) const FIELD_COLOR: Color = Color::Rgb(173, 204, 98);

/// Color of the snake's body
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(20, 160, 133);

/// Color of the snake's head
pub(crate) const SNAKE_HEAD_COLOR: Color = Color::Rgb(10, 100, 80);

/// Color of the food
pub(crate) const FOOD_COLOR: Color = Color::Rgb(230, 41, 55);

/// Color of the cell where the snake crashed
pub(crate) const COLLISION_COLOR: Color = Color::Rgb(255, 255, 255);

/// Style for the snake in the logo
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food in the logo
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for the "GAME OVER"/"BOARD CLEARED" banner
pub(crate) const BANNER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
