use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const TEXT_WIDTH: u16 = 29;
    const SNAKE_BODY_LENGTH: u16 = 12;
    const SNAKE_FOOD_GUTTER: u16 = 2;
    const TEXT_HEIGHT: u16 = 5;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = Self::TEXT_WIDTH + 1;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::TEXT_HEIGHT as usize] = [
        " ████ █   █  ███  █   █ █████",
        "█     ██  █ █   █ █  █  █    ",
        " ███  █ █ █ █████ ███   ████ ",
        "    █ █  ██ █   █ █  █  █    ",
        "████  █   █ █   █ █   █ █████",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [words_area, _, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1, 1])
            .flex(Flex::Start)
            .areas(area);
        let [words_area] = Layout::horizontal([Self::TEXT_WIDTH])
            .flex(Flex::Start)
            .areas(words_area);
        Text::from_iter(Self::TEXT)
            .style(consts::SNAKE_STYLE)
            .render(words_area, buf);

        // A little snake about to eat its dinner
        let [diagram_area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(diagram_area);
        let [body, head, _, food] = Layout::horizontal([
            Constraint::Length(Self::SNAKE_BODY_LENGTH),
            Constraint::Length(1),
            Constraint::Length(Self::SNAKE_FOOD_GUTTER),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(diagram_area);
        fill(buf, body, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        fill(buf, head, consts::SNAKE_HEAD_EAST_SYMBOL, consts::SNAKE_STYLE);
        fill(buf, food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
    }
}

fn fill(buf: &mut Buffer, area: Rect, symbol: char, style: Style) {
    for p in area.positions() {
        if let Some(cell) = buf.cell_mut(p) {
            cell.set_char(symbol).set_style(style);
        }
    }
}

/// Key help shown on the main menu
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 7;
    pub(super) const WIDTH: u16 = 20;

    /// Column at which the keys start
    const KEY_COLUMN: usize = 8;

    /// Action label and space-separated keys for each row of key help
    const KEYS: [(&str, &str); 5] = [
        ("Steer:", "← ↓ ↑ →"),
        ("", "h j k l"),
        ("", "a s w d"),
        ("Pause:", "p"),
        ("Menu:", "Esc"),
    ];

    const TAGLINE: [&str; 2] = ["Eat food, dodge the", "walls and your tail."];

    fn text() -> Text<'static> {
        let mut text = Instructions::KEYS
            .into_iter()
            .map(|(action, keys)| {
                let mut line = Line::raw(format!("{action:<width$}", width = Self::KEY_COLUMN));
                for (i, key) in keys.split(' ').enumerate() {
                    if i > 0 {
                        line.push_span(" ");
                    }
                    line.push_span(Span::styled(key, consts::KEY_STYLE));
                }
                line
            })
            .collect::<Text<'static>>();
        text.extend(Instructions::TAGLINE.map(Line::raw));
        text
    }
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Instructions::text().render(area, buf);
    }
}
