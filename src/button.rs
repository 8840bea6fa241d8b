use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// A clickable one-line label of the form `[Label (key)]`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Button {
    label: &'static str,
    key: &'static str,
    selected: bool,
}

impl Button {
    pub(crate) fn new(label: &'static str, key: &'static str) -> Button {
        Button {
            label,
            key,
            selected: false,
        }
    }

    pub(crate) fn selected(mut self, selected: bool) -> Button {
        self.selected = selected;
        self
    }

    /// Number of columns the button occupies
    pub(crate) fn width(&self) -> u16 {
        u16::try_from(self.to_line().width()).unwrap_or(u16::MAX)
    }

    /// Return a rectangle exactly as wide as the button, centered
    /// horizontally in `row`
    pub(crate) fn center_in(&self, row: Rect) -> Rect {
        let [area] = Layout::horizontal([self.width()])
            .flex(Flex::Center)
            .areas(row);
        area
    }

    fn to_line(self) -> Line<'static> {
        let style = if self.selected {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[", style),
            Span::styled(self.label, style),
            Span::styled(" (", style),
            Span::styled(self.key, consts::KEY_STYLE.patch(style)),
            Span::styled(")]", style),
        ])
    }
}

impl Widget for Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_line().render(area, buf);
    }
}
