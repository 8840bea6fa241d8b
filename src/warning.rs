use crate::button::Button;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Layout, Rect, Size},
    text::Line,
    widgets::{Block, Clear, Padding, Widget},
};
use std::borrow::Cow;
use std::error::Error;

/// A dismissable pop-up describing a problem that didn't stop the program
/// from starting, such as a broken configuration file
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: usize = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    /// Describe `err` and its chain of sources under the headline `context`
    pub(crate) fn new<E: Error>(context: &str, err: &E) -> Warning {
        let width = usize::from(Warning::TEXT_WIDTH);
        let plain = textwrap::Options::new(width).break_words(true);
        let bullet = plain.clone().initial_indent("  - ").subsequent_indent("    ");
        let mut lines = Vec::new();
        push_wrapped(&mut lines, context, &plain);
        lines.extend([String::new(), String::from("Caused by:")]);
        let mut cause: Option<&dyn Error> = Some(err);
        while let Some(e) = cause {
            push_wrapped(&mut lines, &e.to_string(), &bullet);
            cause = e.source();
        }
        if lines.len() > Warning::MAX_LINES {
            lines.truncate(Warning::MAX_LINES - 1);
            lines.push(String::from("    …"));
        }
        Warning { lines }
    }
}

fn push_wrapped(lines: &mut Vec<String>, text: &str, opts: &textwrap::Options<'_>) {
    lines.extend(textwrap::wrap(text, opts).into_iter().map(Cow::into_owned));
}

impl Widget for &Warning {
    // `area` is the whole frame; the pop-up centers itself within it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_height = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        // borders + spacer + OK row
        let size = Size::new(Warning::WIDTH, text_height.saturating_add(4));
        let popup = center_rect(area, size);
        let frame = Block::bordered()
            .title_top(Line::from(" WARNING ").centered())
            .padding(Padding::horizontal(1));
        let [body, _, ok_row] = Layout::vertical([text_height, 1, 1]).areas(frame.inner(popup));
        Clear.render(popup, buf);
        frame.render(popup, buf);
        for (line, row) in self.lines.iter().zip(body.rows()) {
            Line::raw(line.as_str()).render(row, buf);
        }
        let ok = Button::new("OK", "Enter");
        ok.render(ok.center_in(ok_row), buf);
    }
}
