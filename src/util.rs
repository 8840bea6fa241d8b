use crate::consts;
use crate::difficulty::Difficulty;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// State that outlives any single screen: it is handed from screen to screen
/// on every transition.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    /// The most recently chosen difficulty
    pub(crate) difficulty: Difficulty,

    /// The best final score of any run since the program started
    pub(crate) high_score: u32,
}

impl Globals {
    /// Record the final score of a run, raising the high score if it was
    /// beaten
    pub(crate) fn record_score(&mut self, score: u32) {
        self.high_score = self.high_score.max(score);
    }
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size centered within `area`, shrunk to fit
/// if `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Ordered navigation over the variants of a fieldless enum
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}
