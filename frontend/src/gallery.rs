use crate::catalog::{position_of, CatalogEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailCommand {
    Next,
    Prev,
    Close,
}

impl DetailCommand {
    /// Maps a `KeyboardEvent::key()` value to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(DetailCommand::Next),
            "ArrowLeft" => Some(DetailCommand::Prev),
            "Escape" => Some(DetailCommand::Close),
            _ => None,
        }
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

/// Which entry, if any, the detail modal is showing.
///
/// The view only stores an index into a fixed list, so it is `Copy` and can
/// live directly inside a `use_state`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DetailView {
    open: Option<usize>,
}

impl DetailView {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.open
    }

    pub fn current<'a, T: CatalogEntry>(&self, entries: &'a [T]) -> Option<&'a T> {
        self.open.and_then(|index| entries.get(index))
    }

    /// Opens the entry with `id`. Unknown ids leave the view unchanged.
    pub fn open<T: CatalogEntry>(self, entries: &[T], id: &str) -> Self {
        match position_of(entries, id) {
            Some(index) => Self { open: Some(index) },
            None => self,
        }
    }

    pub fn close(self) -> Self {
        Self::closed()
    }

    pub fn next(self, len: usize) -> Self {
        self.step(len, next_index)
    }

    pub fn prev(self, len: usize) -> Self {
        self.step(len, prev_index)
    }

    pub fn apply(self, command: DetailCommand, len: usize) -> Self {
        match command {
            DetailCommand::Next => self.next(len),
            DetailCommand::Prev => self.prev(len),
            DetailCommand::Close => self.close(),
        }
    }

    fn step(self, len: usize, f: fn(usize, usize) -> usize) -> Self {
        match self.open {
            Some(index) if len > 0 => Self {
                open: Some(f(index, len)),
            },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COURSES, LINEUP};

    #[test]
    fn next_and_prev_wrap_around() {
        for len in 1..8 {
            for i in 0..len {
                assert_eq!(next_index(i, len), (i + 1) % len);
                assert_eq!(prev_index(i, len), (i + len - 1) % len);
            }
        }
        assert_eq!(prev_index(0, 6), 5);
        assert_eq!(next_index(5, 6), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let len = COURSES.len();
        for start in COURSES {
            let opened = DetailView::closed().open(COURSES, start.id);
            let mut view = opened;
            for _ in 0..len {
                view = view.next(len);
            }
            assert_eq!(view, opened);

            let mut view = opened;
            for _ in 0..len - 1 {
                view = view.next(len);
            }
            assert_eq!(view.next(len), opened);
        }
    }

    #[test]
    fn prev_then_next_is_identity() {
        let len = LINEUP.len();
        let view = DetailView::closed().open(LINEUP, "1");
        assert_eq!(view.prev(len).index(), Some(len - 1));
        assert_eq!(view.prev(len).next(len), view);
    }

    #[test]
    fn every_close_path_clears_the_view() {
        let len = COURSES.len();
        let opened = DetailView::closed().open(COURSES, "2");
        assert_eq!(opened.current(COURSES).map(|c| c.title), Some("Generative Design Systems"));

        let key = DetailCommand::from_key("Escape").unwrap();
        assert!(!opened.apply(key, len).is_open());
        assert!(!opened.close().is_open());
        assert!(!opened.close().close().is_open());
    }

    #[test]
    fn navigation_is_a_noop_while_closed() {
        let view = DetailView::closed();
        assert_eq!(view.next(6), view);
        assert_eq!(view.prev(6), view);
        assert_eq!(view.current(COURSES), None);
    }

    #[test]
    fn unknown_id_does_not_open() {
        let view = DetailView::closed().open(COURSES, "42");
        assert!(!view.is_open());
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(DetailCommand::from_key("ArrowRight"), Some(DetailCommand::Next));
        assert_eq!(DetailCommand::from_key("ArrowLeft"), Some(DetailCommand::Prev));
        assert_eq!(DetailCommand::from_key("Escape"), Some(DetailCommand::Close));
        assert_eq!(DetailCommand::from_key("Enter"), None);
    }
}
