//! Keyboard shortcuts for stepping between pages.

/// Direction of a keyboard step through [`PageId::ALL`](crate::PageId::ALL).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The parts of a key event the router cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub alt: bool,
    pub key: String,
}

impl KeyChord {
    pub fn new(alt: bool, key: impl Into<String>) -> Self {
        Self {
            alt,
            key: key.into(),
        }
    }

    /// `Alt+ArrowLeft` / `Alt+ArrowRight`; everything else maps to nothing.
    pub fn direction(&self) -> Option<Direction> {
        if !self.alt {
            return None;
        }
        match self.key.as_str() {
            "ArrowLeft" => Some(Direction::Previous),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_arrows_map_to_directions() {
        assert_eq!(KeyChord::new(true, "ArrowLeft").direction(), Some(Direction::Previous));
        assert_eq!(KeyChord::new(true, "ArrowRight").direction(), Some(Direction::Next));
    }

    #[test]
    fn other_chords_are_ignored() {
        assert_eq!(KeyChord::new(false, "ArrowRight").direction(), None);
        assert_eq!(KeyChord::new(true, "ArrowUp").direction(), None);
        assert_eq!(KeyChord::new(true, "a").direction(), None);
    }
}
