/// Number of pads on the board.
pub const BUTTON_COUNT: usize = 4;

/// One of the four coloured pads. The discriminant is the pad's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Green = 0,
    Red = 1,
    Yellow = 2,
    Blue = 3,
}

impl Button {
    /// All pads in index order.
    pub const ALL: [Button; BUTTON_COUNT] = [Button::Green, Button::Red, Button::Yellow, Button::Blue];

    /// Look up a pad by index, rejecting anything outside `0..BUTTON_COUNT`.
    pub fn from_index(index: usize) -> Option<Button> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Get pad name for display
    pub fn name(self) -> &'static str {
        match self {
            Button::Green => "Green",
            Button::Red => "Red",
            Button::Yellow => "Yellow",
            Button::Blue => "Blue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_matches_index() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(Button::from_index(i), Some(*button));
            assert_eq!(button.index(), i);
        }
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert_eq!(Button::from_index(BUTTON_COUNT), None);
        assert_eq!(Button::from_index(usize::MAX), None);
    }

    #[test]
    fn test_button_name() {
        assert_eq!(Button::Green.name(), "Green");
        assert_eq!(Button::Blue.name(), "Blue");
    }
}
