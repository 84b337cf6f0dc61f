//! Selection cache for the currently selected piece

use crate::game::types::Square;

/// A highlighted destination for the selected piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
    pub to: Square,
    /// The destination was occupied when the selection was made
    pub is_capture: bool,
}

/// Currently selected square and its cached legal destinations
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_position: Option<Square>,
    pub possible_moves: Vec<MoveTarget>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected_position = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_position.is_some()
    }

    /// Whether `(from, to)` is in the cached legal set
    pub fn allows(&self, from: Square, to: Square) -> bool {
        self.selected_position == Some(from) && self.possible_moves.iter().any(|t| t.to == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clear() {
        let a = Square::new(6, 4).unwrap();
        let b = Square::new(4, 4).unwrap();
        let mut selection = Selection {
            selected_position: Some(a),
            possible_moves: vec![MoveTarget { to: b, is_capture: false }],
        };
        assert!(selection.is_selected());
        assert!(selection.allows(a, b));
        assert!(!selection.allows(b, a));

        selection.clear();
        assert!(!selection.is_selected());
        assert!(selection.possible_moves.is_empty());
        assert!(!selection.allows(a, b));
    }
}
