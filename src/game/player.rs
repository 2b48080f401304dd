use super::board::Cell;

/// One of the two sides. Yellow is the human-driven side and moves first;
/// Red is the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Yellow,
    Red,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Yellow => Player::Red,
            Player::Red => Player::Yellow,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Yellow => "Yellow",
            Player::Red => "Red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Yellow.other(), Player::Red);
        assert_eq!(Player::Red.other(), Player::Yellow);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Yellow.to_cell(), Cell::Occupied(Player::Yellow));
        assert_eq!(Player::Red.to_cell(), Cell::Occupied(Player::Red));
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Yellow.name(), "Yellow");
        assert_eq!(Player::Red.name(), "Red");
    }
}
