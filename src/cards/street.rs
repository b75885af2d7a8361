/// The four stages of a Hold'em deal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// the street a board of this size belongs to, if any
    pub const fn of(board: usize) -> Option<Self> {
        match board {
            0 => Some(Self::Pref),
            3 => Some(Self::Flop),
            4 => Some(Self::Turn),
            5 => Some(Self::Rive),
            _ => None,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
