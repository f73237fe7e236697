//! Sovereign Chess piece colors and players.

use std::fmt;
use std::ops::Not;

/// One of the twelve piece colors. Two are owned by the players at the
/// start; the other ten begin neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    Ash = 0,
    Black = 1,
    Cyan = 2,
    Green = 3,
    Navy = 4,
    Orange = 5,
    Pink = 6,
    Red = 7,
    Slate = 8,
    Violet = 9,
    White = 10,
    Yellow = 11,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 12;

    /// All colors in index (alphabetical) order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Ash,
        Color::Black,
        Color::Cyan,
        Color::Green,
        Color::Navy,
        Color::Orange,
        Color::Pink,
        Color::Red,
        Color::Slate,
        Color::Violet,
        Color::White,
        Color::Yellow,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// FEN letter for this color.
    pub const fn letter(self) -> char {
        match self {
            Color::Ash => 'a',
            Color::Black => 'b',
            Color::Cyan => 'c',
            Color::Green => 'g',
            Color::Navy => 'n',
            Color::Orange => 'o',
            Color::Pink => 'p',
            Color::Red => 'r',
            Color::Slate => 's',
            Color::Violet => 'v',
            Color::White => 'w',
            Color::Yellow => 'y',
        }
    }

    /// Parse a FEN color letter. Case-sensitive: only lowercase is accepted.
    pub fn from_letter(c: char) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.letter() == c)
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Ash => "ash",
            Color::Black => "black",
            Color::Cyan => "cyan",
            Color::Green => "green",
            Color::Navy => "navy",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::Slate => "slate",
            Color::Violet => "violet",
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Player1 = 0,
    Player2 = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other player.
    #[inline]
    pub const fn flip(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.flip()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => write!(f, "p1"),
            Player::Player2 => write!(f, "p2"),
        }
    }
}
