//! Seat identification and per-seat data storage.
//!
//! A match has exactly two fixed seats. `Seat` is a closed enum rather
//! than a numeric ID so that seat handling is exhaustive at compile time.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by a fixed `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two fixed player slots in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Seat 0 (the human seat in the default configuration).
    Player0,
    /// Seat 1 (the AI seat in the default configuration).
    Player1,
}

impl Seat {
    /// Both seats, in index order.
    pub const ALL: [Seat; 2] = [Seat::Player0, Seat::Player1];

    /// Get the raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player0 => 0,
            Seat::Player1 => 1,
        }
    }

    /// Get the other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Player0 => Seat::Player1,
            Seat::Player1 => Seat::Player0,
        }
    }

    /// Build a seat from a raw index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Seat> {
        match index {
            0 => Some(Seat::Player0),
            1 => Some(Seat::Player1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.index())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use card_battle::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<i32> = SeatMap::with_value(0);
/// scores[Seat::Player1] = 12;
///
/// assert_eq!(scores[Seat::Player0], 0);
/// assert_eq!(scores[Seat::Player1], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Player0), factory(Seat::Player1)],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
