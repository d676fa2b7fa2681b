//! A fixed-size set of grid cells packed into an unsigned integer.
//!
//! Cells are addressed by their row-major index `0..N*N`, the same indexing
//! used by [`Grid`](crate::Grid). The type is `no_std` friendly and never
//! allocates.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Cell index is outside `0..N*N`.
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

/// A set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create an empty set.
    ///
    /// # Panics
    /// If N*N exceeds the bit width of `T`; use [`try_new`](Self::try_new)
    /// to get an error instead.
    #[inline]
    pub fn new() -> Self {
        assert!(
            Self::BOARD_BITS <= mem::size_of::<T>() * 8,
            "BitBoard of {}x{} does not fit the backing integer",
            N,
            N
        );
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Out-of-range indices are never members.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < Self::BOARD_BITS && ((self.bits >> index) & T::one()) != T::zero()
    }

    /// Adds `index` to the set.
    pub fn set(&mut self, index: usize) -> Result<(), BitBoardError> {
        self.check_bounds(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    /// Removes `index` from the set.
    pub fn clear(&mut self, index: usize) -> Result<(), BitBoardError> {
        self.check_bounds(index)?;
        self.bits = self.bits & !(T::one() << index);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, index: usize) -> Result<(), BitBoardError> {
        if index >= Self::BOARD_BITS {
            Err(BitBoardError::IndexOutOfBounds { index })
        } else {
            Ok(())
        }
    }

    /// Builds a set from cell indices.
    pub fn from_indices<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut board = Self::new();
        for index in iter {
            board.set(index)?;
        }
        Ok(board)
    }

    /// Member indices in ascending (row-major) order.
    #[inline]
    pub fn iter(&self) -> Indices<'_, T, N> {
        Indices { board: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(r * N + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the member indices of a bitboard.
#[derive(Clone, Copy)]
pub struct Indices<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Indices<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if self.board.contains(idx) {
                return Some(idx);
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits & rhs.bits }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard { bits: self.bits | rhs.bits }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard { bits: !self.bits & Self::mask() }
    }
}
