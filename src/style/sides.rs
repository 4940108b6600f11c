use thiserror::Error;

/// Raised when a side list does not have 0 to 4 tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("side list must have 1 to 4 values, got {0}")]
    InvalidSideCount(usize),
}

/// Four independently valued rectangle edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> BoxSides<T> {
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Top and bottom share `y`, left and right share `x`.
    pub const fn xy(y: T, x: T) -> Self {
        Self::new(y, x, y, x)
    }

    /// Expands a CSS-style shorthand list.
    ///
    /// 1 value sets every side, 2 are `(top=bottom, left=right)`, 3 are
    /// `(top, left=right, bottom)` and 4 are `(top, right, bottom, left)`.
    /// An empty list yields `T::default()` on every side.
    pub fn from_shorthand(values: &[T]) -> Result<Self, ShapeError>
    where
        T: Default,
    {
        match *values {
            [] => Ok(Self::default()),
            [all] => Ok(Self::uniform(all)),
            [y, x] => Ok(Self::xy(y, x)),
            [top, x, bottom] => Ok(Self::new(top, x, bottom, x)),
            [top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(ShapeError::InvalidSideCount(values.len())),
        }
    }

    pub fn map<U: Copy>(self, mut f: impl FnMut(T) -> U) -> BoxSides<U> {
        BoxSides {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }

    pub fn zip<U: Copy, R: Copy>(self, other: BoxSides<U>, mut f: impl FnMut(T, U) -> R) -> BoxSides<R> {
        BoxSides {
            top: f(self.top, other.top),
            right: f(self.right, other.right),
            bottom: f(self.bottom, other.bottom),
            left: f(self.left, other.left),
        }
    }
}

impl BoxSides<f32> {
    pub const ZERO: Self = Self::uniform(0.0);

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
