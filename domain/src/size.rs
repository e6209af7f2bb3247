use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeSet, btree_set};
use std::{fmt, str::FromStr};

use crate::error::{DomainError, DomainResult};

/// Pixel dimensions of one icon frame.
///
/// Sizes order by area first, then width, then height. Both dimensions are
/// always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> DomainResult<Self> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidSizeSpec(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Distance from square; zero for square frames.
    #[must_use]
    pub fn skew(&self) -> u32 {
        self.width.abs_diff(self.height)
    }

    /// True when both dimensions are at least those of `other`.
    #[must_use]
    pub fn covers(&self, other: &Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    fn area_key(&self) -> (u64, u32, u32) {
        (self.area(), self.width, self.height)
    }
}

impl Ord for Size {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area_key().cmp(&other.area_key())
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = DomainError;

    /// Accepts `N` (square) or `WxH`, with `x` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let parts: Vec<&str> = lowered.split('x').collect();

        let (width, height) = match parts.as_slice() {
            [side] => {
                let side = parse_dimension(side, s)?;
                (side, side)
            }
            [width, height] => (parse_dimension(width, s)?, parse_dimension(height, s)?),
            _ => {
                return Err(DomainError::InvalidSizeSpec(format!(
                    "expected N or WxH, got '{s}'"
                )));
            }
        };

        if width <= 0 || height <= 0 {
            return Err(DomainError::InvalidSizeSpec(format!(
                "dimensions must be positive, got '{s}'"
            )));
        }

        let width = u32::try_from(width)
            .map_err(|_| DomainError::InvalidSizeSpec(format!("width out of range in '{s}'")))?;
        let height = u32::try_from(height)
            .map_err(|_| DomainError::InvalidSizeSpec(format!("height out of range in '{s}'")))?;

        Size::new(width, height)
    }
}

fn parse_dimension(part: &str, original: &str) -> DomainResult<i64> {
    part.trim().parse::<i64>().map_err(|e| {
        DomainError::InvalidSizeSpec(format!("invalid dimension '{part}' in '{original}': {e}"))
    })
}

/// The distinct frame sizes an icon container offers.
///
/// Iteration is ascending by area, width, height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableSizes {
    sizes: BTreeSet<Size>,
}

impl AvailableSizes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, size: &Size) -> bool {
        self.sizes.contains(size)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Largest by area, ties broken by width then height.
    #[must_use]
    pub fn largest(&self) -> Option<Size> {
        self.sizes.last().copied()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Size> {
        self.sizes.iter()
    }
}

impl FromIterator<Size> for AvailableSizes {
    fn from_iter<I: IntoIterator<Item = Size>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AvailableSizes {
    type Item = &'a Size;
    type IntoIter = btree_set::Iter<'a, Size>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter()
    }
}
