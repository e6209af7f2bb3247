use serde::Serialize;
use std::collections::HashMap;

use crate::color::RgbaColor;

/// A maximal horizontal span of same-color solid pixels on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Run {
    pub row: u32,
    pub start_column: u32,
    pub end_column_inclusive: u32,
}

impl Run {
    #[must_use]
    pub fn new(row: u32, start_column: u32, end_column_inclusive: u32) -> Self {
        debug_assert!(start_column <= end_column_inclusive);
        Self {
            row,
            start_column,
            end_column_inclusive,
        }
    }

    /// Exclusive right edge in pixel-grid coordinates.
    #[must_use]
    pub fn end_column_exclusive(&self) -> u32 {
        self.end_column_inclusive + 1
    }

    #[must_use]
    pub fn pixel_count(&self) -> u32 {
        self.end_column_inclusive - self.start_column + 1
    }

    pub fn columns(&self) -> impl Iterator<Item = u32> {
        self.start_column..=self.end_column_inclusive
    }
}

/// Runs grouped by opaque color.
///
/// Colors keep the order in which they were first seen and each color's runs
/// keep scan order (row-major, left to right).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRunTable {
    entries: Vec<(RgbaColor, Vec<Run>)>,
    index: HashMap<RgbaColor, usize>,
}

impl ColorRunTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, color: RgbaColor, run: Run) {
        if let Some(runs) = self
            .index
            .get(&color)
            .and_then(|&slot| self.entries.get_mut(slot))
            .map(|(_, runs)| runs)
        {
            runs.push(run);
            return;
        }

        self.index.insert(color, self.entries.len());
        self.entries.push((color, vec![run]));
    }

    #[must_use]
    pub fn runs_for(&self, color: &RgbaColor) -> Option<&[Run]> {
        self.index
            .get(color)
            .and_then(|&slot| self.entries.get(slot))
            .map(|(_, runs)| runs.as_slice())
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn run_count(&self) -> usize {
        self.entries.iter().map(|(_, runs)| runs.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RgbaColor, &[Run])> {
        self.entries
            .iter()
            .map(|(color, runs)| (color, runs.as_slice()))
    }

    pub fn colors(&self) -> impl Iterator<Item = &RgbaColor> {
        self.entries.iter().map(|(color, _)| color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_geometry() {
        let run = Run::new(2, 1, 4);
        assert_eq!(run.pixel_count(), 4);
        assert_eq!(run.end_column_exclusive(), 5);
        assert_eq!(run.columns().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn table_keeps_first_seen_color_order_and_run_order() {
        let red = RgbaColor::rgb(255, 0, 0);
        let blue = RgbaColor::rgb(0, 0, 255);
        let mut table = ColorRunTable::new();
        table.push(blue, Run::new(0, 0, 0));
        table.push(red, Run::new(0, 1, 2));
        table.push(blue, Run::new(1, 0, 2));

        assert_eq!(table.len(), 2);
        assert_eq!(table.run_count(), 3);
        assert_eq!(table.colors().copied().collect::<Vec<_>>(), vec![blue, red]);
        assert_eq!(
            table.runs_for(&blue),
            Some([Run::new(0, 0, 0), Run::new(1, 0, 2)].as_slice())
        );
        assert_eq!(table.runs_for(&RgbaColor::rgb(1, 2, 3)), None);
    }

    #[test]
    fn empty_table() {
        let table = ColorRunTable::new();
        assert!(table.is_empty());
        assert_eq!(table.run_count(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
