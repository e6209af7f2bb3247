use domain::bitmap::Bitmap;
use domain::color::RgbaColor;
use domain::runs::{ColorRunTable, Run};

/// Run accumulator state while walking one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Open { color: RgbaColor, start: u32 },
}

/// Splits `bitmap` into horizontal single-color runs.
///
/// Pixels with alpha below `alpha_threshold` are transparent and break runs.
/// Every other pixel counts as fully opaque, so colors that differ only in
/// alpha share a run.
pub fn vectorize(bitmap: &Bitmap, alpha_threshold: u8) -> ColorRunTable {
    let mut table = ColorRunTable::new();

    for row in 0..bitmap.height() {
        let mut state = RunState::Idle;

        for (column, pixel) in (0u32..).zip(bitmap.row(row)) {
            state = if pixel.a < alpha_threshold {
                close(&mut table, state, row, column);
                RunState::Idle
            } else {
                let color = pixel.opaque();
                match state {
                    RunState::Open { color: open, .. } if open == color => state,
                    RunState::Open { .. } => {
                        close(&mut table, state, row, column);
                        RunState::Open {
                            color,
                            start: column,
                        }
                    }
                    RunState::Idle => RunState::Open {
                        color,
                        start: column,
                    },
                }
            };
        }

        close(&mut table, state, row, bitmap.width());
    }

    table
}

/// Records an open run ending just before `column`.
fn close(table: &mut ColorRunTable, state: RunState, row: u32, column: u32) {
    if let RunState::Open { color, start } = state {
        table.push(color, Run::new(row, start, column - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const RED: RgbaColor = RgbaColor::rgb(255, 0, 0);
    const GREEN: RgbaColor = RgbaColor::rgb(0, 255, 0);

    #[test]
    fn solid_bitmap_yields_one_run_per_row() {
        let bitmap = Bitmap::filled(4, 2, RED);
        let table = vectorize(&bitmap, 128);

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.runs_for(&RED),
            Some([Run::new(0, 0, 3), Run::new(1, 0, 3)].as_slice())
        );
    }

    #[test]
    fn row_coverage_for_any_solid_size() {
        let bitmap = Bitmap::filled(7, 5, GREEN);
        let runs = vectorize(&bitmap, 16).runs_for(&GREEN).unwrap().to_vec();
        let expected: Vec<Run> = (0..5).map(|row| Run::new(row, 0, 6)).collect();
        assert_eq!(runs, expected);
    }

    #[test]
    fn fully_transparent_bitmap_is_empty() {
        let bitmap = Bitmap::filled(4, 1, RgbaColor::new(255, 0, 0, 0));
        assert!(vectorize(&bitmap, 128).is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let bitmap = Bitmap::filled(2, 1, RgbaColor::new(255, 0, 0, 100));
        assert!(vectorize(&bitmap, 128).is_empty());
        assert_eq!(vectorize(&bitmap, 100).len(), 1);
        assert_eq!(vectorize(&bitmap, 50).runs_for(&RED), Some([Run::new(0, 0, 1)].as_slice()));
    }

    #[test]
    fn zero_threshold_keeps_every_pixel() {
        let bitmap = Bitmap::filled(3, 1, RgbaColor::new(9, 9, 9, 0));
        assert_eq!(vectorize(&bitmap, 0).run_count(), 1);
    }

    #[test]
    fn color_change_splits_runs() {
        let bitmap = Bitmap::filled(4, 1, RED)
            .with_pixel(2, 0, GREEN)
            .with_pixel(3, 0, GREEN);
        let table = vectorize(&bitmap, 128);

        assert_eq!(table.colors().copied().collect::<Vec<_>>(), vec![RED, GREEN]);
        assert_eq!(table.runs_for(&RED), Some([Run::new(0, 0, 1)].as_slice()));
        assert_eq!(table.runs_for(&GREEN), Some([Run::new(0, 2, 3)].as_slice()));
    }

    #[test]
    fn transparent_gap_splits_same_color() {
        let bitmap = Bitmap::filled(5, 1, RED).with_pixel(2, 0, RgbaColor::new(0, 0, 0, 0));
        let table = vectorize(&bitmap, 128);
        assert_eq!(
            table.runs_for(&RED),
            Some([Run::new(0, 0, 1), Run::new(0, 3, 4)].as_slice())
        );
    }

    #[test]
    fn alpha_differences_above_threshold_merge() {
        let bitmap = Bitmap::filled(3, 1, RgbaColor::new(255, 0, 0, 200))
            .with_pixel(1, 0, RgbaColor::new(255, 0, 0, 255));
        let table = vectorize(&bitmap, 128);
        assert_eq!(table.runs_for(&RED), Some([Run::new(0, 0, 2)].as_slice()));
    }

    #[test]
    fn distinct_pixels_yield_unit_runs() {
        let mut bitmap = Bitmap::filled(3, 2, RED);
        for y in 0..2 {
            for x in 0..3 {
                bitmap = bitmap.with_pixel(x, y, RgbaColor::rgb(x as u8, y as u8, 7));
            }
        }
        let table = vectorize(&bitmap, 1);
        assert_eq!(table.len(), 6);
        assert_eq!(table.run_count(), 6);
        assert!(
            table
                .iter()
                .all(|(_, runs)| runs.iter().all(|run| run.pixel_count() == 1))
        );
    }

    #[test]
    fn runs_follow_scan_order() {
        let bitmap = Bitmap::filled(3, 2, RED).with_pixel(1, 0, GREEN).with_pixel(0, 1, GREEN);
        let table = vectorize(&bitmap, 128);
        assert_eq!(
            table.runs_for(&RED),
            Some([Run::new(0, 0, 0), Run::new(0, 2, 2), Run::new(1, 1, 2)].as_slice())
        );
    }

    fn arb_bitmap() -> impl Strategy<Value = Bitmap> {
        (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
            // A small palette so that neighbouring pixels often match.
            let pixel = (0u8..3, prop::sample::select(vec![0u8, 60, 128, 255]))
                .prop_map(|(shade, alpha)| [shade * 100, 0, 255 - shade * 100, alpha]);
            prop::collection::vec(pixel, (w * h) as usize).prop_map(move |pixels| {
                Bitmap::from_rgba_bytes(w, h, pixels.concat()).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn runs_partition_solid_pixels(bitmap in arb_bitmap(), threshold in any::<u8>()) {
            let table = vectorize(&bitmap, threshold);

            let mut covered = HashSet::new();
            for (color, runs) in table.iter() {
                prop_assert_eq!(color.a, 255);
                for run in runs {
                    prop_assert!(run.start_column <= run.end_column_inclusive);
                    for column in run.columns() {
                        prop_assert!(covered.insert((column, run.row)), "pixel covered twice");
                        let pixel = bitmap.pixel(column, run.row).unwrap();
                        prop_assert_eq!(pixel.opaque(), *color);
                    }
                }
            }

            let solid: HashSet<(u32, u32)> = (0..bitmap.height())
                .flat_map(|y| (0..bitmap.width()).map(move |x| (x, y)))
                .filter(|&(x, y)| bitmap.pixel(x, y).is_some_and(|p| p.a >= threshold))
                .collect();
            prop_assert_eq!(covered, solid);
        }

        #[test]
        fn same_color_runs_never_touch(bitmap in arb_bitmap(), threshold in any::<u8>()) {
            let table = vectorize(&bitmap, threshold);
            for (_, runs) in table.iter() {
                for pair in runs.windows(2) {
                    if pair[0].row == pair[1].row {
                        prop_assert!(pair[0].end_column_inclusive + 1 < pair[1].start_column);
                    }
                }
            }
        }
    }
}
