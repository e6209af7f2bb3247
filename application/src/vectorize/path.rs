use domain::runs::Run;

/// SVG path data drawing each run as a closed unit-height rectangle.
///
/// Subpaths are `M{x0},{y}H{x1}V{y+1}H{x0}Z`, separated by single spaces.
pub fn emit_path(runs: &[Run]) -> String {
    runs.iter().map(rectangle).collect::<Vec<_>>().join(" ")
}

fn rectangle(run: &Run) -> String {
    format!(
        "M{x0},{y}H{x1}V{y1}H{x0}Z",
        x0 = run.start_column,
        x1 = run.end_column_exclusive(),
        y = run.row,
        y1 = run.row + 1,
    )
}
