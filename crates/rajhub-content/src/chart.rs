//! Chart Geometry
//!
//! Turns data series into SVG coordinates. The y axis grows downwards, as in
//! SVG, and every series is scaled against a zero baseline.

/// Points for a line chart spanning `width` x `height`, scaled against `max`.
/// A single value is drawn at the horizontal middle.
pub fn line_points(values: &[u64], max: u64, width: f64, height: f64) -> Vec<(f64, f64)> {
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if values.len() > 1 { step * i as f64 } else { width / 2.0 };
            (x, height - scale(v, max, height))
        })
        .collect()
}

/// Bar heights scaled so the largest of `values` is `max_height`
pub fn bar_heights(values: &[u64], max_height: f64) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    values.iter().map(|&v| scale(v, max, max_height)).collect()
}

/// `points` attribute for `<polyline>`
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Largest value across several series, for a shared axis
pub fn series_max<'a>(series: impl IntoIterator<Item = &'a [u64]>) -> u64 {
    series
        .into_iter()
        .flat_map(|s| s.iter().copied())
        .max()
        .unwrap_or(0)
}

fn scale(value: u64, max: u64, extent: f64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value.min(max) as f64 / max as f64) * extent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_points() {
        let pts = line_points(&[0, 50, 100], 100, 200.0, 100.0);
        assert_eq!(pts, vec![(0.0, 100.0), (100.0, 50.0), (200.0, 0.0)]);
    }

    #[test]
    fn test_single_point_centered() {
        assert_eq!(line_points(&[10], 10, 80.0, 40.0), vec![(40.0, 0.0)]);
    }

    #[test]
    fn test_bar_heights() {
        assert_eq!(bar_heights(&[25, 50, 100], 200.0), vec![50.0, 100.0, 200.0]);
        assert_eq!(bar_heights(&[0, 0], 200.0), vec![0.0, 0.0]);
        assert!(bar_heights(&[], 200.0).is_empty());
    }

    #[test]
    fn test_polyline() {
        assert_eq!(polyline(&[(0.0, 10.0), (5.5, 2.0)]), "0.0,10.0 5.5,2.0");
    }

    #[test]
    fn test_series_max() {
        let a = [1u64, 9, 3];
        let b = [4u64, 2];
        assert_eq!(series_max([&a[..], &b[..]]), 9);
        assert_eq!(series_max(std::iter::empty()), 0);
    }
}
