//! DTW distance computation.

use tracing::instrument;

use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::series::TimeSeriesView;

/// Compute the DTW distance between two time series.
///
/// Uses a memory-efficient rolling two-row buffer rather than allocating the
/// full cost matrix. Runs in O(n * m) time and O(min(n, m)) space; the roll
/// is oriented over the shorter series, which is valid because the local
/// cost `|a - b|` and the predecessor structure are both symmetric under
/// transposition.
///
/// # Errors
///
/// | Condition | Result |
/// |---|---|
/// | Both series non-empty | `DtwDistance` with the optimal cost |
/// | Both series empty | `DtwDistance` of zero |
/// | Exactly one series empty | [`DtwError::EmptyAlignment`] |
#[instrument(skip(a, b))]
pub fn distance(a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> Result<DtwDistance, DtwError> {
    match (a.len(), b.len()) {
        (0, 0) => Ok(DtwDistance::new(0.0)),
        (0, _) | (_, 0) => Err(DtwError::EmptyAlignment {
            a_len: a.len(),
            b_len: b.len(),
        }),
        _ => Ok(DtwDistance::new(dtw_distance_rolling(
            a.as_slice(),
            b.as_slice(),
        ))),
    }
}

/// Compute the DTW distance between two raw slices.
///
/// Validates both slices (rejecting NaN and infinities), then delegates to
/// [`distance`]. This is the whole caller-facing surface for callers that do
/// not hold [`TimeSeries`][crate::TimeSeries] values.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`DtwError::NonFiniteValue`] | Either slice contains NaN or an infinity |
/// | [`DtwError::EmptyAlignment`] | Exactly one slice is empty |
pub fn dtw(a: &[f64], b: &[f64]) -> Result<DtwDistance, DtwError> {
    let a = TimeSeriesView::new(a)?;
    let b = TimeSeriesView::new(b)?;
    distance(a, b)
}

/// Rolling two-row buffer DTW over non-empty slices.
///
/// Each row buffer has `inner.len() + 1` slots; slot 0 is the boundary
/// column. `prev` starts as the conceptual row 0 of the accumulated cost
/// matrix: INF everywhere except the origin, which holds 0. That boundary
/// forbids alignments that consume elements of one series before the other
/// has started. For cell `(i, j)` of the conceptual matrix:
///
/// - diagonal predecessor `C[i-1][j-1]` is `prev[j]`
/// - above predecessor `C[i-1][j]` is `prev[j + 1]`
/// - left predecessor `C[i][j-1]` is `curr[j]`
///
/// Ties among equal-cost predecessors fall to whichever `f64::min` keeps;
/// only the minimum value is returned, so the choice is unobservable.
fn dtw_distance_rolling(a: &[f64], b: &[f64]) -> f64 {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let width = inner.len() + 1;

    let mut prev = vec![f64::INFINITY; width];
    let mut curr = vec![f64::INFINITY; width];
    prev[0] = 0.0;

    for &x in outer {
        // Slot 0 stays INF: column 0 is unreachable for every row past the origin.
        curr[0] = f64::INFINITY;
        for (j, &y) in inner.iter().enumerate() {
            let local = (x - y).abs();
            curr[j + 1] = local + prev[j].min(prev[j + 1]).min(curr[j]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    // After the final swap, `prev` holds the last completed row.
    prev[width - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TimeSeries;

    fn dist(a: &[f64], b: &[f64]) -> f64 {
        dtw(a, b).unwrap().value()
    }

    #[test]
    fn identical_series_distance_zero() {
        let ts = TimeSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
        let d = distance(ts.as_view(), ts.as_view()).unwrap();
        assert!((d.value() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn hand_computed_2x2() {
        // a=[0,1], b=[1,0]
        // C[1][1] = |0-1| = 1
        // C[1][2] = |0-0| + C[1][1] = 0 + 1 = 1
        // C[2][1] = |1-1| + C[1][1] = 0 + 1 = 1
        // C[2][2] = |1-0| + min(C[1][1], C[1][2], C[2][1]) = 1 + 1 = 2
        assert!((dist(&[0.0, 1.0], &[1.0, 0.0]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn hand_computed_3x3() {
        // a=[1,2,3], b=[2,2,2]: the best monotonic alignment matches the 2
        // exactly and pays |1-2| + |3-2| at the ends.
        assert!((dist(&[1.0, 2.0, 3.0], &[2.0, 2.0, 2.0]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn empty_vs_empty_is_zero() {
        let d = dtw(&[], &[]).unwrap();
        assert_eq!(d.value(), 0.0);
    }

    #[test]
    fn empty_vs_non_empty_is_error() {
        let result = dtw(&[], &[1.0]);
        assert!(matches!(
            result,
            Err(DtwError::EmptyAlignment { a_len: 0, b_len: 1 })
        ));
    }

    #[test]
    fn non_empty_vs_empty_is_error() {
        let result = dtw(&[1.0], &[]);
        assert!(matches!(
            result,
            Err(DtwError::EmptyAlignment { a_len: 1, b_len: 0 })
        ));
    }

    #[test]
    fn length_mismatch_is_warped_not_an_error() {
        // All elements equal, so every matched pair costs zero.
        assert!((dist(&[0.0, 0.0, 0.0, 0.0], &[0.0, 0.0]) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn single_element_series() {
        assert!((dist(&[5.0], &[3.0]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn single_element_against_longer() {
        // [7] vs [5,6,7]: the 7 is stretched across all three, cost 2+1+0.
        assert!((dist(&[7.0], &[5.0, 6.0, 7.0]) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn symmetric_in_arguments() {
        let pairs: &[(&[f64], &[f64])] = &[
            (&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]),
            (&[0.0, 5.0, 0.0], &[5.0, 0.0, 5.0, 0.0]),
            (&[1.0], &[4.0, 4.0, 4.0, 4.0, 4.0]),
            (&[0.1, 0.2, 0.3, 0.4], &[0.4, 0.3]),
        ];
        for (a, b) in pairs {
            assert!(
                (dist(a, b) - dist(b, a)).abs() < 1e-10,
                "asymmetry for {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn never_negative() {
        let pairs: &[(&[f64], &[f64])] = &[
            (&[-3.0, -2.0, -1.0], &[1.0, 2.0, 3.0]),
            (&[0.0], &[0.0]),
            (&[1e9, -1e9], &[-1e9, 1e9]),
        ];
        for (a, b) in pairs {
            assert!(dist(a, b) >= 0.0, "negative distance for {a:?} vs {b:?}");
        }
    }

    #[test]
    fn rejects_nan_input() {
        let result = dtw(&[1.0, f64::NAN], &[1.0]);
        assert!(matches!(result, Err(DtwError::NonFiniteValue { index: 1 })));
    }

    #[test]
    fn rejects_infinite_input_in_second_argument() {
        let result = dtw(&[1.0], &[f64::INFINITY, 2.0]);
        assert!(matches!(result, Err(DtwError::NonFiniteValue { index: 0 })));
    }

    #[test]
    fn roll_orientation_does_not_change_result() {
        // Exercise both branches of the shorter-series orientation.
        let long = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
        let short = [1.0, 8.0, 20.0];
        let d1 = dist(&long, &short);
        let d2 = dist(&short, &long);
        assert!((d1 - d2).abs() < 1e-10);
        assert!(d1.is_finite());
    }

    #[test]
    fn warping_absorbs_time_shift() {
        // Same peak, shifted by one step: warping should cost far less than
        // the lockstep (diagonal-only) comparison would.
        let a = [0.0, 0.0, 1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0, 0.0, 0.0];
        assert!((dist(&a, &b) - 0.0).abs() < 1e-10);
    }
}
