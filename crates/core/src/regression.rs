//! Ordinary least-squares line fitting for the humidity/temperature chart.

use serde::Serialize;

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Equation label with two-decimal rounding, e.g. `y = 0.20x + 14.00`.
    pub fn equation(&self) -> String {
        format!("y = {:.2}x + {:.2}", self.slope, self.intercept)
    }
}

/// Number of distinct x values among `points`.
pub fn distinct_x_count(points: &[(f64, f64)]) -> usize {
    let mut xs: Vec<f64> = points.iter().map(|&(x, _)| x).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs.len()
}

/// Fit a least-squares line through `points`.
///
/// Returns `None` when there are fewer than two distinct x values, since the
/// slope is undefined.
pub fn linear_regression(points: &[(f64, f64)]) -> Option<LinearFit> {
    if distinct_x_count(points) < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

    let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), &(x, y)| {
        let dx = x - mean_x;
        (sxx + dx * dx, sxy + dx * (y - mean_y))
    });

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_point_fit() {
        let fit = linear_regression(&[(30.0, 20.0), (50.0, 24.0)]).unwrap();
        assert!(approx(fit.slope, 0.2));
        assert!(approx(fit.intercept, 14.0));
        assert_eq!(fit.equation(), "y = 0.20x + 14.00");
    }

    #[test]
    fn identical_x_values_are_skipped() {
        assert_eq!(linear_regression(&[(30.0, 20.0), (30.0, 24.0)]), None);
        assert_eq!(linear_regression(&[(30.0, 20.0)]), None);
        assert_eq!(linear_regression(&[]), None);
    }

    #[test]
    fn noisy_fit_minimizes_squared_residuals() {
        // y = 2x + 1 with symmetric noise around the line.
        let points = [(0.0, 1.5), (1.0, 2.5), (2.0, 5.5), (3.0, 6.5)];
        let fit = linear_regression(&points).unwrap();
        assert!(approx(fit.slope, 1.8));
        assert!(approx(fit.intercept, 1.3));
        assert!(approx(fit.predict(10.0), 19.3));
    }

    #[test]
    fn negative_intercept_keeps_plus_sign() {
        let fit = LinearFit {
            slope: -1.234,
            intercept: -3.0,
        };
        assert_eq!(fit.equation(), "y = -1.23x + -3.00");
    }

    #[test]
    fn distinct_count_ignores_duplicates() {
        assert_eq!(distinct_x_count(&[(1.0, 0.0), (1.0, 5.0), (2.0, 0.0)]), 2);
    }
}
