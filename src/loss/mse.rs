use crate::error::{NetworkError, Result};

pub struct MseLoss;

impl MseLoss {
    /// Half squared error averaged over the outputs: `Σ (e - p)² / 2 / n`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        Self::check(predicted, expected)?;
        let n = predicted.len() as f64;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2) / 2.0)
            .sum::<f64>() / n)
    }

    /// Per-output error signal before the activation slope: `expected - predicted`.
    ///
    /// This is the negative gradient of the half squared error, so it is
    /// added (not subtracted) during the update.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        Self::check(predicted, expected)?;
        Ok(predicted.iter().zip(expected.iter())
            .map(|(p, e)| e - p)
            .collect())
    }

    fn check(predicted: &[f64], expected: &[f64]) -> Result<()> {
        if predicted.len() != expected.len() {
            return Err(NetworkError::OutputWidthMismatch {
                expected: predicted.len(),
                actual: expected.len(),
            });
        }
        if predicted.is_empty() {
            return Err(NetworkError::EmptyOutput);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn half_squared_error_mean() {
        let loss = MseLoss::loss(&[0.5, 1.0], &[1.0, 0.0]).unwrap();
        assert_abs_diff_eq!(loss, (0.25 / 2.0 + 1.0 / 2.0) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn derivative_points_toward_target() {
        assert_eq!(MseLoss::derivative(&[0.25, 1.0], &[1.0, 0.0]), Ok(vec![0.75, -1.0]));
    }

    #[test]
    fn mismatched_widths_are_rejected() {
        let err = NetworkError::OutputWidthMismatch { expected: 1, actual: 2 };
        assert_eq!(MseLoss::loss(&[0.5], &[0.5, 99.0]), Err(err.clone()));
        assert_eq!(MseLoss::derivative(&[0.5], &[0.5, 99.0]), Err(err));
    }

    #[test]
    fn empty_vectors_are_rejected() {
        assert_eq!(MseLoss::loss(&[], &[]), Err(NetworkError::EmptyOutput));
        assert_eq!(MseLoss::derivative(&[], &[]), Err(NetworkError::EmptyOutput));
    }
}
