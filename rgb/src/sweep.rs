use crate::{Error, Percent, Result, Rgb};

/// The largest number of adjustments a single sweep may produce.
pub const MAX_ADJUSTMENTS: usize = 10_000;

/// One entry of a sweep: the percentage applied and the color it produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustment {
    pub percent: Percent,
    pub color: Rgb,
}

/// Adjusts `color` by every percentage from `start` to `end` (inclusive) in increments of
/// `step`.
///
/// A positive step ascends while the percentage is `<= end`, a negative step descends
/// while it is `>= end`. When `end` lies on the other side of `start` the result is
/// empty. The n-th percentage is `start + n * step` so rounding errors do not pile up
/// over long fractional sweeps.
///
/// Fails with [`Error::TooManySteps`] when the range holds more than [`MAX_ADJUSTMENTS`]
/// values, which includes every range with an infinite end.
pub fn sweep(color: Rgb, start: Percent, end: Percent, step: Percent) -> Result<Vec<Adjustment>> {
    let step = step.0;

    if step == 0.0 || step.is_nan() {
        return Err(Error::InvalidStep);
    }

    let span = ((end.0 - start.0) / step).floor();
    if span + 1.0 > MAX_ADJUSTMENTS as f64 {
        return Err(Error::TooManySteps {
            limit: MAX_ADJUSTMENTS,
        });
    }

    let in_range = |percent: f64| {
        if step > 0.0 {
            percent <= end.0
        } else {
            percent >= end.0
        }
    };

    let mut adjustments = Vec::new();

    for n in 0u64.. {
        let percent = match n {
            0 => start.0,
            _ => start.0 + n as f64 * step,
        };

        // a step too small to move `start` would never reach `end`
        if !in_range(percent) || (n > 0 && percent == start.0) {
            break;
        }

        let percent = Percent(percent);
        adjustments.push(Adjustment {
            percent,
            color: color.adjusted(percent),
        });
    }

    Ok(adjustments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percents(adjustments: &[Adjustment]) -> Vec<f64> {
        adjustments.iter().map(|a| a.percent.0).collect()
    }

    #[test]
    fn zero_step_is_rejected() {
        let result = sweep(Rgb::WHITE, Percent(-10.0), Percent(10.0), Percent(0.0));

        assert_eq!(result, Err(Error::InvalidStep));
    }

    #[test]
    fn nan_step_is_rejected() {
        let result = sweep(Rgb::WHITE, Percent(-10.0), Percent(10.0), Percent(f64::NAN));

        assert_eq!(result, Err(Error::InvalidStep));
    }

    #[test]
    fn start_past_end_with_positive_step_is_empty() {
        let result = sweep(Rgb::WHITE, Percent(10.0), Percent(-10.0), Percent(10.0));

        assert_eq!(result, Ok(vec![]));
    }

    #[test]
    fn start_before_end_with_negative_step_is_empty() {
        let result = sweep(Rgb::WHITE, Percent(-10.0), Percent(10.0), Percent(-10.0));

        assert_eq!(result, Ok(vec![]));
    }

    #[test]
    fn black_is_invariant() {
        let adjustments = sweep(Rgb::BLACK, Percent(-20.0), Percent(20.0), Percent(20.0)).unwrap();

        assert_eq!(percents(&adjustments), vec![-20.0, 0.0, 20.0]);
        for adjustment in adjustments {
            assert_eq!(adjustment.color.to_string(), "#000000");
        }
    }

    #[test]
    fn end_is_inclusive_only_when_hit() {
        let adjustments = sweep(Rgb::WHITE, Percent(0.0), Percent(25.0), Percent(10.0)).unwrap();

        assert_eq!(percents(&adjustments), vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn negative_step_descends() {
        let red = Rgb::new(200, 0, 0);
        let adjustments = red.sweep(Percent(10.0), Percent(-10.0), Percent(-10.0)).unwrap();

        assert_eq!(percents(&adjustments), vec![10.0, 0.0, -10.0]);
        assert_eq!(
            adjustments.iter().map(|a| a.color).collect::<Vec<_>>(),
            vec![Rgb::new(220, 0, 0), red, Rgb::new(180, 0, 0)]
        );
    }

    #[test]
    fn single_point_range() {
        let adjustments = sweep(Rgb::WHITE, Percent(5.0), Percent(5.0), Percent(1.0)).unwrap();

        assert_eq!(percents(&adjustments), vec![5.0]);
    }

    #[test]
    fn red_sweep_matches_adjust() {
        let red: Rgb = "#FF0000".parse().unwrap();
        let adjustments = red.sweep(Percent(-50.0), Percent(50.0), Percent(10.0)).unwrap();

        assert_eq!(adjustments.len(), 11);
        assert_eq!(adjustments[0].color, Rgb::new(128, 0, 0));
        assert_eq!(adjustments[4].percent, Percent(-10.0));
        assert_eq!(adjustments[4].color.to_string(), "#e60000");
        assert_eq!(adjustments[5].color, red);
        assert_eq!(adjustments[10].color, red);
        for adjustment in &adjustments {
            assert_eq!(adjustment.color, red.adjusted(adjustment.percent));
        }
    }

    #[test]
    fn fractional_steps_do_not_drift() {
        let adjustments = sweep(Rgb::WHITE, Percent(0.0), Percent(1.0), Percent(0.25)).unwrap();

        assert_eq!(percents(&adjustments), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn range_at_the_limit_is_accepted() {
        let last = (MAX_ADJUSTMENTS - 1) as f64;
        let adjustments = sweep(Rgb::WHITE, Percent(0.0), Percent(last), Percent(1.0)).unwrap();

        assert_eq!(adjustments.len(), MAX_ADJUSTMENTS);
        assert_eq!(adjustments[MAX_ADJUSTMENTS - 1].percent, Percent(last));
    }

    #[test]
    fn oversized_ranges_are_rejected() {
        let too_many = Err(Error::TooManySteps {
            limit: MAX_ADJUSTMENTS,
        });

        assert_eq!(
            sweep(Rgb::WHITE, Percent(0.0), Percent(MAX_ADJUSTMENTS as f64), Percent(1.0)),
            too_many
        );
        assert_eq!(
            sweep(Rgb::WHITE, Percent(0.0), Percent(1e308), Percent(1.0)),
            too_many
        );
        assert_eq!(
            sweep(Rgb::WHITE, Percent(0.0), Percent(f64::INFINITY), Percent(1.0)),
            too_many
        );
        assert_eq!(
            sweep(Rgb::WHITE, Percent(0.0), Percent(f64::NEG_INFINITY), Percent(-1.0)),
            too_many
        );
    }

    #[test]
    fn infinite_step_yields_only_start() {
        let adjustments =
            sweep(Rgb::WHITE, Percent(0.0), Percent(100.0), Percent(f64::INFINITY)).unwrap();

        assert_eq!(percents(&adjustments), vec![0.0]);
    }
}
