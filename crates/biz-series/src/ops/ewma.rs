//! Time-based exponential weighted moving averages.

use crate::temporal::Temporal;
use crate::vector::Vector;
use biz_core::errors::{Error, Result};
use biz_time::{CalendarDuration, TimeScale};

/// Exponentially weighted moving average with irregular time spacing.
///
/// The decay between consecutive observations is `0.5 ^ (Δt / halflife)`.
/// With `adjust` the weights are renormalised the way a growing-window
/// average would be; without it the update is the plain recursive form
/// `y[t] = (1 - α) x[t] + α y[t-1]`.
///
/// Rows where either the time or the value is null produce a null and do
/// not advance the state. The first valid observation seeds the average.
pub fn ewma_by_time(
    times: &Temporal,
    values: &Vector<f64>,
    halflife: &CalendarDuration,
    adjust: bool,
) -> Result<Vector<f64>> {
    // Dates are measured in whole milliseconds-per-day ticks so one
    // halflife conversion covers both column kinds.
    let (times, scale): (Vector<i64>, TimeScale) = match times {
        Temporal::Days(days) => {
            let per_day = TimeScale::Milliseconds.per_day();
            (
                days.iter_opt().map(|d| d.map(|d| d as i64 * per_day)).collect(),
                TimeScale::Milliseconds,
            )
        }
        Temporal::Stamps { data, scale, .. } => (data.clone(), *scale),
    };
    let len = times.len();
    if values.len() != len {
        return Err(Error::LengthMismatch {
            left: len,
            right: values.len(),
        });
    }

    let halflife = scale.units_from_nanos(halflife.fixed_nanoseconds()?);
    if halflife <= 0 {
        return Err(Error::InvalidConfiguration(
            "halflife must be a positive, fixed-length duration".into(),
        ));
    }

    let mut out: Vec<Option<f64>> = Vec::with_capacity(len);
    let mut prev: Option<(i64, f64)> = None;
    let mut alpha = 1.0f64;
    for i in 0..len {
        match (times.get(i), values.get(i)) {
            (Some(time), Some(value)) => {
                let result = match prev {
                    None => value,
                    Some((prev_time, prev_result)) => {
                        let delta = (time - prev_time) as f64 / halflife as f64;
                        if adjust {
                            alpha *= 0.5f64.powf(delta);
                            let r = (value + alpha * prev_result) / (1.0 + alpha);
                            alpha += 1.0;
                            r
                        } else {
                            let a = 0.5f64.powf(delta);
                            (1.0 - a) * value + a * prev_result
                        }
                    }
                };
                prev = Some((time, result));
                out.push(Some(result));
            }
            _ => out.push(None),
        }
    }
    Ok(Vector::from_options(out))
}
