use crate::entity::{DailyRate, EndedAt, StartedAt, TotalAmount};

/// Suggested charge for a rental period, billed by the hour at 1/24 of
/// the equipment's daily rate and rounded to 2 decimals.
///
/// Yields nothing while the inputs do not describe a chargeable period:
/// missing end instant, missing or non-finite rate, or a period of zero
/// or negative length. Callers must treat that as "not yet computable",
/// never as a zero charge.
pub fn quote(
    started_at: &StartedAt,
    ended_at: Option<&EndedAt>,
    daily_rate: Option<&DailyRate>,
) -> Option<TotalAmount> {
    let ended_at = ended_at?;
    let daily_rate = daily_rate?;
    if !daily_rate.as_ref().is_finite() {
        return None;
    }
    let hours = (*ended_at.as_ref() - *started_at.as_ref()).as_seconds_f64() / 3600.0;
    if hours <= 0.0 {
        return None;
    }
    let total = hours * daily_rate.hourly();
    Some(TotalAmount::new((total * 100.0).round() / 100.0))
}
