use crate::{
    errors::{ShiftError, ShiftResult},
    models::{employee::Employee, shift::Shift},
};

/// Checks whether `employee` may take `shift`.
///
/// An overlap with another of the employee's shifts is always a conflict.
/// Weekly availability is only consulted when `check_availability` is set.
pub fn check_assignment(
    employee: &Employee,
    shift: &Shift,
    existing: &[Shift],
    check_availability: bool,
) -> ShiftResult<()> {
    let clash = existing.iter().find(|other| {
        other.id != shift.id
            && other.employee_id == Some(employee.id)
            && other.overlaps(shift.start_time, shift.end_time)
    });
    if let Some(other) = clash {
        return Err(ShiftError::Conflict(format!(
            "{} already works {} to {}",
            employee.name, other.start_time, other.end_time
        )));
    }

    if check_availability
        && !employee.availability.is_available(
            shift.day(),
            shift.start_time.time(),
            shift.duration_minutes(),
        )
    {
        return Err(ShiftError::Conflict(format!(
            "{} is not available on {} from {} to {}",
            employee.name,
            shift.day_label,
            shift.start_time.format("%H:%M"),
            shift.end_time.format("%H:%M")
        )));
    }

    Ok(())
}
