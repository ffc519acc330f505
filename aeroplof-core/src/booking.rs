use crate::CoreResult;

/// Remaining-seat value reported for a booking that could not be made.
pub const NO_INVENTORY: i32 = -1;

/// Flattens a booking result into the integer shown to the user: the seats
/// left on success, [`NO_INVENTORY`] otherwise.
pub fn remaining_or_sentinel(result: &CoreResult<u32>) -> i32 {
    match result {
        Ok(remaining) => i32::try_from(*remaining).unwrap_or(i32::MAX),
        Err(_) => NO_INVENTORY,
    }
}
