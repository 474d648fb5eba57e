#![forbid(unsafe_code)]

//! Fixed day-cell geometry, in terminal columns and rows.

/// Columns occupied by one day: ring, two-column label, ring.
pub const DAY_WIDTH: u16 = 4;

/// Rows occupied by one day.
pub const DAY_HEIGHT: u16 = 1;

/// Columns of spacing on each side of a day that keeps its margin.
pub const DAY_MARGIN: u16 = 1;

/// Total columns a day takes in a grid row.
#[must_use]
pub const fn day_outer_width(with_margin: bool) -> u16 {
    if with_margin {
        DAY_WIDTH + 2 * DAY_MARGIN
    } else {
        DAY_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_width_accounts_for_both_margins() {
        assert_eq!(day_outer_width(true), 6);
        assert_eq!(day_outer_width(false), 4);
    }
}
