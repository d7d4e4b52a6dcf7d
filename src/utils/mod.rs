//! Various unsorted numerical helpers.

pub(crate) use self::positive::check_positive;

mod positive;
