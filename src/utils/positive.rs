use crate::math::Real;
use crate::InvalidParameter;

/// Returns `value` unchanged if it is strictly greater than zero.
///
/// No tolerance is applied: `0.0`, `-0.0`, negative values and NaN are all rejected.
#[inline]
pub(crate) fn check_positive(name: &'static str, value: Real) -> Result<Real, InvalidParameter> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidParameter::NonPositive { name, value })
    }
}
