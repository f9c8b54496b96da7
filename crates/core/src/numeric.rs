//! Checked decimal arithmetic shared by items, containers and results.
//!
//! Every operation here fails with [`Error::NumericRange`] instead of
//! wrapping or panicking when a value leaves the range of [`Decimal`].

use crate::{Error, Result};
use nalgebra::Vector3;
use rust_decimal::Decimal;

/// Three edge lengths or coordinates in exact decimal units.
pub type Vec3 = Vector3<Decimal>;

const AXES: [&str; 3] = ["x", "y", "z"];

/// Builds a [`Vec3`] from its components.
pub fn vec3(x: Decimal, y: Decimal, z: Decimal) -> Vec3 {
    Vector3::new(x, y, z)
}

fn componentwise(
    v: &Vec3,
    what: &str,
    mut f: impl FnMut(Decimal) -> Option<Decimal>,
) -> Result<Vec3> {
    let mut out = *v;
    for (i, component) in v.iter().enumerate() {
        out[i] = f(*component).ok_or_else(|| {
            Error::NumericRange(format!("{} overflowed on axis {}", what, AXES[i]))
        })?;
    }
    Ok(out)
}

/// Adds `delta` to every component.
pub fn grow(v: &Vec3, delta: Decimal) -> Result<Vec3> {
    componentwise(v, "growing by buffer", |c| c.checked_add(delta))
}

/// Subtracts `delta` from every component.
pub fn shrink(v: &Vec3, delta: Decimal) -> Result<Vec3> {
    componentwise(v, "shrinking by buffer", |c| c.checked_sub(delta))
}

/// Product of the three components.
pub fn volume(v: &Vec3) -> Result<Decimal> {
    v.x.checked_mul(v.y)
        .and_then(|area| area.checked_mul(v.z))
        .ok_or_else(|| {
            Error::NumericRange(format!("volume of {} x {} x {}", v.x, v.y, v.z))
        })
}

/// Half of `value`.
pub fn half(value: Decimal) -> Result<Decimal> {
    value
        .checked_div(Decimal::TWO)
        .ok_or_else(|| Error::NumericRange(format!("halving {}", value)))
}

/// `part / whole` as a percentage rounded to two decimal places.
///
/// An empty `whole` yields zero rather than an error.
pub fn percent(part: Decimal, whole: Decimal) -> Result<Decimal> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|p| p.round_dp(2))
        .ok_or_else(|| Error::NumericRange(format!("percentage {} of {}", part, whole)))
}

/// Sums `values`, failing on overflow.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    values.into_iter().try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v)
            .ok_or_else(|| Error::NumericRange("sum overflowed".into()))
    })
}
