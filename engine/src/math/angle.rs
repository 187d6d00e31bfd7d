//! Angle Math
//!
//! Yaw angles are plain `f32` radians. Stored headings are kept in the
//! half-open range (-PI, PI] and interpolation always takes the shorter arc,
//! so a heading never swings the long way around when its target crosses the
//! +/-PI seam.

use std::f32::consts::{PI, TAU};

/// Wrap an angle into (-PI, PI].
///
/// Values already in range are returned untouched, which makes the function
/// exactly idempotent. Non-finite input propagates as NaN.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }

    // rem_euclid lands in [0, TAU] (it may round up to TAU itself)
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Interpolate from `start` toward `end` by `t` along the shorter arc.
///
/// Both endpoints are normalized first. When they are more than PI apart one
/// endpoint is lifted by a full turn so the blend crosses the seam instead of
/// passing through zero. The result is normalized again.
pub fn lerp_angle(start: f32, end: f32, t: f32) -> f32 {
    let mut start = normalize_angle(start);
    let mut end = normalize_angle(end);

    if (end - start).abs() > PI {
        if end > start {
            start += TAU;
        } else {
            end += TAU;
        }
    }

    normalize_angle(start + (end - start) * t)
}

/// Plain linear interpolation, no wrapping.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Signed shortest angular distance from `from` to `to`, in (-PI, PI].
#[inline]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}
