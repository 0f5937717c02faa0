use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{
    IDENTITY_SCALE_PERCENT, MAX_ROTATION_DEGREES, MAX_SCALE_PERCENT, MIN_SCALE_PERCENT,
};
use crate::error::{ExhibitError, Result};

/// User-adjustable affine parameters for the overlay image, captured in
/// on-screen viewport pixel units.
///
/// Offsets accumulate unbounded; scale and rotation are clamped to their
/// slider ranges on every change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_percent: f64,
    pub rotation_degrees: f64,
}

/// A partial change merged into a [`Transform`] by [`Transform::apply`].
/// Fields left as `None` keep their current value.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TransformDelta {
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub scale_percent: Option<f64>,
    pub rotation_degrees: Option<f64>,
}

/// A [`Transform`] projected into report-panel pixel space.
///
/// Only the translation is rescaled; scale percent and rotation are already
/// resolution-independent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_percent: f64,
    pub rotation_degrees: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScaledTransform {
    pub fn identity() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_percent: IDENTITY_SCALE_PERCENT,
            rotation_degrees: 0.0,
        }
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_percent: IDENTITY_SCALE_PERCENT,
            rotation_degrees: 0.0,
        }
    }

    /// Merge a partial change, clamping scale and rotation to their ranges.
    pub fn apply(&mut self, delta: &TransformDelta) {
        if let Some(x) = delta.offset_x {
            self.offset_x = x;
        }
        if let Some(y) = delta.offset_y {
            self.offset_y = y;
        }
        if let Some(s) = delta.scale_percent {
            self.scale_percent = s.clamp(MIN_SCALE_PERCENT, MAX_SCALE_PERCENT);
        }
        if let Some(r) = delta.rotation_degrees {
            self.rotation_degrees = r.clamp(-MAX_ROTATION_DEGREES, MAX_ROTATION_DEGREES);
        }
    }

    /// Shift the offset by a drag delta, in viewport pixels.
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Project this transform into a target coordinate space.
    ///
    /// `multiplier = target_width / viewport_width` rescales the translation
    /// so the overlay lands in the same relative position it had on screen.
    /// The multiplier must come from the measured viewport width; a stale or
    /// hardcoded width silently desyncs the report from the preview.
    pub fn project_to(&self, target_width: f64, viewport_width: f64) -> Result<ScaledTransform> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(ExhibitError::ViewportUnavailable);
        }
        let multiplier = target_width / viewport_width;
        Ok(ScaledTransform {
            offset_x: self.offset_x * multiplier,
            offset_y: self.offset_y * multiplier,
            scale_percent: self.scale_percent,
            rotation_degrees: self.rotation_degrees,
        })
    }

    /// Project, degrading to an identity multiplier when no usable viewport
    /// width is available. The degraded path logs a warning so imprecise
    /// projections remain distinguishable from precise ones.
    pub fn project_or_identity(
        &self,
        target_width: f64,
        viewport_width: Option<f64>,
    ) -> ScaledTransform {
        match viewport_width.map(|v| self.project_to(target_width, v)) {
            Some(Ok(projected)) => projected,
            _ => {
                warn!("viewport width unavailable; projecting offsets with identity multiplier");
                ScaledTransform {
                    offset_x: self.offset_x,
                    offset_y: self.offset_y,
                    scale_percent: self.scale_percent,
                    rotation_degrees: self.rotation_degrees,
                }
            }
        }
    }
}
