//! Application-wide numeric constants.
//! Lengths are expressed in board units (CSS pixels of the host page).

/// Hard floor on both dropzone dimensions, enforced during every resize.
pub const MIN_ZONE_SIZE: f64 = 50.0;
/// Edge length of a freshly created dropzone.
pub const DEFAULT_ZONE_SIZE: f64 = 100.0;
/// Board position where new dropzones appear.
pub const DEFAULT_ZONE_POS: (f64, f64) = (50.0, 50.0);
