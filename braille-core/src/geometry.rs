//! Dropzone geometry: board-space rectangles and the anchor-preserving
//! resize applied while a handle is dragged.
//!
//! Coordinates follow the host page: `x` grows rightward, `y` grows
//! downward, so the north edge is `y` and the south edge is `y + h`.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_ZONE_SIZE;

/// Axis-aligned rectangle in board units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// One of the eight directional resize handles around a dropzone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    Nw,
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
}

impl Handle {
    pub const ALL: [Self; 8] = [
        Self::Nw,
        Self::N,
        Self::Ne,
        Self::E,
        Self::Se,
        Self::S,
        Self::Sw,
        Self::W,
    ];

    /// Compass name, as carried in the handle's `data-direction` attribute.
    pub fn direction(self) -> &'static str {
        match self {
            Self::Nw => "nw",
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
        }
    }

    pub fn from_direction(s: &str) -> Option<Self> {
        match s {
            "nw" => Some(Self::Nw),
            "n" => Some(Self::N),
            "ne" => Some(Self::Ne),
            "e" => Some(Self::E),
            "se" => Some(Self::Se),
            "s" => Some(Self::S),
            "sw" => Some(Self::Sw),
            "w" => Some(Self::W),
            _ => None,
        }
    }

    fn has_east(self) -> bool {
        matches!(self, Self::Ne | Self::E | Self::Se)
    }

    fn has_west(self) -> bool {
        matches!(self, Self::Nw | Self::W | Self::Sw)
    }

    fn has_north(self) -> bool {
        matches!(self, Self::Nw | Self::N | Self::Ne)
    }

    fn has_south(self) -> bool {
        matches!(self, Self::Sw | Self::S | Self::Se)
    }
}

/// Resize `start` by the pointer delta `(dx, dy)` accumulated since the
/// press, pulling the edge(s) named by `handle`.
///
/// The opposite edge stays fixed: a `w` handle couples width and `x` so
/// the east edge never moves, and symmetrically for `n`. Both dimensions
/// are clamped to [`MIN_ZONE_SIZE`]; once the clamp engages the dragged
/// edge stops tracking the pointer while the far edge stays put. Corner
/// handles apply both axis rules.
pub fn resize(start: Rect, handle: Handle, dx: f64, dy: f64) -> Rect {
    let mut out = start;
    if handle.has_east() {
        out.w = (start.w + dx).max(MIN_ZONE_SIZE);
    }
    if handle.has_west() {
        out.w = (start.w - dx).max(MIN_ZONE_SIZE);
        out.x = start.x + (start.w - out.w);
    }
    if handle.has_south() {
        out.h = (start.h + dy).max(MIN_ZONE_SIZE);
    }
    if handle.has_north() {
        out.h = (start.h - dy).max(MIN_ZONE_SIZE);
        out.y = start.y + (start.h - out.h);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Rect = Rect {
        x: 20.0,
        y: 30.0,
        w: 100.0,
        h: 80.0,
    };

    #[test]
    fn east_handle_grows_width_only() {
        let r = resize(START, Handle::E, 40.0, 999.0);
        assert_eq!(r, Rect::new(20.0, 30.0, 140.0, 80.0));
    }

    #[test]
    fn east_handle_clamps_without_moving_left() {
        let r = resize(START, Handle::E, -80.0, 0.0);
        assert_eq!(r.w, 50.0);
        assert_eq!(r.x, 20.0);
    }

    #[test]
    fn west_handle_keeps_east_edge_fixed() {
        let r = resize(START, Handle::W, 30.0, 0.0);
        assert_eq!(r.w, 70.0);
        assert_eq!(r.x, 50.0);
        assert_eq!(r.x + r.w, START.x + START.w);
    }

    #[test]
    fn west_handle_clamp_caps_left_travel() {
        // shrinking by 80 would go below the floor; left only travels 50
        let r = resize(START, Handle::W, 80.0, 0.0);
        assert_eq!(r.w, 50.0);
        assert_eq!(r.x, 70.0);
    }

    #[test]
    fn north_handle_keeps_south_edge_fixed() {
        let r = resize(START, Handle::N, 0.0, -20.0);
        assert_eq!(r.h, 100.0);
        assert_eq!(r.y, 10.0);
        assert_eq!(r.y + r.h, START.y + START.h);
    }

    #[test]
    fn corner_handle_applies_both_axes() {
        let r = resize(START, Handle::Se, 10.0, -15.0);
        assert_eq!(r, Rect::new(20.0, 30.0, 110.0, 65.0));
        let r = resize(START, Handle::Nw, 25.0, 10.0);
        assert_eq!(r, Rect::new(45.0, 40.0, 75.0, 70.0));
    }

    #[test]
    fn direction_round_trips() {
        for h in Handle::ALL {
            assert_eq!(Handle::from_direction(h.direction()), Some(h));
        }
        assert_eq!(Handle::from_direction("x"), None);
    }
}
