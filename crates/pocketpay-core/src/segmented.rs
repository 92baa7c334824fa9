//! Segmented control selection and indicator placement.
//!
//! The indicator is an overlay moved onto the bounding box of the selected
//! option. Geometry is measured by the renderer and fed back through
//! [`SegmentedState::place`], which is idempotent: feeding the same box twice
//! changes nothing. The very first placement is never animated so the
//! indicator does not slide in from the origin on mount.

/// Bounding box of an option, relative to the control's container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentGeometry {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

impl SegmentGeometry {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            width,
            top,
            height,
        }
    }

    /// Express a viewport-space box relative to its container's box.
    pub fn relative_to(&self, container: &SegmentGeometry) -> SegmentGeometry {
        SegmentGeometry {
            left: self.left - container.left,
            width: self.width,
            top: self.top - container.top,
            height: self.height,
        }
    }

    /// Zero-sized boxes come from detached or hidden elements.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Keyboard intent inside the control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKey {
    Next,
    Previous,
    First,
    Last,
}

impl SegmentKey {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" | "ArrowDown" => Some(SegmentKey::Next),
            "ArrowLeft" | "ArrowUp" => Some(SegmentKey::Previous),
            "Home" => Some(SegmentKey::First),
            "End" => Some(SegmentKey::Last),
            _ => None,
        }
    }
}

/// Where the overlay goes and whether the move should transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPlacement {
    pub geometry: SegmentGeometry,
    pub animate: bool,
}

impl IndicatorPlacement {
    /// Inline style for the overlay element.
    pub fn style(&self, transition: &str) -> String {
        let g = &self.geometry;
        let transition = if self.animate { transition } else { "none" };
        format!(
            "transform: translate({:.1}px, {:.1}px); width: {:.1}px; height: {:.1}px; transition: {};",
            g.left, g.top, g.width, g.height, transition
        )
    }
}

/// Selection plus indicator state for one segmented control
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedState {
    len: usize,
    selected: usize,
    indicator: Option<IndicatorPlacement>,
}

impl SegmentedState {
    /// `selected` is clamped into range; an empty control selects nothing useful.
    pub fn new(len: usize, selected: usize) -> Self {
        Self {
            len,
            selected: selected.min(len.saturating_sub(1)),
            indicator: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn indicator(&self) -> Option<IndicatorPlacement> {
        self.indicator
    }

    /// Select `index`. Returns `true` if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    /// Option count changed (options added or removed).
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Apply a key. Returns the newly selected index, which must also take
    /// focus, or `None` when nothing changed.
    pub fn handle_key(&mut self, key: SegmentKey) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let target = match key {
            SegmentKey::Next => (self.selected + 1) % self.len,
            SegmentKey::Previous => (self.selected + self.len - 1) % self.len,
            SegmentKey::First => 0,
            SegmentKey::Last => self.len - 1,
        };
        if self.select(target) {
            Some(target)
        } else {
            None
        }
    }

    /// Record a fresh measurement of the selected option.
    ///
    /// Returns the placement to paint, or `None` when the measurement is
    /// unusable or identical to the current one.
    pub fn place(&mut self, geometry: SegmentGeometry) -> Option<IndicatorPlacement> {
        if geometry.is_empty() {
            return None;
        }
        let placement = match self.indicator {
            None => IndicatorPlacement {
                geometry,
                animate: false,
            },
            Some(current) if current.geometry == geometry => return None,
            Some(_) => IndicatorPlacement {
                geometry,
                animate: true,
            },
        };
        self.indicator = Some(placement);
        Some(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> Vec<SegmentGeometry> {
        (0..3)
            .map(|i| SegmentGeometry::new(10.0 + 100.0 * i as f64, 4.0, 96.0, 36.0))
            .collect()
    }

    #[test]
    fn key_names() {
        assert_eq!(SegmentKey::from_key_name("ArrowRight"), Some(SegmentKey::Next));
        assert_eq!(SegmentKey::from_key_name("ArrowUp"), Some(SegmentKey::Previous));
        assert_eq!(SegmentKey::from_key_name("Home"), Some(SegmentKey::First));
        assert_eq!(SegmentKey::from_key_name("End"), Some(SegmentKey::Last));
        assert_eq!(SegmentKey::from_key_name("Enter"), None);
    }

    #[test]
    fn arrow_right_on_last_wraps_to_first() {
        let mut s = SegmentedState::new(3, 2);
        assert_eq!(s.handle_key(SegmentKey::Next), Some(0));
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn arrow_left_on_first_wraps_to_last() {
        let mut s = SegmentedState::new(3, 0);
        assert_eq!(s.handle_key(SegmentKey::Previous), Some(2));
    }

    #[test]
    fn home_and_end() {
        let mut s = SegmentedState::new(4, 1);
        assert_eq!(s.handle_key(SegmentKey::Last), Some(3));
        assert_eq!(s.handle_key(SegmentKey::Last), None);
        assert_eq!(s.handle_key(SegmentKey::First), Some(0));
    }

    #[test]
    fn single_option_never_moves() {
        let mut s = SegmentedState::new(1, 0);
        assert_eq!(s.handle_key(SegmentKey::Next), None);
        let mut empty = SegmentedState::new(0, 0);
        assert_eq!(empty.handle_key(SegmentKey::Next), None);
    }

    #[test]
    fn first_placement_is_not_animated() {
        let mut s = SegmentedState::new(3, 0);
        let b = boxes();
        let first = s.place(b[0]).unwrap();
        assert!(!first.animate);

        s.select(1);
        let second = s.place(b[1]).unwrap();
        assert!(second.animate);
        assert_eq!(second.geometry, b[1]);
    }

    #[test]
    fn identical_measurement_is_idempotent() {
        let mut s = SegmentedState::new(3, 0);
        let b = boxes();
        s.place(b[0]);
        assert!(s.place(b[0]).is_none());
    }

    #[test]
    fn empty_measurement_ignored() {
        let mut s = SegmentedState::new(3, 0);
        assert!(s.place(SegmentGeometry::default()).is_none());
        assert!(s.indicator().is_none());
    }

    #[test]
    fn relative_geometry() {
        let container = SegmentGeometry::new(20.0, 100.0, 300.0, 44.0);
        let option = SegmentGeometry::new(120.0, 104.0, 96.0, 36.0);
        assert_eq!(
            option.relative_to(&container),
            SegmentGeometry::new(100.0, 4.0, 96.0, 36.0)
        );
    }

    #[test]
    fn style_uses_transition_only_when_animated() {
        let p = IndicatorPlacement {
            geometry: SegmentGeometry::new(4.0, 2.0, 50.0, 30.0),
            animate: false,
        };
        assert!(p.style("transform 250ms ease").ends_with("transition: none;"));
        let p = IndicatorPlacement { animate: true, ..p };
        assert!(p.style("transform 250ms ease").contains("transform 250ms ease"));
    }

    #[test]
    fn shrinking_options_clamps_selection() {
        let mut s = SegmentedState::new(5, 4);
        s.set_len(2);
        assert_eq!(s.selected(), 1);
    }
}
