use crate::types::ViewportState;

/// Which navigation presentation to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Collapsible top navbar for narrow screens
    Compact,
    /// Fixed left sidebar for wide screens
    Fixed,
}

impl LayoutVariant {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            LayoutVariant::Compact
        } else {
            LayoutVariant::Fixed
        }
    }
}

impl ViewportState {
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        Self {
            is_mobile: LayoutVariant::for_width(width, breakpoint) == LayoutVariant::Compact,
        }
    }

    pub fn layout(&self) -> LayoutVariant {
        if self.is_mobile {
            LayoutVariant::Compact
        } else {
            LayoutVariant::Fixed
        }
    }

    /// State after a resize to `width`, or `None` when the breakpoint was not crossed
    pub fn after_resize(&self, width: f64, breakpoint: f64) -> Option<Self> {
        let next = Self::from_width(width, breakpoint);
        (next != *self).then_some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINT: f64 = 768.0;

    #[test]
    fn test_narrow_widths_are_compact() {
        for width in [0.0, 320.0, 375.0, 600.0, 767.0, 767.5] {
            assert_eq!(LayoutVariant::for_width(width, BREAKPOINT), LayoutVariant::Compact);
        }
    }

    #[test]
    fn test_wide_widths_are_fixed() {
        for width in [768.5, 769.0, 1024.0, 1920.0] {
            assert_eq!(LayoutVariant::for_width(width, BREAKPOINT), LayoutVariant::Fixed);
        }
    }

    #[test]
    fn test_breakpoint_itself_is_compact() {
        assert_eq!(LayoutVariant::for_width(768.0, BREAKPOINT), LayoutVariant::Compact);
    }

    #[test]
    fn test_viewport_state_round_trips_layout() {
        assert!(ViewportState::from_width(500.0, BREAKPOINT).is_mobile);
        assert_eq!(
            ViewportState::from_width(1280.0, BREAKPOINT).layout(),
            LayoutVariant::Fixed
        );
    }

    #[test]
    fn test_resize_within_band_is_no_change() {
        let desktop = ViewportState::from_width(1280.0, BREAKPOINT);
        assert_eq!(desktop.after_resize(1024.0, BREAKPOINT), None);
        assert_eq!(desktop.after_resize(769.0, BREAKPOINT), None);

        let mobile = ViewportState::from_width(400.0, BREAKPOINT);
        assert_eq!(mobile.after_resize(768.0, BREAKPOINT), None);
    }

    #[test]
    fn test_resize_across_breakpoint_changes_state() {
        let desktop = ViewportState::from_width(1280.0, BREAKPOINT);
        let mobile = desktop.after_resize(768.0, BREAKPOINT).unwrap();
        assert!(mobile.is_mobile);

        let back = mobile.after_resize(769.0, BREAKPOINT).unwrap();
        assert_eq!(back.layout(), LayoutVariant::Fixed);
    }
}
