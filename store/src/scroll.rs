// vertical scroll direction, used to tuck the navigation bar away while reading
//
// the tracker only compares each offset with the previous one; listening for the
// events (and detaching the listener) is the job of the component that owns it

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

impl ScrollDirection {
    // an open mobile menu pins the bar in place regardless of direction
    pub fn hides_nav(self, menu_open: bool) -> bool {
        self == ScrollDirection::Down && !menu_open
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    last: f64,
    direction: ScrollDirection,
}

impl ScrollTracker {
    pub fn new() -> Self {
        ScrollTracker::default()
    }

    // ties go to Up
    pub fn observe(&mut self, offset: f64) -> ScrollDirection {
        self.direction = if offset > self.last {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last = offset;

        self.direction
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn last_offset(&self) -> f64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increasing_offsets_report_down() {
        let mut tracker = ScrollTracker::new();

        for offset in [10.0, 25.0, 26.5, 400.0, 1200.0] {
            assert_eq!(tracker.observe(offset), ScrollDirection::Down);
        }
    }

    #[test]
    fn decreasing_offsets_report_up() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(2000.0);

        for offset in [1500.0, 900.0, 899.5, 10.0, 0.0] {
            assert_eq!(tracker.observe(offset), ScrollDirection::Up);
        }
    }

    #[test]
    fn constant_offsets_report_up() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(300.0);

        for _ in 0..4 {
            assert_eq!(tracker.observe(300.0), ScrollDirection::Up);
        }
    }

    #[test]
    fn starts_visible_at_top() {
        let mut tracker = ScrollTracker::new();

        assert_eq!(tracker.direction(), ScrollDirection::Up);
        assert_eq!(tracker.observe(0.0), ScrollDirection::Up);
        assert_eq!(tracker.last_offset(), 0.0);
    }

    #[test]
    fn open_menu_keeps_nav_visible() {
        assert!(ScrollDirection::Down.hides_nav(false));
        assert!(!ScrollDirection::Down.hides_nav(true));
        assert!(!ScrollDirection::Up.hides_nav(false));
    }
}
