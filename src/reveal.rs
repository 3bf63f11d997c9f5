//! Scroll-driven progressive reveal for the journey timeline.
//!
//! A scroll signal is turned into a geometry sample ([`ScrollState`]), the
//! sample into a normalized progress scalar, and the scalar into a discrete
//! count of revealed entries. Every step is a pure function, so the reveal
//! state is fully determined by the latest sample and tracks scrolling in
//! both directions.

/// Geometry of the tracked container relative to the viewport, sampled on
/// every scroll/resize signal. No history is kept; the previous sample is
/// simply overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Top edge of the container in viewport coordinates (negative once the
    /// container has scrolled past the top of the viewport).
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(container_top: f64, container_height: f64, viewport_height: f64) -> Self {
        Self {
            container_top,
            container_height,
            viewport_height,
        }
    }

    /// Normalized traversal of the container, clamped to [0, 1].
    ///
    /// The scrollable distance is the container height minus the viewport
    /// height. When that distance is zero or negative the container cannot
    /// be scrolled through at all; it is treated as fully traversed so no
    /// content stays locked hidden. Never returns NaN or infinity.
    pub fn progress(&self) -> f64 {
        let total = self.container_height - self.viewport_height;
        if total <= 0.0 {
            return 1.0;
        }
        (-self.container_top / total).clamp(0.0, 1.0)
    }
}

/// Buckets continuous progress into the number of entries to reveal.
///
/// With N entries each occupies a uniform 1/N slice of the progress range:
/// `min(N, floor(progress * N) + 1)`, and 0 when progress is still at the
/// start or there are no entries. Pure and deterministic.
pub fn revealed_count(progress: f64, entry_count: usize) -> usize {
    if entry_count == 0 || progress <= 0.0 {
        return 0;
    }
    let bucket = (progress * entry_count as f64).floor() as usize + 1;
    bucket.min(entry_count)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn count_stays_in_bounds() {
        for n in 1..=12usize {
            for step in 0..=100 {
                let progress = step as f64 / 100.0;
                let count = revealed_count(progress, n);
                assert!(count <= n, "count {count} above n {n} at {progress}");
            }
        }
    }

    #[test]
    fn count_is_monotone_in_progress() {
        for n in [1usize, 3, 4, 7, 25] {
            let mut last = 0;
            for step in 0..=1000 {
                let count = revealed_count(step as f64 / 1000.0, n);
                assert!(count >= last, "count dropped at step {step} for n {n}");
                last = count;
            }
        }
    }

    #[test]
    fn boundary_values() {
        for n in 1..=8usize {
            assert_eq!(revealed_count(0.0, n), 0);
            assert_eq!(revealed_count(1.0, n), n);
        }
    }

    #[test]
    fn repeat_calls_are_identical() {
        let first = revealed_count(0.37, 9);
        for _ in 0..5 {
            assert_eq!(revealed_count(0.37, 9), first);
        }
    }

    #[test]
    fn degenerate_container_yields_finite_progress() {
        let shorter = ScrollState::new(40.0, 300.0, 800.0);
        assert!(shorter.progress().is_finite());
        assert_relative_eq!(shorter.progress(), 1.0);

        let equal = ScrollState::new(0.0, 800.0, 800.0);
        assert!(equal.progress().is_finite());
        assert_relative_eq!(equal.progress(), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        // Container still below the viewport top.
        assert_relative_eq!(ScrollState::new(250.0, 2000.0, 800.0).progress(), 0.0);
        // Scrolled far past the end.
        assert_relative_eq!(ScrollState::new(-5000.0, 2000.0, 800.0).progress(), 1.0);
        // Halfway through the scrollable distance.
        assert_relative_eq!(ScrollState::new(-600.0, 2000.0, 800.0).progress(), 0.5);
    }

    #[test]
    fn four_entries_start_hidden() {
        assert_eq!(revealed_count(0.0, 4), 0);
    }

    #[test]
    fn four_entries_partway() {
        // 0.26 / 0.25 floors to 1, so two entries show.
        assert_eq!(revealed_count(0.26, 4), 2);
    }

    #[test]
    fn four_entries_near_end() {
        assert_eq!(revealed_count(0.99, 4), 4);
    }

    #[test]
    fn scrolling_back_up_lowers_the_count() {
        assert_eq!(revealed_count(0.99, 4), 4);
        // Same inputs after the user scrolls back up; no hidden state.
        assert_eq!(revealed_count(0.1, 4), 1);
    }

    #[test]
    fn empty_timeline_reveals_nothing() {
        for step in 0..=10 {
            assert_eq!(revealed_count(step as f64 / 10.0, 0), 0);
        }
    }
}
