//! Static scene description and its timeline.

pub mod elements;
pub mod session;

pub use elements::{BranchSegment, LeafHeart, RootCurve};
pub use session::SceneSession;

/// Fixed window (ms) a leaf heart contributes to the timeline: hearts have
/// no duration field, their bloom-and-settle takes this long.
pub const LEAF_BLOOM_WINDOW_MS: f64 = 680.0;

/// All structural elements generated from one seed, plus the derived
/// total animation time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub roots: Vec<RootCurve>,
    pub segments: Vec<BranchSegment>,
    pub hearts: Vec<LeafHeart>,
    pub seed: u32,
    pub width: f64,
    pub height: f64,
    total_time: f64,
}

impl Scene {
    /// Scene with no structural elements; only backdrop and ground render.
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Milliseconds until every structural element has finished growing.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Recompute the timeline as the max end time across all elements.
    pub(crate) fn recompute_total_time(&mut self) {
        let seg_end = self
            .segments
            .iter()
            .map(BranchSegment::end_time)
            .fold(0.0, f64::max);
        let root_end = self
            .roots
            .iter()
            .map(RootCurve::end_time)
            .fold(0.0, f64::max);
        let heart_end = self
            .hearts
            .iter()
            .map(|h| h.start + LEAF_BLOOM_WINDOW_MS)
            .fold(0.0, f64::max);
        self.total_time = seg_end.max(root_end).max(heart_end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{QuadBezier, Vec2};

    fn curve() -> QuadBezier {
        QuadBezier::new(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0))
    }

    #[test]
    fn test_empty_scene_timeline() {
        let scene = Scene::empty(800.0, 600.0);
        assert_eq!(scene.total_time(), 0.0);
        assert!(scene.roots.is_empty());
    }

    #[test]
    fn test_total_time_covers_every_element() {
        let mut scene = Scene::empty(800.0, 600.0);
        scene.roots.push(RootCurve {
            curve: curve(),
            width: 3.0,
            color: "#5a3425",
            start: 100.0,
            duration: 500.0,
        });
        scene.segments.push(BranchSegment {
            from: Vec2::ZERO,
            to: Vec2::new(0.0, -40.0),
            width: 4.0,
            color: "#4c291b",
            start: 520.0,
            duration: 300.0,
            depth: 0,
        });
        scene.hearts.push(LeafHeart {
            position: Vec2::new(0.0, -40.0),
            angle: 0.1,
            size: 10.0,
            start: 900.0,
            phase: 0.0,
        });
        scene.recompute_total_time();

        // heart bloom window dominates: 900 + 680
        assert_eq!(scene.total_time(), 1580.0);
        assert!(scene.total_time() >= 100.0 + 500.0);
        assert!(scene.total_time() >= 520.0 + 300.0);
    }

    #[test]
    fn test_total_time_from_longest_segment() {
        let mut scene = Scene::empty(800.0, 600.0);
        scene.segments.push(BranchSegment {
            from: Vec2::ZERO,
            to: Vec2::new(0.0, -40.0),
            width: 4.0,
            color: "#4c291b",
            start: 2000.0,
            duration: 760.0,
            depth: 3,
        });
        scene.hearts.push(LeafHeart {
            position: Vec2::ZERO,
            angle: 0.0,
            size: 9.0,
            start: 1000.0,
            phase: 0.0,
        });
        scene.recompute_total_time();
        assert_eq!(scene.total_time(), 2760.0);
    }
}
