//! Procedural growth generation.
//!
//! Builds the static scene description for one seed: fanned root curves
//! with offshoots, a recursively subdivided branch structure, and heart
//! leaf clusters at the terminal depth. Generation is a pure function of
//! `(seed, canvas size, params)`.

use std::f64::consts::{PI, TAU};

use crate::animation::out_cubic_inverse;
use crate::math::{QuadBezier, Vec2};
use crate::rng::SeededRng;
use crate::scene::{BranchSegment, LeafHeart, RootCurve, Scene};

/// Parameters controlling the generated tree's shape and timing
#[derive(Debug, Clone, Copy)]
pub struct GrowthParams {
    /// Number of primary root curves, split evenly left/right of center
    pub root_count: usize,
    /// Trunk length as a fraction of canvas height
    pub trunk_length_frac: f64,
    /// Vertical anchor of the trunk base as a fraction of canvas height
    pub base_y_frac: f64,
    /// Depth at which branches terminate in leaf heart clusters
    pub max_depth: u32,
    /// Delay before the trunk starts drawing (ms)
    pub trunk_start: f64,
    /// Stroke color for root curves
    pub root_color: &'static str,
    /// Stroke color for branch segments
    pub branch_color: &'static str,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            root_count: 8,
            trunk_length_frac: 0.17,
            base_y_frac: 0.72,
            max_depth: 6,
            trunk_start: 520.0,
            root_color: "#5a3425",
            branch_color: "#4c291b",
        }
    }
}

/// Builds a [`Scene`] from a seed.
pub struct SceneBuilder {
    params: GrowthParams,
}

impl SceneBuilder {
    pub fn new(params: GrowthParams) -> Self {
        Self { params }
    }

    /// Generate the full scene. Calling this twice with the same inputs
    /// yields bit-identical element lists.
    pub fn build(&self, seed: u32, width: f64, height: f64) -> Scene {
        let mut rng = SeededRng::new(seed);
        let mut scene = Scene::empty(width, height);
        scene.seed = seed;

        let base = Vec2::new(width * 0.5, height * self.params.base_y_frac);

        self.build_roots(&mut rng, &mut scene, base);
        self.build_branch(
            &mut rng,
            &mut scene,
            base,
            height * self.params.trunk_length_frac,
            -PI / 2.0,
            0,
            self.params.trunk_start,
        );

        scene.recompute_total_time();
        scene
    }

    /// Primary roots fan left/right of center by index; each primary gets
    /// 1-2 offshoot curves anchored along its parametric length.
    fn build_roots(&self, rng: &mut SeededRng, scene: &mut Scene, base: Vec2) {
        let count = self.params.root_count;
        let half = count / 2;

        for i in 0..count {
            let side = if i < half { -1.0 } else { 1.0 };
            let rank = (i % half.max(1)) as f64;

            // lateral reach widens with the root's index within its side
            let reach = 45.0 + rank * 34.0 + rng.range(0.0, 28.0);
            let start_point = Vec2::new(base.x + rng.range(-12.0, 12.0), base.y);
            let end = Vec2::new(
                base.x + side * reach,
                base.y + rng.range(34.0, 112.0),
            );
            let control = Vec2::new(
                base.x + side * reach * rng.range(0.35, 0.6),
                base.y + rng.range(6.0, 30.0),
            );

            let primary = RootCurve {
                curve: QuadBezier::new(start_point, control, end),
                // width tapers with lateral distance from center
                width: (5.0 - reach * 0.013).max(2.2),
                color: self.params.root_color,
                start: rng.range(30.0, 280.0),
                duration: rng.range(430.0, 780.0),
            };

            let offshoots = self.build_offshoots(rng, &primary, side);
            scene.roots.push(primary);
            scene.roots.extend(offshoots);
        }
    }

    fn build_offshoots(
        &self,
        rng: &mut SeededRng,
        parent: &RootCurve,
        side: f64,
    ) -> Vec<RootCurve> {
        let count = if rng.next() > 0.55 { 2 } else { 1 };
        let mut offshoots = Vec::with_capacity(count);

        for _ in 0..count {
            let t = rng.range(0.3, 0.85);
            let anchor = parent.curve.point_at(t);
            // the parent pen covers parametric t once its eased progress
            // has reached it; the offshoot sprouts shortly after
            let arrival = parent.start + parent.duration * out_cubic_inverse(t);

            let end = anchor + Vec2::new(side * rng.range(26.0, 70.0), rng.range(18.0, 56.0));
            let control = anchor.lerp(&end, 0.5)
                + Vec2::new(rng.range(-14.0, 14.0), rng.range(-10.0, 10.0));

            offshoots.push(RootCurve {
                curve: QuadBezier::new(anchor, control, end),
                width: parent.width * rng.range(0.45, 0.7),
                color: self.params.root_color,
                start: arrival + rng.range(30.0, 120.0),
                duration: rng.range(260.0, 520.0),
            });
        }

        offshoots
    }

    /// Emit one segment and recurse. Children start before the parent
    /// stroke completes so growth overlaps instead of fully sequencing;
    /// that overlap is the intended organic look.
    #[allow(clippy::too_many_arguments)]
    fn build_branch(
        &self,
        rng: &mut SeededRng,
        scene: &mut Scene,
        from: Vec2,
        length: f64,
        angle: f64,
        depth: u32,
        start: f64,
    ) {
        let to = from + Vec2::polar(angle, length);
        let duration = (length * 6.6).clamp(180.0, 760.0);

        scene.segments.push(BranchSegment {
            from,
            to,
            // width shrinks linearly with depth
            width: (f64::from(self.params.max_depth - depth + 1) * 1.25).max(1.3),
            color: self.params.branch_color,
            start,
            duration,
            depth,
        });

        let end_time = start + duration;

        if depth >= self.params.max_depth {
            self.bloom_cluster(rng, scene, to, end_time);
            return;
        }

        let children = self.child_count(rng, depth);
        let spread = self.child_spread(depth);

        for i in 0..children {
            let t = if children == 1 {
                0.5
            } else {
                i as f64 / (children - 1) as f64
            };
            let offset = (t - 0.5) * spread;
            let child_angle = angle + offset + rng.range(-0.12, 0.12);
            let child_length = length * rng.range(0.66, 0.81);
            let child_start = end_time - rng.range(70.0, 170.0);

            self.build_branch(rng, scene, to, child_length, child_angle, depth + 1, child_start);
        }
    }

    /// Branch-out factor: 2-4, increasing with depth.
    fn child_count(&self, rng: &mut SeededRng, depth: u32) -> usize {
        if depth < 2 {
            2
        } else if depth < 4 {
            if rng.next() > 0.7 {
                3
            } else {
                2
            }
        } else {
            let r = rng.next();
            if r > 0.85 {
                4
            } else if r > 0.45 {
                3
            } else {
                2
            }
        }
    }

    /// Angular spread widens with depth.
    fn child_spread(&self, depth: u32) -> f64 {
        if depth < 2 {
            0.58
        } else if depth < 4 {
            0.85
        } else {
            1.05
        }
    }

    /// Terminal case: a cluster of 3-6 hearts jittered around the branch
    /// tip, each with a staggered start past the segment's completion.
    fn bloom_cluster(&self, rng: &mut SeededRng, scene: &mut Scene, tip: Vec2, branch_end: f64) {
        let count = 3 + (rng.next() * 4.0) as usize;
        let base_start = branch_end + rng.range(70.0, 210.0);

        for i in 0..count {
            let jitter_angle = rng.range(0.0, TAU);
            let jitter_radius = rng.range(0.0, 13.0);

            scene.hearts.push(LeafHeart {
                position: tip + Vec2::polar(jitter_angle, jitter_radius),
                angle: rng.range(-0.4, 0.4),
                size: rng.range(8.4, 12.8),
                start: base_start + i as f64 * rng.range(25.0, 60.0),
                phase: rng.range(0.0, TAU),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LEAF_BLOOM_WINDOW_MS;

    fn build(seed: u32) -> Scene {
        SceneBuilder::new(GrowthParams::default()).build(seed, 800.0, 600.0)
    }

    /// Primary roots start exactly on the ground line; offshoot anchors
    /// always sit below it.
    fn primaries(scene: &Scene) -> Vec<&RootCurve> {
        let base_y = scene.height * GrowthParams::default().base_y_frac;
        scene
            .roots
            .iter()
            .filter(|r| r.curve.p0.y == base_y)
            .collect()
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = build(1);
        let b = build(1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = build(1);
        let b = build(2);
        assert_ne!(a.segments, b.segments);
    }

    #[test]
    fn test_root_fan_count_and_symmetry() {
        let scene = build(1);
        let primaries = primaries(&scene);
        assert_eq!(primaries.len(), 8);

        let center = scene.width * 0.5;
        let left = primaries.iter().filter(|r| r.curve.p2.x < center).count();
        let right = primaries.iter().filter(|r| r.curve.p2.x > center).count();
        assert_eq!(left, 4);
        assert_eq!(right, 4);
    }

    #[test]
    fn test_roots_reach_below_ground_line() {
        let scene = build(5);
        let base_y = scene.height * 0.72;
        for root in &scene.roots {
            assert!(root.curve.p2.y > base_y);
        }
    }

    #[test]
    fn test_all_starts_positive_durations_positive() {
        let scene = build(9);
        for root in &scene.roots {
            assert!(root.start > 0.0);
            assert!(root.duration > 0.0);
        }
        for seg in &scene.segments {
            assert!(seg.start > 0.0);
            assert!(seg.duration > 0.0);
        }
        for heart in &scene.hearts {
            assert!(heart.start > 0.0);
        }
    }

    #[test]
    fn test_timeline_covers_every_element() {
        let scene = build(12);
        let total = scene.total_time();
        for root in &scene.roots {
            assert!(total >= root.end_time());
        }
        for seg in &scene.segments {
            assert!(total >= seg.end_time());
        }
        for heart in &scene.hearts {
            assert!(total >= heart.start + LEAF_BLOOM_WINDOW_MS);
        }
    }

    #[test]
    fn test_segment_durations_clamped() {
        let scene = build(3);
        for seg in &scene.segments {
            assert!((180.0..=760.0).contains(&seg.duration));
        }
    }

    #[test]
    fn test_width_decreases_with_depth() {
        let scene = build(4);
        let trunk = &scene.segments[0];
        assert_eq!(trunk.depth, 0);
        for seg in &scene.segments {
            if seg.depth > 0 {
                assert!(seg.width < trunk.width);
            }
        }
        // terminal segments bottom out at the width floor
        let max_depth = GrowthParams::default().max_depth;
        for seg in scene.segments.iter().filter(|s| s.depth == max_depth) {
            assert_eq!(seg.width, 1.3);
        }
    }

    #[test]
    fn test_recursion_stops_at_max_depth() {
        let scene = build(6);
        let max_depth = GrowthParams::default().max_depth;
        assert!(scene.segments.iter().all(|s| s.depth <= max_depth));
        assert!(scene.segments.iter().any(|s| s.depth == max_depth));

        // terminal tips spawn no further segments
        for terminal in scene.segments.iter().filter(|s| s.depth == max_depth) {
            assert!(!scene.segments.iter().any(|s| s.from == terminal.to));
        }
    }

    #[test]
    fn test_leaf_clusters_only_at_terminals() {
        let scene = build(8);
        let max_depth = GrowthParams::default().max_depth;
        let terminals = scene
            .segments
            .iter()
            .filter(|s| s.depth == max_depth)
            .count();

        assert!(scene.hearts.len() >= terminals * 3);
        assert!(scene.hearts.len() <= terminals * 6);

        // every heart sits close to some terminal tip
        for heart in &scene.hearts {
            let near_terminal = scene
                .segments
                .iter()
                .filter(|s| s.depth == max_depth)
                .any(|s| s.to.distance(&heart.position) <= 13.0 + 1e-9);
            assert!(near_terminal);
        }
    }

    #[test]
    fn test_children_start_before_parent_completes() {
        let scene = build(2);
        // trunk children chain off the trunk tip
        let trunk = &scene.segments[0];
        let children: Vec<_> = scene
            .segments
            .iter()
            .filter(|s| s.depth == 1 && s.from == trunk.to)
            .collect();
        assert!(!children.is_empty());
        for child in children {
            assert!(child.start < trunk.end_time());
            assert!(child.start > trunk.start);
        }
    }

    #[test]
    fn test_offshoots_start_after_anchor_arrival() {
        let scene = build(11);
        let base_y = scene.height * 0.72;
        let primaries: Vec<&RootCurve> = scene
            .roots
            .iter()
            .filter(|r| r.curve.p0.y == base_y)
            .collect();
        let offshoots: Vec<&RootCurve> = scene
            .roots
            .iter()
            .filter(|r| r.curve.p0.y != base_y)
            .collect();
        assert!(!offshoots.is_empty());

        for offshoot in offshoots {
            // the anchor lies exactly on the parent curve; recover the
            // parent and its parameter by sampling every primary
            let anchor = offshoot.curve.p0;
            let (parent, t, dist) = primaries
                .iter()
                .map(|p| {
                    let t = (0..=2000)
                        .map(|i| f64::from(i) / 2000.0)
                        .min_by(|a, b| {
                            let da = p.curve.point_at(*a).distance(&anchor);
                            let db = p.curve.point_at(*b).distance(&anchor);
                            da.partial_cmp(&db).unwrap()
                        })
                        .unwrap();
                    (*p, t, p.curve.point_at(t).distance(&anchor))
                })
                .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap())
                .unwrap();
            assert!(dist < 0.5, "no primary passes through anchor {:?}", anchor);

            // the parent pen covers parametric t only once its eased
            // progress reaches it; the offshoot sprouts at least 30ms later
            let arrival = parent.start + parent.duration * out_cubic_inverse(t);
            assert!(
                offshoot.start >= arrival + 30.0 - 5.0,
                "offshoot starts at {} before parent pen arrives at {}",
                offshoot.start,
                arrival
            );
        }
    }

    #[test]
    fn test_custom_max_depth() {
        let params = GrowthParams {
            max_depth: 3,
            ..Default::default()
        };
        let scene = SceneBuilder::new(params).build(1, 800.0, 600.0);
        assert!(scene.segments.iter().all(|s| s.depth <= 3));
        assert!(!scene.hearts.is_empty());
    }
}
