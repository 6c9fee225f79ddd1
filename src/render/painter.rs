//! Time-driven scene painter.
//!
//! Pure function of `(scene, ambient hearts, elapsed time)`: the same
//! inputs always produce the same op stream. Elements whose start lies in
//! the future are skipped; progress past the end of an element's window
//! clamps to 1, so a fully grown tree keeps rendering (and the hearts
//! keep pulsing) indefinitely.

use crate::animation::{ease, Easing};
use crate::particles::AmbientHeart;
use crate::scene::Scene;

use super::surface::{GradientStop, Surface};

const SKY_STOPS: [GradientStop; 3] = [(0.0, "#fff4ea"), (0.48, "#f8ddd5"), (1.0, "#efc4c1")];
const MOON_COLOR: &str = "#f8e6bb";
const MOON_HALO_COLOR: &str = "#f6e6b04d";
const STAR_COLOR: &str = "#f3d891";
const GROUND_SHADOW_COLOR: &str = "#4f2e2b24";
const GROUND_COLOR: &str = "#c8926d";
const HEART_STOPS: [GradientStop; 2] = [(0.0, "#ffd6e2"), (1.0, "#ff4d86")];
const CROWN_STOPS: [GradientStop; 2] = [(0.0, "#8a5a3f"), (1.0, "#8a5a3f00")];

/// Leaf heart bloom animation length (ms); shorter than the 680 ms
/// timeline window so the overshoot has settled before the scene reports
/// completion.
const BLOOM_MS: f64 = 540.0;

/// Draw one frame in fixed back-to-front order.
pub fn paint<S: Surface>(
    surface: &mut S,
    scene: &Scene,
    ambient: &[AmbientHeart],
    elapsed: f64,
) {
    let (w, h) = (scene.width, scene.height);

    surface.clear(w, h);
    draw_backdrop(surface, w, h);
    draw_ambient_hearts(surface, ambient, elapsed);
    draw_ground(surface, w, h);
    draw_roots(surface, scene, elapsed);
    draw_branches(surface, scene, elapsed);
    draw_crown(surface, scene, elapsed);
    draw_leaf_hearts(surface, scene, elapsed);
}

fn draw_backdrop<S: Surface>(surface: &mut S, w: f64, h: f64) {
    surface.fill_rect_linear_gradient(0.0, 0.0, w, h, 0.0, 0.0, 0.0, h, &SKY_STOPS);

    let moon_x = w * 0.82;
    let moon_y = h * 0.17;

    surface.begin_path();
    surface.circle(moon_x, moon_y, 52.0);
    surface.fill(MOON_COLOR);

    surface.begin_path();
    surface.circle(moon_x, moon_y, 82.0);
    surface.fill(MOON_HALO_COLOR);

    for i in 0..30 {
        let x = (i as f64 * 137.0) % w;
        let y = (i as f64 * 89.0) % (h * 0.35);
        surface.begin_path();
        surface.circle(x + 24.0, y + 24.0, 2.2);
        surface.fill(STAR_COLOR);
    }
}

fn draw_ambient_hearts<S: Surface>(surface: &mut S, ambient: &[AmbientHeart], elapsed: f64) {
    for heart in ambient {
        let life = heart.life(elapsed);
        if !(0.0..1.0).contains(&life) {
            continue;
        }

        let position = heart.position(life);
        surface.set_global_alpha(heart.opacity(life));
        draw_heart(surface, position.x, position.y, heart.size, heart.angle);
    }
    surface.set_global_alpha(1.0);
}

fn draw_ground<S: Surface>(surface: &mut S, w: f64, h: f64) {
    surface.begin_path();
    surface.ellipse(w * 0.5, h * 0.9, w * 0.4, 70.0);
    surface.fill(GROUND_SHADOW_COLOR);

    surface.begin_path();
    surface.move_to(0.0, h * 0.88);
    surface.bezier_to(w * 0.2, h * 0.82, w * 0.34, h * 0.97, w * 0.54, h * 0.89);
    surface.bezier_to(w * 0.74, h * 0.82, w * 0.9, h * 0.98, w, h * 0.9);
    surface.line_to(w, h);
    surface.line_to(0.0, h);
    surface.close_path();
    surface.fill(GROUND_COLOR);
}

fn draw_roots<S: Surface>(surface: &mut S, scene: &Scene, elapsed: f64) {
    for root in &scene.roots {
        if elapsed < root.start {
            continue;
        }

        let raw = ((elapsed - root.start) / root.duration).min(1.0);
        let partial = root.curve.truncated(ease(raw, Easing::OutCubic));

        surface.begin_path();
        surface.move_to(partial.p0.x, partial.p0.y);
        surface.quadratic_to(partial.p1.x, partial.p1.y, partial.p2.x, partial.p2.y);
        surface.stroke(root.color, root.width);
    }
}

fn draw_branches<S: Surface>(surface: &mut S, scene: &Scene, elapsed: f64) {
    for segment in &scene.segments {
        if elapsed < segment.start {
            continue;
        }

        let raw = ((elapsed - segment.start) / segment.duration).min(1.0);
        let tip = segment.from.lerp(&segment.to, ease(raw, Easing::OutCubic));

        surface.begin_path();
        surface.move_to(segment.from.x, segment.from.y);
        surface.line_to(tip.x, tip.y);
        surface.stroke(segment.color, segment.width);
    }
}

/// Soft mound at the trunk base, fading in as the trunk grows.
fn draw_crown<S: Surface>(surface: &mut S, scene: &Scene, elapsed: f64) {
    let Some(trunk) = scene.segments.first() else {
        return;
    };
    if elapsed < trunk.start {
        return;
    }

    let raw = ((elapsed - trunk.start) / trunk.duration).min(1.0);
    let t = ease(raw, Easing::OutCubic);
    let base = trunk.from;

    surface.begin_path();
    surface.ellipse(base.x, base.y + 4.0, 32.0 * t, 11.0 * t);
    surface.fill_radial_gradient(base.x, base.y + 4.0, 0.0, base.x, base.y + 4.0, 34.0 * t, &CROWN_STOPS);
}

fn draw_leaf_hearts<S: Surface>(surface: &mut S, scene: &Scene, elapsed: f64) {
    for heart in &scene.hearts {
        if elapsed < heart.start {
            continue;
        }

        let t = ((elapsed - heart.start) / BLOOM_MS).min(1.0);
        let bloom = ease(t, Easing::OutBack);
        // post-bloom breathing never settles
        let pulse = 1.0 + (elapsed / 520.0 + heart.phase).sin() * 0.045;
        let sway = (elapsed / 850.0 + heart.phase).sin() * 0.16;

        draw_heart(
            surface,
            heart.position.x,
            heart.position.y,
            heart.size * bloom * pulse,
            heart.angle + sway,
        );
    }
}

/// Heart silhouette: two cubic beziers, filled with a radial highlight.
fn draw_heart<S: Surface>(surface: &mut S, x: f64, y: f64, size: f64, angle: f64) {
    surface.save();
    surface.translate(x, y);
    surface.rotate(angle);

    surface.begin_path();
    surface.move_to(0.0, -size * 0.25);
    surface.bezier_to(
        -size * 0.95,
        -size * 1.05,
        -size * 1.48,
        -size * 0.08,
        0.0,
        size,
    );
    surface.bezier_to(
        size * 1.48,
        -size * 0.08,
        size * 0.95,
        -size * 1.05,
        0.0,
        -size * 0.25,
    );
    surface.close_path();
    surface.fill_radial_gradient(
        -size * 0.25,
        -size * 0.35,
        size * 0.2,
        0.0,
        0.0,
        size * 1.2,
        &HEART_STOPS,
    );

    surface.restore();
}
