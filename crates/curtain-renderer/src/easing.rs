//! Easing curves for overlay motion.

/// Curve of the overlay's exit (fade, scale, blur).
pub const EXIT_CURVE: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

/// Curve of the title reveal and its letter-spacing settle.
pub const REVEAL_CURVE: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);

/// Symmetric ease used by the looping background glow.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Curve of the status indicator's breathing pulse.
pub const PULSE_CURVE: CubicBezier = CubicBezier::new(0.4, 0.0, 0.6, 1.0);

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
///
/// End points are fixed at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x` (clamped to 0.0–1.0).
    pub fn ease(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t(x);
        bezier(t, self.y1, self.y2)
    }

    /// Curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-6;

        let mut t = x;
        for _ in 0..8 {
            let err = bezier(t, self.x1, self.x2) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = bezier_slope(t, self.x1, self.x2);
            if slope.abs() < EPSILON {
                break;
            }
            t -= err / slope;
        }

        // Newton stalled; x(t) is monotonic on [0, 1] for valid curves.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = bezier(t, self.x1, self.x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Smooth ease-out cubic.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Position within a looping animation: 0 -> 1 -> 0 over one `period`.
///
/// `curve` shapes both halves of the loop.
pub fn ping_pong(elapsed: f32, period: f32, curve: CubicBezier) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    let cycle = (elapsed / period).rem_euclid(1.0);
    let half = if cycle < 0.5 {
        cycle * 2.0
    } else {
        (1.0 - cycle) * 2.0
    };
    curve.ease(half)
}

/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
