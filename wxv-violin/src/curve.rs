//! Closed area paths smoothed with a centripetal Catmull-Rom spline.
//!
//! The spline passes through every point and is emitted as cubic Bézier
//! segments, so the resulting `d` attribute works in any SVG renderer.

use std::fmt::Write;

const ALPHA: f64 = 0.5;
const EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One sample of an area: left edge `x0`, right edge `x1`, at height `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaPoint {
    pub x0: f64,
    pub x1: f64,
    pub y: f64,
}

/// SVG path data accumulator.
#[derive(Debug, Default)]
struct PathData {
    d: String,
}

impl PathData {
    fn move_to(&mut self, p: Point) {
        let _ = write!(self.d, "M{},{}", num(p.x), num(p.y));
    }

    fn line_to(&mut self, p: Point) {
        let _ = write!(self.d, "L{},{}", num(p.x), num(p.y));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        let _ = write!(
            self.d,
            "C{},{},{},{},{},{}",
            num(c1.x),
            num(c1.y),
            num(c2.x),
            num(c2.y),
            num(p.x),
            num(p.y)
        );
    }

    fn close(&mut self) {
        self.d.push('Z');
    }
}

/// Compact number formatting: three decimals at most, no trailing zeros.
fn num(v: f64) -> String {
    let text = format!("{:.3}", v);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" || text.is_empty() {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// `|a - b|^alpha` and its square root.
fn chord(a: Point, b: Point) -> (f64, f64) {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let l2a = (dx * dx + dy * dy).powf(ALPHA);
    (l2a, l2a.sqrt())
}

/// Bézier control points for the segment `p1 -> p2`, given the
/// neighbours on either side when they exist.
fn segment_controls(p0: Option<Point>, p1: Point, p2: Point, p3: Option<Point>) -> (Point, Point) {
    let (l12_2a, l12_a) = chord(p1, p2);

    let mut c1 = p1;
    if let Some(p0) = p0 {
        let (l01_2a, l01_a) = chord(p0, p1);
        if l01_a > EPSILON {
            let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
            let n = 3.0 * l01_a * (l01_a + l12_a);
            c1 = Point::new(
                (p1.x * a - p0.x * l12_2a + p2.x * l01_2a) / n,
                (p1.y * a - p0.y * l12_2a + p2.y * l01_2a) / n,
            );
        }
    }

    let mut c2 = p2;
    if let Some(p3) = p3 {
        let (l23_2a, l23_a) = chord(p2, p3);
        if l23_a > EPSILON {
            let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
            let m = 3.0 * l23_a * (l23_a + l12_a);
            c2 = Point::new(
                (p2.x * b + p1.x * l23_2a - p3.x * l12_2a) / m,
                (p2.y * b + p1.y * l23_2a - p3.y * l12_2a) / m,
            );
        }
    }

    (c1, c2)
}

/// Append a smooth line through `points`. The first point is a move when
/// `connect` is false and a straight line from the current point otherwise.
fn catmull_rom_line(path: &mut PathData, points: &[Point], connect: bool) {
    let Some(&first) = points.first() else {
        return;
    };
    if connect {
        path.line_to(first);
    } else {
        path.move_to(first);
    }
    match points.len() {
        1 => {}
        2 => path.line_to(points[1]),
        n => {
            for i in 0..n - 1 {
                let p0 = i.checked_sub(1).map(|j| points[j]);
                let p3 = points.get(i + 2).copied();
                let (c1, c2) = segment_controls(p0, points[i], points[i + 1], p3);
                path.curve_to(c1, c2, points[i + 1]);
            }
        }
    }
}

/// SVG path for a closed area: the right edge (`x1`) in order, then the
/// left edge (`x0`) in reverse, both smoothed. Empty input gives an empty
/// string.
pub fn area_path(points: &[AreaPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let right: Vec<Point> = points.iter().map(|p| Point::new(p.x1, p.y)).collect();
    let left: Vec<Point> = points.iter().rev().map(|p| Point::new(p.x0, p.y)).collect();

    let mut path = PathData::default();
    catmull_rom_line(&mut path, &right, false);
    catmull_rom_line(&mut path, &left, true);
    path.close();
    path.d
}
