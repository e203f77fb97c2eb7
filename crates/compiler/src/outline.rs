//! SVG to TrueType outline conversion.
//!
//! Every filled path in the document is flattened into a single quadratic-only
//! [`BezPath`] in font units with the y axis pointing up.

use kurbo::{Affine, BezPath, CubicBez, PathEl, Point};
use usvg::{
    Group, Node, Options, Transform, Tree,
    tiny_skia_path::{self, PathSegment},
};

/// Maximum deviation, in font units, when approximating cubics with quadratics.
const QUAD_ACCURACY: f64 = 0.5;

/// A glyph outline ready for `glyf`.
#[derive(Debug, Clone)]
pub struct IconOutline {
    /// Quadratic-only outline in font units.
    pub path: BezPath,
    /// Horizontal advance in font units.
    pub advance: u16,
}

impl IconOutline {
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// Number of contours (one per subpath).
    pub fn contour_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    /// Upper bound on the number of points the glyph will hold.
    pub fn point_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .map(|el| match el {
                PathEl::MoveTo(_) | PathEl::LineTo(_) => 1,
                PathEl::QuadTo(..) => 2,
                PathEl::CurveTo(..) => 3,
                PathEl::ClosePath => 0,
            })
            .sum()
    }
}

/// Parse SVG markup and extract its filled outline.
///
/// With `normalize` set, the SVG viewport height is scaled to `font_height`;
/// otherwise SVG user units are used as font units.
pub fn outline_from_svg(
    svg: &str,
    font_height: u16,
    normalize: bool,
) -> Result<IconOutline, usvg::Error> {
    let tree = Tree::from_str(svg, &Options::default())?;
    let size = tree.size();
    let (width, height) = (f64::from(size.width()), f64::from(size.height()));

    let scale = if normalize && height > 0.0 { f64::from(font_height) / height } else { 1.0 };
    // SVG is y-down, fonts are y-up with the baseline at the bottom of the viewport.
    let to_font = Affine::new([scale, 0.0, 0.0, -scale, 0.0, height * scale]);

    let mut path = BezPath::new();
    collect_fills(tree.root(), to_font, &mut path);

    let advance = (width * scale).round().clamp(0.0, f64::from(u16::MAX)) as u16;
    Ok(IconOutline { path, advance })
}

fn collect_fills(group: &Group, to_font: Affine, out: &mut BezPath) {
    for node in group.children() {
        match node {
            Node::Group(group) => collect_fills(group, to_font, out),
            Node::Path(path) if path.is_visible() && path.fill().is_some() => {
                let transform = to_font * to_affine(path.abs_transform());
                append_quadratic(path.data(), transform, out);
            }
            _ => {}
        }
    }
}

fn to_affine(ts: Transform) -> Affine {
    Affine::new([
        f64::from(ts.sx),
        f64::from(ts.ky),
        f64::from(ts.kx),
        f64::from(ts.sy),
        f64::from(ts.tx),
        f64::from(ts.ty),
    ])
}

/// Append `data` to `out`, transformed, with cubics split into quadratics.
///
/// Subpaths that never draw (a lone move, or move + close) are dropped.
fn append_quadratic(data: &tiny_skia_path::Path, transform: Affine, out: &mut BezPath) {
    let map = |p: tiny_skia_path::Point| transform * Point::new(f64::from(p.x), f64::from(p.y));

    let mut subpath: Vec<PathEl> = Vec::new();
    let mut current = Point::ZERO;
    let mut start = Point::ZERO;

    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                flush_subpath(&mut subpath, out);
                current = map(p);
                start = current;
                subpath.push(PathEl::MoveTo(current));
            }
            PathSegment::LineTo(p) => {
                ensure_move(&mut subpath, start);
                current = map(p);
                subpath.push(PathEl::LineTo(current));
            }
            PathSegment::QuadTo(p1, p) => {
                ensure_move(&mut subpath, start);
                current = map(p);
                subpath.push(PathEl::QuadTo(map(p1), current));
            }
            PathSegment::CubicTo(p1, p2, p) => {
                ensure_move(&mut subpath, start);
                let cubic = CubicBez::new(current, map(p1), map(p2), map(p));
                for (_, _, quad) in cubic.to_quads(QUAD_ACCURACY) {
                    subpath.push(PathEl::QuadTo(quad.p1, quad.p2));
                }
                current = cubic.p3;
            }
            PathSegment::Close => {
                subpath.push(PathEl::ClosePath);
                flush_subpath(&mut subpath, out);
                current = start;
            }
        }
    }
    flush_subpath(&mut subpath, out);
}

fn ensure_move(subpath: &mut Vec<PathEl>, start: Point) {
    if subpath.is_empty() {
        subpath.push(PathEl::MoveTo(start));
    }
}

fn flush_subpath(subpath: &mut Vec<PathEl>, out: &mut BezPath) {
    let draws = subpath
        .iter()
        .any(|el| !matches!(el, PathEl::MoveTo(_) | PathEl::ClosePath));
    if draws {
        for el in subpath.drain(..) {
            out.push(el);
        }
    } else {
        subpath.clear();
    }
}
