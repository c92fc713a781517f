//! 4-connected flood fill over a flat pixel grid.
//!
//! The fill is iterative with an explicit stack. Callers decide which pixels
//! may be entered through a `claim` callback that also records the visit, so
//! every pixel is pushed at most once.

use tracing::debug;

use crate::{error::Result, traits::MaskOperation, types::BinaryMask};

const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Flood fill from `seeds` through 4-connected pixels.
///
/// `claim(index)` must return `true` exactly once for each pixel that may be
/// entered, marking it as taken. `visit(x, y)` is called once per claimed pixel.
pub(crate) fn fill_4_connected<C, V>(
    width: u32,
    height: u32,
    seeds: impl IntoIterator<Item = (u32, u32)>,
    mut claim: C,
    mut visit: V,
) where
    C: FnMut(usize) -> bool,
    V: FnMut(u32, u32),
{
    let index = |x: u32, y: u32| y as usize * width as usize + x as usize;
    let mut stack = Vec::new();

    for (x, y) in seeds {
        if claim(index(x, y)) {
            stack.push((x, y));
        }
    }

    while let Some((cx, cy)) = stack.pop() {
        visit(cx, cy);
        for (dx, dy) in NEIGHBORS {
            let nx = cx as i64 + dx;
            let ny = cy as i64 + dy;
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if claim(index(nx, ny)) {
                stack.push((nx, ny));
            }
        }
    }
}

/// Every pixel on the outer frame of a `width × height` grid
fn border_pixels(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let rows = (0..width).flat_map(move |x| [(x, 0), (x, height.saturating_sub(1))]);
    let cols = (0..height).flat_map(move |y| [(0, y), (width.saturating_sub(1), y)]);
    rows.chain(cols)
}

/// Pixels reachable from the image border without crossing a blocked pixel.
///
/// Blocked border pixels contribute no seed; a fully blocked frame yields an
/// empty mask.
pub fn reachable_from_border(blocked: &BinaryMask) -> BinaryMask {
    let (width, height) = blocked.dimensions();
    let mut outside = BinaryMask::new(width, height);
    if width == 0 || height == 0 {
        return outside;
    }

    let walls = blocked.as_slice();
    let mut reached = vec![false; walls.len()];
    fill_4_connected(
        width,
        height,
        border_pixels(width, height),
        |idx| {
            if walls[idx] || reached[idx] {
                return false;
            }
            reached[idx] = true;
            true
        },
        |x, y| outside.set(x, y, true),
    );
    outside
}

/// Background pixels that cannot be reached from the border: pockets fully
/// enclosed by `walls`
pub fn enclosed_regions(walls: &BinaryMask) -> Result<BinaryMask> {
    let outside = reachable_from_border(walls);
    walls.invert().and_not(&outside)
}

/// Stage mapping a wall mask to its enclosed, non-wall interior
#[derive(Debug, Clone, Default)]
pub struct EnclosedRegions;

impl MaskOperation for EnclosedRegions {
    fn apply(&self, mask: &BinaryMask) -> Result<BinaryMask> {
        let enclosed = enclosed_regions(mask)?;
        debug!(
            walls = mask.count_foreground(),
            enclosed = enclosed.count_foreground(),
            "enclosed regions"
        );
        Ok(enclosed)
    }

    fn describe(&self) -> String {
        "enclosed regions".to_string()
    }
}
