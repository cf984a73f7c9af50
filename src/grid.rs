//! LED matrix geometry.
//!
//! The panel is a single WS2812 strip folded into columns (serpentine,
//! column-major). Strip position 0 is logical cell `(0, 0)`; even columns
//! run with increasing `y` and odd columns run back.

/// Number of columns on the panel.
pub const GRID_WIDTH: usize = 16;

/// Number of rows on the panel.
pub const GRID_HEIGHT: usize = 16;

/// Number of LEDs on the strip.
pub const STRIP_LENGTH: usize = GRID_WIDTH * GRID_HEIGHT;

/// Map a logical cell to its position on the strip.
///
/// Callers must keep `x < GRID_WIDTH` and `y < GRID_HEIGHT`; this is only
/// checked in debug builds.
#[must_use]
pub const fn xy_to_strip(x: usize, y: usize) -> usize {
    debug_assert!(x < GRID_WIDTH && y < GRID_HEIGHT);
    serpentine_index(x, y, GRID_HEIGHT)
}

/// Serpentine column-major index for a grid `height` cells tall.
#[must_use]
pub const fn serpentine_index(x: usize, y: usize, height: usize) -> usize {
    let flipped = height - 1 - y;
    if x & 1 == 0 {
        x * height + (height - 1 - flipped)
    } else {
        x * height + flipped
    }
}

/// Visit every cell of a `width × height` grid along an anti-clockwise
/// spiral that starts at `(0, 0)` and winds inward.
///
/// Each ring is walked bottom edge left→right, right edge upward, top edge
/// right→left and left edge downward, shrinking the bounds after every edge.
pub fn spiral_walk(width: usize, height: usize, mut visit: impl FnMut(usize, usize)) {
    let total = width * height;
    if total == 0 {
        return;
    }

    let mut emitted = 0;
    let mut emit = |x: usize, y: usize| {
        if emitted < total {
            visit(x, y);
            emitted += 1;
        }
    };

    // Bounds are inclusive; signed so that an exhausted side can cross over.
    let (mut x_min, mut x_max) = (0_isize, width as isize - 1);
    let (mut y_min, mut y_max) = (0_isize, height as isize - 1);

    while x_min <= x_max && y_min <= y_max {
        for x in x_min..=x_max {
            emit(x as usize, y_min as usize);
        }
        y_min += 1;

        for y in y_min..=y_max {
            emit(x_max as usize, y as usize);
        }
        x_max -= 1;

        if y_min <= y_max {
            for x in (x_min..=x_max).rev() {
                emit(x as usize, y_max as usize);
            }
            y_max -= 1;
        }

        if x_min <= x_max {
            for y in (y_min..=y_max).rev() {
                emit(x_min as usize, y as usize);
            }
            x_min += 1;
        }
    }
}

/// Strip positions in spiral visiting order, computed once at start-up.
#[derive(Clone)]
pub struct SpiralOrder {
    order: [u16; STRIP_LENGTH],
}

impl SpiralOrder {
    /// Walk the panel and record the strip index of every spiral step.
    #[must_use]
    pub fn build() -> Self {
        let mut order = [0_u16; STRIP_LENGTH];
        let mut step = 0;
        spiral_walk(GRID_WIDTH, GRID_HEIGHT, |x, y| {
            order[step] = xy_to_strip(x, y) as u16;
            step += 1;
        });
        Self { order }
    }

    /// Strip index of spiral step `step`.
    #[must_use]
    pub const fn strip_index(&self, step: usize) -> usize {
        self.order[step] as usize
    }

    /// Number of steps in the spiral, one per LED.
    #[must_use]
    pub const fn len(&self) -> usize {
        STRIP_LENGTH
    }

    /// Always `false`; the spiral covers the whole panel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The full visiting order.
    #[must_use]
    pub const fn as_slice(&self) -> &[u16] {
        &self.order
    }
}
