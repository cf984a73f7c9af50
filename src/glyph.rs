//! Bitmap blitting onto the LED matrix.

use core::fmt;

use palette::Srgb;

use crate::{
    framebuffer::FrameBuffer,
    grid::{
        GRID_HEIGHT,
        GRID_WIDTH,
    },
};

/// Side length of the rotatable symbol glyphs.
pub const SYMBOL_SIZE: usize = 12;

/// Immutable row-major 0/1 bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    cells: &'static [u8],
}

impl Bitmap {
    /// Wrap a row-major cell table. Panics at compile time when used in a
    /// `const` whose table length does not match `width * height`.
    #[must_use]
    pub const fn new(width: usize, height: usize, cells: &'static [u8]) -> Self {
        assert!(cells.len() == width * height, "bitmap size mismatch");
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether cell `(column, row)` is set.
    #[must_use]
    pub const fn is_set(&self, column: usize, row: usize) -> bool {
        self.cells[row * self.width + column] == 1
    }

    /// Whether flat cell `index` is set.
    const fn is_set_at(&self, index: usize) -> bool {
        self.cells[index] == 1
    }
}

/// Transform applied by [`draw_bitmap_rotated`].
///
/// `FlipHorizontal` mirrors left↔right and is not the same as `R180`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    R0,
    R90,
    R180,
    FlipHorizontal,
    R270,
}

impl Rotation {
    /// Map a signed angle in degrees. `-180` selects the horizontal flip and
    /// anything unrecognised draws unrotated.
    #[must_use]
    pub const fn from_degrees(degrees: i16) -> Self {
        match degrees {
            90 => Self::R90,
            180 => Self::R180,
            -180 => Self::FlipHorizontal,
            270 => Self::R270,
            _ => Self::R0,
        }
    }

    /// Flat source index for destination cell `(i, j)` of a 12×12 glyph.
    const fn source_index(self, i: usize, j: usize) -> usize {
        const LAST: usize = SYMBOL_SIZE - 1;
        match self {
            Self::R0 => j * SYMBOL_SIZE + i,
            Self::R90 => (LAST - i) * SYMBOL_SIZE + j,
            Self::R180 => (LAST - j) * SYMBOL_SIZE + (LAST - i),
            Self::FlipHorizontal => j * SYMBOL_SIZE + (LAST - i),
            Self::R270 => i * SYMBOL_SIZE + (LAST - j),
        }
    }
}

/// A blit that would land outside the panel or use the wrong glyph shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// The bitmap does not fit on the grid at the requested offset.
    OutOfBounds {
        offset_x: usize,
        offset_y: usize,
        width: usize,
        height: usize,
    },
    /// Rotated drawing only accepts 12×12 symbols.
    NotSquare12 { width: usize, height: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                offset_x,
                offset_y,
                width,
                height,
            } => write!(
                f,
                "{width}x{height} bitmap at ({offset_x}, {offset_y}) exceeds the {GRID_WIDTH}x{GRID_HEIGHT} grid"
            ),
            Self::NotSquare12 { width, height } => {
                write!(f, "rotated glyph must be 12x12, got {width}x{height}")
            }
        }
    }
}

impl core::error::Error for GeometryError {}

const fn check_fits(
    offset_x: usize,
    offset_y: usize,
    width: usize,
    height: usize,
) -> Result<(), GeometryError> {
    let fits_x = offset_x <= GRID_WIDTH && width <= GRID_WIDTH - offset_x;
    let fits_y = offset_y <= GRID_HEIGHT && height <= GRID_HEIGHT - offset_y;
    if fits_x && fits_y {
        Ok(())
    } else {
        Err(GeometryError::OutOfBounds {
            offset_x,
            offset_y,
            width,
            height,
        })
    }
}

/// Draw `bitmap` with its top-left cell at `(offset_x, offset_y)`.
///
/// Only set cells are written; clear cells leave the frame untouched. The
/// whole bitmap must fit on the grid, otherwise nothing is drawn.
pub fn draw_bitmap_offset(
    frame: &mut FrameBuffer,
    bitmap: &Bitmap,
    offset_x: usize,
    offset_y: usize,
    color: Srgb<u8>,
) -> Result<(), GeometryError> {
    check_fits(offset_x, offset_y, bitmap.width, bitmap.height)?;

    for row in 0..bitmap.height {
        for column in 0..bitmap.width {
            if bitmap.is_set(column, row) {
                frame.set_xy(column + offset_x, row + offset_y, color);
            }
        }
    }
    Ok(())
}

/// Draw a 12×12 symbol centred on the grid with the given transform.
pub fn draw_bitmap_rotated(
    frame: &mut FrameBuffer,
    bitmap: &Bitmap,
    rotation: Rotation,
    color: Srgb<u8>,
) -> Result<(), GeometryError> {
    if bitmap.width != SYMBOL_SIZE || bitmap.height != SYMBOL_SIZE {
        return Err(GeometryError::NotSquare12 {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    let offset_x = GRID_WIDTH.saturating_sub(SYMBOL_SIZE) / 2;
    let offset_y = GRID_HEIGHT.saturating_sub(SYMBOL_SIZE) / 2;
    check_fits(offset_x, offset_y, SYMBOL_SIZE, SYMBOL_SIZE)?;

    for j in 0..SYMBOL_SIZE {
        for i in 0..SYMBOL_SIZE {
            if bitmap.is_set_at(rotation.source_index(i, j)) {
                frame.set_xy(i + offset_x, j + offset_y, color);
            }
        }
    }
    Ok(())
}
