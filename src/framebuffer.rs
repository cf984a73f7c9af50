//! In-memory frame for the LED matrix, indexed by strip position.

use palette::Srgb;

use crate::grid::{
    STRIP_LENGTH,
    xy_to_strip,
};

/// All LEDs off.
pub const OFF: Srgb<u8> = Srgb::new(0, 0, 0);

/// One RGB triple per LED, in strip order.
///
/// The game loop owns the frame and redraws it every tick; a presenter only
/// borrows it for the duration of a flush.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pixels: [Srgb<u8>; STRIP_LENGTH],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; STRIP_LENGTH],
        }
    }

    /// Overwrite the LED at strip position `index`.
    pub const fn set_index_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.pixels[index] = Srgb::new(r, g, b);
    }

    /// Overwrite the LED at logical cell `(x, y)`.
    pub const fn set_xy_rgb(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8) {
        self.set_index_rgb(xy_to_strip(x, y), r, g, b);
    }

    /// Overwrite the LED at strip position `index`.
    pub const fn set_index(&mut self, index: usize, color: Srgb<u8>) {
        self.pixels[index] = color;
    }

    /// Overwrite the LED at logical cell `(x, y)`.
    pub const fn set_xy(&mut self, x: usize, y: usize, color: Srgb<u8>) {
        self.set_index(xy_to_strip(x, y), color);
    }

    /// Turn every LED off.
    pub fn clear(&mut self) {
        self.pixels.fill(OFF);
    }

    /// Color of the LED at strip position `index`.
    #[must_use]
    pub const fn get(&self, index: usize) -> Srgb<u8> {
        self.pixels[index]
    }

    /// Color of the LED at logical cell `(x, y)`.
    #[must_use]
    pub const fn get_xy(&self, x: usize, y: usize) -> Srgb<u8> {
        self.get(xy_to_strip(x, y))
    }

    /// The whole frame in strip order, ready to be shifted out.
    #[must_use]
    pub const fn pixels(&self) -> &[Srgb<u8>; STRIP_LENGTH] {
        &self.pixels
    }

    /// Number of LEDs that are not off.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != OFF).count()
    }
}
