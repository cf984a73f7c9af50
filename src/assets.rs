//! Built-in glyph tables.
//!
//! Digits are drawn with their top row at the smallest `y`. Symbols are
//! 12×12 and meant for [`draw_bitmap_rotated`](crate::glyph::draw_bitmap_rotated).

use crate::glyph::Bitmap;

/// Arrow pointing left; rotated to ask for a direction.
pub const ARROW_LEFT: Bitmap = Bitmap::new(
    12,
    12,
    &[
        0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
        1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
        0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, //
    ],
);

/// Tick shown after a correct answer.
pub const CHECK: Bitmap = Bitmap::new(
    12,
    12,
    &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, //
        1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, //
        1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, //
        0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, //
        0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    ],
);

/// Cross shown after a wrong answer.
pub const CROSS: Bitmap = Bitmap::new(
    12,
    12,
    &[
        1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, //
        1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, //
        0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, //
        0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, //
        0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, //
        0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, //
        0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, //
        0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, //
        0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 0, //
        1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, //
        1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, //
    ],
);

/// 5×6 digit glyphs, indexed by digit value.
pub const DIGITS_5X6: [Bitmap; 10] = [
    // 0
    Bitmap::new(
        5,
        6,
        &[
            0, 1, 1, 1, 0, //
            1, 0, 0, 0, 1, //
            1, 0, 0, 0, 1, //
            1, 0, 0, 0, 1, //
            1, 0, 0, 0, 1, //
            0, 1, 1, 1, 0, //
        ],
    ),
    // 1
    Bitmap::new(
        5,
        6,
        &[
            0, 0, 1, 0, 0, //
            0, 1, 1, 0, 0, //
            1, 0, 1, 0, 0, //
            0, 0, 1, 0, 0, //
            0, 0, 1, 0, 0, //
            1, 1, 1, 1, 1, //
        ],
    ),
    // 2
    Bitmap::new(
        5,
        6,
        &[
            0, 1, 1, 1, 1, //
            1, 0, 0, 0, 1, //
            0, 0, 0, 1, 0, //
            0, 0, 1, 0, 0, //
            0, 1, 0, 0, 0, //
            1, 1, 1, 1, 1, //
        ],
    ),
    // 3
    Bitmap::new(
        5,
        6,
        &[
            0, 1, 1, 1, 0, //
            1, 0, 0, 0, 1, //
            0, 0, 1, 1, 0, //
            0, 0, 0, 0, 1, //
            1, 0, 0, 0, 1, //
            0, 1, 1, 1, 0, //
        ],
    ),
    // 4
    Bitmap::new(
        5,
        6,
        &[
            0, 0, 0, 1, 0, //
            0, 0, 1, 1, 0, //
            0, 1, 0, 1, 0, //
            1, 1, 1, 1, 1, //
            0, 0, 0, 1, 0, //
            0, 0, 0, 1, 0, //
        ],
    ),
    // 5
    Bitmap::new(
        5,
        6,
        &[
            1, 1, 1, 1, 1, //
            1, 0, 0, 0, 0, //
            1, 1, 1, 1, 0, //
            0, 0, 0, 0, 1, //
            1, 0, 0, 0, 1, //
            0, 1, 1, 1, 0, //
        ],
    ),
    // 6
    Bitmap::new(
        5,
        6,
        &[
            0, 0, 0, 1, 1, //
            0, 0, 1, 0, 0, //
            0, 1, 0, 0, 0, //
            1, 0, 1, 1, 0, //
            1, 0, 0, 0, 1, //
            0, 1, 1, 1, 0, //
        ],
    ),
    // 7
    Bitmap::new(
        5,
        6,
        &[
            1, 1, 1, 1, 1, //
            0, 0, 0, 0, 1, //
            0, 0, 0, 1, 0, //
            0, 0, 1, 0, 0, //
            0, 1, 0, 0, 0, //
            1, 0, 0, 0, 0, //
        ],
    ),
    // 8
    Bitmap::new(
        5,
        6,
        &[
            0, 1, 1, 1, 0, //
            1, 0, 0, 0, 1, //
            0, 1, 1, 1, 0, //
            1, 0, 0, 0, 1, //
            1, 0, 0, 0, 1, //
            0, 1, 1, 1, 0, //
        ],
    ),
    // 9
    Bitmap::new(
        5,
        6,
        &[
            0, 1, 1, 1, 0, //
            1, 0, 0, 0, 1, //
            0, 1, 1, 1, 1, //
            0, 0, 0, 0, 1, //
            0, 0, 0, 1, 0, //
            1, 1, 1, 0, 0, //
        ],
    ),
];

/// 4×6 digit glyphs, indexed by digit value.
pub const DIGITS_4X6: [Bitmap; 10] = [
    // 0
    Bitmap::new(
        4,
        6,
        &[
            0, 1, 1, 0, //
            1, 0, 0, 1, //
            1, 0, 0, 1, //
            1, 0, 0, 1, //
            1, 0, 0, 1, //
            0, 1, 1, 0, //
        ],
    ),
    // 1
    Bitmap::new(
        4,
        6,
        &[
            0, 0, 1, 0, //
            0, 1, 1, 0, //
            1, 0, 1, 0, //
            0, 0, 1, 0, //
            0, 0, 1, 0, //
            1, 1, 1, 1, //
        ],
    ),
    // 2
    Bitmap::new(
        4,
        6,
        &[
            0, 1, 1, 0, //
            1, 0, 0, 1, //
            0, 0, 0, 1, //
            0, 0, 1, 0, //
            0, 1, 0, 0, //
            1, 1, 1, 1, //
        ],
    ),
    // 3
    Bitmap::new(
        4,
        6,
        &[
            1, 1, 1, 0, //
            0, 0, 0, 1, //
            0, 1, 1, 0, //
            0, 0, 0, 1, //
            0, 0, 0, 1, //
            1, 1, 1, 0, //
        ],
    ),
    // 4
    Bitmap::new(
        4,
        6,
        &[
            0, 0, 0, 1, //
            0, 0, 1, 1, //
            0, 1, 0, 1, //
            1, 1, 1, 1, //
            0, 0, 0, 1, //
            0, 0, 0, 1, //
        ],
    ),
    // 5
    Bitmap::new(
        4,
        6,
        &[
            1, 1, 1, 1, //
            1, 0, 0, 0, //
            1, 1, 1, 0, //
            0, 0, 0, 1, //
            1, 0, 0, 1, //
            0, 1, 1, 0, //
        ],
    ),
    // 6
    Bitmap::new(
        4,
        6,
        &[
            0, 0, 1, 1, //
            0, 1, 0, 0, //
            1, 0, 0, 0, //
            1, 1, 1, 0, //
            1, 0, 0, 1, //
            0, 1, 1, 0, //
        ],
    ),
    // 7
    Bitmap::new(
        4,
        6,
        &[
            1, 1, 1, 1, //
            0, 0, 0, 1, //
            0, 0, 1, 0, //
            0, 1, 0, 0, //
            1, 0, 0, 0, //
            1, 0, 0, 0, //
        ],
    ),
    // 8
    Bitmap::new(
        4,
        6,
        &[
            0, 1, 1, 0, //
            1, 0, 0, 1, //
            0, 1, 1, 0, //
            1, 0, 0, 1, //
            1, 0, 0, 1, //
            0, 1, 1, 0, //
        ],
    ),
    // 9
    Bitmap::new(
        4,
        6,
        &[
            0, 1, 1, 0, //
            1, 0, 0, 1, //
            0, 1, 1, 1, //
            0, 0, 0, 1, //
            0, 0, 1, 0, //
            1, 1, 0, 0, //
        ],
    ),
];
