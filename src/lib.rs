//! # timesup
//!
//! A reaction-time game for a 16×16 WS2812 LED matrix.
//!
//! An arrow appears at one of four angles and the player answers with the
//! matching D-pad direction. Correct answers score and bank their reaction
//! time; the round ends once the banked time plus the running answer window
//! reaches the limit. A spiral progress bar winds inward as time is used.
//!
//! The game core (geometry, rendering, state machine) is plain `no_std` code
//! and runs on the host. Hardware support lives behind the `board` feature:
//!
//! - **Matrix**: 256 WS2812 LEDs via RMT, implementing [`Presenter`]
//! - **Buttons**: debounced D-pad, implementing [`InputSource`]
//! - **Entropy**: on-chip RNG for glyph angles
//!
//! ## Quick start
//!
//! ```rust,ignore
//! static INPUT: InputLatch = InputLatch::new();
//!
//! let peripherals = timesup::init();
//! let resources = timesup::split_resources!(peripherals);
//!
//! let mut matrix: LedMatrix = resources.matrix.into();
//! let mut controller = GameController::new(GameConfig::DEFAULT, &INPUT, timesup::now());
//! loop {
//!     let frame = controller.tick(timesup::now(), &mut entropy);
//!     present(&mut matrix, frame).await;
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod assets;
pub mod color;
pub mod config;
pub mod controller;
pub mod digits;
pub mod framebuffer;
pub mod game;
pub mod glyph;
pub mod grid;
pub mod input;
pub mod present;
pub mod progress;
pub mod render;
pub mod time;

#[cfg(feature = "board")]
mod board;
#[cfg(feature = "board")]
mod buttons;
#[cfg(feature = "board")]
mod leds;

#[cfg(feature = "board")]
pub use board::{
    ButtonResources,
    HardwareEntropy,
    MatrixResources,
    Resources,
    init,
    now,
};
#[cfg(feature = "board")]
pub use buttons::DpadButtons;
pub use config::GameConfig;
pub use controller::GameController;
pub use framebuffer::FrameBuffer;
pub use game::{
    Entropy,
    GameState,
    Phase,
};
pub use input::{
    Direction,
    InputEvent,
    InputLatch,
    InputSource,
};
#[cfg(feature = "board")]
pub use leds::LedMatrix;
pub use present::{
    PresentError,
    Presenter,
    present,
};
