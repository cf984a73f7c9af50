//! WS2812 matrix driver using the RMT peripheral.

extern crate alloc;

use alloc::vec::Vec;

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};

use crate::{
    framebuffer::FrameBuffer,
    grid::STRIP_LENGTH,
    present::{
        PresentError,
        Presenter,
    },
};

/// Pulses for one full frame: 24 bits per LED plus the end marker.
const FRAME_PULSES: usize = STRIP_LENGTH * 24 + 1;

/// WS2812 strip of [`STRIP_LENGTH`] LEDs folded into the 16×16 panel.
///
/// The pulse buffer is allocated once and refilled on every flush.
pub struct LedMatrix<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    pulses: Vec<PulseCode>,
}

impl<'a> LedMatrix<'a> {
    pub fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            pulses: Vec::with_capacity(FRAME_PULSES),
        }
    }

    fn encode(&mut self, frame: &FrameBuffer) {
        self.pulses.clear();
        for color in frame.pixels() {
            // WS2812 expects GRB byte order
            for byte in [color.green, color.red, color.blue] {
                self.pulses.extend_from_slice(&byte_to_pulses(byte));
            }
        }
        self.pulses.push(PulseCode::end_marker());
    }
}

impl Presenter for LedMatrix<'_> {
    async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), PresentError> {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return Err(PresentError::Transmit);
        };

        self.encode(frame);

        let transaction = match channel.transmit(&self.pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return Err(PresentError::Transmit);
            }
        };

        let result = match transaction.wait() {
            Ok(ch) => {
                self.channel = Some(ch);
                Ok(())
            }
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                self.channel = Some(ch);
                Err(PresentError::Transaction)
            }
        };

        // WS2812 reset time
        Timer::after(Duration::from_micros(50)).await;
        result
    }
}

/// WS2812 bit timing at 40 MHz RMT clock.
const fn bit_to_pulse(bit: bool) -> PulseCode {
    if bit {
        // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
        PulseCode::new(Level::High, 32, Level::Low, 18)
    } else {
        // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
        PulseCode::new(Level::High, 16, Level::Low, 34)
    }
}

fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
    let mut pulses = [PulseCode::default(); 8];
    for (i, pulse) in pulses.iter_mut().enumerate() {
        *pulse = bit_to_pulse((byte >> (7 - i)) & 1 != 0);
    }
    pulses
}
