//! D-pad input with async debouncing.

use embassy_futures::select::select_array;
use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    board::{
        ButtonResources,
        now,
    },
    input::{
        Direction,
        InputEvent,
        InputSource,
    },
    time::Instant,
};

/// The four badge D-pad buttons, active low.
pub struct DpadButtons {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub left: Input<'static>,
    pub right: Input<'static>,
}

const DEBOUNCE_MS: u64 = 20;

impl From<ButtonResources<'static>> for DpadButtons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            up: Input::new(res.up, pull_up),
            down: Input::new(res.down, pull_up),
            left: Input::new(res.left, pull_up),
            right: Input::new(res.right, pull_up),
        }
    }
}

impl DpadButtons {
    /// Wait for a debounced button press (falling edge, active low).
    ///
    /// Returns the time of the edge, not the end of the debounce delay, so
    /// reaction times are not inflated by it.
    pub async fn debounce_press(button: &mut Input<'_>) -> Instant {
        loop {
            button.wait_for_falling_edge().await;
            let pressed_at = now();
            Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
            if button.is_low() {
                return pressed_at;
            }
        }
    }
}

impl InputSource for DpadButtons {
    async fn next_event(&mut self) -> InputEvent {
        let (at, index) = select_array([
            Self::debounce_press(&mut self.up),
            Self::debounce_press(&mut self.right),
            Self::debounce_press(&mut self.down),
            Self::debounce_press(&mut self.left),
        ])
        .await;

        let direction = match index {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        };
        InputEvent { direction, at }
    }
}
