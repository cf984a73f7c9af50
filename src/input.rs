//! Directional input: event type, the single-slot latch the game loop reads,
//! and the async sources that feed it.

use core::cell::Cell;

use embassy_sync::{
    blocking_mutex::{
        Mutex,
        raw::CriticalSectionRawMutex,
    },
    channel::Receiver,
};

use crate::{
    time::Instant,
};

/// One of the four D-pad directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Decode a raw wire code: `0` up, `1` right, `2` down, `3` left.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Up),
            1 => Some(Self::Right),
            2 => Some(Self::Down),
            3 => Some(Self::Left),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}

/// A direction together with the moment it was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub direction: Direction,
    pub at: Instant,
}

#[derive(Clone, Copy)]
struct Slot {
    pending: Option<InputEvent>,
    accept: bool,
}

/// Single-slot mailbox between the input producer and the game loop.
///
/// While the gate is open the first offered event is stored and the gate
/// closes, so at most one input is taken per window. Direction and timestamp
/// are written together inside one critical section.
pub struct InputLatch {
    slot: Mutex<CriticalSectionRawMutex, Cell<Slot>>,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLatch {
    /// A closed, empty latch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(Slot {
                pending: None,
                accept: false,
            })),
        }
    }

    /// Store `event` if the gate is open. Returns whether it was accepted.
    pub fn offer(&self, event: InputEvent) -> bool {
        self.slot.lock(|slot| {
            let mut current = slot.get();
            if !current.accept {
                return false;
            }
            current.pending = Some(event);
            current.accept = false;
            slot.set(current);
            true
        })
    }

    /// Decode and offer a raw direction code. Unknown codes are dropped.
    pub fn offer_code(&self, code: i32, at: Instant) -> bool {
        match Direction::from_code(code) {
            Some(direction) => self.offer(InputEvent { direction, at }),
            None => false,
        }
    }

    /// Remove and return the pending event, if any.
    pub fn take(&self) -> Option<InputEvent> {
        self.slot.lock(|slot| {
            let mut current = slot.get();
            let event = current.pending.take();
            slot.set(current);
            event
        })
    }

    #[must_use]
    pub fn peek(&self) -> Option<InputEvent> {
        self.slot.lock(|slot| slot.get().pending)
    }

    /// Drop anything pending and open the gate.
    pub fn enable(&self) {
        self.reset(true);
    }

    /// Drop anything pending and close the gate.
    pub fn disable(&self) {
        self.reset(false);
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.slot.lock(|slot| slot.get().accept)
    }

    fn reset(&self, accept: bool) {
        self.slot.lock(|slot| {
            slot.set(Slot {
                pending: None,
                accept,
            });
        });
    }
}

/// Anything that produces timestamped direction presses.
#[allow(async_fn_in_trait)]
pub trait InputSource {
    /// Wait for the next press.
    async fn next_event(&mut self) -> InputEvent;
}

/// A raw direction code as delivered by a remote sender.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawInput {
    pub code: i32,
    pub at: Instant,
}

/// Input source backed by a channel of raw codes, such as a wireless
/// receiver callback would fill. Codes outside `0..=3` are skipped.
pub struct CodeInput<'ch, const N: usize> {
    receiver: Receiver<'ch, CriticalSectionRawMutex, RawInput, N>,
}

impl<'ch, const N: usize> CodeInput<'ch, N> {
    #[must_use]
    pub const fn new(receiver: Receiver<'ch, CriticalSectionRawMutex, RawInput, N>) -> Self {
        Self { receiver }
    }
}

impl<const N: usize> InputSource for CodeInput<'_, N> {
    async fn next_event(&mut self) -> InputEvent {
        loop {
            let raw = self.receiver.receive().await;
            match Direction::from_code(raw.code) {
                Some(direction) => {
                    return InputEvent {
                        direction,
                        at: raw.at,
                    };
                }
                None => warn!("ignoring unknown input code {}", raw.code),
            }
        }
    }
}

/// Forward every event from `source` into `latch`. Never returns.
pub async fn pump(source: &mut impl InputSource, latch: &InputLatch) {
    loop {
        let event = source.next_event().await;
        if latch.offer(event) {
            debug!("input {} latched", event.direction.as_str());
        } else {
            debug!("input {} dropped, gate closed", event.direction.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::{
        block_on,
        select::{
            Either,
            select,
        },
    };
    use embassy_sync::channel::Channel;

    use super::*;

    fn at(micros: u64) -> Instant {
        Instant::from_ticks(micros)
    }

    fn press(direction: Direction, micros: u64) -> InputEvent {
        InputEvent {
            direction,
            at: at(micros),
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Direction::from_code(0), Some(Direction::Up));
        assert_eq!(Direction::from_code(3), Some(Direction::Left));
        assert_eq!(Direction::from_code(4), None);
        assert_eq!(Direction::from_code(-1), None);
    }

    #[test]
    fn test_latch_starts_closed() {
        let latch = InputLatch::new();
        assert!(!latch.is_enabled());
        assert!(!latch.offer(press(Direction::Up, 1)));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_latch_accepts_one_event_per_window() {
        let latch = InputLatch::new();
        latch.enable();
        assert!(latch.offer(press(Direction::Up, 10)));
        assert!(!latch.offer(press(Direction::Down, 20)));
        assert!(!latch.is_enabled());

        assert_eq!(latch.peek(), Some(press(Direction::Up, 10)));
        assert_eq!(latch.take(), Some(press(Direction::Up, 10)));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_enable_and_disable_clear_pending() {
        let latch = InputLatch::new();
        latch.enable();
        latch.offer(press(Direction::Left, 5));
        latch.enable();
        assert_eq!(latch.peek(), None);
        assert!(latch.is_enabled());

        latch.offer(press(Direction::Left, 6));
        latch.disable();
        assert_eq!(latch.peek(), None);
        assert!(!latch.is_enabled());
    }

    #[test]
    fn test_offer_code_drops_unknown_codes() {
        let latch = InputLatch::new();
        latch.enable();
        assert!(!latch.offer_code(7, at(1)));
        assert!(latch.is_enabled());
        assert!(latch.offer_code(1, at(2)));
        assert_eq!(latch.take(), Some(press(Direction::Right, 2)));
    }

    #[test]
    fn test_code_input_skips_malformed_codes() {
        let channel: Channel<CriticalSectionRawMutex, RawInput, 4> = Channel::new();
        channel.try_send(RawInput { code: 9, at: at(1) }).unwrap();
        channel.try_send(RawInput { code: -2, at: at(2) }).unwrap();
        channel.try_send(RawInput { code: 2, at: at(3) }).unwrap();

        let mut source = CodeInput::new(channel.receiver());
        let event = block_on(source.next_event());
        assert_eq!(event, press(Direction::Down, 3));
    }

    #[test]
    fn test_pump_latches_first_event() {
        let channel: Channel<CriticalSectionRawMutex, RawInput, 4> = Channel::new();
        channel.try_send(RawInput { code: 0, at: at(100) }).unwrap();
        channel.try_send(RawInput { code: 3, at: at(200) }).unwrap();

        let latch = InputLatch::new();
        latch.enable();
        let mut source = CodeInput::new(channel.receiver());

        // The pump never returns; it parks on the empty channel once both
        // codes are consumed, which lets the second future finish.
        let outcome = block_on(select(pump(&mut source, &latch), async {
            while !channel.is_empty() {
                embassy_futures::yield_now().await;
            }
        }));
        assert!(matches!(outcome, Either::Second(())));
        assert_eq!(latch.take(), Some(press(Direction::Up, 100)));
    }
}
