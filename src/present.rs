//! Pushing finished frames out to the LEDs.

use core::fmt;

use crate::framebuffer::FrameBuffer;

/// Why a frame did not reach the LEDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresentError {
    /// The transmission could not be started.
    Transmit,
    /// The transmission started but did not complete.
    Transaction,
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transmit => f.write_str("LED transmit could not start"),
            Self::Transaction => f.write_str("LED transaction failed"),
        }
    }
}

impl core::error::Error for PresentError {}

/// A sink for complete frames.
#[allow(async_fn_in_trait)]
pub trait Presenter {
    /// Send every LED of `frame` and latch the result.
    async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), PresentError>;
}

/// How [`present`] disposed of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresentOutcome {
    Shown,
    /// Shown on the second attempt.
    Retried,
    /// Dropped after two failures; the previous frame stays on the LEDs.
    Skipped,
}

/// Flush `frame`, retrying once before giving up on it.
pub async fn present(presenter: &mut impl Presenter, frame: &FrameBuffer) -> PresentOutcome {
    let Err(first) = presenter.flush(frame).await else {
        return PresentOutcome::Shown;
    };
    warn!("flush failed ({}), retrying", first);

    match presenter.flush(frame).await {
        Ok(()) => PresentOutcome::Retried,
        Err(second) => {
            error!("flush failed again ({}), skipping frame", second);
            PresentOutcome::Skipped
        }
    }
}
