//! Board bring-up: pin assignments, clocks, the hardware time base and RNG.
//!
//! The panel hangs off the badge's LED header (power switch on GPIO17, data
//! on GPIO18); the D-pad supplies the four directions.

use esp_hal::{
    Blocking,
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    rmt::{
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    rng::Rng,
    rom,
    time::Rate,
};

use crate::{
    game::Entropy,
    leds::LedMatrix,
    time::Instant,
};

/// StaticCell helper — allocates a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        buttons: ButtonResources<'d> {
            up: GPIO11,
            down: GPIO1,
            left: GPIO21,
            right: GPIO2,
        },
        matrix: MatrixResources<'d> {
            power: GPIO17,
            io: GPIO18,
            rmt: RMT,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Minimal CPU clock switcher for ESP32-S3.
///
/// Steps through an intermediate frequency before reaching the target,
/// which is required by the hardware.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Initialise the hardware and return the raw peripheral set.
///
/// Call this once at the top of `main`, then break the peripherals into
/// resource groups with [`split_resources!`].
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

/// Current time on the game's microsecond time base.
#[must_use]
pub fn now() -> Instant {
    Instant::from_ticks(embassy_time::Instant::now().as_micros())
}

/// Glyph angles from the on-chip true random number generator.
pub struct HardwareEntropy {
    rng: Rng,
}

impl HardwareEntropy {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }
}

impl Default for HardwareEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for HardwareEntropy {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl<'a> From<MatrixResources<'a>> for esp_hal::rmt::Channel<'a, Blocking, Tx> {
    fn from(res: MatrixResources<'a>) -> Self {
        // Switches the LED supply on; the pin must stay driven for the
        // lifetime of the firmware.
        let ws_power = Output::new(res.power, Level::High, OutputConfig::default());
        core::mem::forget(ws_power);
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).unwrap();
        let tx_config = TxChannelConfig::default().with_clk_divider(1);
        rmt.channel0.configure_tx(res.io, tx_config).unwrap()
    }
}

impl<'a> From<MatrixResources<'a>> for LedMatrix<'a> {
    fn from(res: MatrixResources<'a>) -> Self {
        LedMatrix::new(res.into())
    }
}
