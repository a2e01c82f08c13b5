//! Simple encoder demo
//!
//! Runs the quadrature decoder on the Raspberry Pi Pico 2. The encoder
//! task sleeps until either channel changes, reads the delta, and logs a
//! running value via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                         |
//! |-----------|------------|-------------------------------|
//! | ENC A     | GP16       | Pull-up per `EncoderConfig`   |
//! | ENC B     | GP17       | Pull-up per `EncoderConfig`   |
//! | ENC COM   | GND        |                               |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use {defmt_rtt as _, panic_probe as _};

use quadrature_encoder::{EmbassyClock, Encoder, EncoderConfig, Resolution};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Four events per click; the detent step is ×4 when detents are at most
/// 50 ms apart.
const CONFIG: EncoderConfig = EncoderConfig::new()
    .resolution(Resolution::High)
    .pull_up(true)
    .fast_mode(50, 4);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder channels (GP16 = A, GP17 = B) ---
    let pull = if CONFIG.pull_up { Pull::Up } else { Pull::None };
    let pin_a = Input::new(p.PIN_16, pull);
    let pin_b = Input::new(p.PIN_17, pull);

    let mut encoder = Encoder::new(pin_a, pin_b, EmbassyClock, CONFIG)
        .expect("Failed to read encoder pins");

    info!(
        "Encoder demo started in {} resolution — rotate the knob to see value changes",
        encoder.resolution()
    );

    let mut value: i32 = 0;

    // Main loop: sleep until either channel changes, decode, log, repeat.
    loop {
        if let Err(e) = encoder.wait_for_change().await {
            warn!("Failed to wait for encoder edge: {}", e);
            continue;
        }

        match encoder.delta_value() {
            Ok(0) => {}
            Ok(delta) => {
                value = value.saturating_add(delta);
                debug!("delta={} phase={}", delta, encoder.phase());
                info!("Value: {}", value);
            }
            Err(e) => error!("Encoder read failed: {}", e),
        }
    }
}
