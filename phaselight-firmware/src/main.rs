//! Phaselight - Flight Phase Indicator Firmware
//!
//! Main firmware binary for RP2040-based indicator boards. Samples a force
//! sensor, classifies ascent, apogee and descent from the change between
//! samples, and shows the phase on three lamps with a sounder pulse at
//! apogee.

#![no_std]
#![no_main]

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use phaselight_core::config::IndicatorConfig;
use phaselight_core::phase::PhaseController;
use phaselight_drivers::indicator::{GpioLamp, PhaseIndicator, PhaseLamps};
use phaselight_drivers::sensor::AnalogForceSensor;
use phaselight_hal::EhOutput;
use phaselight_hal_rp2040::adc::BlockingAdcInput;
use phaselight_hal_rp2040::pwm::PwmBeeper;

use crate::channels::TRANSITIONS;
use crate::config::CONFIG;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Phaselight firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Pin assignments are board-specific (see board.rs)
    let sensor_channel = match board::claim_pins(&config.pins) {
        Ok(channel) => channel,
        Err(e) => {
            error!("Pin map rejected: {}", e);
            halt().await
        }
    };
    info!("Pins claimed, force sensor on {}", sensor_channel);

    // Setup diagnostic UART (TX only, RX pin left unused)
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.diagnostics.baud_rate;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    info!("UART initialized at {} baud", config.diagnostics.baud_rate);

    // Setup ADC for the force sensor (GPIO26 / ADC0)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let sensor_pin = Channel::new_pin(p.PIN_26, Pull::None);
    let sensor = AnalogForceSensor::new(BlockingAdcInput::new(adc, sensor_pin));

    info!("ADC initialized");

    // Setup indicator lamps (GPIO2-4)
    let active_low = config.lamps.active_low;
    let lamps = PhaseLamps {
        ascend: GpioLamp::new(EhOutput::new(Output::new(p.PIN_2, Level::Low)), active_low),
        apogee: GpioLamp::new(EhOutput::new(Output::new(p.PIN_3, Level::Low)), active_low),
        descend: GpioLamp::new(EhOutput::new(Output::new(p.PIN_4, Level::Low)), active_low),
    };

    // Setup sounder PWM (GPIO5 is slice 2, channel B)
    let pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_5, PwmConfig::default());
    let beeper = PwmBeeper::new(pwm, board::SOUNDER_OUTPUT);

    info!("Lamps and sounder initialized");

    let indicator = PhaseIndicator::new(lamps, tasks::board_sounder(), config.sounder);
    let controller = PhaseController::new(indicator, config.classifier.noise_threshold);

    let phase_config = tasks::PhaseTaskConfig {
        tick_period_ms: config.classifier.tick_period_ms,
        diagnostics: config.diagnostics.enabled,
        verbose: config.diagnostics.verbose,
    };

    // Spawn tasks
    spawner.spawn(tasks::sounder_task(beeper)).unwrap();
    if config.diagnostics.enabled {
        spawner.spawn(tasks::diag_task(tx)).unwrap();
    }
    spawner
        .spawn(tasks::phase_task(sensor, controller, phase_config))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!(
            "Main loop heartbeat, {} transitions",
            TRANSITIONS.load(Ordering::Relaxed)
        );
    }
}

/// Check the build-time configuration
///
/// `build.rs` already rejects out-of-range values, so a failure here means
/// the generated constant and the core checks disagree. Falls back to the
/// reference configuration.
fn load_config() -> IndicatorConfig {
    match CONFIG.validate() {
        Ok(()) => {
            info!("Configuration: {}", CONFIG);
            CONFIG
        }
        Err(e) => {
            error!("Invalid configuration: {}", e);
            error!("Using reference configuration");
            IndicatorConfig::DEFAULT
        }
    }
}

/// Park the firmware with every output untouched
async fn halt() -> ! {
    loop {
        embassy_time::Timer::after_secs(60).await;
        error!("Firmware halted, check the board pin map");
    }
}
