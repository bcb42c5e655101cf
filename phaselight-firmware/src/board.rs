//! Board wiring
//!
//! The peripherals `main` takes are fixed: sensor on PIN_26 (ADC0), lamps
//! on PIN_2..4, sounder on PIN_5 (PWM slice 2, channel B) and diagnostic
//! TX on PIN_0 (UART0). The pin map is the reference wiring from
//! `phaselight-core`; the assertions below keep the two in step.

use phaselight_core::config::{IndicatorConfig, PinMap};
use phaselight_hal_rp2040::adc::AdcChannel;
use phaselight_hal_rp2040::gpio::{GpioAllocator, PinClaimError};
use phaselight_hal_rp2040::pwm::SliceOutput;

/// Reference wiring
pub const PINS: PinMap = IndicatorConfig::DEFAULT.pins;

/// PWM output of the sounder pin
pub const SOUNDER_OUTPUT: SliceOutput = SliceOutput::B;

const _: () = {
    assert!(PINS.sensor == 26, "sensor must be PIN_26");
    assert!(PINS.ascend == 2, "ascend lamp must be PIN_2");
    assert!(PINS.apogee == 3, "apogee lamp must be PIN_3");
    assert!(PINS.descend == 4, "descend lamp must be PIN_4");
    // Odd GPIOs are channel B of their slice
    assert!(PINS.sounder == 5, "sounder must be PIN_5");
    assert!(PINS.diag_tx == 0, "diagnostic TX must be PIN_0");
};

/// Claim every pin in `pins`
///
/// Returns the ADC channel of the sensor pin.
pub fn claim_pins(pins: &PinMap) -> Result<AdcChannel, PinClaimError> {
    let mut allocator = GpioAllocator::new();
    for pin in pins.all() {
        allocator.allocate(pin)?;
    }

    AdcChannel::from_gpio(pins.sensor).ok_or(PinClaimError::NotAnalog(pins.sensor))
}
