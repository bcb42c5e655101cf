//! Force sensor trait

use crate::phase::RawReading;

/// Trait for the force sensor feeding the classifier
///
/// Reads are infallible from the loop's point of view. A failed conversion
/// must be mapped to some reading (typically zero); it is not reported.
pub trait ForceSensor {
    /// Sample the sensor once, in its native units
    fn read_raw(&mut self) -> RawReading;
}
