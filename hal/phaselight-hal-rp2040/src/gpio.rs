//! GPIO allocation and management
//!
//! Tracks which GPIO pins are in use to prevent conflicts.

use heapless::FnvIndexSet;

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Why a pin could not be claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinClaimError {
    /// Pin number does not exist on this chip
    NoSuchPin(u8),
    /// Pin already claimed by another function
    AlreadyClaimed(u8),
    /// Pin cannot be used for analog input
    NotAnalog(u8),
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinClaimError> {
        if pin >= GPIO_COUNT as u8 {
            return Err(PinClaimError::NoSuchPin(pin));
        }
        if self.allocated.contains(&pin) {
            return Err(PinClaimError::AlreadyClaimed(pin));
        }
        self.allocated
            .insert(pin)
            .map_err(|_| PinClaimError::NoSuchPin(pin))?;
        Ok(())
    }
}
