//! Diagnostic UART transmit task
//!
//! Writes one text line per reported tick to the diagnostic UART.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use phaselight_core::diag;

use crate::channels::DIAG_CHANNEL;

/// Diagnostic TX task - renders tick outcomes and writes them out
#[embassy_executor::task]
pub async fn diag_task(mut tx: BufferedUartTx<'static, UART0>) {
    info!("Diagnostic TX task started");

    loop {
        let outcome = DIAG_CHANNEL.receive().await;

        let line = match diag::render(&outcome) {
            Ok(line) => line,
            Err(_) => {
                warn!("Diagnostic line for tick {} too long", outcome.tick);
                continue;
            }
        };

        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("Failed to write diagnostic line: {:?}", e);
        }
    }
}
