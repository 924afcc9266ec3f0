use crate::{
    config::DriverConfig,
    decoder::ScanDecoder,
    keymap::Keymap,
    reporter::{KeySink, Reporter},
};

/// Receive side of the hardware link. Register access stays behind this
/// seam; the service only asks for pending status and bytes.
pub trait UartRx {
    /// Receive interrupt asserted for this line.
    fn irq_pending(&self) -> bool;
    /// Receiver holds at least one byte.
    fn has_data(&self) -> bool;
    fn read_byte(&self) -> u8;
}

/// Lifecycle control for the receiver.
pub trait UartPort: UartRx {
    type Error;

    /// Programs the bit rate and enables reception.
    fn enable(&mut self, divisor: u16) -> Result<(), Self::Error>;

    /// Stops reception. Must be safe to call at any point, including
    /// after a failed `enable`.
    fn disable(&mut self);
}

/// Outcome of one interrupt invocation on a shared line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqStatus {
    Handled,
    NotHandled,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError<E> {
    Uart(E),
}

/// Upper bound on bytes drained per interrupt, in case the line status
/// register wedges with data-ready stuck high.
const MAX_DRAIN: usize = 64;

/// Ties one decoder variant to one receiver and one host sink.
///
/// `on_interrupt` must be driven from a single serialized interrupt
/// handler; the decoder state has no other protection, and interrupts
/// for the line must not nest.
pub struct KeyboardService<U: UartPort, D: ScanDecoder, S: KeySink> {
    uart: U,
    decoder: D,
    keymap: Keymap,
    reporter: Reporter<S>,
}

impl<U: UartPort, D: ScanDecoder, S: KeySink> KeyboardService<U, D, S> {
    /// Takes ownership of the port, installs the translation table and
    /// only then enables reception, so the table is in place before the
    /// first byte can arrive. On failure the port is disabled again
    /// before the error propagates.
    pub fn start(
        mut uart: U,
        decoder: D,
        sink: S,
        config: DriverConfig,
    ) -> Result<Self, SetupError<U::Error>> {
        let DriverConfig { keymap, divisor } = config;

        if let Err(err) = uart.enable(divisor) {
            uart.disable();
            return Err(SetupError::Uart(err));
        }
        crate::info!("keyboard rx enabled, divisor {}", divisor);

        Ok(Self {
            uart,
            decoder,
            keymap,
            reporter: Reporter::new(sink),
        })
    }

    /// Interrupt service routine. Returns [`IrqStatus::NotHandled`]
    /// when no receive interrupt is pending so a shared line can be
    /// offered to the next handler; otherwise drains the receiver,
    /// reporting each decoded event before the next byte is read.
    pub fn on_interrupt(&mut self) -> IrqStatus {
        if !self.uart.irq_pending() {
            return IrqStatus::NotHandled;
        }

        let mut budget = MAX_DRAIN;
        while self.uart.has_data() {
            let byte = self.uart.read_byte();
            if let Some(event) = self.decoder.feed(byte, &self.keymap) {
                self.reporter.report(event);
            }

            budget -= 1;
            if budget == 0 {
                crate::warn!("rx drain budget exhausted; receiver stuck?");
                break;
            }
        }

        IrqStatus::Handled
    }

    /// Disables reception and releases the port. Dropping the service
    /// has the same effect.
    pub fn stop(self) {}
}

impl<U: UartPort, D: ScanDecoder, S: KeySink> Drop for KeyboardService<U, D, S> {
    fn drop(&mut self) {
        self.uart.disable();
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod test;
