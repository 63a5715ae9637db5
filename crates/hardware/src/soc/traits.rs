//! Data bus trait for the MEM stage.
//!
//! The core never interprets data addresses. Bank switching, memory-mapped
//! registers, and I/O live entirely behind this trait, so a host wires in
//! RAM, a callback pair, or a test double.

/// Word-addressed data memory as seen by the MEM stage.
pub trait DataBus {
    /// Reads the word at `addr`.
    fn load(&mut self, addr: u16) -> u16;

    /// Writes `value` to `addr`.
    fn store(&mut self, value: u16, addr: u16);
}

impl<B: DataBus + ?Sized> DataBus for Box<B> {
    fn load(&mut self, addr: u16) -> u16 {
        (**self).load(addr)
    }

    fn store(&mut self, value: u16, addr: u16) {
        (**self).store(value, addr);
    }
}
