//! Value-handle trait for simulator arguments.
//!
//! A host simulator hands a system task one handle per positional argument.
//! The adapter only ever needs integer-format reads and immediate writes, so
//! that is all this trait asks for. Implementors wrap whatever the host uses
//! (a VPI handle, a cocotb signal, a plain in-memory [`Signal`](super::Signal)).

/// A readable and writable simulator value.
pub trait ValueHandle {
    /// Reads the current value in integer format.
    fn get_value(&self) -> u32;

    /// Writes `value` immediately, with no simulated propagation delay.
    fn put_value(&mut self, value: u32);
}
