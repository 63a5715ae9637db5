//! Callback-driven data bus.
//!
//! Routes every MEM-stage access to a pair of host closures. This is how a
//! host that owns its own memory map (banked RAM, devices, a debugger's
//! watchpoints) plugs into the core without implementing [`DataBus`] itself.

use std::fmt;

use super::traits::DataBus;

type LoadFn = Box<dyn FnMut(u16) -> u16 + Send>;
type StoreFn = Box<dyn FnMut(u16, u16) + Send>;

/// A data bus backed by host-supplied `load` and `store` closures.
///
/// The default bus reads every address as zero and discards stores.
pub struct CallbackBus {
    load: LoadFn,
    store: StoreFn,
}

impl CallbackBus {
    /// Creates a bus from a load and a store closure.
    ///
    /// # Arguments
    ///
    /// * `load`  - Called with the address; returns the word read.
    /// * `store` - Called with the value and the address, in that order.
    pub fn new(
        load: impl FnMut(u16) -> u16 + Send + 'static,
        store: impl FnMut(u16, u16) + Send + 'static,
    ) -> Self {
        Self {
            load: Box::new(load),
            store: Box::new(store),
        }
    }

    /// Replaces the load closure.
    pub fn set_load(&mut self, load: impl FnMut(u16) -> u16 + Send + 'static) {
        self.load = Box::new(load);
    }

    /// Replaces the store closure.
    pub fn set_store(&mut self, store: impl FnMut(u16, u16) + Send + 'static) {
        self.store = Box::new(store);
    }
}

impl Default for CallbackBus {
    fn default() -> Self {
        Self::new(|_| 0, |_, _| {})
    }
}

impl fmt::Debug for CallbackBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackBus").finish_non_exhaustive()
    }
}

impl DataBus for CallbackBus {
    fn load(&mut self, addr: u16) -> u16 {
        (self.load)(addr)
    }

    fn store(&mut self, value: u16, addr: u16) {
        (self.store)(value, addr);
    }
}
