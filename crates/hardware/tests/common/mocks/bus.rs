use mockall::mock;
use turtle16_core::soc::DataBus;

mock! {
    pub Bus {}
    impl DataBus for Bus {
        fn load(&mut self, addr: u16) -> u16;
        fn store(&mut self, value: u16, addr: u16);
    }
}

/// A bus that rejects every access; for tests that must not touch data memory.
pub fn silent_bus() -> MockBus {
    let mut bus = MockBus::new();
    let _ = bus.expect_load().never();
    let _ = bus.expect_store().never();
    bus
}
