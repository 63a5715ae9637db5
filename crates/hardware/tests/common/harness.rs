use tracing_subscriber::EnvFilter;
use turtle16_core::core::Cpu;
use turtle16_core::soc::{DataBus, Ram};

/// Installs a test-writer subscriber once; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext<B: DataBus = Ram> {
    pub cpu: Cpu<B>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_bus(Ram::default())
    }
}

impl<B: DataBus> TestContext<B> {
    pub fn with_bus(bus: B) -> Self {
        init_tracing();
        Self { cpu: Cpu::new(bus) }
    }

    /// Loads `program` at address 0 and runs the reset sequence.
    pub fn load_program(mut self, program: &[u16]) -> Self {
        self.cpu
            .load_program(program)
            .expect("test program fits instruction memory");
        self.cpu.reset();
        self
    }

    pub fn set_reg(&mut self, reg: usize, val: u16) {
        self.cpu.set_register(reg, val);
    }

    pub fn get_reg(&self, reg: usize) -> u16 {
        self.cpu.get_register(reg)
    }

    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.cpu.step();
        }
    }

    /// Steps `n` cycles, recording the PC after each.
    pub fn pc_trace(&mut self, n: usize) -> Vec<u16> {
        (0..n)
            .map(|_| {
                self.cpu.step();
                self.cpu.pc()
            })
            .collect()
    }

    /// Runs until HLT reaches EX, then steps once more so the instruction
    /// ahead of it in MEM commits.
    pub fn run_to_halt(&mut self, max_cycles: u64) -> bool {
        let halted = self.cpu.run_for(max_cycles);
        if halted {
            self.cpu.step();
        }
        halted
    }
}
