use crate::{cartridge::Cartridge, cpu::Cpu, error::Error, input::Button, mmu::Mmu};

/// T-states per frame: 154 scanlines of 456 cycles.
pub const CYCLES_PER_FRAME: u32 = 70224;

/// The whole machine: CPU, bus, and the frame driver that advances them.
///
/// Strictly single-threaded and cooperative; every component is advanced by
/// the integer cycle count the CPU step returns. The host runs frames, reads
/// the framebuffer, and feeds button events at frame boundaries.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    /// Cycle overshoot carried into the next frame so N frames take exactly
    /// N * 70224 T-states.
    frame_cycles: u32,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(),
            frame_cycles: 0,
        }
    }

    /// Construct a machine with a cartridge already inserted.
    pub fn with_cartridge(cart: Cartridge) -> Self {
        let mut gb = Self::new();
        gb.load_cart(cart);
        gb
    }

    pub fn load_cart(&mut self, cart: Cartridge) {
        self.mmu.load_cart(cart);
    }

    /// Advance the machine by one CPU step (an instruction, an interrupt
    /// dispatch, or a halt idle tick) and bring the timer and PPU up to
    /// date. Returns the T-state cost of the step.
    pub fn step(&mut self) -> Result<u32, Error> {
        let cycles = self.cpu.step(&mut self.mmu)?;
        self.mmu.tick(cycles);
        Ok(cycles)
    }

    /// Run one frame's worth of emulated time (70224 T-states).
    pub fn run_frame(&mut self) -> Result<(), Error> {
        while self.frame_cycles < CYCLES_PER_FRAME {
            self.frame_cycles += self.step()?;
        }
        self.frame_cycles -= CYCLES_PER_FRAME;
        Ok(())
    }

    /// The 160x144 ARGB framebuffer, row-major. Complete as of the last
    /// VBlank.
    pub fn framebuffer(&self) -> &[u32] {
        &self.mmu.ppu.framebuffer
    }

    /// Whether a frame has completed since the last call.
    pub fn take_frame_ready(&mut self) -> bool {
        self.mmu.ppu.take_frame_ready()
    }

    /// Apply a press/release edge from the host input producer.
    pub fn button_event(&mut self, button: Button, pressed: bool) {
        self.mmu.input.set_button(button, pressed, &mut self.mmu.if_reg);
    }

    // --- debug surface: read-only snapshots, never mutating ---

    pub fn cpu_snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            a: self.cpu.a,
            f: self.cpu.f,
            b: self.cpu.b,
            c: self.cpu.c,
            d: self.cpu.d,
            e: self.cpu.e,
            h: self.cpu.h,
            l: self.cpu.l,
            pc: self.cpu.pc,
            sp: self.cpu.sp,
            ime: self.cpu.ime,
            halted: self.cpu.halted,
            cycles: self.cpu.cycles,
        }
    }

    pub fn interrupt_snapshot(&self) -> InterruptSnapshot {
        InterruptSnapshot {
            if_reg: self.mmu.if_reg,
            ie_reg: self.mmu.ie_reg,
            ime: self.cpu.ime,
        }
    }

    pub fn vram(&self) -> &[u8] {
        &self.mmu.ppu.vram
    }

    pub fn hram(&self) -> &[u8] {
        &self.mmu.hram
    }

    /// Cumulative T-states executed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cpu.cycles
    }

    /// Copy a byte range out of the bus. Refuses ranges touching the
    /// unusable $FEA0-$FEFF hole.
    pub fn read_range(&self, start: u16, len: usize) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(len);
        for i in 0..len {
            let addr = start
                .checked_add(i as u16)
                .ok_or(Error::BadMemoryAccess { addr: start })?;
            if (0xFEA0..=0xFEFF).contains(&addr) {
                return Err(Error::BadMemoryAccess { addr });
            }
            out.push(self.mmu.read_byte(addr));
        }
        Ok(out)
    }

    /// One-line register dump, matching the CPU's debug format.
    pub fn debug_state(&self) -> String {
        self.cpu.debug_state()
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only CPU register dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub pc: u16,
    pub sp: u16,
    pub ime: bool,
    pub halted: bool,
    pub cycles: u64,
}

/// The interrupt register triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptSnapshot {
    pub if_reg: u8,
    pub ie_reg: u8,
    pub ime: bool,
}
