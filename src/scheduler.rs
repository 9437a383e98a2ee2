// Scheduler module - interleaves CPU, PPU, and APU at the NES master-clock ratio
//
// The PPU runs at exactly three times the CPU rate and the APU at the CPU
// rate. This module drives the "drive-by-CPU" model described by the core:
// execute one CPU instruction, then advance PPU and APU by the cycle count
// that instruction consumed (including any OAMDMA stall), sampling NMI/IRQ
// only at instruction boundaries.

use crate::bus::Bus;
use crate::cpu::Cpu;

/// PPU dots per CPU cycle under NTSC timing
const PPU_CYCLES_PER_CPU_CYCLE: u32 = 3;

/// Drives the CPU/PPU/APU trio forward in lockstep.
///
/// Holds no NES state itself; it only sequences calls against a `Cpu` and
/// `Bus` supplied by the caller, so it can be dropped and recreated freely
/// (e.g. across a ROM reload) without losing emulation state.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Total CPU cycles elapsed since the scheduler was created
    total_cpu_cycles: u64,
}

impl Scheduler {
    /// Create a new scheduler with a zeroed cycle counter
    pub fn new() -> Self {
        Self {
            total_cpu_cycles: 0,
        }
    }

    /// Total CPU cycles run through this scheduler so far
    pub fn total_cpu_cycles(&self) -> u64 {
        self.total_cpu_cycles
    }

    /// Execute exactly one CPU instruction and catch up the PPU and APU.
    ///
    /// Returns the number of CPU cycles the instruction (plus any OAMDMA
    /// stall it triggered) consumed, and whether a PPU frame completed
    /// while catching up.
    pub fn step(&mut self, cpu: &mut Cpu, bus: &mut Bus) -> StepOutcome {
        let instruction_cycles = cpu.step(bus) as u32;
        let stall_cycles = bus.take_dma_stall_cycles();
        let mut cpu_cycles = instruction_cycles + stall_cycles;

        let mut frame_complete = false;
        Self::catch_up(bus, cpu_cycles, &mut frame_complete);

        if bus.ppu_nmi_pending() {
            bus.ppu_clear_nmi();
            let interrupt_cycles = cpu.nmi(bus) as u32;
            Self::catch_up(bus, interrupt_cycles, &mut frame_complete);
            cpu_cycles += interrupt_cycles;
        } else if bus.apu_irq_pending() {
            let interrupt_cycles = cpu.irq(bus) as u32;
            Self::catch_up(bus, interrupt_cycles, &mut frame_complete);
            cpu_cycles += interrupt_cycles;
        }

        self.total_cpu_cycles += cpu_cycles as u64;

        StepOutcome {
            cpu_cycles,
            frame_complete,
        }
    }

    /// Advance the PPU and APU by `cpu_cycles` worth of master-clock ticks,
    /// latching `frame_complete` to true if a PPU frame finishes along the way.
    ///
    /// Used both for the instruction just executed and for the 7-cycle cost
    /// of servicing an NMI/IRQ, so neither source of CPU cycles leaves the
    /// PPU/APU behind.
    fn catch_up(bus: &mut Bus, cpu_cycles: u32, frame_complete: &mut bool) {
        for _ in 0..cpu_cycles {
            // PPU must advance before interrupts are sampled for this tick,
            // since VBlank-set and the CPU's NMI sampling race within the
            // same CPU cycle on real hardware.
            for _ in 0..PPU_CYCLES_PER_CPU_CYCLE {
                if bus.step_ppu() {
                    *frame_complete = true;
                }
            }
            bus.step_apu();
        }
    }

    /// Run instructions until a PPU frame completes, returning the total
    /// number of CPU cycles consumed to produce it.
    pub fn run_frame(&mut self, cpu: &mut Cpu, bus: &mut Bus) -> u64 {
        let mut cycles_this_frame: u64 = 0;
        loop {
            let outcome = self.step(cpu, bus);
            cycles_this_frame += outcome.cpu_cycles as u64;
            if outcome.frame_complete {
                return cycles_this_frame;
            }
        }
    }
}

/// Result of a single scheduler step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// CPU cycles consumed by the instruction, including any DMA stall
    pub cpu_cycles: u32,
    /// Whether a PPU frame completed while catching up PPU/APU
    pub frame_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::{create_mapper, Cartridge};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_cartridge_with_reset_vector(reset_addr: u16) -> Cartridge {
        let mut cartridge = Cartridge::new();
        cartridge.prg_rom = vec![0xEA; 16 * 1024]; // fill with NOP
        cartridge.chr_rom = Vec::new(); // empty CHR ROM is treated as CHR-RAM

        // Reset vector lives at CPU address $FFFC/$FFFD, which on a 16 KiB
        // NROM image mirrors down to offset $3FFC/$3FFD within the bank.
        let len = cartridge.prg_rom.len();
        cartridge.prg_rom[len - 4] = (reset_addr & 0xFF) as u8;
        cartridge.prg_rom[len - 3] = ((reset_addr >> 8) & 0xFF) as u8;
        cartridge
    }

    fn test_bus_with_rom() -> Bus {
        let cartridge = test_cartridge_with_reset_vector(0x8000);
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));
        let mut bus = Bus::new();
        bus.load_cartridge(mapper);
        bus
    }

    #[test]
    fn test_scheduler_advances_ppu_three_times_per_cpu_cycle() {
        let mut bus = test_bus_with_rom();
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);

        let mut scheduler = Scheduler::new();
        let outcome = scheduler.step(&mut cpu, &mut bus);

        // NOP takes 2 CPU cycles; the PPU should have advanced 6 dots.
        assert_eq!(outcome.cpu_cycles, 2);
        assert_eq!(bus.ppu().cycle(), 6);
    }

    #[test]
    fn test_scheduler_tracks_total_cycles() {
        let mut bus = test_bus_with_rom();
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);

        let mut scheduler = Scheduler::new();
        scheduler.step(&mut cpu, &mut bus);
        scheduler.step(&mut cpu, &mut bus);

        assert_eq!(scheduler.total_cpu_cycles(), 4);
    }

    #[test]
    fn test_run_frame_completes() {
        let mut bus = test_bus_with_rom();
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);

        let mut scheduler = Scheduler::new();
        let cycles = scheduler.run_frame(&mut cpu, &mut bus);

        // One NTSC frame is 29781 PPU dots, i.e. ~9927 CPU cycles.
        assert!(cycles >= 9927);
    }

    #[test]
    fn test_nmi_service_charges_seven_cycles_and_advances_ppu_apu() {
        let mut bus = test_bus_with_rom();
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        bus.write(0x2000, 0x80); // enable NMI on VBlank

        let mut scheduler = Scheduler::new();
        let mut serviced_cycles = None;
        let mut total_before_service = 0u64;

        // Run NOPs (2 cycles each) until VBlank fires and the scheduler
        // services the resulting NMI within the same step.
        for _ in 0..20_000 {
            total_before_service = scheduler.total_cpu_cycles();
            let outcome = scheduler.step(&mut cpu, &mut bus);
            if outcome.cpu_cycles > 2 {
                serviced_cycles = Some(outcome.cpu_cycles);
                break;
            }
        }

        let serviced_cycles = serviced_cycles.expect("NMI should fire within one frame");
        // A plain NOP costs 2 cycles; servicing the NMI adds the mandated 7.
        assert_eq!(serviced_cycles, 2 + 7);
        assert_eq!(
            scheduler.total_cpu_cycles(),
            total_before_service + serviced_cycles as u64
        );
    }
}
