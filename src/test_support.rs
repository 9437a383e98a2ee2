// Test-only helpers shared across unit test modules.
//
// Unit tests below the cartridge layer want to poke arbitrary bytes into
// $8000-$FFFF (instruction streams, interrupt vectors) the way no real NROM
// board allows, since PRG-ROM is read-only on actual hardware. This stands
// in a trivial all-RAM mapper so those fixtures keep working without each
// test assembling a full iNES image.

#![cfg(test)]

use crate::bus::Bus;
use crate::cartridge::{Mapper, Mirroring};
use std::cell::RefCell;
use std::rc::Rc;

struct TestRamMapper {
    mem: Vec<u8>,
}

impl TestRamMapper {
    fn new() -> Self {
        TestRamMapper {
            mem: vec![0; 0x8000],
        }
    }
}

impl Mapper for TestRamMapper {
    fn cpu_read(&self, addr: u16) -> u8 {
        self.mem[(addr - 0x8000) as usize]
    }

    fn cpu_write(&mut self, addr: u16, data: u8) {
        self.mem[(addr - 0x8000) as usize] = data;
    }

    fn ppu_read(&self, _addr: u16) -> u8 {
        0
    }

    fn ppu_write(&mut self, _addr: u16, _data: u8) {}

    fn mirroring(&self) -> Mirroring {
        Mirroring::Horizontal
    }
}

/// A `Bus` with a writable cartridge-space backing, for CPU/debug unit tests
/// that need to set up instruction bytes or interrupt vectors directly.
pub(crate) fn test_bus() -> Bus {
    let mut bus = Bus::new();
    let mapper: Rc<RefCell<Box<dyn Mapper>>> = Rc::new(RefCell::new(Box::new(TestRamMapper::new())));
    bus.load_cartridge(mapper);
    bus
}
