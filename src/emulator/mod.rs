// Emulator module - Main emulator coordinator
//
// This module provides the main emulator interface that coordinates all NES components
// (CPU, PPU, APU, Bus) and implements quality-of-life features like save states,
// screenshots, speed control, and configuration management.

mod config;
mod recent_roms;
mod screenshot;

pub use config::{EmulatorConfig, SpeedMode};
pub use recent_roms::RecentRomsList;
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::bus::Bus;
use crate::cartridge::{create_mapper, Cartridge};
use crate::cpu::Cpu;
use crate::scheduler::Scheduler;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

/// Main emulator structure
///
/// Coordinates all NES components and provides high-level functionality
/// for running games, saving/loading states, and managing configuration.
pub struct Emulator {
    /// CPU (6502 processor)
    cpu: Cpu,

    /// Bus (connects all components)
    bus: Bus,

    /// Drives CPU/PPU/APU at the master-clock ratio
    scheduler: Scheduler,

    /// Configuration
    config: EmulatorConfig,

    /// Currently loaded ROM path
    rom_path: Option<PathBuf>,

    /// Paused state
    paused: bool,

    /// Speed mode
    speed_mode: SpeedMode,

    /// Frame timing for speed control
    #[allow(dead_code)]
    last_frame_time: Option<Instant>,
}

impl Emulator {
    /// Create a new emulator instance
    ///
    /// Initializes all components to their power-on state.
    ///
    /// # Returns
    ///
    /// A new emulator instance
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// ```
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            scheduler: Scheduler::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
            speed_mode: SpeedMode::Normal,
            last_frame_time: None,
        }
    }

    /// Load a ROM file
    ///
    /// Loads a ROM from the specified path and initializes the emulator state.
    /// Adds the ROM to the recent ROMs list.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ROM file (.nes)
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// ```
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge)?));
        self.bus.load_cartridge(mapper);

        self.rom_path = Some(path.to_path_buf());

        // Add to recent ROMs list
        let mut recent_roms = RecentRomsList::load_or_default();
        recent_roms.add(path);
        recent_roms.save()?;

        // Reset the emulator
        self.reset();

        Ok(())
    }

    /// Reset the emulator
    ///
    /// Resets all components to their power-on state, as if pressing the reset button.
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.reset();
    /// ```
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        // PPU and APU will be reset through the bus
        self.paused = false;
    }

    /// Run the emulator until one PPU frame completes
    ///
    /// Drives the CPU, PPU, and APU through the scheduler at the NTSC
    /// master-clock ratio and returns the freshly rendered frame buffer
    /// (256x240 palette indices).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// let frame = emulator.run_frame();
    /// assert_eq!(frame.len(), 256 * 240);
    /// ```
    pub fn run_frame(&mut self) -> Vec<u8> {
        if !self.paused {
            self.scheduler.run_frame(&mut self.cpu, &mut self.bus);
        }
        self.bus.ppu().frame().to_vec()
    }

    /// Total CPU cycles executed since this emulator instance was created
    pub fn total_cycles(&self) -> u64 {
        self.scheduler.total_cpu_cycles()
    }

    /// Take a screenshot
    ///
    /// Captures the current frame buffer and saves it as a PNG file.
    ///
    /// # Returns
    ///
    /// Result containing the path to the saved screenshot or an error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// let screenshot_path = emulator.screenshot().expect("Failed to save screenshot");
    /// println!("Screenshot saved to: {}", screenshot_path.display());
    /// ```
    pub fn screenshot(&self) -> Result<PathBuf, ScreenshotError> {
        screenshot::save_screenshot(self.bus.ppu().frame(), self.rom_path.as_deref())
    }

    /// Set speed mode
    ///
    /// Controls emulation speed (normal, fast forward, slow motion).
    ///
    /// # Arguments
    ///
    /// * `mode` - The speed mode to set
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::emulator::{Emulator, SpeedMode};
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.set_speed_mode(SpeedMode::FastForward2x);
    /// ```
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.speed_mode = mode;
    }

    /// Get current speed mode
    ///
    /// # Returns
    ///
    /// The current speed mode
    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    /// Pause the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.pause();
    /// ```
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the emulator
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.resume();
    /// ```
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.toggle_pause();
    /// ```
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Check if emulator is paused
    ///
    /// # Returns
    ///
    /// true if paused, false otherwise
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get reference to CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get mutable reference to CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get reference to Bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Get mutable reference to Bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Get reference to configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    /// Get the currently loaded ROM path
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
