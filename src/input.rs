// Input module - Controller input handling
//
// This module contains controller input processing for the NES standard controller.
//
// # Controller I/O Registers
//
// The NES has two controller ports mapped to CPU memory at $4016 and $4017.
//
// This is a complete implementation of the NES standard controller with support for
// strobe-based button state reading.
//
// ## Register Map
//
// | Address | Name          | Access | Description                     |
// |---------|---------------|--------|---------------------------------|
// | $4016   | Controller 1  | R/W    | Controller 1 data / Strobe      |
// | $4017   | Controller 2  | R      | Controller 2 data               |
//
// Note: $4017 is also used by APU for the Frame Counter (write-only).
// Reads from $4017 return controller 2 data, writes go to APU.
//
// ## Controller Reading Sequence
//
// 1. Write $01 to $4016 (start strobe)
// 2. Write $00 to $4016 (end strobe)
// 3. Read $4016 eight times for button states (Controller 1)
// 4. Read $4017 eight times for button states (Controller 2)
//
// Each read returns bit 0 = button state (1 = pressed, 0 = released)
// Reading order: A, B, Select, Start, Up, Down, Left, Right

pub mod keyboard;

use crate::bus::MemoryMappedDevice;

pub use keyboard::{Button, KeyboardHandler, KeyboardMapping, Player};

/// Controller button state structure
///
/// Represents the state of all 8 buttons on a standard NES controller.
#[derive(Debug, Clone, Copy)]
pub struct Controller {
    /// A button state
    pub button_a: bool,
    /// B button state
    pub button_b: bool,
    /// Select button state
    pub select: bool,
    /// Start button state
    pub start: bool,
    /// Up D-pad state
    pub up: bool,
    /// Down D-pad state
    pub down: bool,
    /// Left D-pad state
    pub left: bool,
    /// Right D-pad state
    pub right: bool,
}

impl Controller {
    /// Create a new controller instance with all buttons released
    ///
    /// # Returns
    ///
    /// A new Controller with all buttons in released state
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::input::Controller;
    ///
    /// let controller = Controller::new();
    /// assert!(!controller.button_a);
    /// ```
    pub fn new() -> Self {
        Controller {
            button_a: false,
            button_b: false,
            select: false,
            start: false,
            up: false,
            down: false,
            left: false,
            right: false,
        }
    }

    /// Get button state by index (0-7)
    ///
    /// # Arguments
    ///
    /// * `index` - Button index (0=A, 1=B, 2=Select, 3=Start, 4=Up, 5=Down, 6=Left, 7=Right)
    ///
    /// # Returns
    ///
    /// True if button is pressed, false otherwise
    fn get_button(&self, index: u8) -> bool {
        match index {
            0 => self.button_a,
            1 => self.button_b,
            2 => self.select,
            3 => self.start,
            4 => self.up,
            5 => self.down,
            6 => self.left,
            7 => self.right,
            _ => false,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller I/O interface
///
/// This structure manages the state of both NES controllers and handles
/// the serial reading protocol.
///
/// Supports the standard NES controller strobe and serial read mechanism.
/// Button states can be updated via set_controller1 and set_controller2 methods.
pub struct ControllerIO {
    /// Controller 1 state
    controller1: Controller,

    /// Controller 2 state
    controller2: Controller,

    /// Strobe state
    ///
    /// When true, controller is continuously reloading button state.
    /// When false, controller shifts out one bit per read.
    strobe: bool,

    /// Current button index for Controller 1 (0-7)
    ///
    /// Tracks which button will be returned on next read.
    button_index1: u8,

    /// Current button index for Controller 2 (0-7)
    ///
    /// Tracks which button will be returned on next read.
    button_index2: u8,
}

impl ControllerIO {
    /// Create a new controller I/O interface
    ///
    /// # Returns
    ///
    /// A new ControllerIO with both controllers in default state
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::input::ControllerIO;
    ///
    /// let controller_io = ControllerIO::new();
    /// ```
    pub fn new() -> Self {
        ControllerIO {
            controller1: Controller::new(),
            controller2: Controller::new(),
            strobe: false,
            button_index1: 0,
            button_index2: 0,
        }
    }

    /// Reset the controller I/O to default state
    pub fn reset(&mut self) {
        self.strobe = false;
        self.button_index1 = 0;
        self.button_index2 = 0;
    }

    /// Read from controller 1 ($4016)
    ///
    /// Returns the current button state bit.
    /// When strobe is off, advances to next button.
    ///
    /// # Returns
    ///
    /// Bit 0: Current button state (1 = pressed, 0 = released)
    /// Bits 1-7: Open bus (stub: return 0)
    fn read_controller1(&mut self) -> u8 {
        if self.strobe {
            // While strobing, always return button A state
            if self.controller1.button_a {
                0x01
            } else {
                0x00
            }
        } else {
            // Return current button state and advance
            let button_state = if self.button_index1 < 8 {
                if self.controller1.get_button(self.button_index1) {
                    0x01
                } else {
                    0x00
                }
            } else {
                // After 8 reads, return 1 (signature bit)
                0x01
            };

            // Advance button index (clamp at 8 to prevent wraparound)
            if self.button_index1 < 8 {
                self.button_index1 += 1;
            }

            button_state
        }
    }

    /// Read from controller 2 ($4017)
    ///
    /// Returns the current button state bit.
    /// When strobe is off, advances to next button.
    ///
    /// # Returns
    ///
    /// Bit 0: Current button state (1 = pressed, 0 = released)
    /// Bits 1-7: Open bus (stub: return 0)
    fn read_controller2(&mut self) -> u8 {
        if self.strobe {
            // While strobing, always return button A state
            if self.controller2.button_a {
                0x01
            } else {
                0x00
            }
        } else {
            // Return current button state and advance
            let button_state = if self.button_index2 < 8 {
                if self.controller2.get_button(self.button_index2) {
                    0x01
                } else {
                    0x00
                }
            } else {
                // After 8 reads, return 1 (signature bit)
                0x01
            };

            // Advance button index (clamp at 8 to prevent wraparound)
            if self.button_index2 < 8 {
                self.button_index2 += 1;
            }

            button_state
        }
    }

    /// Write to controller strobe ($4016)
    ///
    /// # Arguments
    ///
    /// * `data` - Bit 0: Strobe state (1 = start strobe, 0 = end strobe)
    ///
    /// # Behavior
    ///
    /// - Writing 1 continuously reloads button states
    /// - Writing 0 ends strobe and resets button index to 0
    fn write_strobe(&mut self, data: u8) {
        let new_strobe = (data & 0x01) != 0;

        // Detect strobe going from high to low (end of strobe)
        if self.strobe && !new_strobe {
            // Reset button indices when strobe ends
            self.button_index1 = 0;
            self.button_index2 = 0;
        }

        self.strobe = new_strobe;
    }

    /// Update controller 1 state
    ///
    /// Used to update button states from input events (e.g., keyboard, gamepad).
    ///
    /// # Arguments
    ///
    /// * `controller` - The new controller state
    pub fn set_controller1(&mut self, controller: Controller) {
        self.controller1 = controller;
    }

    /// Update controller 2 state
    ///
    /// Used to update button states from input events (e.g., keyboard, gamepad).
    ///
    /// # Arguments
    ///
    /// * `controller` - The new controller state
    pub fn set_controller2(&mut self, controller: Controller) {
        self.controller2 = controller;
    }
}

impl MemoryMappedDevice for ControllerIO {
    /// Read from controller I/O
    ///
    /// # Arguments
    ///
    /// * `addr` - The address ($4016 or $4017)
    ///
    /// # Returns
    ///
    /// Controller button state (bit 0)
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x4016 => self.read_controller1(),
            0x4017 => self.read_controller2(),
            _ => 0,
        }
    }

    /// Write to controller I/O
    ///
    /// # Arguments
    ///
    /// * `addr` - The address ($4016 for strobe)
    /// * `data` - The value to write
    fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x4016 => self.write_strobe(data),
            // $4017 writes go to APU frame counter, not handled here
            0x4017 => {}
            _ => {}
        }
    }
}

impl Default for ControllerIO {
    fn default() -> Self {
        Self::new()
    }
}
