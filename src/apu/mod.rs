// APU module - Audio Processing Unit implementation
//
// This module contains the APU emulation for the NES (Ricoh 2A03): two pulse
// channels, a triangle channel, a noise channel, and a delta-modulation (DMC)
// sample channel, all driven by a shared frame sequencer.
//
// ## Register Map
//
// ### Pulse 1 ($4000-$4003) / Pulse 2 ($4004-$4007)
// | Address      | Description                      |
// |--------------|-----------------------------------|
// | $4000/$4004  | Duty cycle, envelope              |
// | $4001/$4005  | Sweep unit                        |
// | $4002/$4006  | Timer low byte                    |
// | $4003/$4007  | Length counter, timer high bits   |
//
// ### Triangle ($4008-$400B)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4008   | Linear counter                        |
// | $4009   | Unused                                |
// | $400A   | Timer low byte                        |
// | $400B   | Length counter, timer high bits       |
//
// ### Noise ($400C-$400F)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $400C   | Envelope                              |
// | $400D   | Unused                                |
// | $400E   | Mode, period                          |
// | $400F   | Length counter                        |
//
// ### DMC ($4010-$4013)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4010   | Flags, rate                           |
// | $4011   | Direct load                           |
// | $4012   | Sample address                        |
// | $4013   | Sample length                         |
//
// ### Control ($4015, $4017)
// | Address | Description                           |
// |---------|---------------------------------------|
// | $4015   | Status/Control (R/W)                  |
// | $4017   | Frame counter (W)                     |

pub mod channels;
pub mod components;
pub mod constants;

pub use channels::{DmcChannel, NoiseChannel, PulseChannel, TriangleChannel};
pub use components::{FrameCounter, FrameEvent};

use crate::bus::MemoryMappedDevice;

/// APU structure representing the Audio Processing Unit state
pub struct Apu {
    pulse1: PulseChannel,
    pulse2: PulseChannel,
    triangle: TriangleChannel,
    noise: NoiseChannel,
    dmc: DmcChannel,
    frame_counter: FrameCounter,

    /// Toggles every CPU cycle; pulse/noise timers clock at half CPU rate
    half_cycle: bool,

    /// Address the DMC channel needs a sample byte fetched from, if any.
    /// The bus services this after each call to [`Apu::clock`].
    pending_dmc_fetch: Option<u16>,
}

impl Apu {
    /// Create a new APU instance with default (power-on) state
    ///
    /// # Example
    ///
    /// ```
    /// use nes_core::apu::Apu;
    ///
    /// let apu = Apu::new();
    /// ```
    pub fn new() -> Self {
        Apu {
            pulse1: PulseChannel::new(1),
            pulse2: PulseChannel::new(2),
            triangle: TriangleChannel::new(),
            noise: NoiseChannel::new(),
            dmc: DmcChannel::new(),
            frame_counter: FrameCounter::new(),
            half_cycle: false,
            pending_dmc_fetch: None,
        }
    }

    /// Reset APU to power-on state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Clock every channel timer and the frame sequencer for one CPU cycle
    ///
    /// Call once per CPU cycle. After calling this, check
    /// [`Apu::take_pending_dmc_fetch`] and feed the result back through
    /// [`Apu::load_dmc_sample_byte`] if it returns an address - the DMC
    /// channel needs a byte read from cartridge PRG space via the bus.
    pub fn clock(&mut self) {
        let events = self.frame_counter.clock();
        self.apply_frame_events(&events);

        self.triangle.clock_timer();
        self.dmc.clock_timer();

        self.half_cycle = !self.half_cycle;
        if self.half_cycle {
            self.pulse1.clock_timer();
            self.pulse2.clock_timer();
            self.noise.clock_timer();
        }

        if self.pending_dmc_fetch.is_none() {
            self.pending_dmc_fetch = self.dmc.needs_sample_read();
        }
    }

    fn apply_frame_events(&mut self, events: &[FrameEvent]) {
        for event in events {
            match event {
                FrameEvent::QuarterFrame => self.clock_quarter_frame(),
                FrameEvent::HalfFrame => self.clock_half_frame(),
                FrameEvent::SetIrq => {}
            }
        }
    }

    /// Clock envelopes and the triangle linear counter
    pub fn clock_quarter_frame(&mut self) {
        self.pulse1.clock_envelope();
        self.pulse2.clock_envelope();
        self.noise.clock_envelope();
        self.triangle.clock_linear_counter();
    }

    /// Clock envelopes, linear counter, length counters, and sweep units
    pub fn clock_half_frame(&mut self) {
        self.clock_quarter_frame();
        self.pulse1.clock_length_counter();
        self.pulse1.clock_sweep();
        self.pulse2.clock_length_counter();
        self.pulse2.clock_sweep();
        self.triangle.clock_length_counter();
        self.noise.clock_length_counter();
    }

    /// Address the DMC channel wants a sample byte read from, if the sample
    /// buffer is empty and bytes remain. The caller (the bus) is expected to
    /// read this address from cartridge PRG space and call
    /// [`Apu::load_dmc_sample_byte`] with the result.
    pub fn take_pending_dmc_fetch(&mut self) -> Option<u16> {
        self.pending_dmc_fetch.take()
    }

    /// Feed a fetched sample byte back into the DMC channel
    pub fn load_dmc_sample_byte(&mut self, byte: u8) {
        self.dmc.load_sample_byte(byte);
    }

    /// Whether the APU has a pending interrupt (frame IRQ or DMC IRQ)
    pub fn irq_pending(&self) -> bool {
        self.frame_counter.irq_pending() || self.dmc.irq_pending()
    }

    /// Get the mixed analog output sample from all five channels
    ///
    /// Uses the NES's non-linear mixing formula rather than a simple sum, so
    /// that channels compress toward a shared headroom the way the real DAC
    /// does.
    pub fn output(&self) -> f32 {
        let p1 = self.pulse1.output() as f32;
        let p2 = self.pulse2.output() as f32;
        let tri = self.triangle.output() as f32;
        let noise = self.noise.output() as f32;
        let dmc = self.dmc.output() as f32;

        let pulse_sum = p1 + p2;
        let pulse_out = if pulse_sum > 0.0 {
            95.52 / ((8128.0 / pulse_sum) + 100.0)
        } else {
            0.0
        };

        let tnd_sum = 3.0 * tri + 2.0 * noise + dmc;
        let tnd_out = if tnd_sum > 0.0 {
            163.67 / ((24329.0 / tnd_sum) + 100.0)
        } else {
            0.0
        };

        pulse_out + tnd_out
    }

    fn read_register(&mut self, addr: u16) -> u8 {
        match addr {
            // $4015: Status - channel active flags, frame/DMC IRQ flags
            // Reading clears the frame IRQ flag (not the DMC one)
            0x4015 => {
                let mut status = 0u8;
                if self.pulse1.is_active() {
                    status |= 0x01;
                }
                if self.pulse2.is_active() {
                    status |= 0x02;
                }
                if self.triangle.length_counter.is_active() {
                    status |= 0x04;
                }
                if self.noise.length_counter.is_active() {
                    status |= 0x08;
                }
                if self.dmc.is_active() {
                    status |= 0x10;
                }
                if self.frame_counter.irq_pending() {
                    status |= 0x40;
                }
                if self.dmc.irq_pending() {
                    status |= 0x80;
                }
                self.frame_counter.clear_irq();
                status
            }
            // All other APU registers are write-only
            _ => 0,
        }
    }

    fn write_register(&mut self, addr: u16, data: u8) {
        match addr {
            0x4000 => self.pulse1.write_register_0(data),
            0x4001 => self.pulse1.write_register_1(data),
            0x4002 => self.pulse1.write_register_2(data),
            0x4003 => self.pulse1.write_register_3(data),

            0x4004 => self.pulse2.write_register_0(data),
            0x4005 => self.pulse2.write_register_1(data),
            0x4006 => self.pulse2.write_register_2(data),
            0x4007 => self.pulse2.write_register_3(data),

            0x4008 => self.triangle.write_register_0(data),
            0x4009 => self.triangle.write_register_1(data),
            0x400A => self.triangle.write_register_2(data),
            0x400B => self.triangle.write_register_3(data),

            0x400C => self.noise.write_register_0(data),
            0x400D => self.noise.write_register_1(data),
            0x400E => self.noise.write_register_2(data),
            0x400F => self.noise.write_register_3(data),

            0x4010 => self.dmc.write_register_0(data),
            0x4011 => self.dmc.write_register_1(data),
            0x4012 => self.dmc.write_register_2(data),
            0x4013 => self.dmc.write_register_3(data),

            // $4014 (OAM DMA) is not part of the APU's address range; the
            // bus routes it elsewhere before it ever reaches us.
            0x4014 => {}

            // $4015: enable/disable each channel
            0x4015 => {
                self.pulse1.set_enabled((data & 0x01) != 0);
                self.pulse2.set_enabled((data & 0x02) != 0);
                self.triangle.set_enabled((data & 0x04) != 0);
                self.noise.set_enabled((data & 0x08) != 0);
                self.dmc.set_enabled((data & 0x10) != 0);
                if self.pending_dmc_fetch.is_none() {
                    self.pending_dmc_fetch = self.dmc.needs_sample_read();
                }
            }

            // $4016 belongs to the controller port, not the APU
            0x4016 => {}

            // $4017: frame sequencer mode / IRQ inhibit; a write in 5-step
            // mode clocks a half frame immediately
            0x4017 => {
                let events = self.frame_counter.write_control(data);
                self.apply_frame_events(&events);
            }

            _ => {}
        }
    }
}

impl MemoryMappedDevice for Apu {
    fn read(&mut self, addr: u16) -> u8 {
        self.read_register(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.write_register(addr, data);
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
