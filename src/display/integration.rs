// Integration helpers for connecting PPU with display system
//
// This module provides utilities to convert PPU frame buffer data
// into the display system's frame buffer format.

use super::framebuffer::FrameBuffer;

/// Copy PPU frame buffer data into a display frame buffer
///
/// The PPU frame buffer contains palette indices (0-63) for each pixel.
/// This function copies those indices directly into the display frame buffer.
///
/// # Arguments
///
/// * `ppu_frame` - Slice of PPU frame data (palette indices, 256×240 = 61,440 bytes)
/// * `display_buffer` - Mutable reference to the display frame buffer
///
/// # Example
///
/// ```rust,no_run
/// use nes_core::{Ppu, FrameBuffer};
/// use nes_core::display::integration::copy_ppu_to_display;
///
/// let mut ppu = Ppu::new();
/// let mut display_buffer = FrameBuffer::new();
///
/// // Render a frame with the PPU
/// ppu.render_frame();
///
/// // Copy PPU output to display buffer
/// copy_ppu_to_display(ppu.frame(), &mut display_buffer);
/// ```
pub fn copy_ppu_to_display(ppu_frame: &[u8], display_buffer: &mut FrameBuffer) {
    // Verify that the PPU frame has the correct size
    const EXPECTED_SIZE: usize = 256 * 240;
    assert_eq!(
        ppu_frame.len(),
        EXPECTED_SIZE,
        "PPU frame buffer must be exactly 256×240 pixels"
    );

    // Copy palette indices directly
    display_buffer.as_mut_slice().copy_from_slice(ppu_frame);
}
