// NES Emulator - Main Entry Point
//
// Loads an iNES ROM given on the command line and runs it in a window.

use nes_core::display::{run_emulator, WindowConfig};
use nes_core::emulator::Emulator;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "nes-core".to_string());

    let rom_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: {} <rom.nes>", program);
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.load_rom(&rom_path) {
        eprintln!("failed to load '{}': {}", rom_path, err);
        return ExitCode::FAILURE;
    }

    let config = WindowConfig::new()
        .with_scale(3)
        .with_fps(60)
        .with_vsync(true);

    if let Err(err) = run_emulator(config, emulator) {
        eprintln!("emulator exited with an error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
