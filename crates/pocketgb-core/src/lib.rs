//! DMG (original Game Boy) emulation core.
//!
//! This crate contains the platform-agnostic emulator engine: the SM83 CPU
//! interpreter, memory bus, scanline PPU, divider/timer unit, joypad, and the
//! interrupt dispatch that binds them. Frontends (window, audio, file I/O,
//! wall-clock pacing) live outside this crate and drive the engine through the
//! [`gameboy::GameBoy`] facade: load a cartridge, run frames, read the
//! framebuffer, feed button events.
//!
//! Only flat 32 KiB ROM-only cartridges are supported; MBC banking and boot
//! ROM execution are out of scope. The engine starts in the documented
//! post-boot register state.

/// Cartridge image: header validation and read-only ROM access.
pub mod cartridge;

/// SM83 CPU core.
pub mod cpu;

/// Engine error type.
pub mod error;

/// High-level facade that wires the CPU and MMU into a single machine and
/// drives it frame by frame.
pub mod gameboy;

/// Joypad input register and edge-triggered interrupt behavior.
pub mod input;

/// Memory map and hardware plumbing.
pub mod mmu;

/// Pixel Processing Unit (PPU) emulation.
pub mod ppu;

/// Divider/timer unit.
pub mod timer;

pub use cartridge::Cartridge;
pub use error::Error;
pub use gameboy::GameBoy;
pub use input::Button;
