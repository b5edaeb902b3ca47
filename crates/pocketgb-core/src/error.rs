use thiserror::Error;

/// Errors the engine surfaces to the host.
///
/// Per-instruction errors abort the current step and propagate; no recovery
/// is attempted. Everything else (unknown I/O reads, echo-RAM accesses,
/// disabled-LCD reads) resolves to defined byte values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The cartridge header names a mapper we do not emulate. Only type 0x00
    /// (ROM-only) images are accepted.
    #[error("unsupported cartridge type {cart_type:#04X} (only ROM-only images are supported)")]
    UnsupportedCartridge { cart_type: u8 },

    /// The image does not fit the flat 32 KiB ROM window.
    #[error("ROM image of {size} bytes exceeds the 32 KiB flat ROM window")]
    RomTooLarge { size: usize },

    /// Decode hit one of the officially-undefined SM83 opcodes.
    #[error("illegal opcode {opcode:#04X} at {pc:#06X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// A query touched the unusable $FEA0-$FEFF hole.
    #[error("access to unusable memory at {addr:#06X}")]
    BadMemoryAccess { addr: u16 },
}
