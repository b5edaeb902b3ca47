use log::info;

use crate::error::Error;

/// Size of the flat ROM window at 0x0000-0x7FFF.
pub const ROM_SIZE: usize = 0x8000;

// Header layout (gbdev.io/pandocs/The_Cartridge_Header.html)
const OFFSET_TITLE: usize = 0x0134;
const TITLE_LEN: usize = 16;
const OFFSET_TYPE: usize = 0x0147;

const CART_TYPE_ROM_ONLY: u8 = 0x00;

/// A validated ROM-only cartridge image.
///
/// Owns the ROM bytes and lends them read-only to the bus. Images shorter
/// than 32 KiB are zero-padded so the whole ROM window reads defined values.
#[derive(Debug)]
pub struct Cartridge {
    rom: Box<[u8; ROM_SIZE]>,
    title: String,
    cart_type: u8,
}

impl Cartridge {
    /// Validate the header and take ownership of the image.
    ///
    /// Rejects images larger than 32 KiB and any cartridge type other than
    /// 0x00 (ROM-only); MBC banking is not modeled.
    pub fn load(data: Vec<u8>) -> Result<Self, Error> {
        if data.len() > ROM_SIZE {
            return Err(Error::RomTooLarge { size: data.len() });
        }

        let cart_type = data.get(OFFSET_TYPE).copied().unwrap_or(0);
        if cart_type != CART_TYPE_ROM_ONLY {
            return Err(Error::UnsupportedCartridge { cart_type });
        }

        let mut rom = Box::new([0u8; ROM_SIZE]);
        rom[..data.len()].copy_from_slice(&data);

        let title = parse_title(&rom[..]);
        info!(
            "loaded ROM \"{}\" ({} bytes, type {:#04X})",
            title,
            data.len(),
            cart_type
        );

        Ok(Self {
            rom,
            title,
            cart_type,
        })
    }

    /// Read a ROM byte. `addr` must be inside 0x0000-0x7FFF; the bus
    /// guarantees this.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.rom[addr as usize & (ROM_SIZE - 1)]
    }

    /// The 16-byte header title, trimmed at the first NUL. Informational only.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cart_type(&self) -> u8 {
        self.cart_type
    }
}

fn parse_title(rom: &[u8]) -> String {
    rom[OFFSET_TITLE..OFFSET_TITLE + TITLE_LEN]
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
        .collect()
}
