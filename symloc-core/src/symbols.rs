use byteorder::{ReadBytesExt, LE};
use std::io;

/// Local symbol, not visible outside the defining file.
pub const STB_LOCAL: u8 = 0;
/// Global symbol, visible to all files being combined.
pub const STB_GLOBAL: u8 = 1;

/// `st_shndx` value meaning the symbol has no section in this file.
pub const SHN_UNDEF: u16 = 0;

/// A 64-bit symbol table entry, matching the standard `Elf64_Sym` layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Elf64Sym {
    /// Offset of the symbol's name in the associated string table.
    pub st_name: u32,
    /// Binding in the high nibble, type in the low nibble.
    pub st_info: u8,
    /// Visibility.
    pub st_other: u8,
    /// Index of the section the symbol is defined in, or `SHN_UNDEF`.
    pub st_shndx: u16,
    /// Symbol value; a virtual address for defined symbols in an executable.
    pub st_value: u64,
    /// Size of the symbol's object, if known.
    pub st_size: u64,
}

impl Elf64Sym {
    pub fn from_reader<R: io::Read>(cur: &mut R) -> io::Result<Elf64Sym> {
        Ok(Elf64Sym {
            st_name: cur.read_u32::<LE>()?,
            st_info: cur.read_u8()?,
            st_other: cur.read_u8()?,
            st_shndx: cur.read_u16::<LE>()?,
            st_value: cur.read_u64::<LE>()?,
            st_size: cur.read_u64::<LE>()?,
        })
    }

    /// The symbol's binding, `ELF64_ST_BIND(st_info)`.
    pub fn binding(&self) -> u8 {
        self.st_info >> 4
    }

    /// Whether the symbol carries a concrete location in this file.
    pub fn is_defined(&self) -> bool {
        self.st_shndx != SHN_UNDEF
    }
}
