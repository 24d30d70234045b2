use byteorder::{ReadBytesExt, LE};
use std::io;

/// A 64-bit section header, matching the standard `Elf64_Shdr` layout.
///
/// One fixed-size record per section, stored contiguously at `e_shoff`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Elf64Shdr {
    /// Offset of this section's name in the section header string table.
    pub sh_name: u32,
    /// Section type (SHT_*).
    pub sh_type: u32,
    /// Section attribute flags.
    pub sh_flags: u64,
    /// Virtual address of the section when loaded.
    pub sh_addr: u64,
    /// File offset of the section's data.
    pub sh_offset: u64,
    /// Size of the section's data in bytes.
    pub sh_size: u64,
    /// Section-type-specific link to another section.
    pub sh_link: u32,
    /// Section-type-specific extra information.
    pub sh_info: u32,
    /// Required alignment of the section.
    pub sh_addralign: u64,
    /// Size of one record, for sections holding fixed-size tables.
    pub sh_entsize: u64,
}

impl Elf64Shdr {
    pub fn from_reader<R: io::Read>(cur: &mut R) -> io::Result<Elf64Shdr> {
        Ok(Elf64Shdr {
            sh_name: cur.read_u32::<LE>()?,
            sh_type: cur.read_u32::<LE>()?,
            sh_flags: cur.read_u64::<LE>()?,
            sh_addr: cur.read_u64::<LE>()?,
            sh_offset: cur.read_u64::<LE>()?,
            sh_size: cur.read_u64::<LE>()?,
            sh_link: cur.read_u32::<LE>()?,
            sh_info: cur.read_u32::<LE>()?,
            sh_addralign: cur.read_u64::<LE>()?,
            sh_entsize: cur.read_u64::<LE>()?,
        })
    }
}
