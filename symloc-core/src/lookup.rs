use crate::header::Elf64Ehdr;
use crate::sections::Elf64Shdr;
use crate::strtab::{bounded_slice, StringTable};
use crate::symbols::{Elf64Sym, SHN_UNDEF, STB_LOCAL};
use std::io::{Cursor, Read};
use std::mem::size_of;
use std::path::Path;
use thiserror::Error;

/// Names of the two sections a lookup needs.
const SYMTAB_SECTION: &str = ".symtab";
const STRTAB_SECTION: &str = ".strtab";

/// Outcome of one symbol lookup. Exactly one variant per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolLookup {
    /// Global symbol defined in this file; carries the virtual address the
    /// symbol will occupy when the executable is loaded. No relocation or
    /// base adjustment is applied; `ET_EXEC` addresses are absolute.
    Resolved(u64),
    /// No entry with the requested name, or the file has no symbol table.
    NotFound,
    /// The name matched only entries with local binding.
    LocalOnly,
    /// Matched a global binding, but `st_shndx` is `SHN_UNDEF`: the address
    /// will be supplied by a shared library at load time.
    GlobalExternal,
    /// The file's header does not declare a 64-bit `ET_EXEC` image.
    NotExecutable,
}

/// Failure reading or parsing the image itself.
///
/// Classification outcomes are never errors; this type only covers I/O and
/// structural violations. Surfacing `Malformed` on short reads and
/// out-of-range offsets is a deliberate strengthening over silently
/// returning a zero address.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("i/o error reading executable: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed image: {0}")]
    Malformed(String),
}

/// Looks up `symbol_name` in the symbol table of the ELF64 executable at
/// `exe_path` and classifies the result.
///
/// The file is opened read-only, read once, and closed before returning on
/// every path. Repeated calls against an unchanged file return identical
/// outcomes.
pub fn find_symbol(
    symbol_name: &str,
    exe_path: impl AsRef<Path>,
) -> Result<SymbolLookup, LookupError> {
    let mut file = std::fs::File::open(exe_path)?;
    let mut image = Vec::new();
    file.read_to_end(&mut image)?;
    find_symbol_in(symbol_name, &image)
}

/// In-memory variant of [`find_symbol`], operating on a whole file image.
pub fn find_symbol_in(symbol_name: &str, image: &[u8]) -> Result<SymbolLookup, LookupError> {
    if image.len() < size_of::<Elf64Ehdr>() {
        return Err(LookupError::Malformed(format!(
            "{} bytes is too short for an ELF header",
            image.len()
        )));
    }
    let ehdr = Elf64Ehdr::from_reader(&mut Cursor::new(image))?;

    if !ehdr.is_executable() {
        log::debug!("rejecting file: e_type = {:#x}", ehdr.e_type);
        return Ok(SymbolLookup::NotExecutable);
    }
    // A sectionless image (or one with no section name table) is a valid
    // executable that simply cannot carry a symbol table.
    if ehdr.e_shnum == 0 || ehdr.e_shstrndx == SHN_UNDEF {
        log::warn!("no section name table; lookup cannot proceed");
        return Ok(SymbolLookup::NotFound);
    }
    if usize::from(ehdr.e_shentsize) != size_of::<Elf64Shdr>() {
        return Err(LookupError::Malformed(format!(
            "unexpected section header entry size {}",
            ehdr.e_shentsize
        )));
    }
    if ehdr.e_shstrndx >= ehdr.e_shnum {
        return Err(LookupError::Malformed(format!(
            "section name table index {} out of range ({} sections)",
            ehdr.e_shstrndx, ehdr.e_shnum
        )));
    }

    let shstr_hdr = section_header_at(image, &ehdr, ehdr.e_shstrndx)?;
    let shstrtab = StringTable::load(image, shstr_hdr.sh_offset, shstr_hdr.sh_size)?;

    // One linear scan over all section headers; first match wins for each
    // of the two names.
    let mut symtab_hdr: Option<Elf64Shdr> = None;
    let mut strtab_hdr: Option<Elf64Shdr> = None;
    for i in 0..ehdr.e_shnum {
        let shdr = section_header_at(image, &ehdr, i)?;
        match shstrtab.name_at(shdr.sh_name)? {
            SYMTAB_SECTION if symtab_hdr.is_none() => symtab_hdr = Some(shdr),
            STRTAB_SECTION if strtab_hdr.is_none() => strtab_hdr = Some(shdr),
            _ => {}
        }
    }
    let (Some(symtab_hdr), Some(strtab_hdr)) = (symtab_hdr, strtab_hdr) else {
        log::warn!("no {SYMTAB_SECTION}/{STRTAB_SECTION} pair; likely stripped");
        return Ok(SymbolLookup::NotFound);
    };

    let strtab = StringTable::load(image, strtab_hdr.sh_offset, strtab_hdr.sh_size)?;
    let symtab_data = bounded_slice(image, symtab_hdr.sh_offset, symtab_hdr.sh_size, "symtab")?;
    if symtab_data.len() % size_of::<Elf64Sym>() != 0 {
        return Err(LookupError::Malformed(format!(
            "symbol table size {} is not a multiple of the entry size",
            symtab_data.len()
        )));
    }

    // Scan the whole table: a local and a global entry sharing the name may
    // appear in either order, so there is no early exit.
    let mut cursor = Cursor::new(symtab_data);
    let mut local_seen = false;
    let mut global_match: Option<Elf64Sym> = None;
    for _ in 0..symtab_data.len() / size_of::<Elf64Sym>() {
        let sym = Elf64Sym::from_reader(&mut cursor)?;
        if strtab.name_at(sym.st_name)? != symbol_name {
            continue;
        }
        if sym.binding() == STB_LOCAL {
            local_seen = true;
        } else {
            // Any non-local binding counts as global; last one wins.
            global_match = Some(sym);
        }
    }

    Ok(match (local_seen, global_match) {
        (false, None) => SymbolLookup::NotFound,
        (true, None) => SymbolLookup::LocalOnly,
        (_, Some(sym)) if !sym.is_defined() => SymbolLookup::GlobalExternal,
        (_, Some(sym)) => {
            log::debug!("{symbol_name} defined at {:#x}", sym.st_value);
            SymbolLookup::Resolved(sym.st_value)
        }
    })
}

fn section_header_at(
    image: &[u8],
    ehdr: &Elf64Ehdr,
    index: u16,
) -> Result<Elf64Shdr, LookupError> {
    let offset = ehdr
        .e_shoff
        .checked_add(u64::from(index) * size_of::<Elf64Shdr>() as u64)
        .ok_or_else(|| LookupError::Malformed("section header offset overflow".into()))?;
    let bytes = bounded_slice(image, offset, size_of::<Elf64Shdr>() as u64, "section header")?;
    Ok(Elf64Shdr::from_reader(&mut Cursor::new(bytes))?)
}
