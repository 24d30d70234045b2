//! Symbol address lookup for ELF64 executables.
//!
//! Given a symbol name and a path to a statically-linked executable, the
//! [`find_symbol`] operation reports the virtual address the symbol will be
//! loaded to, or why no address can be reported: the file is not an
//! executable, the symbol is absent, only locally bound, or global but
//! supplied by a shared library at runtime.
//!
//! All parsing is done directly against the ELF64 record layouts over a
//! bounds-checked byte span. Truncated or inconsistent images fail with
//! [`LookupError::Malformed`] instead of yielding a default address; this
//! is intentionally stricter than the classic out-parameter interface this
//! crate is modeled on.

pub mod header;
pub mod lookup;
pub mod sections;
pub mod strtab;
pub mod symbols;

pub use lookup::{find_symbol, find_symbol_in, LookupError, SymbolLookup};
