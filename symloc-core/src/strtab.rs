use crate::lookup::LookupError;

/// Validates an offset+size pair against the image before slicing; the
/// format-declared values are never trusted.
pub(crate) fn bounded_slice<'a>(
    image: &'a [u8],
    offset: u64,
    size: u64,
    what: &str,
) -> Result<&'a [u8], LookupError> {
    usize::try_from(offset)
        .ok()
        .zip(usize::try_from(size).ok())
        .and_then(|(start, len)| image.get(start..start.checked_add(len)?))
        .ok_or_else(|| {
            LookupError::Malformed(format!(
                "{what} [{offset:#x}; {size:#x}] exceeds image of {} bytes",
                image.len()
            ))
        })
}

/// A zero-terminated-string blob addressed by byte offset.
///
/// ELF uses the same layout twice: once for section names (the section
/// pointed to by `e_shstrndx`) and once for symbol names (`.strtab`), so
/// both are loaded through this one type.
#[derive(Debug)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Borrows `size` bytes of string data starting at `offset` in `image`.
    ///
    /// The offset and size come from a section header; they are still
    /// validated against the image length rather than trusted.
    pub fn load(image: &'a [u8], offset: u64, size: u64) -> Result<Self, LookupError> {
        let data = bounded_slice(image, offset, size, "string table")?;
        Ok(Self { data })
    }

    /// Resolves the name stored at `offset`, up to the next NUL byte.
    ///
    /// An out-of-range offset is `Malformed`: well-formed tables never
    /// reference past their own end.
    pub fn name_at(&self, offset: u32) -> Result<&'a str, LookupError> {
        let start = offset as usize;
        if start >= self.data.len() {
            return Err(LookupError::Malformed(format!(
                "name offset {offset:#x} past end of string table ({} bytes)",
                self.data.len()
            )));
        }
        let end = self.data[start..]
            .iter()
            .position(|&b| b == 0)
            .map(|pos| start + pos)
            .ok_or_else(|| {
                LookupError::Malformed(format!("unterminated name at offset {offset:#x}"))
            })?;
        std::str::from_utf8(&self.data[start..end])
            .map_err(|_| LookupError::Malformed(format!("non-UTF-8 name at offset {offset:#x}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;

    #[test]
    fn resolves_names_by_offset() {
        let blob = b"\0.symtab\0.strtab\0";
        let tab = StringTable::load(blob, 0, blob.len() as u64).unwrap();
        assert_eq!(tab.name_at(0).unwrap(), "");
        assert_eq!(tab.name_at(1).unwrap(), ".symtab");
        assert_eq!(tab.name_at(9).unwrap(), ".strtab");
        // mid-string offsets are legal in ELF string tables
        assert_eq!(tab.name_at(2).unwrap(), "symtab");
    }

    #[test]
    fn rejects_out_of_range_blob() {
        let image = [0u8; 16];
        assert!(matches!(
            StringTable::load(&image, 8, 16),
            Err(LookupError::Malformed(_))
        ));
        assert!(matches!(
            StringTable::load(&image, u64::MAX, 1),
            Err(LookupError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_bad_name_offsets() {
        let blob = b"abc"; // no terminator
        let tab = StringTable::load(blob, 0, 3).unwrap();
        assert!(matches!(tab.name_at(5), Err(LookupError::Malformed(_))));
        assert!(matches!(tab.name_at(0), Err(LookupError::Malformed(_))));
    }
}
