imgdim_common::utils::convertible_enum!(
    #[repr(u32)]
    #[derive(Copy, Clone, PartialEq, Eq)]
    #[non_exhaustive]
    #[allow(non_camel_case_types)]
    /// Chunk type as big endian [`u32`] of its four ASCII letters
    pub enum ChunkType {
        /// Image header, carries the dimensions
        IHDR = b(b"IHDR"),
        PLTE = b(b"PLTE"),
        IDAT = b(b"IDAT"),
        /// Last chunk of the stream
        IEND = b(b"IEND"),
        acTL = b(b"acTL"),
        eXIf = b(b"eXIf"),
        iCCP = b(b"iCCP"),
        iTXt = b(b"iTXt"),
        tEXt = b(b"tEXt"),
        zTXt = b(b"zTXt"),
    }
);

impl ChunkType {
    /// Four letter name of the chunk
    pub fn bytes(self) -> [u8; 4] {
        u32::from(self).to_be_bytes()
    }

    /// Compares with a chunk type read from a file, ignoring ASCII case
    pub fn matches(self, bytes: [u8; 4]) -> bool {
        self.bytes().eq_ignore_ascii_case(&bytes)
    }
}

impl std::fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.bytes();
        let name = std::str::from_utf8(&bytes)
            .ok()
            .filter(|name| name.chars().all(|c| c.is_ascii_graphic()));

        match (self, name) {
            (Self::Unknown(_), Some(name)) => write!(f, "Unknown({name:?})"),
            (Self::Unknown(value), None) => write!(f, "Unknown({value:#010x})"),
            (_, name) => f.write_str(name.unwrap_or_default()),
        }
    }
}

const fn b(name: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion() {
        assert_eq!(ChunkType::from(b(b"IHDR")), ChunkType::IHDR);
        assert_eq!(ChunkType::IEND.bytes(), *b"IEND");
        assert_eq!(ChunkType::from(b(b"abcd")), ChunkType::Unknown(b(b"abcd")));
    }

    #[test]
    fn case_insensitive() {
        assert!(ChunkType::IHDR.matches(*b"IHDR"));
        assert!(ChunkType::IHDR.matches(*b"ihdr"));
        assert!(ChunkType::IHDR.matches(*b"iHdR"));
        assert!(!ChunkType::IHDR.matches(*b"IDAT"));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", ChunkType::tEXt), "tEXt");
        assert_eq!(format!("{:?}", ChunkType::from(b(b"abcd"))), "Unknown(\"abcd\")");
        assert_eq!(format!("{:?}", ChunkType::from(1)), "Unknown(0x00000001)");
    }
}
