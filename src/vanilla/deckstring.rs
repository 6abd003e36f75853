//! External deck string format.
//!
//! A deck string is base64 over a varint stream:
//!
//! ```text
//! 0x00 version format
//! hero_count hero*
//! n1 id*       (single copies)
//! n2 id*       (double copies)
//! nn (id count)*
//! ```
//!
//! Ids within each section are written in ascending order. Anything after
//! the card sections (sideboards) is ignored when decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Format version this codec reads and writes.
pub const DECKSTRING_VERSION: u32 = 1;

/// Game format stored in the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VanillaFormat {
    #[default]
    Wild = 1,
    Standard = 2,
    Classic = 3,
    Twist = 4,
}

impl VanillaFormat {
    #[must_use]
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(VanillaFormat::Wild),
            2 => Some(VanillaFormat::Standard),
            3 => Some(VanillaFormat::Classic),
            4 => Some(VanillaFormat::Twist),
            _ => None,
        }
    }
}

/// A decoded deck string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VanillaDeck {
    pub format: VanillaFormat,
    /// Hero card ids. Constructed decks have exactly one.
    pub heroes: Vec<u32>,
    /// `(dbf_id, copies)` pairs.
    pub cards: Vec<(u32, u32)>,
}

#[derive(Debug, Error)]
pub enum DeckstringError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("deck string ended unexpectedly")]
    UnexpectedEnd,

    #[error("invalid header byte {0:#04x}")]
    InvalidHeader(u8),

    #[error("unsupported deck string version {0}")]
    UnsupportedVersion(u32),

    #[error("unknown format {0}")]
    UnknownFormat(u32),

    #[error("varint does not fit in 32 bits")]
    VarintOverflow,

    #[error("card {0} has zero copies")]
    ZeroCopies(u32),
}

/// Encoding and decoding of external deck strings. The default is
/// [`Deckstring`]; callers can inject their own.
pub trait DeckstringCodec {
    fn encode(&self, deck: &VanillaDeck) -> Result<String, DeckstringError>;

    fn decode(&self, code: &str) -> Result<VanillaDeck, DeckstringError>;
}

/// The standard base64 varint deck string codec.
#[derive(Clone, Copy, Debug, Default)]
pub struct Deckstring;

impl DeckstringCodec for Deckstring {
    fn encode(&self, deck: &VanillaDeck) -> Result<String, DeckstringError> {
        let mut singles = Vec::new();
        let mut doubles = Vec::new();
        let mut many = Vec::new();
        for &(id, copies) in &deck.cards {
            match copies {
                0 => return Err(DeckstringError::ZeroCopies(id)),
                1 => singles.push(id),
                2 => doubles.push(id),
                n => many.push((id, n)),
            }
        }
        singles.sort_unstable();
        doubles.sort_unstable();
        many.sort_unstable();

        let mut heroes = deck.heroes.clone();
        heroes.sort_unstable();

        let mut buf = vec![0u8];
        write_varint(&mut buf, DECKSTRING_VERSION);
        write_varint(&mut buf, deck.format as u32);
        write_list(&mut buf, &heroes);
        write_list(&mut buf, &singles);
        write_list(&mut buf, &doubles);
        write_varint(&mut buf, many.len() as u32);
        for (id, copies) in many {
            write_varint(&mut buf, id);
            write_varint(&mut buf, copies);
        }

        Ok(STANDARD.encode(buf))
    }

    fn decode(&self, code: &str) -> Result<VanillaDeck, DeckstringError> {
        let bytes = STANDARD.decode(code.trim())?;
        let mut reader = Reader::new(&bytes);

        let header = reader.byte()?;
        if header != 0 {
            return Err(DeckstringError::InvalidHeader(header));
        }
        let version = reader.varint()?;
        if version != DECKSTRING_VERSION {
            return Err(DeckstringError::UnsupportedVersion(version));
        }
        let format = reader.varint()?;
        let format = VanillaFormat::from_u32(format).ok_or(DeckstringError::UnknownFormat(format))?;

        let heroes = reader.list()?;

        let mut cards = Vec::new();
        for copies in [1, 2] {
            for id in reader.list()? {
                cards.push((id, copies));
            }
        }
        let n = reader.varint()?;
        for _ in 0..n {
            let id = reader.varint()?;
            let copies = reader.varint()?;
            if copies == 0 {
                return Err(DeckstringError::ZeroCopies(id));
            }
            cards.push((id, copies));
        }

        Ok(VanillaDeck {
            format,
            heroes,
            cards,
        })
    }
}

fn write_varint(buf: &mut Vec<u8>, mut value: u32) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}

fn write_list(buf: &mut Vec<u8>, ids: &[u32]) {
    write_varint(buf, ids.len() as u32);
    for &id in ids {
        write_varint(buf, id);
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn byte(&mut self) -> Result<u8, DeckstringError> {
        let byte = *self.bytes.get(self.pos).ok_or(DeckstringError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(byte)
    }

    fn varint(&mut self) -> Result<u32, DeckstringError> {
        let mut value: u64 = 0;
        let mut shift = 0;
        loop {
            let byte = self.byte()?;
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
            if shift > 28 {
                return Err(DeckstringError::VarintOverflow);
            }
        }
        u32::try_from(value).map_err(|_| DeckstringError::VarintOverflow)
    }

    fn list(&mut self) -> Result<Vec<u32>, DeckstringError> {
        // Grown as read: the stated length is untrusted.
        let n = self.varint()?;
        let mut ids = Vec::new();
        for _ in 0..n {
            ids.push(self.varint()?);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varint() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 300);
        assert_eq!(buf, vec![0xac, 0x02]);

        let mut reader = Reader::new(&buf);
        assert_eq!(reader.varint().unwrap(), 300);
        assert!(matches!(reader.varint(), Err(DeckstringError::UnexpectedEnd)));
    }

    #[test]
    fn test_varint_overflow() {
        let bytes = [0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        let mut reader = Reader::new(&bytes);
        assert!(matches!(reader.varint(), Err(DeckstringError::VarintOverflow)));
    }

    #[test]
    fn test_known_bytes() {
        // Mage (637), one Wisp (179), two Fireballs (315), three of card 1.
        let deck = VanillaDeck {
            format: VanillaFormat::Wild,
            heroes: vec![637],
            cards: vec![(315, 2), (179, 1), (1, 3)],
        };
        let code = Deckstring.encode(&deck).unwrap();
        let bytes = STANDARD.decode(&code).unwrap();
        assert_eq!(
            bytes,
            vec![0, 1, 1, 1, 0xfd, 0x04, 1, 0xb3, 0x01, 1, 0xbb, 0x02, 1, 1, 3]
        );

        let decoded = Deckstring.decode(&code).unwrap();
        assert_eq!(decoded.heroes, vec![637]);
        assert_eq!(decoded.cards, vec![(179, 1), (315, 2), (1, 3)]);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            Deckstring.decode("not base64!"),
            Err(DeckstringError::Base64(_))
        ));
        assert!(matches!(
            Deckstring.decode(&STANDARD.encode([1u8, 1, 1])),
            Err(DeckstringError::InvalidHeader(1))
        ));
        assert!(matches!(
            Deckstring.decode(&STANDARD.encode([0u8, 2, 1])),
            Err(DeckstringError::UnsupportedVersion(2))
        ));
        assert!(matches!(
            Deckstring.decode(&STANDARD.encode([0u8, 1, 9])),
            Err(DeckstringError::UnknownFormat(9))
        ));
        assert!(matches!(
            Deckstring.decode(&STANDARD.encode([0u8, 1, 1, 1])),
            Err(DeckstringError::UnexpectedEnd)
        ));
    }

    #[test]
    fn test_trailing_sideboard_ignored() {
        let bytes = [0u8, 1, 2, 1, 7, 1, 5, 0, 0, 1, 1, 9, 9];
        let deck = Deckstring.decode(&STANDARD.encode(bytes)).unwrap();
        assert_eq!(deck.format, VanillaFormat::Standard);
        assert_eq!(deck.heroes, vec![7]);
        assert_eq!(deck.cards, vec![(5, 1)]);
    }

    #[test]
    fn test_encode_zero_copies() {
        let deck = VanillaDeck {
            cards: vec![(5, 0)],
            ..VanillaDeck::default()
        };
        assert!(matches!(
            Deckstring.encode(&deck),
            Err(DeckstringError::ZeroCopies(5))
        ));
    }

    #[test]
    fn test_decode_zero_copies() {
        // One hero, no singles or doubles, card 5 with zero copies.
        let bytes = [0u8, 1, 1, 1, 7, 0, 0, 1, 5, 0];
        assert!(matches!(
            Deckstring.decode(&STANDARD.encode(bytes)),
            Err(DeckstringError::ZeroCopies(5))
        ));
    }

    #[test]
    fn test_decode_huge_list_length() {
        // A hero list claiming u32::MAX entries with none present.
        let bytes = [0u8, 1, 1, 0xff, 0xff, 0xff, 0xff, 0x0f];
        assert!(matches!(
            Deckstring.decode(&STANDARD.encode(bytes)),
            Err(DeckstringError::UnexpectedEnd)
        ));
    }

    #[test]
    fn test_internal_code_is_not_a_deckstring() {
        assert!(Deckstring.decode("Mage /1/ a").is_err());
        assert!(Deckstring.decode("Death Knight [3B] /1:8,2/ 5o").is_err());
    }
}
