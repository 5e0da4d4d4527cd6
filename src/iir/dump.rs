use core::str::Utf8Error;

use serde::{Deserialize, Serialize};

use super::{PolyDesign, SosDesign};
use crate::FilterNum;

/// Header magic, `b"FILT"` little endian
pub const DUMP_MAGIC: u32 = 0x544C4946;

/// Header format version
pub const DUMP_VERSION: u8 = 0;

/// Header size in bytes
pub const DUMP_HEADER_SIZE: usize = 128;

const NAME_SIZE: usize = 119;

/// Coefficient layout following the header
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::FromRepr, strum::AsRefStr,
)]
#[repr(u8)]
pub enum Structure {
    /// `[b0, b1, b2, a1, a2]` per section
    Sos = 0,
    /// `[b0, .., bN]` then `[a0, .., aN]`
    Poly = 1,
}

/// Coefficient value type
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::FromRepr, strum::AsRefStr,
)]
#[repr(u8)]
pub enum ValueType {
    /// IEEE 754 binary32
    Float = 0,
    /// IEEE 754 binary64
    Double = 1,
    /// Platform extended precision
    LongDouble = 2,
}

/// Dump errors
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, thiserror::Error,
)]
#[non_exhaustive]
pub enum DumpError {
    /// The buffer is too short
    #[error("Buffer too small: {needed} bytes needed, {available} available")]
    BufferTooSmall {
        /// Bytes required
        needed: usize,
        /// Bytes in the buffer
        available: usize,
    },
    /// The record length does not fit the header length field
    #[error("Record of {0} bytes is too large")]
    TooLarge(usize),
    /// Not a dump header
    #[error("Bad magic {0:#010x}")]
    BadMagic(u32),
    /// Header version not supported
    #[error("Unsupported version {0}")]
    UnsupportedVersion(u8),
    /// Unknown coefficient layout
    #[error("Unknown structure {0}")]
    UnknownStructure(u8),
    /// Unknown coefficient type
    #[error("Unknown value type {0}")]
    UnknownValueType(u8),
}

/// Coefficient types that can be dumped
pub trait DumpValue: Copy {
    /// Type tag
    const VALUE_TYPE: ValueType;
    /// Size in bytes
    const SIZE: usize;
    /// Write little endian bytes into `buf[..SIZE]`
    fn write_le(self, buf: &mut [u8]);
}

impl DumpValue for f32 {
    const VALUE_TYPE: ValueType = ValueType::Float;
    const SIZE: usize = 4;
    fn write_le(self, buf: &mut [u8]) {
        buf[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
    }
}

impl DumpValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Double;
    const SIZE: usize = 8;
    fn write_le(self, buf: &mut [u8]) {
        buf[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
    }
}

/// Debug record header
///
/// ```text
/// offset size
///      0    4 magic
///      4    2 length (header and coefficients)
///      6    1 version
///      7    1 structure
///      8    1 value type
///      9  119 name, NUL terminated
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DumpHeader {
    /// Total record length
    pub length: u16,
    /// Format version
    pub version: u8,
    /// Coefficient layout
    pub structure: Structure,
    /// Coefficient type
    pub value_type: ValueType,
    /// NUL padded name
    pub name: [u8; NAME_SIZE],
}

impl DumpHeader {
    /// Header for a record of `length` bytes
    ///
    /// Names longer than 118 bytes are truncated at a character boundary.
    pub fn new(length: u16, structure: Structure, value_type: ValueType, name: &str) -> Self {
        let mut end = name.len().min(NAME_SIZE - 1);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        let mut n = [0; NAME_SIZE];
        n[..end].copy_from_slice(&name.as_bytes()[..end]);
        Self {
            length,
            version: DUMP_VERSION,
            structure,
            value_type,
            name: n,
        }
    }

    /// Name up to the first NUL
    pub fn name(&self) -> Result<&str, Utf8Error> {
        let end = self.name.iter().position(|c| *c == 0).unwrap_or(NAME_SIZE);
        core::str::from_utf8(&self.name[..end])
    }

    /// Coefficient bytes following the header
    pub fn payload_len(&self) -> usize {
        (self.length as usize).saturating_sub(DUMP_HEADER_SIZE)
    }

    /// Serialize into `buf`
    pub fn encode(&self, buf: &mut [u8; DUMP_HEADER_SIZE]) {
        buf[..4].copy_from_slice(&DUMP_MAGIC.to_le_bytes());
        buf[4..6].copy_from_slice(&self.length.to_le_bytes());
        buf[6] = self.version;
        buf[7] = self.structure as u8;
        buf[8] = self.value_type as u8;
        buf[9..].copy_from_slice(&self.name);
    }

    /// Parse a header from the start of `buf`
    pub fn decode(buf: &[u8]) -> Result<Self, DumpError> {
        let buf: &[u8; DUMP_HEADER_SIZE] = buf
            .get(..DUMP_HEADER_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(DumpError::BufferTooSmall {
                needed: DUMP_HEADER_SIZE,
                available: buf.len(),
            })?;
        let magic = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        if magic != DUMP_MAGIC {
            return Err(DumpError::BadMagic(magic));
        }
        if buf[6] != DUMP_VERSION {
            return Err(DumpError::UnsupportedVersion(buf[6]));
        }
        let mut name = [0; NAME_SIZE];
        name.copy_from_slice(&buf[9..]);
        Ok(Self {
            length: u16::from_le_bytes([buf[4], buf[5]]),
            version: buf[6],
            structure: Structure::from_repr(buf[7]).ok_or(DumpError::UnknownStructure(buf[7]))?,
            value_type: ValueType::from_repr(buf[8])
                .ok_or(DumpError::UnknownValueType(buf[8]))?,
            name,
        })
    }
}

fn dump<T: DumpValue>(
    structure: Structure,
    name: &str,
    count: usize,
    values: impl Iterator<Item = T>,
    buf: &mut [u8],
) -> Result<usize, DumpError> {
    let needed = DUMP_HEADER_SIZE + count * T::SIZE;
    let length = u16::try_from(needed).or(Err(DumpError::TooLarge(needed)))?;
    let available = buf.len();
    let (head, body) = buf
        .split_first_chunk_mut::<DUMP_HEADER_SIZE>()
        .filter(|_| available >= needed)
        .ok_or(DumpError::BufferTooSmall { needed, available })?;
    DumpHeader::new(length, structure, T::VALUE_TYPE, name).encode(head);
    for (v, b) in values.zip(body.chunks_exact_mut(T::SIZE)) {
        v.write_le(b);
    }
    log::debug!("dumped {} `{name}`: {needed} bytes", structure.as_ref());
    Ok(needed)
}

impl<T: FilterNum + DumpValue, const S: usize> SosDesign<T, S> {
    /// Write a debug record with the coefficients into `buf`
    ///
    /// Returns the number of bytes written.
    pub fn dump(&self, name: &str, buf: &mut [u8]) -> Result<usize, DumpError> {
        let values = self.sections().iter().flat_map(|s| s.ba);
        dump(Structure::Sos, name, 5 * S, values, buf)
    }
}

impl<T: FilterNum + DumpValue, const N: usize> PolyDesign<T, N> {
    /// Write a debug record with `b` and `a` into `buf`
    ///
    /// Returns the number of bytes written.
    pub fn dump(&self, name: &str, buf: &mut [u8]) -> Result<usize, DumpError> {
        let b = core::iter::once(self.b0()).chain(self.b().iter().copied());
        let a = core::iter::once(T::ONE).chain(self.a().iter().copied());
        dump(Structure::Poly, name, 2 * (N + 1), b.chain(a), buf)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::iir::{Butterworth, IirFilter, SosGain};

    fn f64s(buf: &[u8]) -> impl Iterator<Item = f64> + '_ {
        buf.chunks_exact(8)
            .map(|b| f64::from_le_bytes(b.try_into().unwrap()))
    }

    #[test]
    fn sos() {
        let sos: SosDesign<f64, 2> = IirFilter::new(1e3)
            .lowpass(&Butterworth::<3>::new(), 100.0)
            .unwrap()
            .sos(SosGain::FirstSection);
        let mut buf = [0xff; 256];
        let n = sos.dump("lowpass", &mut buf).unwrap();
        assert_eq!(n, 128 + 10 * 8);
        assert_eq!(&buf[..4], b"FILT");
        let h = DumpHeader::decode(&buf).unwrap();
        assert_eq!(h.length as usize, n);
        assert_eq!(h.structure, Structure::Sos);
        assert_eq!(h.value_type, ValueType::Double);
        assert_eq!(h.name(), Ok("lowpass"));
        assert_eq!(h.payload_len(), 80);
        assert!(
            f64s(&buf[128..n])
                .zip(sos.sections().iter().flat_map(|s| s.ba))
                .all(|(a, b)| a == b)
        );
        assert_eq!(buf[n], 0xff);
    }

    #[test]
    fn poly() {
        let poly: PolyDesign<f32, 2> = IirFilter::new(1e3)
            .lowpass(&Butterworth::<2>::new(), 100.0)
            .unwrap()
            .poly();
        let mut buf = [0; 128 + 6 * 4];
        assert_eq!(poly.dump("", &mut buf), Ok(buf.len()));
        let h = DumpHeader::decode(&buf).unwrap();
        assert_eq!(
            (h.structure, h.value_type, h.name()),
            (Structure::Poly, ValueType::Float, Ok(""))
        );
        let v: [f32; 6] =
            core::array::from_fn(|i| f32::from_le_bytes(buf[128 + 4 * i..][..4].try_into().unwrap()));
        let (b, a): ([f32; 3], [f32; 3]) = poly.ba();
        assert_eq!(v[..3], b);
        assert_eq!(v[3..], a);
    }

    #[test]
    fn errors() {
        let poly: PolyDesign<f64, 1> = IirFilter::new(1.0)
            .lowpass(&Butterworth::<1>::new(), 0.1)
            .unwrap()
            .poly();
        let mut buf = [0; 150];
        assert_eq!(
            poly.dump("x", &mut buf[..100]),
            Err(DumpError::BufferTooSmall {
                needed: 160,
                available: 100
            })
        );
        assert_eq!(
            DumpHeader::decode(&buf[..10]),
            Err(DumpError::BufferTooSmall {
                needed: 128,
                available: 10
            })
        );
        assert_eq!(DumpHeader::decode(&buf), Err(DumpError::BadMagic(0)));
        let mut head = [0; 128];
        DumpHeader::new(128, Structure::Sos, ValueType::LongDouble, "x").encode(&mut head);
        assert_eq!(
            DumpHeader::decode(&head).map(|h| h.value_type),
            Ok(ValueType::LongDouble)
        );
        head[7] = 2;
        assert_eq!(DumpHeader::decode(&head), Err(DumpError::UnknownStructure(2)));
        head[7] = 0;
        head[8] = 3;
        assert_eq!(DumpHeader::decode(&head), Err(DumpError::UnknownValueType(3)));
        head[6] = 1;
        assert_eq!(DumpHeader::decode(&head), Err(DumpError::UnsupportedVersion(1)));

        assert_eq!(
            dump(Structure::Poly, "big", 8192, core::iter::empty::<f64>(), &mut buf),
            Err(DumpError::TooLarge(128 + 8192 * 8))
        );
    }

    #[test]
    fn long_name() {
        let name = "\u{00e9}".repeat(100);
        let h = DumpHeader::new(128, Structure::Sos, ValueType::Float, &name);
        assert_eq!(h.name().map(str::len), Ok(118));
        assert_eq!(h.name, {
            let mut n = [0; 119];
            n[..118].copy_from_slice(&name.as_bytes()[..118]);
            n
        });
        let odd = format!("a{name}");
        let h = DumpHeader::new(128, Structure::Sos, ValueType::Float, &odd);
        assert_eq!(h.name().map(str::len), Ok(117));
    }

    #[test]
    fn invalid_name() {
        let mut head = [0; 128];
        DumpHeader::new(128, Structure::Poly, ValueType::Double, "ab").encode(&mut head);
        head[10] = 0xff;
        let h = DumpHeader::decode(&head).unwrap();
        let err = h.name().unwrap_err();
        assert_eq!(err.valid_up_to(), 1);
        assert_eq!(h.name[..2], [b'a', 0xff]);
    }
}
