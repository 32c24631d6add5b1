//! Fixed-width scalar conversions to/from byte slices, parameterized by
//! endianness. No allocation; total over well-sized inputs.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::NBTError;

/// Byte order of a wire-format document. Chosen once per document, before
/// parsing begins; it never changes mid-stream (spec: "Endianness scope").
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

impl Default for Endian {
    fn default() -> Self {
        Endian::Big
    }
}

fn need(bytes: &[u8], width: usize) -> Result<(), NBTError> {
    if bytes.len() < width {
        Err(NBTError::Truncated {
            needed: width,
            available: bytes.len(),
        })
    } else {
        Ok(())
    }
}

macro_rules! reader {
    ($name:ident, $ret:ty, $width:expr, $get:ident) => {
        pub fn $name(bytes: &[u8], endian: Endian) -> Result<$ret, NBTError> {
            need(bytes, $width)?;
            Ok(match endian {
                Endian::Big => BigEndian::$get(bytes),
                Endian::Little => LittleEndian::$get(bytes),
            })
        }
    };
}

macro_rules! writer {
    ($name:ident, $val:ty, $width:expr, $put:ident) => {
        pub fn $name(out: &mut Vec<u8>, value: $val, endian: Endian) {
            let mut buf = [0u8; $width];
            match endian {
                Endian::Big => BigEndian::$put(&mut buf, value),
                Endian::Little => LittleEndian::$put(&mut buf, value),
            }
            out.extend_from_slice(&buf);
        }
    };
}

reader!(read_u16, u16, 2, read_u16);
reader!(read_u32, u32, 4, read_u32);
reader!(read_u64, u64, 8, read_u64);
reader!(read_f32_bits, f32, 4, read_f32);
reader!(read_f64_bits, f64, 8, read_f64);

writer!(write_u16, u16, 2, write_u16);
writer!(write_u32, u32, 4, write_u32);
writer!(write_u64, u64, 8, write_u64);
writer!(write_f32_bits, f32, 4, write_f32);
writer!(write_f64_bits, f64, 8, write_f64);

pub fn read_i16(bytes: &[u8], endian: Endian) -> Result<i16, NBTError> {
    Ok(read_u16(bytes, endian)? as i16)
}

pub fn read_i32(bytes: &[u8], endian: Endian) -> Result<i32, NBTError> {
    Ok(read_u32(bytes, endian)? as i32)
}

pub fn read_i64(bytes: &[u8], endian: Endian) -> Result<i64, NBTError> {
    Ok(read_u64(bytes, endian)? as i64)
}

pub fn write_i16(out: &mut Vec<u8>, value: i16, endian: Endian) {
    write_u16(out, value as u16, endian)
}

pub fn write_i32(out: &mut Vec<u8>, value: i32, endian: Endian) {
    write_u32(out, value as u32, endian)
}

pub fn write_i64(out: &mut Vec<u8>, value: i64, endian: Endian) {
    write_u64(out, value as u64, endian)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_width_both_endians() {
        for &endian in &[Endian::Big, Endian::Little] {
            let mut buf = Vec::new();
            write_i32(&mut buf, -123456, endian);
            assert_eq!(read_i32(&buf, endian).unwrap(), -123456);

            let mut buf = Vec::new();
            write_i64(&mut buf, i64::MIN, endian);
            assert_eq!(read_i64(&buf, endian).unwrap(), i64::MIN);

            let mut buf = Vec::new();
            write_f32_bits(&mut buf, f32::NAN.copysign(-1.0), endian);
            assert!(read_f32_bits(&buf, endian).unwrap().is_nan());
        }
    }

    #[test]
    fn truncated_slice_reports_intended_width() {
        let err = read_i32(&[0u8, 1], Endian::Big).unwrap_err();
        match err {
            NBTError::Truncated { needed, available } => {
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn preserves_nan_bit_pattern_verbatim() {
        let bits: u32 = 0x7fc00001;
        let value = f32::from_bits(bits);
        let mut buf = Vec::new();
        write_f32_bits(&mut buf, value, Endian::Big);
        let back = read_f32_bits(&buf, Endian::Big).unwrap();
        assert_eq!(back.to_bits(), bits);
    }
}
