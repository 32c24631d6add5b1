//! Binary deserializer: recursive descent over a byte slice into a [`Tag`]
//! tree (spec §4.3).

use crate::error::{NBTError, NBTResult};
use crate::scalar::{self, Endian};
use crate::tag::{NbtList, Tag, TagKind};

/// Default recursion limit for nested compounds/lists. Not part of the wire
/// format; guards against pathological input (spec §5, §9 "Depth bound").
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
    endian: Endian,
    depth_limit: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    fn take(&mut self, n: usize) -> NBTResult<&'a [u8]> {
        let rest = self.remaining();
        if rest.len() < n {
            return Err(NBTError::Truncated {
                needed: n,
                available: rest.len(),
            });
        }
        let slice = &rest[..n];
        self.offset += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> NBTResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_i8(&mut self) -> NBTResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    fn read_u16(&mut self) -> NBTResult<u16> {
        scalar::read_u16(self.take(2)?, self.endian)
    }

    fn read_i16(&mut self) -> NBTResult<i16> {
        scalar::read_i16(self.take(2)?, self.endian)
    }

    fn read_i32(&mut self) -> NBTResult<i32> {
        scalar::read_i32(self.take(4)?, self.endian)
    }

    fn read_i64(&mut self) -> NBTResult<i64> {
        scalar::read_i64(self.take(8)?, self.endian)
    }

    fn read_f32(&mut self) -> NBTResult<f32> {
        Ok(f32::from_bits(scalar::read_u32(self.take(4)?, self.endian)?))
    }

    fn read_f64(&mut self) -> NBTResult<f64> {
        Ok(f64::from_bits(scalar::read_u64(self.take(8)?, self.endian)?))
    }

    fn read_kind(&mut self) -> NBTResult<TagKind> {
        let id = self.read_u8()?;
        TagKind::from_id(id).ok_or(NBTError::InvalidTagKind(id))
    }

    fn read_name(&mut self) -> NBTResult<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        Ok(cesu8::from_java_cesu8(bytes)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()))
    }

    fn read_signed_length(&mut self, field: &'static str) -> NBTResult<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(NBTError::NegativeLength { field, value: len });
        }
        Ok(len as usize)
    }

    /// Reads a fully framed tag: kind, then (unless End) name and payload.
    /// Returns `None` for End, so callers can distinguish the compound
    /// terminator without a dummy `Tag` value.
    fn read_named_tag(&mut self, depth: usize) -> NBTResult<Option<(String, Tag)>> {
        let kind = self.read_kind()?;
        if kind == TagKind::End {
            return Ok(None);
        }
        let name = self.read_name()?;
        let payload = self.read_payload(kind, depth)?;
        Ok(Some((name, payload)))
    }

    fn check_depth(&self, depth: usize) -> NBTResult<()> {
        if depth > self.depth_limit {
            return Err(NBTError::DepthLimitExceeded {
                limit: self.depth_limit,
            });
        }
        Ok(())
    }

    fn read_payload(&mut self, kind: TagKind, depth: usize) -> NBTResult<Tag> {
        match kind {
            TagKind::End => unreachable!("End has no payload and is handled by the caller"),
            TagKind::Byte => Ok(Tag::Byte(self.read_i8()?)),
            TagKind::Short => Ok(Tag::Short(self.read_i16()?)),
            TagKind::Int => Ok(Tag::Int(self.read_i32()?)),
            TagKind::Long => Ok(Tag::Long(self.read_i64()?)),
            TagKind::Float => Ok(Tag::Float(self.read_f32()?)),
            TagKind::Double => Ok(Tag::Double(self.read_f64()?)),
            TagKind::ByteArray => {
                let len = self.read_signed_length("byte array length")?;
                let bytes = self.take(len)?;
                Ok(Tag::ByteArray(bytes.iter().map(|&b| b as i8).collect()))
            }
            TagKind::String => {
                let len = self.read_u16()? as usize;
                let bytes = self.take(len)?;
                let s = cesu8::from_java_cesu8(bytes)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());
                Ok(Tag::String(s))
            }
            TagKind::List => {
                self.check_depth(depth)?;
                let element = self.read_kind()?;
                let len = self.read_signed_length("list length")?;
                let mut values = Vec::with_capacity(len.min(1 << 20));
                for i in 0..len {
                    if element == TagKind::End {
                        return Err(NBTError::InvalidList {
                            found: TagKind::End,
                            expecting: TagKind::End,
                        }
                        .context(format!("list element {}", i)));
                    }
                    let value = self
                        .read_payload(element, depth + 1)
                        .map_err(|e| e.context(format!("list element {}", i)))?;
                    values.push(value);
                }
                Ok(Tag::List(NbtList::from_values(element, values)))
            }
            TagKind::Compound => {
                self.check_depth(depth)?;
                let mut children = Vec::new();
                loop {
                    match self
                        .read_named_tag(depth + 1)
                        .map_err(|e| e.context("in compound"))?
                    {
                        None => break,
                        Some(child) => children.push(child),
                    }
                }
                Ok(Tag::Compound(children))
            }
            TagKind::IntArray => {
                let len = self.read_signed_length("int array length")?;
                let mut values = Vec::with_capacity(len.min(1 << 20));
                for _ in 0..len {
                    values.push(self.read_i32()?);
                }
                Ok(Tag::IntArray(values))
            }
            TagKind::LongArray => {
                let len = self.read_signed_length("long array length")?;
                let mut values = Vec::with_capacity(len.min(1 << 20));
                for _ in 0..len {
                    values.push(self.read_i64()?);
                }
                Ok(Tag::LongArray(values))
            }
        }
    }
}

/// Parses `bytes` as a single root tag. The root must be a Compound or
/// List (spec §3.4); anything else, or trailing bytes after the root, is a
/// fatal error (spec §4.3 "Trailing-byte policy", "Root-kind check").
pub fn deserialize(bytes: &[u8], endian: Endian) -> NBTResult<(String, Tag)> {
    deserialize_with_depth_limit(bytes, endian, DEFAULT_DEPTH_LIMIT)
}

pub fn deserialize_with_depth_limit(
    bytes: &[u8],
    endian: Endian,
    depth_limit: usize,
) -> NBTResult<(String, Tag)> {
    let mut reader = Reader {
        bytes,
        offset: 0,
        endian,
        depth_limit,
    };
    let kind = reader.read_kind()?;
    if kind == TagKind::End {
        return Err(NBTError::InvalidRootKind(TagKind::End));
    }
    let name = reader.read_name()?;
    let root = reader.read_payload(kind, 1)?;
    if !root.is_valid_root() {
        return Err(NBTError::InvalidRootKind(root.kind()));
    }
    let extra = bytes.len() - reader.offset;
    if extra > 0 {
        return Err(NBTError::TrailingData { extra });
    }
    Ok((name, root))
}
