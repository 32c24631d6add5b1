//! Binary serializer: the mirror image of [`crate::de`] (spec §4.4).
//! `serialize(deserialize(b, e), e) == b` for every `b` the deserializer
//! accepts.

use crate::scalar::{self, Endian};
use crate::tag::{Tag, TagKind};

fn write_name(out: &mut Vec<u8>, name: &str, endian: Endian) {
    let bytes = cesu8::to_java_cesu8(name);
    scalar::write_u16(out, bytes.len() as u16, endian);
    out.extend_from_slice(&bytes);
}

/// Writes `tag`'s payload only — no kind, no name. Used for list elements,
/// which omit the header entirely (spec §3.2, §4.4).
fn write_payload(out: &mut Vec<u8>, tag: &Tag, endian: Endian) {
    match tag {
        Tag::Byte(v) => out.push(*v as u8),
        Tag::Short(v) => scalar::write_i16(out, *v, endian),
        Tag::Int(v) => scalar::write_i32(out, *v, endian),
        Tag::Long(v) => scalar::write_i64(out, *v, endian),
        Tag::Float(v) => scalar::write_u32(out, v.to_bits(), endian),
        Tag::Double(v) => scalar::write_u64(out, v.to_bits(), endian),
        Tag::ByteArray(bytes) => {
            scalar::write_i32(out, bytes.len() as i32, endian);
            out.extend(bytes.iter().map(|&b| b as u8));
        }
        Tag::String(s) => write_name(out, s, endian),
        Tag::List(list) => {
            out.push(list.element.id());
            scalar::write_i32(out, list.values.len() as i32, endian);
            for value in &list.values {
                write_payload(out, value, endian);
            }
        }
        Tag::Compound(children) => {
            for (name, child) in children {
                write_named_tag(out, name, child, endian);
            }
            // Synthesized terminator (spec §9 "End-tag representation");
            // the caller never has to append one itself.
            out.push(TagKind::End.id());
        }
        Tag::IntArray(values) => {
            scalar::write_i32(out, values.len() as i32, endian);
            for v in values {
                scalar::write_i32(out, *v, endian);
            }
        }
        Tag::LongArray(values) => {
            scalar::write_i32(out, values.len() as i32, endian);
            for v in values {
                scalar::write_i64(out, *v, endian);
            }
        }
    }
}

/// Writes a complete named tag: `kind | name_len | name | payload`.
fn write_named_tag(out: &mut Vec<u8>, name: &str, tag: &Tag, endian: Endian) {
    out.push(tag.kind().id());
    write_name(out, name, endian);
    write_payload(out, tag, endian);
}

/// Serializes `tag` (named `name`, unless it is itself a list element) to
/// bytes. This is the document-level entry point; `skip_header` is only
/// meaningful internally, for list elements (spec §4.4).
pub fn serialize(name: &str, tag: &Tag, endian: Endian) -> Vec<u8> {
    let mut out = Vec::with_capacity(crate::tag::full_size(name, tag));
    write_named_tag(&mut out, name, tag, endian);
    out
}

/// Serializes `tag`'s payload alone, skipping kind+name. Exposed for
/// callers building their own framing (e.g. embedding inside a larger
/// container format that is not plain NBT).
pub fn serialize_payload(tag: &Tag, endian: Endian) -> Vec<u8> {
    let mut out = Vec::new();
    write_payload(&mut out, tag, endian);
    out
}
