//! Textual (JSON-shaped) bridge: a discriminated-union projection of a
//! [`Tag`] tree that preserves kind identity and list element-kind
//! metadata across a round trip (spec §4.5).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NBTError, NBTResult};
use crate::tag::{NbtList, Tag, TagKind};

/// Wire shape of a single textual tag record. Field order is the struct's
/// declaration order (`type`, `name`, `elementType`, `value`), which serde
/// preserves when serializing a struct — unlike a `serde_json::Value` map,
/// whose key order is not guaranteed the same way (spec §6.2).
#[derive(Serialize, Deserialize)]
struct TextTag {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    #[serde(
        rename = "elementType",
        skip_serializing_if = "Option::is_none",
        default
    )]
    element_type: Option<String>,
    value: Value,
}

fn encode_node(name: &str, tag: &Tag) -> TextTag {
    let kind = tag.kind();
    match tag {
        Tag::Byte(v) => leaf(kind, name, Value::from(*v)),
        Tag::Short(v) => leaf(kind, name, Value::from(*v)),
        Tag::Int(v) => leaf(kind, name, Value::from(*v)),
        Tag::Long(v) => leaf(kind, name, Value::from(*v)),
        Tag::Float(v) => leaf(kind, name, Value::from(*v)),
        Tag::Double(v) => leaf(kind, name, Value::from(*v)),
        Tag::String(s) => leaf(kind, name, Value::from(s.clone())),
        Tag::ByteArray(bytes) => leaf(kind, name, Value::from(bytes.clone())),
        Tag::IntArray(values) => leaf(kind, name, Value::from(values.clone())),
        Tag::LongArray(values) => leaf(kind, name, Value::from(values.clone())),
        Tag::List(list) => {
            let children: Vec<Value> = list
                .values
                .iter()
                .map(|child| serde_json::to_value(encode_node("", child)).unwrap())
                .collect();
            TextTag {
                kind: kind.as_text().to_string(),
                name: name.to_string(),
                element_type: Some(list.element.as_text().to_string()),
                value: Value::Array(children),
            }
        }
        Tag::Compound(children) => {
            let encoded: Vec<Value> = children
                .iter()
                .map(|(child_name, child)| {
                    serde_json::to_value(encode_node(child_name, child)).unwrap()
                })
                .collect();
            leaf(kind, name, Value::Array(encoded))
        }
    }
}

fn leaf(kind: TagKind, name: &str, value: Value) -> TextTag {
    TextTag {
        kind: kind.as_text().to_string(),
        name: name.to_string(),
        element_type: None,
        value,
    }
}

/// Encodes `(name, tag)` as a `serde_json::Value` in the discriminated
/// shape of spec §4.5.
pub fn encode_value(name: &str, tag: &Tag) -> Value {
    serde_json::to_value(encode_node(name, tag)).expect("TextTag serialization cannot fail")
}

/// Encodes `(name, tag)` as a pretty-printed JSON string.
pub fn encode_string(name: &str, tag: &Tag) -> NBTResult<String> {
    Ok(serde_json::to_string_pretty(&encode_node(name, tag))?)
}

fn expect_i64(value: &Value, what: &str) -> NBTResult<i64> {
    value
        .as_i64()
        .ok_or_else(|| NBTError::TextShapeMismatch(format!("{} is not an integer", what)))
}

fn expect_f64(value: &Value, what: &str) -> NBTResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| NBTError::TextShapeMismatch(format!("{} is not a number", what)))
}

fn expect_array<'a>(value: &'a Value, what: &str) -> NBTResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| NBTError::TextShapeMismatch(format!("{} is not an array", what)))
}

fn decode_node(value: &Value) -> NBTResult<(String, Tag)> {
    let text: TextTag = serde_json::from_value(value.clone())?;
    let kind = TagKind::from_text(&text.kind)
        .ok_or_else(|| NBTError::TextShapeMismatch(format!("unknown tag type '{}'", text.kind)))?;

    let tag = match kind {
        TagKind::End => {
            return Err(NBTError::TextShapeMismatch(
                "'end' is not a valid standalone tag".to_string(),
            ))
        }
        TagKind::Byte => Tag::Byte(expect_i64(&text.value, "byte value")? as i8),
        TagKind::Short => Tag::Short(expect_i64(&text.value, "short value")? as i16),
        TagKind::Int => Tag::Int(expect_i64(&text.value, "int value")? as i32),
        TagKind::Long => Tag::Long(expect_i64(&text.value, "long value")?),
        TagKind::Float => Tag::Float(expect_f64(&text.value, "float value")? as f32),
        TagKind::Double => Tag::Double(expect_f64(&text.value, "double value")?),
        TagKind::String => Tag::String(
            text.value
                .as_str()
                .ok_or_else(|| NBTError::TextShapeMismatch("string value is not a string".into()))?
                .to_string(),
        ),
        TagKind::ByteArray => {
            let arr = expect_array(&text.value, "byteArray value")?;
            let mut bytes = Vec::with_capacity(arr.len());
            for v in arr {
                bytes.push(expect_i64(v, "byteArray element")? as i8);
            }
            Tag::ByteArray(bytes)
        }
        TagKind::IntArray => {
            let arr = expect_array(&text.value, "intArray value")?;
            let mut values = Vec::with_capacity(arr.len());
            for v in arr {
                values.push(expect_i64(v, "intArray element")? as i32);
            }
            Tag::IntArray(values)
        }
        TagKind::LongArray => {
            let arr = expect_array(&text.value, "longArray value")?;
            let mut values = Vec::with_capacity(arr.len());
            for v in arr {
                values.push(expect_i64(v, "longArray element")?);
            }
            Tag::LongArray(values)
        }
        TagKind::List => {
            let element_str = text.element_type.ok_or_else(|| {
                NBTError::TextShapeMismatch("list is missing 'elementType'".to_string())
            })?;
            let element = TagKind::from_text(&element_str).ok_or_else(|| {
                NBTError::TextShapeMismatch(format!("unknown elementType '{}'", element_str))
            })?;
            let arr = expect_array(&text.value, "list value")?;
            let mut values = Vec::with_capacity(arr.len());
            for (i, item) in arr.iter().enumerate() {
                let (_, child) = decode_node(item)
                    .map_err(|e| e.context(format!("list element {}", i)))?;
                if child.kind() != element {
                    return Err(NBTError::InvalidList {
                        found: child.kind(),
                        expecting: element,
                    });
                }
                values.push(child);
            }
            Tag::List(NbtList::from_values(element, values))
        }
        TagKind::Compound => {
            let arr = expect_array(&text.value, "compound value")?;
            let mut children = Vec::with_capacity(arr.len());
            for (i, item) in arr.iter().enumerate() {
                let child = decode_node(item).map_err(|e| e.context(format!("field {}", i)))?;
                children.push(child);
            }
            Tag::Compound(children)
        }
    };

    Ok((text.name, tag))
}

/// Decodes a `serde_json::Value` in the discriminated shape of spec §4.5
/// back into `(name, tag)`.
pub fn decode_value(value: &Value) -> NBTResult<(String, Tag)> {
    decode_node(value)
}

/// Decodes a JSON string in the discriminated shape back into `(name,
/// tag)`.
pub fn decode_str(s: &str) -> NBTResult<(String, Tag)> {
    let value: Value = serde_json::from_str(s)?;
    decode_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::de::deserialize;
    use crate::scalar::Endian;
    use crate::ser::serialize;

    #[test]
    fn round_trip_preserves_kind_name_and_payload() {
        let tag = Tag::Compound(vec![
            ("age".to_string(), Tag::Byte(18)),
            ("id".to_string(), Tag::Int(69420)),
            (
                "tags".to_string(),
                Tag::List(NbtList::from_values(
                    TagKind::String,
                    vec![Tag::String("a".into()), Tag::String("b".into())],
                )),
            ),
        ]);
        let value = encode_value("root", &tag);
        let (name, decoded) = decode_value(&value).unwrap();
        assert_eq!(name, "root");
        assert_eq!(decoded, tag);
    }

    #[test]
    fn empty_list_round_trips_element_type() {
        let tag = Tag::List(NbtList::new(TagKind::Int));
        let value = encode_value("numbers", &tag);
        assert_eq!(value["elementType"], "int");
        let (_, decoded) = decode_value(&value).unwrap();
        match decoded {
            Tag::List(list) => assert_eq!(list.element, TagKind::Int),
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn decoded_text_serializes_identically_to_binary_of_original() {
        #[rustfmt::skip]
        let bytes: Vec<u8> = vec![
            0x0A, 0x00, 0x04, b'r', b'o', b'o', b't',
            0x03, 0x00, 0x06, b'n', b'u', b'm', b'b', b'e', b'r', 0x00, 0x00, 0x00, 0x2A,
            0x08, 0x00, 0x04, b't', b'e', b'x', b't', 0x00, 0x05, b'h', b'e', b'l', b'l', b'o',
            0x00,
        ];
        let (name, tag) = deserialize(&bytes, Endian::Big).unwrap();
        let text = encode_value(&name, &tag);
        let (name2, tag2) = decode_value(&text).unwrap();
        assert_eq!(serialize(&name2, &tag2, Endian::Big), bytes);
    }

    #[test]
    fn unknown_discriminator_is_an_error() {
        let value = serde_json::json!({"type": "bogus", "name": "x", "value": 1});
        assert!(decode_value(&value).is_err());
    }

    #[test]
    fn list_element_kind_mismatch_is_rejected() {
        let value = serde_json::json!({
            "type": "list",
            "name": "mixed",
            "elementType": "int",
            "value": [
                {"type": "int", "name": "", "value": 1},
                {"type": "string", "name": "", "value": "oops"},
            ]
        });
        assert!(decode_value(&value).is_err());
    }
}
