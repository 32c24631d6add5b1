use std::fmt;

/// The one-byte wire discriminant of a tag. All 13 kinds are represented,
/// including `End`, because a `List`'s element kind must be preserved even
/// when the list is empty and its elements are never materialized as `Tag`
/// values (spec §3.3, §3.4).
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagKind {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagKind {
    pub fn from_id(id: u8) -> Option<TagKind> {
        Some(match id {
            0 => TagKind::End,
            1 => TagKind::Byte,
            2 => TagKind::Short,
            3 => TagKind::Int,
            4 => TagKind::Long,
            5 => TagKind::Float,
            6 => TagKind::Double,
            7 => TagKind::ByteArray,
            8 => TagKind::String,
            9 => TagKind::List,
            10 => TagKind::Compound,
            11 => TagKind::IntArray,
            12 => TagKind::LongArray,
            _ => return None,
        })
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// The discriminator string used by the textual (JSON-shaped) bridge.
    pub fn as_text(&self) -> &'static str {
        match self {
            TagKind::End => "end",
            TagKind::Byte => "byte",
            TagKind::Short => "short",
            TagKind::Int => "int",
            TagKind::Long => "long",
            TagKind::Float => "float",
            TagKind::Double => "double",
            TagKind::ByteArray => "byteArray",
            TagKind::String => "string",
            TagKind::List => "list",
            TagKind::Compound => "compound",
            TagKind::IntArray => "intArray",
            TagKind::LongArray => "longArray",
        }
    }

    pub fn from_text(s: &str) -> Option<TagKind> {
        Some(match s {
            "end" => TagKind::End,
            "byte" => TagKind::Byte,
            "short" => TagKind::Short,
            "int" => TagKind::Int,
            "long" => TagKind::Long,
            "float" => TagKind::Float,
            "double" => TagKind::Double,
            "byteArray" => TagKind::ByteArray,
            "string" => TagKind::String,
            "list" => TagKind::List,
            "compound" => TagKind::Compound,
            "intArray" => TagKind::IntArray,
            "longArray" => TagKind::LongArray,
            _ => return None,
        })
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

/// A List tag's payload: an element kind (significant even when `values` is
/// empty) plus the homogeneous child values (spec §3.3).
#[derive(Debug, Clone, PartialEq)]
pub struct NbtList {
    pub element: TagKind,
    pub values: Vec<Tag>,
}

impl NbtList {
    pub fn new(element: TagKind) -> NbtList {
        NbtList {
            element,
            values: Vec::new(),
        }
    }

    pub fn from_values(element: TagKind, values: Vec<Tag>) -> NbtList {
        NbtList { element, values }
    }
}

/// A parsed or programmatically constructed NBT value. `End` has no
/// corresponding variant: it exists only on the wire as a Compound
/// terminator, which this tree synthesizes at serialization time and
/// consumes silently while parsing (spec §9, "End-tag representation").
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// Raw bytes, signed per the Java convention (spec §3.1).
    ByteArray(Vec<i8>),
    /// Passed through verbatim; malformed UTF-8 is not rejected at this
    /// layer (spec §4.3, §7 item 7).
    String(String),
    List(NbtList),
    /// Named children in the order they were parsed or inserted (spec
    /// §3.4: ordering is preserved, not normalized).
    Compound(Vec<(String, Tag)>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
        }
    }

    /// True if this tag's kind may be a document root (spec §3.4).
    pub fn is_valid_root(&self) -> bool {
        matches!(self, Tag::Compound(_) | Tag::List(_))
    }

    /// Convenience accessor into a Compound's children by name.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        match self {
            Tag::Compound(children) => children.iter().find(|(n, _)| n == name).map(|(_, t)| t),
            _ => None,
        }
    }
}

/// The payload length of `tag` alone, in bytes, excluding the kind+name
/// header. Derived on demand, never cached, so mutation cannot desync it
/// from the tree (spec §4.2).
pub fn data_length(tag: &Tag) -> usize {
    match tag {
        Tag::Byte(_) => 1,
        Tag::Short(_) => 2,
        Tag::Int(_) => 4,
        Tag::Long(_) => 8,
        Tag::Float(_) => 4,
        Tag::Double(_) => 8,
        Tag::ByteArray(bytes) => 4 + bytes.len(),
        Tag::String(s) => 2 + s.as_bytes().len(),
        Tag::List(list) => 1 + 4 + list.values.iter().map(data_length).sum::<usize>(),
        Tag::Compound(children) => children
            .iter()
            .map(|(name, child)| full_size(name, child))
            .sum::<usize>()
            + 1, // trailing End
        Tag::IntArray(arr) => 4 + arr.len() * 4,
        Tag::LongArray(arr) => 4 + arr.len() * 8,
    }
}

/// `1 (kind) + 2 (name length) + name bytes + data_length`, matching the
/// named-tag framing of spec §3.2. Used when walking a Compound's children.
pub fn full_size(name: &str, tag: &Tag) -> usize {
    1 + 2 + name.as_bytes().len() + data_length(tag)
}
