//! # Named Binary Tag (NBT)
//! The Named Binary Tag is a structured binary format used by the game
//! Minecraft for a variety of purposes, such as player data and world
//! saves, as well as within the Minecraft network protocol.
//!
//! [NBT Specification](https://wiki.vg/NBT#Specification)
//!
//! ## This crate
//! A codec for NBT: a binary [`de`]/[`ser`] pair operating on an in-memory
//! [`Tag`] tree, plus a JSON-shaped [`text`] bridge for tooling that would
//! rather read and write NBT as text. A small [`envelope`] module handles
//! the gzip/zlib wrapping commonly layered around NBT documents on disk,
//! which is not itself part of the tag format.
//!
//! ### Key features
//! - Byte-for-byte round trip: `serialize(deserialize(b, e)?, e) == b`.
//! - Both Java (big-endian) and Bedrock (little-endian) wire dialects,
//!   selected once per document via [`Endian`].
//! - Insertion-order-preserving compounds and list element-kind metadata
//!   that survives even on an empty list.
//! - A depth-limited reader, so a hostile or corrupt document fails fast
//!   instead of blowing the stack.
//!
//! ## Quick start
//!
//! ### Building a tree
//! ```
//! use nbt::{NbtList, Tag, TagKind};
//!
//! let compound = Tag::Compound(vec![
//!     ("age".to_string(), Tag::Byte(18)),
//!     ("id".to_string(), Tag::Int(69420)),
//!     (
//!         "scores".to_string(),
//!         Tag::List(NbtList::from_values(TagKind::Int, vec![Tag::Int(1), Tag::Int(2)])),
//!     ),
//! ]);
//! ```
//!
//! ### Binary encode / decode
//! ```
//! use nbt::{deserialize, serialize, Endian, Tag};
//!
//! // The root tag must be a Compound or List (spec §3.4); other kinds may
//! // only appear as a Compound's children or a List's elements.
//! let root = Tag::Compound(vec![("greeting".to_string(), Tag::String("hello world".to_string()))]);
//! let bytes = serialize("doc", &root, Endian::Big);
//! let (name, tag) = deserialize(&bytes, Endian::Big).unwrap();
//! assert_eq!(name, "doc");
//! assert_eq!(tag, root);
//! ```
//!
//! ### Textual bridge
//! ```
//! use nbt::{text, Tag};
//!
//! let tag = Tag::Int(42);
//! let value = text::encode_value("answer", &tag);
//! let (name, decoded) = text::decode_value(&value).unwrap();
//! assert_eq!(name, "answer");
//! assert_eq!(decoded, tag);
//! ```

pub mod de;
pub mod envelope;
pub mod error;
pub mod scalar;
pub mod ser;
pub mod tag;
pub mod text;

pub use de::{deserialize, deserialize_with_depth_limit, DEFAULT_DEPTH_LIMIT};
pub use envelope::{detect as detect_envelope, strip as strip_envelope, wrap_gzip, wrap_zlib, Envelope};
pub use error::{NBTError, NBTResult, Severity};
pub use scalar::Endian;
pub use ser::{serialize, serialize_payload};
pub use tag::{data_length, full_size, NbtList, Tag, TagKind};
