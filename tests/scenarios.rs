//! End-to-end scenarios exercised through the public API only.

use nbt::{deserialize, serialize, text, Endian, NbtList, Tag, TagKind};

#[test]
fn primitive_root_round_trips() {
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x0A, 0x00, 0x04, b'r', b'o', b'o', b't',
        0x03, 0x00, 0x05, b'v', b'a', b'l', b'u', b'e', 0x00, 0x00, 0x00, 0x2A,
        0x00,
    ];
    let (name, tag) = deserialize(&bytes, Endian::Big).unwrap();
    assert_eq!(name, "root");
    assert_eq!(
        tag,
        Tag::Compound(vec![("value".to_string(), Tag::Int(42))])
    );
    assert_eq!(serialize(&name, &tag, Endian::Big), bytes);
}

#[test]
fn compound_with_two_children_round_trips() {
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x0A, 0x00, 0x04, b'r', b'o', b'o', b't',
        0x03, 0x00, 0x06, b'n', b'u', b'm', b'b', b'e', b'r', 0x00, 0x00, 0x00, 0x2A,
        0x08, 0x00, 0x04, b't', b'e', b'x', b't', 0x00, 0x05, b'h', b'e', b'l', b'l', b'o',
        0x00,
    ];
    let (name, tag) = deserialize(&bytes, Endian::Big).unwrap();
    assert_eq!(name, "root");
    assert_eq!(
        tag,
        Tag::Compound(vec![
            ("number".to_string(), Tag::Int(42)),
            ("text".to_string(), Tag::String("hello".to_string())),
        ])
    );
    assert_eq!(serialize(&name, &tag, Endian::Big), bytes);
}

#[test]
fn list_of_ints_round_trips() {
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x09, 0x00, 0x07, b'n', b'u', b'm', b'b', b'e', b'r', b's',
        0x03, 0x00, 0x00, 0x00, 0x03,
        0x00, 0x00, 0x00, 0x0A,
        0x00, 0x00, 0x00, 0x14,
        0x00, 0x00, 0x00, 0x1E,
    ];
    let (name, tag) = deserialize(&bytes, Endian::Big).unwrap();
    assert_eq!(
        tag,
        Tag::List(NbtList::from_values(
            TagKind::Int,
            vec![Tag::Int(10), Tag::Int(20), Tag::Int(30)]
        ))
    );
    assert_eq!(serialize(&name, &tag, Endian::Big), bytes);
}

#[test]
fn empty_list_preserves_element_kind_through_binary() {
    let bytes = serialize("e", &Tag::List(NbtList::new(TagKind::String)), Endian::Big);
    let (_, tag) = deserialize(&bytes, Endian::Big).unwrap();
    match tag {
        Tag::List(list) => {
            assert_eq!(list.element, TagKind::String);
            assert!(list.values.is_empty());
        }
        other => panic!("expected List, got {:?}", other),
    }
}

#[test]
fn invalid_root_kind_is_rejected() {
    let bytes = [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A];
    let err = deserialize(&bytes, Endian::Big).unwrap_err();
    assert!(err.to_string().contains("root"));
}

#[test]
fn nested_compound_round_trips() {
    let tree = Tag::Compound(vec![(
        "outer".to_string(),
        Tag::Compound(vec![("inner".to_string(), Tag::Byte(-1))]),
    )]);
    let bytes = serialize("root", &tree, Endian::Big);
    let (name, decoded) = deserialize(&bytes, Endian::Big).unwrap();
    assert_eq!(name, "root");
    assert_eq!(decoded, tree);
}

#[test]
fn binary_round_trip_law_holds_across_endians() {
    let tree = Tag::Compound(vec![
        ("a".to_string(), Tag::Short(-200)),
        ("b".to_string(), Tag::Double(3.5)),
        (
            "c".to_string(),
            Tag::List(NbtList::from_values(
                TagKind::Compound,
                vec![
                    Tag::Compound(vec![("x".to_string(), Tag::Int(1))]),
                    Tag::Compound(vec![("x".to_string(), Tag::Int(2))]),
                ],
            )),
        ),
    ]);
    for endian in [Endian::Big, Endian::Little] {
        let bytes = serialize("root", &tree, endian);
        let (name, decoded) = deserialize(&bytes, endian).unwrap();
        assert_eq!(decoded, tree);
        assert_eq!(serialize(&name, &decoded, endian), bytes);
    }
}

#[test]
fn textual_round_trip_matches_binary_after_reencoding() {
    let tree = Tag::Compound(vec![
        ("greeting".to_string(), Tag::String("hi".to_string())),
        ("values".to_string(), Tag::IntArray(vec![1, -2, 3])),
    ]);
    let bytes = serialize("doc", &tree, Endian::Big);
    let (name, tag) = deserialize(&bytes, Endian::Big).unwrap();

    let json = text::encode_string(&name, &tag).unwrap();
    let (name2, tag2) = text::decode_str(&json).unwrap();

    assert_eq!(name2, name);
    assert_eq!(tag2, tag);
    assert_eq!(serialize(&name2, &tag2, Endian::Big), bytes);
}

#[test]
fn negative_array_length_is_rejected() {
    let bytes = [
        0x07, 0x00, 0x01, b'a', 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    assert!(deserialize(&bytes, Endian::Big).is_err());
}

#[test]
fn truncated_payload_is_rejected() {
    let bytes = [0x03, 0x00, 0x01, b'a', 0x00, 0x00];
    assert!(deserialize(&bytes, Endian::Big).is_err());
}

#[test]
fn trailing_bytes_are_rejected() {
    let bytes = [0x0A, 0x00, 0x01, b'a', 0x00, 0xFF];
    assert!(deserialize(&bytes, Endian::Big).is_err());
}
