use super::*;
use crate::catalog::templates;

#[test]
fn encode_produces_json_object_with_template_fields() {
    let text = encode(&templates()[0]).expect("encode ghost");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["id"], "ghost");
    assert_eq!(value["emoji"], "\u{1F47B}");
    assert_eq!(value["name"], "Ghost");
}

#[test]
fn decode_reads_back_an_encoded_catalog_entry() {
    let bat = crate::catalog::find("bat").expect("bat");
    let text = encode(bat).expect("encode");
    assert_eq!(&decode(&text).expect("decode"), bat);
}

#[test]
fn decode_accepts_templates_outside_the_catalog() {
    let t = decode(r#"{"id":"zombie","emoji":"z","name":"Zombie"}"#).expect("decode");
    assert_eq!(t.id, "zombie");
    assert_eq!(t.name, "Zombie");
}

#[test]
fn decode_ignores_unknown_fields() {
    let t = decode(r#"{"id":"ghost","emoji":"g","name":"Ghost","x":4}"#).expect("decode");
    assert_eq!(t.id, "ghost");
}

#[test]
fn decode_empty_string_is_empty_error() {
    assert!(matches!(decode(""), Err(PayloadError::Empty)));
    assert!(matches!(decode("   \n"), Err(PayloadError::Empty)));
}

#[test]
fn decode_plain_text_is_malformed() {
    assert!(matches!(decode("ghost"), Err(PayloadError::Malformed(_))));
}

#[test]
fn decode_missing_field_is_malformed() {
    assert!(matches!(decode(r#"{"id":"ghost","emoji":"g"}"#), Err(PayloadError::Malformed(_))));
}

#[test]
fn decode_wrong_shape_is_malformed() {
    assert!(matches!(decode("[1,2,3]"), Err(PayloadError::Malformed(_))));
    assert!(matches!(decode("null"), Err(PayloadError::Malformed(_))));
}

#[test]
fn decode_empty_id_is_rejected() {
    assert!(matches!(decode(r#"{"id":"","emoji":"g","name":"G"}"#), Err(PayloadError::MissingId)));
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(PayloadError::Empty.to_string(), "drag payload is empty");
    let Err(err) = decode("{") else {
        panic!("expected a malformed payload");
    };
    assert!(err.to_string().starts_with("drag payload is not a decoration template"));
}
