use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use panel_wire::{decode, encode, encode_for, CodecError, ContentEnvelope, ContentKind, ContentType};
use pretty_assertions::assert_eq;

fn structured_envelope(json: &str) -> ContentEnvelope {
    ContentEnvelope {
        content_type: ContentType::StructuredJson,
        raw_content: BASE64.encode(json),
    }
}

#[test]
fn tag_parsing_is_total() {
    assert_eq!(ContentType::from_tag("SIDE"), ContentType::StructuredJson);
    assert_eq!(
        ContentType::from_tag("PLAYWRIGHT_TS"),
        ContentType::PlainScript
    );
    assert_eq!(ContentType::from_tag("JMETER"), ContentType::Unrecognized);
    assert_eq!(ContentType::from_tag(""), ContentType::Unrecognized);
}

#[test]
fn unrecognized_type_fails_decode_before_touching_the_payload() {
    let envelope = ContentEnvelope {
        content_type: ContentType::Unrecognized,
        // Valid base64 of valid JSON; must still be rejected.
        raw_content: BASE64.encode("{\"a\":1}"),
    };

    assert_eq!(decode(&envelope), Err(CodecError::UnrecognizedContentType));
}

#[test]
fn unrecognized_type_fails_encode_as_well() {
    assert_eq!(
        encode_for("anything", ContentType::Unrecognized),
        Err(CodecError::UnrecognizedContentType)
    );
}

#[test]
fn structured_decode_pretty_prints_with_tabs() {
    let envelope = structured_envelope("{\"a\":1}");

    let decoded = decode(&envelope).unwrap();

    assert_eq!(decoded, "{\n\t\"a\": 1\n}");
}

#[test]
fn structured_roundtrip_preserves_structure() {
    let original = "{\"tests\":[{\"id\":\"t1\",\"steps\":[1,2,3]}],\"name\":\"suite\"}";
    let envelope = structured_envelope(original);

    let decoded = decode(&envelope).unwrap();
    let encoded = encode(&decoded, ContentKind::StructuredJson).unwrap();

    // Formatting-insensitive structural equality on the transported JSON.
    let original_value: serde_json::Value = serde_json::from_str(original).unwrap();
    let roundtrip_bytes = BASE64.decode(encoded).unwrap();
    let roundtrip_value: serde_json::Value =
        serde_json::from_slice(&roundtrip_bytes).unwrap();
    assert_eq!(original_value, roundtrip_value);
}

#[test]
fn malformed_structured_payload_is_a_parse_error() {
    let envelope = structured_envelope("not json at all");

    assert!(matches!(
        decode(&envelope),
        Err(CodecError::MalformedStructuredContent(_))
    ));
}

#[test]
fn invalid_base64_is_a_parse_error() {
    let envelope = ContentEnvelope {
        content_type: ContentType::StructuredJson,
        raw_content: "!!!not-base64!!!".to_string(),
    };

    assert!(matches!(
        decode(&envelope),
        Err(CodecError::MalformedStructuredContent(_))
    ));
}

#[test]
fn structured_encode_rejects_malformed_edited_text() {
    assert!(matches!(
        encode("{\"unclosed\":", ContentKind::StructuredJson),
        Err(CodecError::MalformedStructuredContent(_))
    ));
}

#[test]
fn plain_decode_unescapes_percent_encoding() {
    let envelope = ContentEnvelope {
        content_type: ContentType::PlainScript,
        raw_content: "console.log(%22hi%22)%3B%0A".to_string(),
    };

    assert_eq!(decode(&envelope).unwrap(), "console.log(\"hi\");\n");
}

#[test]
fn plain_roundtrip_is_identity_on_decoded_text() {
    let envelope = ContentEnvelope {
        content_type: ContentType::PlainScript,
        raw_content: "hello%20world".to_string(),
    };

    let decoded = decode(&envelope).unwrap();
    assert_eq!(decoded, "hello world");
    assert_eq!(encode(&decoded, ContentKind::PlainScript).unwrap(), decoded);
}

#[test]
fn plain_decode_leaves_unescaped_text_untouched() {
    let envelope = ContentEnvelope {
        content_type: ContentType::PlainScript,
        raw_content: "plain text, no escapes".to_string(),
    };

    assert_eq!(decode(&envelope).unwrap(), "plain text, no escapes");
}
