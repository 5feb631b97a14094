//! Integration tests for zwhide
//!
//! Covers the public encode/decode API end to end:
//! - Round-trips with the default and custom alphabets
//! - Length and layout of the composite text
//! - Carrier-size limits and malformed streams

use zwhide::text::{distribute, frame, framed_len};
use zwhide::{
    decode, decode_with_config, encode, encode_with_config, CipherAlphabet, DecoderConfig,
    DecoderError, EncoderConfig, EncoderError, Settings,
};

const CARRIER: &str = "hide some text in this sentence but invisible!";

/// Test the reference scenario end to end
#[test]
fn test_hello_world_roundtrip() {
    let cipher = CipherAlphabet::default();

    let composite = encode(CARRIER, "Hello world!", &cipher).unwrap();

    // 10 seven-bit chars + 2 six-bit chars (' ' and '!') + 12 terminators
    assert_eq!(framed_len("Hello world!"), 94);
    assert_eq!(CARRIER.chars().count(), 46);
    assert_eq!(composite.chars().count(), 46 + 94);

    let decoded = decode(&composite, &cipher).unwrap();
    assert_eq!(decoded.carrier, CARRIER);
    assert_eq!(decoded.payload, "Hello world!");
}

/// Test that the composite differs from the carrier only by invisible characters
#[test]
fn test_composite_strips_back_to_carrier() {
    let cipher = CipherAlphabet::default();
    let composite = encode(CARRIER, "secret", &cipher).unwrap();

    let stripped: String = composite.chars().filter(|&c| !cipher.contains(c)).collect();
    assert_eq!(stripped, CARRIER);
    assert_ne!(composite, CARRIER);
}

/// Test that the composite always starts and ends with carrier characters
#[test]
fn test_composite_starts_and_ends_with_carrier() {
    let cipher = CipherAlphabet::default();
    let composite = encode(CARRIER, "a longer payload than usual", &cipher).unwrap();

    assert_eq!(composite.chars().next(), CARRIER.chars().next());
    assert_eq!(composite.chars().last(), CARRIER.chars().last());
}

/// Test an empty payload
#[test]
fn test_empty_payload() {
    let cipher = CipherAlphabet::default();
    let composite = encode(CARRIER, "", &cipher).unwrap();
    assert_eq!(composite, CARRIER);

    let decoded = decode(&composite, &cipher).unwrap();
    assert_eq!(decoded.carrier, CARRIER);
    assert_eq!(decoded.payload, "");
}

/// Test the two-character minimum
#[test]
fn test_minimum_carrier() {
    let cipher = CipherAlphabet::default();
    let payload = "everything goes in the single gap";

    let composite = encode("ab", payload, &cipher).unwrap();
    let decoded = decode(&composite, &cipher).unwrap();
    assert_eq!(decoded.carrier, "ab");
    assert_eq!(decoded.payload, payload);

    assert_eq!(
        encode("a", payload, &cipher),
        Err(EncoderError::CarrierTooShort { len: 1 })
    );
}

/// Test unicode in carrier and payload
#[test]
fn test_unicode_roundtrip() {
    let cipher = CipherAlphabet::default();
    let carrier = "Él caminó por el parque 🌳 con su perro";
    let payload = "日本語 ✓ 😀 \u{10FFFF}\0";

    let composite = encode(carrier, payload, &cipher).unwrap();
    let decoded = decode(&composite, &cipher).unwrap();

    assert_eq!(decoded.carrier, carrier);
    assert_eq!(decoded.payload, payload);
}

/// Test that payload characters equal to the alphabet are framed like any other
#[test]
fn test_payload_containing_cipher_characters() {
    let cipher = CipherAlphabet::default();
    let payload = "\u{200B}\u{200C}\u{200D}";

    let composite = encode(CARRIER, payload, &cipher).unwrap();
    let decoded = decode(&composite, &cipher).unwrap();
    assert_eq!(decoded.payload, payload);
}

/// Test a custom visible alphabet to check the exact layout
#[test]
fn test_custom_alphabet_layout() {
    let cipher = CipherAlphabet::new('0', '1', '|').unwrap();

    // "Hi" -> 1001000| 1101001| (16 symbols) over 4 gaps of 4
    let composite = encode("abcde", "Hi", &cipher).unwrap();
    assert_eq!(composite, "a1001b000|c1101d001|e");
}

/// Test that the stream is front-loaded when the carrier is long
#[test]
fn test_long_carrier_front_loads() {
    let cipher = CipherAlphabet::new('0', '1', '|').unwrap();
    let carrier = "abcdefghijklmnopqrstuvwxyz";

    // 'A' -> 8 symbols over 25 gaps -> one symbol in each of the first 8
    let composite = encode(carrier, "A", &cipher).unwrap();
    assert_eq!(composite, "a1b0c0d0e0f0g1h|ijklmnopqrstuvwxyz");
}

/// Test that a carrier containing cipher characters does not round-trip
#[test]
fn test_collision_is_reported_not_fixed() {
    let cipher = CipherAlphabet::default();
    let carrier = "zero\u{200B}width";

    let config = EncoderConfig {
        cipher,
        verbose: false,
    };
    let encoded = encode_with_config(carrier, "x", &config).unwrap();
    assert_eq!(encoded.collisions, 1);

    // The stray zero-width space is read as a hidden bit
    let result = decode(&encoded.text, &cipher);
    assert!(result.map(|d| d.carrier != carrier).unwrap_or(true));
}

/// Test that a truncated stream fails the whole decode
#[test]
fn test_truncated_stream() {
    let cipher = CipherAlphabet::default();
    let composite = encode(CARRIER, "Hello", &cipher).unwrap();

    let mut truncated = composite.clone();
    truncated.push(cipher.one());
    truncated.push(cipher.zero());

    assert_eq!(
        decode(&truncated, &cipher),
        Err(DecoderError::MalformedStream { pending_bits: 2 })
    );
}

/// Test that removing a terminator corrupts the stream detectably
#[test]
fn test_missing_terminator() {
    let cipher = CipherAlphabet::default();
    let composite = encode(CARRIER, "Hi", &cipher).unwrap();

    // Drop the last terminator: the final char's bits are left pending
    let last = composite.rfind(cipher.terminator()).unwrap();
    let mut broken = composite.clone();
    broken.remove(last);

    assert!(matches!(
        decode(&broken, &cipher),
        Err(DecoderError::MalformedStream { .. })
    ));
}

/// Test that decoding with a different alphabet finds nothing
#[test]
fn test_wrong_alphabet() {
    let cipher = CipherAlphabet::default();
    let other = CipherAlphabet::new('\u{2063}', '\u{2064}', '\u{FEFF}').unwrap();

    let composite = encode(CARRIER, "Hello", &cipher).unwrap();
    let decoded = decode(&composite, &other).unwrap();

    assert!(decoded.payload.is_empty());
    assert_eq!(decoded.carrier, composite);
}

/// Test that the config-based entry points agree with the plain ones
#[test]
fn test_settings_configs_roundtrip() {
    let settings = Settings {
        verbose: false,
        cipher: CipherAlphabet::new('\u{2060}', '\u{2061}', '\u{2062}').unwrap(),
    };

    let encoded = encode_with_config(CARRIER, "via settings", &settings.encoder_config()).unwrap();
    let decoded = decode_with_config(&encoded.text, &settings.decoder_config()).unwrap();
    assert_eq!(decoded.payload, "via settings");

    let plain = decode_with_config(
        &encoded.text,
        &DecoderConfig {
            cipher: settings.cipher,
            verbose: false,
        },
    )
    .unwrap();
    assert_eq!(plain, decoded);
}

/// Test that the encoder output matches frame + distribute by hand
#[test]
fn test_encoder_matches_components() {
    let cipher = CipherAlphabet::default();
    let payload = "components";

    let stream = frame(payload, &cipher);
    let fragments = distribute(&stream, CARRIER.chars().count()).unwrap();

    let mut expected = String::new();
    for (i, c) in CARRIER.chars().enumerate() {
        expected.push(c);
        if let Some(fragment) = fragments.get(i) {
            expected.push_str(fragment);
        }
    }

    assert_eq!(encode(CARRIER, payload, &cipher).unwrap(), expected);
}

/// Test that encoding is deterministic and calls don't leak state
#[test]
fn test_independent_calls() {
    let cipher = CipherAlphabet::default();

    let first = encode(CARRIER, "one", &cipher).unwrap();
    let _ = encode("other carrier", "two", &cipher).unwrap();
    let _ = decode(&first, &cipher).unwrap();
    let again = encode(CARRIER, "one", &cipher).unwrap();

    assert_eq!(first, again);
    assert_eq!(decode(&again, &cipher).unwrap().payload, "one");
}

/// Test concurrent use from several threads
#[test]
fn test_concurrent_roundtrips() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let cipher = CipherAlphabet::default();
                let payload = format!("thread {} payload", i);
                let composite = encode(CARRIER, &payload, &cipher).unwrap();
                let decoded = decode(&composite, &cipher).unwrap();
                (payload, decoded.payload)
            })
        })
        .collect();

    for handle in handles {
        let (sent, received) = handle.join().unwrap();
        assert_eq!(sent, received);
    }
}
