use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use metrics_logging::{metrics_debug, metrics_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode raw bytes into UTF-8 using: BOM -> `charset=` hint -> chardetng fallback.
///
/// The hint is a content-type style value such as `text/html; charset=utf-8`.
/// A bare label (`latin1`) is accepted too.
pub fn decode_text(bytes: &[u8], charset_hint: Option<&str>) -> Result<DecodedText, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        metrics_debug!("decode: BOM selects {}", encoding.name());
        return decode_with(bytes, encoding);
    }

    if let Some(enc) = charset_hint.and_then(hinted_encoding) {
        metrics_debug!("decode: hint selects {}", enc.name());
        return decode_with(bytes, enc);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    metrics_debug!("decode: detector guessed {}", enc.name());
    decode_with(bytes, enc)
}

fn hinted_encoding(hint: &str) -> Option<&'static Encoding> {
    let label = extract_charset(hint).unwrap_or_else(|| hint.trim());
    let encoding = Encoding::for_label(label.as_bytes());
    if encoding.is_none() {
        metrics_warn!("decode: unknown charset {label:?}, falling back to detection");
    }
    encoding
}

fn extract_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim_matches([' ', '"', '\''].as_ref()))
    })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
            message: "malformed byte sequence".into(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
    })
}
