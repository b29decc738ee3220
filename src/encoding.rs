use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{DashboardError, Result};

/// Standard alphabet, padding optional, stray bits in the last symbol ignored.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes base64 carrying UTF-8 text, e.g. a token payload or an encoded log line.
///
/// The bytes are rebuilt as `%xx` escapes and URI-decoded, so anything that is not
/// valid UTF-8 is rejected rather than replaced.
pub fn b64_decode_unicode(input: &str) -> Result<String> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = LENIENT_STANDARD.decode(compact.as_bytes())?;

    let percent_encoded: String = bytes.iter().map(|byte| format!("%{:02x}", byte)).collect();
    let decoded = urlencoding::decode(&percent_encoded)
        .map_err(|e| DashboardError::InvalidEncoding(e.to_string()))?;

    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn decodes_unicode_text() {
        let encoded = STANDARD.encode("héllo".as_bytes());
        assert_eq!(b64_decode_unicode(&encoded).unwrap(), "héllo");
    }

    #[test]
    fn decodes_multibyte_and_ascii() {
        for text in ["plain ascii", "✓ done", "日本語", ""] {
            let encoded = STANDARD.encode(text.as_bytes());
            assert_eq!(b64_decode_unicode(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn tolerates_whitespace_and_missing_padding() {
        assert_eq!(b64_decode_unicode("aGk=").unwrap(), "hi");
        assert_eq!(b64_decode_unicode("aGk").unwrap(), "hi");
        assert_eq!(b64_decode_unicode(" aG\nk= ").unwrap(), "hi");
    }

    #[test]
    fn ignores_trailing_bits_in_last_symbol() {
        assert_eq!(b64_decode_unicode("aGl=").unwrap(), "hi");
        assert_eq!(b64_decode_unicode("aGl").unwrap(), "hi");
    }

    #[test]
    fn rejects_malformed_base64() {
        let err = b64_decode_unicode("not*base64!").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidBase64(_)));
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let encoded = STANDARD.encode([0xffu8, 0xfe, 0x00]);
        let err = b64_decode_unicode(&encoded).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidEncoding(_)));
    }
}
