use serde::de::DeserializeOwned;

use super::types::{DecodeError, Decoder};

/// TOML engine. Input must be UTF-8 and, per TOML, a table at the top level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TomlDecoder;

impl TomlDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for TomlDecoder {
    fn id(&self) -> &'static str {
        "toml"
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_nav_any::{AnyValue, Mapping, Scalar};

    #[test]
    fn decodes_tables_into_mappings() {
        let doc = b"name = \"x\"\n[server]\nports = [80, 443]\n";
        let entries: Mapping = TomlDecoder::new().decode(doc).unwrap();
        assert_eq!(entries["name"], AnyValue::from("x"));
        let server = entries["server"].as_mapping().unwrap();
        assert_eq!(server["ports"].as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn datetimes_decode_as_strings() {
        let doc = b"at = 1979-05-27T07:32:00Z\nlocal = 07:32:00\nlist = [1979-05-27]\n";
        let entries: Mapping = TomlDecoder::new().decode(doc).unwrap();
        assert_eq!(
            entries["at"],
            AnyValue::Scalar(Scalar::String("1979-05-27T07:32:00Z".into()))
        );
        assert_eq!(entries["local"], AnyValue::from("07:32:00"));
        assert_eq!(
            entries["list"],
            AnyValue::from(vec![AnyValue::from("1979-05-27")])
        );
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = TomlDecoder::new()
            .decode::<Mapping>(&[0x61, 0x20, 0x3d, 0x20, 0xff])
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUtf8(_)));
    }

    #[test]
    fn top_level_must_be_a_table() {
        let err = TomlDecoder::new().decode::<Vec<AnyValue>>(b"a = 1").unwrap_err();
        assert!(matches!(err, DecodeError::Toml(_)));
    }
}
