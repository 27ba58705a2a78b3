use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::{ConvertError, Result};
use crate::types::{Direction, FormatMeta};

macro_rules! register_formats {
    ($($module:ident :: $codec:ident),* $(,)?) => {
        fn build_registry() -> Registry {
            let codecs: Vec<Box<dyn Codec>> = vec![
                $(Box::new(super::$module::$codec)),*
            ];

            let mut name_map = HashMap::new();
            for (idx, codec) in codecs.iter().enumerate() {
                name_map.insert(codec.key(), idx);
                for alias in codec.meta().aliases {
                    name_map.insert(*alias, idx);
                }
            }

            Registry { codecs, name_map }
        }

        // Public for testing - generates list of expected format keys
        pub fn expected_format_keys() -> Vec<&'static str> {
            use crate::codec::Codec;
            vec![
                $(super::$module::$codec.key(),)*
            ]
        }
    };
}

// Registration order is the order `list` reports, matching the format
// selector: byte formats first, then the text-level ones.
register_formats! {
    base64::Base64,
    base64::Base64Url,
    hex::Hex,
    binary::Binary,
    url::UrlEncoding,
    json::JsonFormat,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The fixed set of supported formats. Built once, immutable afterwards;
/// codecs are stateless so the registry needs no locking.
pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
    name_map: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Codec> {
        let name_lower = name.to_lowercase();
        self.name_map
            .get(name_lower.as_str())
            .or_else(|| self.name_map.get(name))
            .map(|&idx| self.codecs[idx].as_ref())
            .ok_or_else(|| ConvertError::unknown_format(name))
    }

    pub fn list(&self) -> Vec<FormatMeta> {
        self.codecs.iter().map(|c| c.meta()).collect()
    }

    /// The single text-to-text entry point. Encoding feeds the codec the
    /// UTF-8 bytes of `input`; decoding runs the codec and then requires the
    /// resulting bytes to be valid UTF-8 text. Decoded bytes that are not
    /// text (a hex string for a 0xFF byte, say) are a [`ConvertError::NonText`]
    /// failure rather than a lossy replacement-character substitution.
    pub fn convert(&self, key: &str, direction: Direction, input: &str) -> Result<String> {
        let codec = self.get(key)?;
        match direction {
            Direction::Encode => codec.encode(input.as_bytes()),
            Direction::Decode => {
                let bytes = codec.decode(input)?;
                String::from_utf8(bytes).map_err(|e| ConvertError::non_text(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_all_formats_registered() {
        let registry = Registry::global();
        let keys: Vec<&str> = registry.list().iter().map(|m| m.key).collect();
        assert_eq!(keys, expected_format_keys());
        assert_eq!(
            keys,
            vec!["base64", "base64url", "hex", "binary", "url", "json"]
        );
    }

    #[test]
    fn test_get_by_alias_and_case() {
        let registry = Registry::global();
        assert_eq!(registry.get("b64").unwrap().key(), "base64");
        assert_eq!(registry.get("base16").unwrap().key(), "hex");
        assert_eq!(registry.get("BASE64URL").unwrap().key(), "base64url");
    }

    #[test]
    fn test_get_unknown_format() {
        let registry = Registry::global();
        let err = registry.get("base99").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownFormat { name } if name == "base99"));
    }

    #[test]
    fn test_convert_round_trips_unicode() {
        let registry = Registry::global();
        for meta in registry.list() {
            if meta.key == "json" {
                continue; // json's domain is JSON text, covered below
            }
            let input = "héllo 👋";
            let encoded = registry.convert(meta.key, Direction::Encode, input).unwrap();
            let decoded = registry.convert(meta.key, Direction::Decode, &encoded).unwrap();
            assert_eq!(decoded, input, "round trip failed for {}", meta.key);
        }
    }

    #[test]
    fn test_convert_json_round_trip() {
        let registry = Registry::global();
        let input = r#"{"b":1,"a":[true,null,"x"]}"#;
        let pretty = registry.convert("json", Direction::Encode, input).unwrap();
        let compact = registry.convert("json", Direction::Decode, &pretty).unwrap();
        assert_eq!(compact, input);
    }

    #[test]
    fn test_convert_empty_input() {
        let registry = Registry::global();
        for key in ["base64", "base64url", "hex", "binary", "url"] {
            assert_eq!(registry.convert(key, Direction::Encode, "").unwrap(), "");
            assert_eq!(registry.convert(key, Direction::Decode, "").unwrap(), "");
        }
        assert!(registry.convert("json", Direction::Encode, "").is_err());
        assert!(registry.convert("json", Direction::Decode, "").is_err());
    }

    #[test]
    fn test_convert_decode_rejects_non_text_bytes() {
        let registry = Registry::global();
        // 0xFF alone is not valid UTF-8
        let err = registry.convert("hex", Direction::Decode, "ff").unwrap_err();
        assert!(matches!(err, ConvertError::NonText { .. }));
    }

    #[test]
    fn test_convert_unknown_format() {
        let registry = Registry::global();
        let err = registry
            .convert("morse", Direction::Encode, "sos")
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnknownFormat { .. }));
    }

    #[test]
    fn test_failures_are_repeatable() {
        let registry = Registry::global();
        let first = registry
            .convert("hex", Direction::Decode, "414")
            .unwrap_err()
            .to_string();
        let second = registry
            .convert("hex", Direction::Decode, "414")
            .unwrap_err()
            .to_string();
        assert_eq!(first, second);
    }
}
