//! Rendering of trie results for display.

use serde::Serialize;

use crate::config::output::{ByteEncoding, OutputConfig, OutputFormat};
use crate::error::NiihauResult;

/// Result of a single-key lookup as rendered in JSON.
#[derive(Debug, Serialize)]
struct Lookup {
    key: String,
    value: Option<String>,
    found: bool,
}

/// Turns trie results into printable text according to an [`OutputConfig`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: OutputConfig,
}

impl Renderer {
    /// Creates a renderer for the given output configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Encodes one byte sequence as a string.
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self.config.encoding {
            ByteEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            ByteEncoding::Hex => hex::encode(bytes),
        }
    }

    /// Renders a list of keys or values.
    ///
    /// Items are sorted by their raw bytes first when the configuration asks for it.
    pub fn render_list(&self, mut items: Vec<Vec<u8>>) -> NiihauResult<String> {
        if self.config.sorted {
            items.sort();
        }

        let encoded: Vec<String> = items.iter().map(|item| self.encode(item)).collect();
        match self.config.format {
            OutputFormat::Text => Ok(encoded.join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string(&encoded)?),
        }
    }

    /// Renders the outcome of a lookup.
    pub fn render_lookup(&self, key: &[u8], value: Option<&[u8]>) -> NiihauResult<String> {
        match self.config.format {
            OutputFormat::Text => Ok(match value {
                Some(value) => self.encode(value),
                None => format!("{}: not found", self.encode(key)),
            }),
            OutputFormat::Json => Ok(serde_json::to_string(&Lookup {
                key: self.encode(key),
                value: value.map(|v| self.encode(v)),
                found: value.is_some(),
            })?),
        }
    }

    /// Renders the trie's node counter.
    pub fn render_size(&self, size: usize) -> NiihauResult<String> {
        match self.config.format {
            OutputFormat::Text => Ok(size.to_string()),
            OutputFormat::Json => Ok(serde_json::json!({ "size": size }).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(format: OutputFormat, encoding: ByteEncoding, sorted: bool) -> Renderer {
        Renderer::new(OutputConfig {
            format,
            encoding,
            sorted,
        })
    }

    #[test]
    fn test_text_list_sorted() {
        let r = renderer(OutputFormat::Text, ByteEncoding::Utf8, true);
        let out = r
            .render_list(vec![b"dog".to_vec(), b"cat".to_vec()])
            .unwrap();
        assert_eq!(out, "cat\ndog");
    }

    #[test]
    fn test_json_list_hex() {
        let r = renderer(OutputFormat::Json, ByteEncoding::Hex, false);
        let out = r.render_list(vec![vec![0x00, 0xff]]).unwrap();
        assert_eq!(out, r#"["00ff"]"#);
    }

    #[test]
    fn test_lossy_utf8() {
        let r = Renderer::default();
        assert_eq!(r.encode(&[b'a', 0xff]), "a\u{fffd}");
    }

    #[test]
    fn test_lookup_rendering() {
        let text = Renderer::default();
        assert_eq!(text.render_lookup(b"k", Some(&b"v"[..])).unwrap(), "v");
        assert_eq!(text.render_lookup(b"k", None).unwrap(), "k: not found");

        let json = renderer(OutputFormat::Json, ByteEncoding::Utf8, false);
        assert_eq!(
            json.render_lookup(b"k", None).unwrap(),
            r#"{"key":"k","value":null,"found":false}"#
        );
        assert_eq!(
            json.render_lookup(b"k", Some(&b""[..])).unwrap(),
            r#"{"key":"k","value":"","found":true}"#
        );
    }

    #[test]
    fn test_size_rendering() {
        assert_eq!(Renderer::default().render_size(4).unwrap(), "4");
        let json = renderer(OutputFormat::Json, ByteEncoding::Utf8, false);
        assert_eq!(json.render_size(4).unwrap(), r#"{"size":4}"#);
    }
}
