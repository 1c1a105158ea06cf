use std::path::Path;

/// Content-type resolution for served files.
///
/// Suffix overrides are consulted before the extension table and are ordered
/// most-specific first, so a multi-part suffix like `.wasm.map` wins over the
/// bare `.map` rule.
pub struct MimeTable {
    overrides: Vec<(&'static str, &'static str)>,
}

impl Default for MimeTable {
    fn default() -> Self {
        Self {
            overrides: vec![(".wasm.map", "application/json")],
        }
    }
}

impl MimeTable {
    /// Determine the content type for a file path
    pub fn content_type(&self, path: &Path) -> &'static str {
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            let name = name.to_ascii_lowercase();
            for (suffix, content_type) in &self.overrides {
                if name.ends_with(suffix) {
                    return content_type;
                }
            }
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("html") => "text/html",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("wasm") => "application/wasm",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("txt") => "text/plain",
            Some("md") => "text/markdown",
            Some("map") => "application/json",
            _ => "application/octet-stream",
        }
    }
}
