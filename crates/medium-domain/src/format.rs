//! Content format module - renderings available for an article body

/// Rendering of an article body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentFormat {
    /// Markdown source
    #[default]
    Markdown,

    /// Rendered HTML
    Html,

    /// Plain text with markup stripped
    Text,
}

impl ContentFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFormat::Markdown => "markdown",
            ContentFormat::Html => "html",
            ContentFormat::Text => "text",
        }
    }

    /// Parse a format name, accepting the short aliases `md` and `txt`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Some(ContentFormat::Markdown),
            "html" => Some(ContentFormat::Html),
            "text" | "txt" => Some(ContentFormat::Text),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid content format: {}", s))
    }
}
