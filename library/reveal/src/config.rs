use crate::error::ConfigError;

pub const DEFAULT_TABLE_ID: &str = "search_list";
pub const DEFAULT_BODY_TAG: &str = "tbody";
pub const DEFAULT_MARKER_CLASS: &str = "fade-in";
pub const DEFAULT_DISPLAY: &str = "table";

/// The names the reveal looks up and the values it writes.
///
/// The default is the stock page: the `search_list` table is shown with `display: table` and
/// its first `tbody` gets the `fade-in` class. The transition keyed off that class lives in the
/// page's stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealConfig {
    pub table_id: String,
    pub body_tag: String,
    pub marker_class: String,
    pub display: String,
}

impl RevealConfig {
    pub fn with_table_id<S: Into<String>>(mut self, table_id: S) -> Self {
        self.table_id = table_id.into();
        self
    }

    pub fn with_body_tag<S: Into<String>>(mut self, body_tag: S) -> Self {
        self.body_tag = body_tag.into();
        self
    }

    pub fn with_marker_class<S: Into<String>>(mut self, marker_class: S) -> Self {
        self.marker_class = marker_class.into();
        self
    }

    pub fn with_display<S: Into<String>>(mut self, display: S) -> Self {
        self.display = display.into();
        self
    }

    /// Rejects values the DOM would only reject after the table had already been touched.
    ///
    /// `DOMTokenList.add` throws `SyntaxError` for an empty token and `InvalidCharacterError`
    /// for one containing whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_id.is_empty() {
            return Err(ConfigError::Empty { field: "table_id" });
        }

        if self.body_tag.is_empty() {
            return Err(ConfigError::Empty { field: "body_tag" });
        }

        if self.display.is_empty() {
            return Err(ConfigError::Empty { field: "display" });
        }

        if self.marker_class.is_empty()
            || self
                .marker_class
                .chars()
                .any(|c| c.is_ascii_whitespace())
        {
            return Err(ConfigError::InvalidClass(self.marker_class.clone()));
        }

        Ok(())
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            table_id: DEFAULT_TABLE_ID.to_string(),
            body_tag: DEFAULT_BODY_TAG.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            display: DEFAULT_DISPLAY.to_string(),
        }
    }
}
