/// Query marker of a keyword search
const KEYWORDS_MARKER: &str = "?keywords=";

/// Page parameter inside of an existing query
const PAGE_PARAM: &str = "&page=";

/// Prefix of per-page links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePath {
    prefix: String,
}

impl PagePath {
    /// Derive link prefix from current request path.
    ///
    /// Keyword search queries are preserved, with their page parameter
    /// (if any) stripped of its value. Any other path is replaced with `?page=`.
    pub fn from_current(current_path: &str) -> Self {
        if !current_path.contains(KEYWORDS_MARKER) {
            return Self::default();
        }

        let mut prefix = current_path.replace("&amp;", "&");
        match prefix.rfind(PAGE_PARAM) {
            Some(pos) => prefix.truncate(pos + PAGE_PARAM.len()),
            None => prefix.push_str(PAGE_PARAM),
        }
        Self { prefix }
    }

    /// Link to page
    pub fn href(&self, page: u32) -> String {
        format!("{}{page}", self.prefix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PagePath {
    fn default() -> Self {
        Self { prefix: "?page=".into() }
    }
}
