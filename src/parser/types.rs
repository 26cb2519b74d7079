/// Best-guess title and year extracted from a raw folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGuess {
    pub title: String,
    /// Exactly four ASCII digits when present
    pub year: Option<String>,
}

impl ParsedGuess {
    pub fn new(title: impl Into<String>, year: Option<String>) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    /// Human-readable form used in progress and error messages
    pub fn describe(&self) -> String {
        match &self.year {
            Some(year) => format!("\"{}\" ({})", self.title, year),
            None => format!("\"{}\"", self.title),
        }
    }
}
