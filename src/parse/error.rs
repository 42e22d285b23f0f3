use std::fmt::Display;

/// Snapshot parsing failures. `HtmlParse` means a required anchor was absent
/// even though the page rendered, which signals a breaking change in the
/// upstream markup rather than a closed restaurant.
#[derive(Debug)]
pub enum Error {
    HtmlParse(String),
    NumberParse(String),
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }

    pub fn number_parse_error(msg: &str) -> Self {
        Self::NumberParse(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::NumberParse(msg) => write!(f, "Number Parse Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
