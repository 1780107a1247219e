use core::fmt::{self, Display};

/// Reason why a demonstration did not produce a proof.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// no demonstration with the given name exists
    UnknownDemo,
    /// the kernel rejected a step of the derivation
    Rejected,
    OsError,
    /// the proof could not be written as JSON
    OutputError,
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDemo => write!(f, "UnknownDemo"),
            Self::Rejected => write!(f, "Rejected"),
            Self::OsError => write!(f, "OSError"),
            Self::OutputError => write!(f, "OutputError"),
        }
    }
}

pub struct Error(Kind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: Kind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> Kind {
        self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl From<Kind> for Error {
    fn from(k: Kind) -> Self {
        Self(k, None)
    }
}

impl From<natded::Error> for Error {
    fn from(e: natded::Error) -> Self {
        Self::new(Kind::Rejected, e.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(Kind::OutputError, e.into())
    }
}
