use std::fmt;
use std::fmt::Display;

use failure::{Backtrace, Context, Fail};

#[derive(Debug)]
pub struct NormalizationError {
    inner: Context<NormalizationErrorKind>,
}

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum NormalizationErrorKind {
    #[fail(display = "Malformed analysis response: {}", msg)]
    MalformedResponse { msg: String },
    #[fail(display = "Unknown target project kind: '{}'", kind)]
    UnknownProjectKind { kind: String },
}

impl NormalizationError {
    pub fn kind(&self) -> &NormalizationErrorKind {
        self.inner.get_context()
    }

    pub(crate) fn malformed<S: Into<String>>(msg: S) -> Self {
        NormalizationErrorKind::MalformedResponse { msg: msg.into() }.into()
    }

    pub(crate) fn unknown_project_kind<S: Into<String>>(kind: S) -> Self {
        NormalizationErrorKind::UnknownProjectKind { kind: kind.into() }.into()
    }
}

//  Boilerplate
impl Fail for NormalizationError {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl From<NormalizationErrorKind> for NormalizationError {
    fn from(kind: NormalizationErrorKind) -> NormalizationError {
        NormalizationError {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<NormalizationErrorKind>> for NormalizationError {
    fn from(inner: Context<NormalizationErrorKind>) -> NormalizationError {
        NormalizationError { inner }
    }
}
