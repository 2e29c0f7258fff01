use crate::image::ImageError;
use crate::params::ParamsError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    ParamsError(ParamsError),
    ImageError(ImageError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<ParamsError> for Error {
    fn from(e: ParamsError) -> Self {
        Self(ErrorType::ParamsError(e), vec![])
    }
}

impl From<ImageError> for Error {
    fn from(e: ImageError) -> Self {
        Self(ErrorType::ImageError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorType::ParamsError(e) => write!(f, "{}", e)?,
            ErrorType::ImageError(e) => write!(f, "{}", e)?,
        }
        for t in (self.1).iter().rev() {
            write!(f, " (in {})", t)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            ErrorType::ParamsError(e) => Some(e),
            ErrorType::ImageError(e) => Some(e),
        }
    }
}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_outermost_first() {
    let result: Result = Err(ImageError::Empty.into());
    let err = result
        .with_trace_step("validate source")
        .with_trace_step("render")
        .unwrap_err();

    let debug = format!("{:?}", err);
    let validate = debug.find("in validate source").unwrap();
    let render = debug.find("in render").unwrap();
    assert!(render < validate);
    assert!(matches!(err.error_type(), ErrorType::ImageError(ImageError::Empty)));
}
