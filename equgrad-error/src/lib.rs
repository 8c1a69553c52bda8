//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors in the algebra engine never point into source code (there is no parser), so a report is
//! simply the error message followed by an optional line of help text.

// lets `#[derive(ErrorKind)]` resolve `::equgrad_error` inside this crate's own tests
extern crate self as equgrad_error;

use std::{any::Any, fmt::Debug};

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the message displayed at the top of the error.
    fn message(&self) -> String;

    /// Returns help text describing what the user can do to fix the error, if any.
    fn help(&self) -> Option<String>;

    /// Returns the error as [`Any`], so that callers can downcast to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn report(&self) -> String {
        match self.help() {
            Some(help) => format!("error: {}\nhelp: {}", self.message(), help),
            None => format!("error: {}", self.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use equgrad_attrs::ErrorKind;
    use pretty_assertions::assert_eq;
    use super::ErrorKind;

    #[derive(Debug, ErrorKind)]
    #[error(message = "something went wrong")]
    struct Plain;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` is out of range", self.value),
        help = format!("the value must be at most `{}`", self.max),
    )]
    struct OutOfRange {
        value: i32,
        max: i32,
    }

    #[test]
    fn report_without_help() {
        assert_eq!(Plain.report(), "error: something went wrong");
        assert_eq!(Plain.help(), None);
    }

    #[test]
    fn report_with_help() {
        let err = OutOfRange { value: 12, max: 10 };
        assert_eq!(err.report(), "error: `12` is out of range\nhelp: the value must be at most `10`");
        assert_eq!(err.to_string(), "`12` is out of range");
    }

    #[test]
    fn downcast() {
        let err: Box<dyn ErrorKind> = Box::new(OutOfRange { value: 1, max: 0 });
        let concrete = err.as_any().downcast_ref::<OutOfRange>().unwrap();
        assert_eq!(concrete.value, 1);
        assert!(err.as_any().downcast_ref::<Plain>().is_none());
    }
}
