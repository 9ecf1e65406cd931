use std::fmt::{Display, Formatter};

/// The divisor of a division was zero.
///
/// This is the sole checked failure mode of [`Wide128`](crate::Wide128):
/// every other operation is total and wraps on overflow. It is returned by
/// the checked division methods and carried as the panic message of the
/// `Div` operator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DivideByZeroError;

impl Display for DivideByZeroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt to divide by zero")
    }
}

impl std::error::Error for DivideByZeroError {}

/// Unwrap 'Extension' trait
///
/// The goal of this trait is to add a method similar to `unwrap` to `Result<T, E>`
/// that uses the implementation of `Display` and not `Debug` as the
/// message in the panic.
pub trait UnwrapResultExt<T> {
    fn unwrap_display(self) -> T;
}

impl<T, E> UnwrapResultExt<T> for Result<T, E>
where
    E: Display,
{
    #[track_caller]
    fn unwrap_display(self) -> T {
        match self {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_message() {
        // Same wording as the message of a native integer division panic.
        assert_eq!(DivideByZeroError.to_string(), "attempt to divide by zero");
    }

    #[test]
    fn test_unwrap_display_panics_with_display() {
        let res: Result<(), DivideByZeroError> = Err(DivideByZeroError);
        let caught = std::panic::catch_unwind(move || res.unwrap_display());
        let payload = caught.unwrap_err();
        let msg = payload.downcast_ref::<String>().unwrap();
        assert_eq!(msg, "attempt to divide by zero");
    }
}
