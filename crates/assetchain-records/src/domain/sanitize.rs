//! # Argument Sanitation
//!
//! Forbidden-character validation for incoming argument strings.
//!
//! Runs before any mutating or identity-check operation consumes its
//! arguments. Record values are built through structured serialization, so
//! this check is defense-in-depth rather than the only line against
//! injection into stored JSON.

use crate::domain::errors::RecordError;

/// Characters rejected in any argument: JSON string delimiters, the escape
/// character, and all control characters.
fn is_forbidden(c: char) -> bool {
    matches!(c, '"' | '\\') || c.is_control()
}

/// Validate an ordered sequence of argument strings.
///
/// Pure check, no side effects. Fails with
/// [`RecordError::ForbiddenCharacter`] naming the first offending argument
/// position and character.
pub fn sanitize_arguments<S: AsRef<str>>(args: &[S]) -> Result<(), RecordError> {
    for (index, arg) in args.iter().enumerate() {
        if let Some(found) = arg.as_ref().chars().find(|c| is_forbidden(*c)) {
            return Err(RecordError::ForbiddenCharacter { index, found });
        }
    }
    Ok(())
}
