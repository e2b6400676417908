//! Internal helper macros shared by the header parser and the query codec.

/// Returns early with `Err($error)` when `$predicate` does not hold.
///
/// Works like `assert!`, except the failure is reported to the caller instead
/// of panicking, so precondition checks read as one line:
///
/// ```ignore
/// ensure!(!raw.trim().is_empty(), ParseError::whitespace_input());
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
