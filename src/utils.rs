//! Small helpers shared across modules.

use itertools::Itertools;
use std::error::Error;

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (never splitting a character)
/// with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Render an error and every `source()` beneath it, joined with `": "`.
///
/// `reqwest` puts the actual cause (timeout, DNS, TLS) in the source chain;
/// its top-level message only names the URL.
pub fn error_chain(e: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(e), |&e| e.source())
        .map(ToString::to_string)
        .join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        msg: &'static str,
        source: Option<Box<Wrapped>>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.msg)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn Error + 'static))
        }
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let e = Wrapped {
            msg: "error sending request",
            source: Some(Box::new(Wrapped {
                msg: "client error",
                source: Some(Box::new(Wrapped {
                    msg: "operation timed out",
                    source: None,
                })),
            })),
        };
        assert_eq!(
            error_chain(&e),
            "error sending request: client error: operation timed out"
        );
    }

    #[test]
    fn test_error_chain_single_error() {
        let e: Box<dyn Error> = "connection refused".into();
        assert_eq!(error_chain(e.as_ref()), "connection refused");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.ends_with("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // "é" is two bytes; cutting at 1 would split it
        let result = truncate_for_log("éé", 1);
        assert_eq!(result, "…(+4 bytes)");
    }
}
