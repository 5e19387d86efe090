//! Tests for verbosity flag to filter directive mapping

#[cfg(test)]
mod tests {
    use quiltcut::io::logging::{default_directive, init_logging};

    // Tests each verbosity level selects the next tracing level
    // Verified by starting the default at info
    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(3, false), "trace");
        assert_eq!(default_directive(9, false), "trace");
    }

    // Tests quiet overrides any verbosity
    // Verified by checking verbosity before the quiet flag
    #[test]
    fn test_quiet_wins() {
        assert_eq!(default_directive(0, true), "error");
        assert_eq!(default_directive(3, true), "error");
    }

    // Tests a second subscriber install is reported rather than panicking
    // Verified by installing with init instead of try_init
    #[test]
    fn test_init_twice() {
        let _ = init_logging(0, true);
        assert!(!init_logging(0, true));
    }
}
