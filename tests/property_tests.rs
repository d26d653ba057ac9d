//! Property-based tests for rust_console_logger using proptest

use proptest::prelude::*;
use rust_console_logger::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that the short tag parses back to the same level
    #[test]
    fn test_log_level_tag_roundtrip(level in any_level()) {
        let tag = level.tag().trim_start_matches('[').trim_end_matches(']');
        let parsed: LogLevel = tag.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches the numeric values
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A record is written iff its level passes the gate
    #[test]
    fn test_gating(min in any_level(), level in any_level(), message in "[a-zA-Z0-9 ]{1,40}") {
        let buffer = BufferSink::new();
        let logger = Logger::builder()
            .min_level(min)
            .output(buffer.clone())
            .on_fatal(Arc::new(|| {}))
            .build();

        logger.log(level, &message);

        prop_assert_eq!(buffer.is_empty(), level < min);
    }

    /// The body always comes last, followed only by the line terminator
    #[test]
    fn test_body_is_last(
        level in any_level(),
        show_time in any::<bool>(),
        show_color in any::<bool>(),
        show_caller in any::<bool>(),
        message in "[^\n]{0,60}",
    ) {
        let buffer = BufferSink::new();
        let logger = Logger::builder()
            .show_time(show_time)
            .show_color(show_color)
            .show_caller_location(show_caller)
            .output(buffer.clone())
            .on_fatal(Arc::new(|| {}))
            .build();

        logger.log(level, &message);

        let content = buffer.contents();
        let expected_end = format!("{}\n", message);
        prop_assert!(content.ends_with(&expected_end));
        prop_assert_eq!(content.matches('\n').count(), 1);
        prop_assert!(content.contains(level.tag()));
    }
}
