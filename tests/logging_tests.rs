#[cfg(feature = "std")]
mod std_tests {
    use battleship_hotseat::{log_level, LOG_ENV};
    use log::LevelFilter;

    #[test]
    fn test_level_defaults_to_warn() {
        assert_eq!(LOG_ENV, "BATTLESHIP_LOG");
        assert_eq!(log_level(None), LevelFilter::Warn);
        assert_eq!(log_level(Some("chatty")), LevelFilter::Warn);
        assert_eq!(log_level(Some("")), LevelFilter::Warn);
    }

    #[test]
    fn test_level_parsed_case_insensitively() {
        assert_eq!(log_level(Some(" debug ")), LevelFilter::Debug);
        assert_eq!(log_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(log_level(Some("off")), LevelFilter::Off);
    }
}
