//! Smoke tests for attempt progress reporting

#[cfg(test)]
mod tests {
    use wavemap::io::progress::ProgressReporter;

    // Quiet mode must construct nothing that touches the terminal
    #[test]
    fn test_quiet_reporter_is_inert() {
        let reporter = ProgressReporter::new(true);
        reporter.attempt_started(1);
        reporter.attempt_discarded(1, "contradiction");
        reporter.finish(1, 25);
    }

    #[test]
    fn test_active_reporter_survives_full_cycle() {
        let reporter = ProgressReporter::new(false);
        reporter.attempt_started(1);
        reporter.attempt_discarded(1, "iteration limit after 3 iterations");
        reporter.attempt_started(2);
        reporter.finish(2, 100);
    }
}
