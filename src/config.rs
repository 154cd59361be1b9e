use std::time::Duration;

/// Per-probe timeout used when the caller does not override it.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Explicit scan configuration. Replaces ambient logging state and implicit
/// timeout defaults: the checker is driven by this one typed value.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub verbose: bool,
    pub debug: bool,
    pub timeout_secs: f64,
    pub concurrency: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: 8,
        }
    }
}

impl ScanConfig {
    /// Per-probe timeout. `timeout_secs` must already be validated as positive
    /// and representable as a `Duration`; `from_secs_f64` panics otherwise.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }

    /// Directive string for the tracing `EnvFilter`: this crate at the level
    /// the flags ask for, reqwest/hyper pinned to warn so transport internals
    /// don't drown the per-URL lines.
    pub fn log_filter(&self) -> String {
        let crate_level = if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        };
        format!("gitprobe={crate_level},reqwest=warn,hyper=warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ScanConfig::default();
        assert!(!config.verbose);
        assert!(!config.debug);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.concurrency, 8);
    }

    #[test]
    fn timeout_converts_fractional_seconds() {
        let config = ScanConfig {
            timeout_secs: 0.25,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn log_filter_tracks_verbosity_flags() {
        assert!(ScanConfig::default().log_filter().starts_with("gitprobe=warn"));

        let verbose = ScanConfig {
            verbose: true,
            ..Default::default()
        };
        assert!(verbose.log_filter().starts_with("gitprobe=info"));

        let debug = ScanConfig {
            verbose: true,
            debug: true,
            ..Default::default()
        };
        assert!(debug.log_filter().starts_with("gitprobe=debug"));
    }
}
