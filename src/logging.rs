//! Tracing bootstrap for applications built on spei.

use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["spei", "spei_calendar", "spei_dist", "spei_series", "spei_stats"];

/// Filter directives for a verbosity level.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize a fmt subscriber for the workspace crates.
///
/// `RUST_LOG` overrides `verbosity` if set. Returns `false` when a global
/// subscriber was already installed.
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        let d = default_directives(1);
        for target in CRATE_TARGETS {
            assert!(d.contains(&format!("{target}=info")));
        }
        assert_eq!(d.split(',').count(), CRATE_TARGETS.len());
    }

    #[test]
    fn verbosity_levels() {
        assert!(default_directives(0).starts_with("spei=warn"));
        assert!(default_directives(2).starts_with("spei=debug"));
        assert!(default_directives(3).starts_with("spei=trace"));
        assert!(default_directives(9).starts_with("spei=trace"));
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init(0);
        assert!(!init(0));
    }
}
