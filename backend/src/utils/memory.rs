//! Process memory snapshot for the health endpoint and startup logging.

use shared::MemoryUsage;
use tracing::info;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Raw memory figures in bytes. Fields are `None` where the platform does not expose them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemorySnapshot {
    pub rss_bytes: Option<u64>,
    pub virtual_bytes: Option<u64>,
    pub peak_rss_bytes: Option<u64>,
}

impl MemorySnapshot {
    /// Read the current process figures
    pub fn capture() -> Self {
        #[cfg(target_os = "linux")]
        {
            match std::fs::read_to_string("/proc/self/status") {
                Ok(status) => Self::from_proc_status(&status),
                Err(_) => Self::default(),
            }
        }
        #[cfg(not(target_os = "linux"))]
        {
            Self::default()
        }
    }

    /// Parse the `Vm*` lines of a `/proc/<pid>/status` document
    pub fn from_proc_status(status: &str) -> Self {
        let parse_kib = |prefix: &str| -> Option<u64> {
            status.lines().find_map(|line| {
                if !line.starts_with(prefix) {
                    return None;
                }
                let value = line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|token| token.parse::<u64>().ok())?;
                Some(value.saturating_mul(1024))
            })
        };

        Self {
            rss_bytes: parse_kib("VmRSS:"),
            virtual_bytes: parse_kib("VmSize:"),
            peak_rss_bytes: parse_kib("VmHWM:"),
        }
    }

    pub fn to_usage(&self) -> MemoryUsage {
        MemoryUsage {
            rss: format_mb(self.rss_bytes),
            virtual_size: format_mb(self.virtual_bytes),
            peak_rss: format_mb(self.peak_rss_bytes),
        }
    }
}

/// "12.34 MB", or "n/a" when the figure is unknown
pub fn format_mb(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) => format!("{:.2} MB", bytes as f64 / BYTES_PER_MB),
        None => "n/a".to_string(),
    }
}

/// Log the current process memory usage
pub fn log_memory_usage() {
    let usage = MemorySnapshot::capture().to_usage();
    info!(
        rss = %usage.rss,
        virtual_size = %usage.virtual_size,
        peak_rss = %usage.peak_rss,
        "Process memory usage"
    );
}
