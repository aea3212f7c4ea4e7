//! Heap sizing for the packaged application's launch.
//!
//! Total system memory is mapped to an initial/maximum heap pair:
//!
//! | total       | -Xms   | -Xmx    |
//! |-------------|--------|---------|
//! | <= 2 GiB    | 256m   | 1536m   |
//! | <= 4 GiB    | 512m   | 3072m   |
//! | <= 8 GiB    | 1024m  | 6144m   |
//! | <= 16 GiB   | 2048m  | 12288m  |
//! | larger      | 2048m  | 8192m   |

use crate::ui;
use sysinfo::System;

/// Total memory assumed when detection fails.
pub const FALLBACK_TOTAL_MB: u64 = 8192;

/// Heap allocation derived from total system memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapSettings {
    pub xms_mb: u64,
    pub xmx_mb: u64,
}

impl HeapSettings {
    /// Pick the heap bracket for the given total memory in MiB.
    pub fn for_total_memory(total_mb: u64) -> Self {
        let (xms_mb, xmx_mb) = match total_mb {
            0..=2048 => (256, 1536),
            2049..=4096 => (512, 3072),
            4097..=8192 => (1024, 6144),
            8193..=16384 => (2048, 12288),
            _ => (2048, 8192),
        };
        HeapSettings { xms_mb, xmx_mb }
    }

    /// Render the settings as JVM launch flags.
    pub fn jvm_args(&self) -> Vec<String> {
        vec![
            format!("-Xms{}m", self.xms_mb),
            format!("-Xmx{}m", self.xmx_mb),
        ]
    }
}

/// Read total system memory in MiB, `None` when it cannot be determined.
pub fn detect_total_memory_mb() -> Option<u64> {
    let mut sys = System::new();
    sys.refresh_memory();
    let total_mb = sys.total_memory() / 1024 / 1024;
    if total_mb == 0 {
        None
    } else {
        Some(total_mb)
    }
}

/// Detect total memory and pick heap settings, falling back to the 8 GiB
/// bracket with a warning when detection fails.
pub fn detect_heap_settings() -> HeapSettings {
    let total_mb = match detect_total_memory_mb() {
        Some(total_mb) => {
            ui::display_status(&format!("Detected total memory: {}MB", total_mb));
            total_mb
        }
        None => {
            ui::display_status("Warning: cannot detect total memory, defaulting to 8G");
            FALLBACK_TOTAL_MB
        }
    };
    HeapSettings::for_total_memory(total_mb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        let cases = [
            (0, (256, 1536)),
            (2048, (256, 1536)),
            (2049, (512, 3072)),
            (4096, (512, 3072)),
            (4097, (1024, 6144)),
            (8192, (1024, 6144)),
            (8193, (2048, 12288)),
            (16384, (2048, 12288)),
            (16385, (2048, 8192)),
            (65536, (2048, 8192)),
        ];

        for (total_mb, (xms_mb, xmx_mb)) in cases {
            let heap = HeapSettings::for_total_memory(total_mb);
            assert_eq!(
                heap,
                HeapSettings { xms_mb, xmx_mb },
                "wrong bracket for {}MB",
                total_mb
            );
        }
    }

    #[test]
    fn test_fallback_matches_8g_bracket() {
        assert_eq!(
            HeapSettings::for_total_memory(FALLBACK_TOTAL_MB),
            HeapSettings {
                xms_mb: 1024,
                xmx_mb: 6144
            }
        );
    }

    #[test]
    fn test_jvm_args_rendering() {
        let heap = HeapSettings::for_total_memory(4096);
        assert_eq!(heap.jvm_args(), vec!["-Xms512m", "-Xmx3072m"]);
    }

    #[test]
    fn test_xms_never_exceeds_xmx() {
        for total_mb in [0, 1024, 3000, 6000, 10000, 20000, 1 << 20] {
            let heap = HeapSettings::for_total_memory(total_mb);
            assert!(heap.xms_mb <= heap.xmx_mb);
        }
    }
}
