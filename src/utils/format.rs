//! Formatting utilities for file sizes and selection summaries.

/// Format file size for display (e.g., "1.2K", "3.4M").
///
/// Returns a right-aligned string for tabular display or compact string for UI.
pub fn format_size(size: Option<u64>, right_align: bool) -> String {
    match size {
        None => {
            if right_align {
                "    -".to_string()
            } else {
                "-".to_string()
            }
        }
        Some(bytes) => {
            if bytes >= 1_000_000_000 {
                if right_align {
                    format!("{:4.1}G", bytes as f64 / 1_000_000_000.0)
                } else {
                    format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
                }
            } else if bytes >= 1_000_000 {
                if right_align {
                    format!("{:4.1}M", bytes as f64 / 1_000_000.0)
                } else {
                    format!("{:.1}M", bytes as f64 / 1_000_000.0)
                }
            } else if bytes >= 1_000 {
                if right_align {
                    format!("{:4.1}K", bytes as f64 / 1_000.0)
                } else {
                    format!("{:.1}K", bytes as f64 / 1_000.0)
                }
            } else if right_align {
                format!("{:4}B", bytes)
            } else {
                format!("{}B", bytes)
            }
        }
    }
}

/// Summary line for a selection (e.g., "3 files, 1.2M").
pub fn format_selection_summary(count: usize, total_bytes: u64) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("{} {}, {}", count, noun, format_size(Some(total_bytes), false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None, false), "-");
        assert_eq!(format_size(None, true), "    -");
        assert_eq!(format_size(Some(0), false), "0B");
        assert_eq!(format_size(Some(500), false), "500B");
        assert_eq!(format_size(Some(500), true), " 500B");
        assert_eq!(format_size(Some(1500), false), "1.5K");
        assert_eq!(format_size(Some(1_500_000), false), "1.5M");
        assert_eq!(format_size(Some(2_500_000_000), false), "2.5G");
    }

    #[test]
    fn test_format_selection_summary() {
        assert_eq!(format_selection_summary(0, 0), "0 files, 0B");
        assert_eq!(format_selection_summary(1, 999), "1 file, 999B");
        assert_eq!(format_selection_summary(3, 1_200_000), "3 files, 1.2M");
    }
}
