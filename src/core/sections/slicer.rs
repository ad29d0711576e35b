//! Line-range slicing.

use crate::core::error::{DocsError, Result};
use crate::core::scope::ScopeRegistry;
use crate::core::search::read_lossy;
use crate::core::types::SectionSlice;

/// Read an inclusive, 1-based line range from a file
///
/// `start_line` below 1 is clamped to 1. Without `end_line` the window is
/// `max_lines` long. The returned `end_line` is the effective end after
/// clamping to the file length.
pub fn read_section(
    registry: &ScopeRegistry,
    file: &str,
    start_line: i64,
    end_line: Option<i64>,
    max_lines: usize,
) -> Result<SectionSlice> {
    let path = registry.resolve_file(file);
    if !path.exists() {
        return Err(DocsError::FileNotFound(file.to_string()));
    }

    let text = read_lossy(&path)?;
    let lines: Vec<&str> = text.lines().collect();
    let total = lines.len();

    let start = usize::try_from(start_line.max(1)).unwrap_or(usize::MAX);
    if start > total {
        return Err(DocsError::StartLineOutOfRange {
            start_line: start,
            total_lines: total,
        });
    }

    let end = match end_line {
        Some(requested) if requested < start_line.max(1) => {
            return Err(DocsError::EndBeforeStart {
                start_line: start,
                end_line: requested,
            });
        }
        Some(requested) => usize::try_from(requested).unwrap_or(usize::MAX).min(total),
        None => (start - 1).saturating_add(max_lines).min(total),
    };

    let included = &lines[start - 1..end];

    Ok(SectionSlice {
        file: registry.relative_path(&path),
        start_line: start,
        end_line: end,
        content: included.join("\n"),
        line_count: included.len(),
    })
}
