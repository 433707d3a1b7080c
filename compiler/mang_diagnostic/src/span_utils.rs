//! Row and column computation for spans.
//!
//! For repeated lookups on the same source, [`LineOffsetTable`] pre-computes
//! line starts for O(log L) lookup instead of O(n) scanning.

use mang_ir::Span;

/// Pre-computed line offset table for line/column lookup.
///
/// ```
/// use mang_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "{a=1\nb=a}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 5), (2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column). The column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());
        let col = source
            .get(line_start..offset)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Plain-text location suffix such as `" at row 2 and column 1"`.
    pub fn describe(&self, source: &str, span: Span) -> String {
        if span.is_empty() && span.start == 0 && span.end == 0 {
            return " at unknown location".to_string();
        }
        let (row, column) = self.offset_to_line_col(source, span.start);
        if span.len() <= 1 {
            return format!(" at row {row} and column {column}");
        }
        let (last_row, last_column) = self.offset_to_line_col(source, span.end - 1);
        format!(
            " between row {row} and column {column} and row {last_row} and column {last_column}"
        )
    }
}
