/// When a column whose type has no native mapping is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnsupportedTypePolicy {
    /// Allocate a placeholder holder and fail when a scan would use it.
    /// [`prepare_row`](crate::prepare_row) succeeds, so callers can still
    /// inspect the column layout.
    #[default]
    Deferred,
    /// Fail in [`prepare_row`](crate::prepare_row) itself.
    Eager,
}

/// Thin configuration for row assembly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub unsupported_types: UnsupportedTypePolicy,
    /// Rows to reserve up front in [`slice_map`](crate::slice_map).
    pub row_capacity_hint: usize,
    /// Clear the destination map in [`map_scan`](crate::map_scan) before
    /// writing a row, instead of only overwriting same-named keys.
    pub replace_map: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unsupported_types(mut self, policy: UnsupportedTypePolicy) -> Self {
        self.unsupported_types = policy;
        self
    }

    pub fn with_row_capacity_hint(mut self, rows: usize) -> Self {
        self.row_capacity_hint = rows;
        self
    }

    pub fn with_replace_map(mut self, replace: bool) -> Self {
        self.replace_map = replace;
        self
    }
}
