//! Fixed line-color palette.

/// Line colors assigned to slots round-robin by `index mod PALETTE.len()`.
pub const ROUTE_PALETTE: [&str; 7] = [
    "#b3b3ff", "#ffb84d", "#4db3ff", "#4dffe1", "#4dff4d", "#ffe14d", "#ff85ff",
];

/// Color for the slot at `index`.
#[inline]
pub fn color_for(index: usize) -> &'static str {
    ROUTE_PALETTE[index % ROUTE_PALETTE.len()]
}
