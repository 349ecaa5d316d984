/// Cluster colors, cycled by group id.
pub const PALETTE: [&str; 10] = [
    "#3B82F6", // blue
    "#10B981", // green
    "#F59E0B", // amber
    "#EF4444", // red
    "#8B5CF6", // violet
    "#EC4899", // pink
    "#14B8A6", // teal
    "#F97316", // orange
    "#6366F1", // indigo
    "#84CC16", // lime
];

/// Color of group `group`. Depends on nothing else.
pub fn color_for(group: usize) -> &'static str {
    PALETTE[group % PALETTE.len()]
}
