/// Number of e8s in one ICP.
pub const E8S_PER_ICP: u64 = 100_000_000;

/// Renders an amount of e8s as ICP with all eight decimals, e.g. `1.05000000 ICP`.
pub fn format_e8s(e8s: u64) -> String {
    format!("{}.{:08} ICP", e8s / E8S_PER_ICP, e8s % E8S_PER_ICP)
}
