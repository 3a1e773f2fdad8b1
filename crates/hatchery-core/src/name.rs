use crate::fixed::Ticks;

/// Unit name built from a prefix and the current tick, e.g. `bot1042`.
///
/// Two names generated with the same prefix in the same tick collide; the
/// facility reports that as `NameExists` when the second one is produced.
pub fn generate_name(prefix: &str, tick: Ticks) -> String {
    format!("{prefix}{tick}")
}
