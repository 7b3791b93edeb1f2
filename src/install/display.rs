//! Lookups and lock accounting over installation lists

use super::Installation;

/// Installation names are matched case-insensitively
pub fn standardize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Number of installations currently locked against deletion
pub fn locked_count(installs: &[Installation]) -> usize {
    installs.iter().filter(|i| i.deletion_locked).count()
}

/// First installation holding a deletion lock
pub fn deletion_locked_install(installs: &[Installation]) -> Option<&Installation> {
    installs.iter().find(|i| i.deletion_locked)
}

/// Whether another deletion lock may be taken under the per-person limit
pub fn can_lock(installs: &[Installation], max_allowed: u32) -> bool {
    locked_count(installs) < max_allowed as usize
}

pub fn find_by_name<'a>(installs: &'a [Installation], name: &str) -> Option<&'a Installation> {
    let wanted = standardize_name(name);
    installs
        .iter()
        .find(|i| standardize_name(&i.name) == wanted)
}

/// Exact ID match first, then a name match
pub fn find_by_id_or_name<'a>(
    installs: &'a [Installation],
    key: &str,
) -> Option<&'a Installation> {
    installs
        .iter()
        .find(|i| i.id == key)
        .or_else(|| find_by_name(installs, key))
}
