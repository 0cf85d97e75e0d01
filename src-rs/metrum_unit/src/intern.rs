//! Process-wide interning of canonical unit descriptors.
//!
//! Every distinct sequence of base dimensions is stored once and shared by all
//! units built from it. Descriptors are never mutated after insertion, so a
//! lookup only needs the read lock. Two threads racing to insert the same
//! descriptor both end up with the one that landed first.

use std::{
    collections::HashSet,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use crate::BaseDimension;

type Descriptor = Arc<[BaseDimension]>;

fn cache() -> &'static RwLock<HashSet<Descriptor>> {
    static CACHE: OnceLock<RwLock<HashSet<Descriptor>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashSet::new()))
}

/// Returns the shared descriptor for `entries`, inserting it if needed.
pub fn intern(entries: &[BaseDimension]) -> Descriptor {
    {
        // entries are immutable, so a poisoned lock still guards valid data
        let descriptors = cache().read().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = descriptors.get(entries) {
            return Arc::clone(existing);
        }
    }

    let mut descriptors = cache().write().unwrap_or_else(PoisonError::into_inner);

    // another thread may have inserted it between the two locks
    if let Some(existing) = descriptors.get(entries) {
        return Arc::clone(existing);
    }

    let descriptor: Descriptor = Arc::from(entries);
    descriptors.insert(Arc::clone(&descriptor));

    log::debug!(
        "interned unit descriptor #{} with {} entries",
        descriptors.len(),
        descriptor.len()
    );

    descriptor
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn same_entries_share_a_descriptor() {
        let entries = [BaseDimension::base("intern_a"), BaseDimension::base("intern_b")];

        let first = intern(&entries);
        let second = intern(&entries.clone());

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn different_order_is_a_different_descriptor() {
        let forward = [BaseDimension::base("intern_c"), BaseDimension::base("intern_d")];
        let backward = [BaseDimension::base("intern_d"), BaseDimension::base("intern_c")];

        let first = intern(&forward);
        let second = intern(&backward);

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn concurrent_inserts_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| intern(&[BaseDimension::base("intern_race")])))
            .collect();

        let descriptors: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().expect("interning thread should not panic"))
            .collect();

        let first = descriptors.first().expect("there should be a descriptor");
        assert!(descriptors.iter().all(|other| Arc::ptr_eq(first, other)));
    }
}
