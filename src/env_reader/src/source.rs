//! Key-value sources a reader can pull configuration from.
//!
//! [`ProcessEnv`] reads the live process environment and is what
//! [`EnvironmentReader::new`](crate::EnvironmentReader::new) uses. Tests and
//! embedders usually pass a `HashMap<String, String>` instead so that nothing
//! depends on global state.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Read-only lookup of a configuration entry by name.
pub trait Source {
    /// Returns the raw value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment.
///
/// Variables whose value is not valid Unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).and_then(|v| v.into_string().ok())
    }
}

impl<H: BuildHasher> Source for HashMap<String, String, H> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
