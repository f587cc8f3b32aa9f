use std::collections::HashMap;

use formguard_core::SessionBag;

/// Session attributes held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySession {
    attributes: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl SessionBag for MemorySession {
    fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn insert(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }
}
