//! Fixture and stub naming.

use crate::core::PublicMethodDescriptor;
use std::collections::HashMap;

/// Prefix of every generated fixture class.
pub const FIXTURE_PREFIX: &str = "TestOf";

/// Suffix appended to every stub method name, before any overload counter.
pub const STUB_SUFFIX: &str = "_Test";

pub fn fixture_name(class_name: &str) -> String {
    format!("{}{}", FIXTURE_PREFIX, class_name)
}

/// Hands out unique names for repeated base names.
///
/// The first occurrence of a base keeps it unchanged; the n-th repeat gets
/// `n` appended, so the sequence for one base is `x`, `x1`, `x2`, ...
#[derive(Debug, Default)]
pub struct UniqueNamer {
    repeats: HashMap<String, usize>,
}

impl UniqueNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `key` identifies collisions; `base` is the name to decorate.
    pub fn next(&mut self, key: &str, base: String) -> String {
        match self.repeats.get_mut(key) {
            Some(count) => {
                *count += 1;
                format!("{}{}", base, count)
            }
            None => {
                self.repeats.insert(key.to_string(), 0);
                base
            }
        }
    }
}

/// Stub names for a class's public methods, in declaration order.
///
/// Overloads share an identifier, so repeats are told apart by a counter
/// after `_Test`: `Run`, `Run`, `Run` become `Run_Test`, `Run_Test1`,
/// `Run_Test2`.
pub fn stub_names(methods: &[PublicMethodDescriptor]) -> Vec<String> {
    let mut namer = UniqueNamer::new();
    methods
        .iter()
        .map(|method| namer.next(&method.name, format!("{}{}", method.name, STUB_SUFFIX)))
        .collect()
}
