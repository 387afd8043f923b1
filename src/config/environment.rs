// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Read-only environment variable lookup.
//!
//! Interpolation never talks to `std::env` directly; it asks an [`Environment`].
//! The process environment is the default, a `HashMap` works for tests and
//! embedding, and [`DotenvEnv`] layers the entries of a `.env` file underneath
//! another environment without ever calling `set_var`.

use log::debug;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::Path;

/// A source of environment variable values.
///
/// Implementations must be side-effect free: lookups are made lazily, once per
/// placeholder, and are never cached by the caller.
pub trait Environment {
    /// Returns the value of `name`, or `None` if it is not defined.
    fn get(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Entries of a dotenv file layered underneath a base environment.
///
/// A non-empty value in the base environment always wins; the dotenv entry is
/// only consulted when the base has nothing to offer.
#[derive(Debug, Clone)]
pub struct DotenvEnv<E = ProcessEnv> {
    base: E,
    entries: HashMap<String, String>,
}

impl DotenvEnv<ProcessEnv> {
    /// Reads `path` and layers it underneath the process environment.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, dotenvy::Error> {
        Self::with_base(path, ProcessEnv)
    }
}

impl<E: Environment> DotenvEnv<E> {
    /// Reads `path` and layers it underneath `base`.
    pub fn with_base<P: AsRef<Path>>(path: P, base: E) -> Result<Self, dotenvy::Error> {
        let mut entries = HashMap::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            entries.insert(key, value);
        }

        debug!(
            "Read {} entries from dotenv file {}",
            entries.len(),
            path.as_ref().display()
        );

        Ok(Self { base, entries })
    }

    /// Number of entries read from the dotenv file.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Environment> Environment for DotenvEnv<E> {
    fn get(&self, name: &str) -> Option<String> {
        self.base
            .get(name)
            .filter(|value| !value.is_empty())
            .or_else(|| self.entries.get(name).cloned())
    }
}
