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

//! Options accepted by [`load`](super::loader::load).

use super::environment::Environment;
use super::format::Format;
use std::fmt;
use std::path::PathBuf;

/// Environment variable naming the config file when none is given.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Config file used when neither an explicit file nor `CONFIG_FILE` is set.
pub const DEFAULT_CONFIG_FILE: &str = "application.yaml";

/// Caller-supplied check run on the deserialized value.
///
/// Return the (possibly transformed) value to accept it, or an error to reject
/// the configuration.
pub type ValidateFn<T> = Box<dyn Fn(T) -> anyhow::Result<T> + Send + Sync>;

/// Settings for a single load.
///
/// ```
/// use yaml_env_config::LoadOptions;
///
/// #[derive(serde::Deserialize)]
/// struct Database {
///     host: String,
/// }
///
/// let options = LoadOptions::<Database>::new()
///     .file("config/app.yaml")
///     .path("database")
///     .validate(|db| {
///         anyhow::ensure!(!db.host.is_empty(), "host must not be empty");
///         Ok(db)
///     });
/// # let _ = options;
/// ```
pub struct LoadOptions<T> {
    pub(crate) file: Option<PathBuf>,
    pub(crate) path: Option<String>,
    pub(crate) fail_on_missing: bool,
    pub(crate) auto_expand: bool,
    pub(crate) format: Option<Format>,
    pub(crate) validate: Option<ValidateFn<T>>,
    pub(crate) environment: Option<Box<dyn Environment + Send + Sync>>,
    pub(crate) dotenv: Option<PathBuf>,
}

impl<T> Default for LoadOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadOptions<T> {
    pub fn new() -> Self {
        Self {
            file: None,
            path: None,
            fail_on_missing: true,
            auto_expand: true,
            format: None,
            validate: None,
            environment: None,
            dotenv: None,
        }
    }

    /// Config file to read.
    ///
    /// Defaults to the value of `CONFIG_FILE`, then `application.yaml`.
    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Key, or dotted path, of the sub-value to return.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Whether absent data at the selected path is an error (default `true`).
    ///
    /// When disabled, an empty mapping is used in place of the missing data.
    pub fn fail_on_missing(mut self, fail_on_missing: bool) -> Self {
        self.fail_on_missing = fail_on_missing;
        self
    }

    /// Whether to interpolate environment variables before parsing (default `true`).
    pub fn auto_expand(mut self, auto_expand: bool) -> Self {
        self.auto_expand = auto_expand;
        self
    }

    /// Document format; detected from the file extension if not set.
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(T) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Environment used for interpolation and the `CONFIG_FILE` default.
    pub fn environment<E>(mut self, environment: E) -> Self
    where
        E: Environment + Send + Sync + 'static,
    {
        self.environment = Some(Box::new(environment));
        self
    }

    /// Dotenv file whose entries back the environment.
    ///
    /// A missing file is skipped. Non-empty variables of the environment take
    /// precedence over its entries.
    pub fn dotenv(mut self, dotenv: impl Into<PathBuf>) -> Self {
        self.dotenv = Some(dotenv.into());
        self
    }
}

impl<T> fmt::Debug for LoadOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("file", &self.file)
            .field("path", &self.path)
            .field("fail_on_missing", &self.fail_on_missing)
            .field("auto_expand", &self.auto_expand)
            .field("format", &self.format)
            .field("validate", &self.validate.is_some())
            .field("environment", &self.environment.is_some())
            .field("dotenv", &self.dotenv)
            .finish()
    }
}
