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

//! Centralized configuration loading with automatic environment variable interpolation.
//!
//! Every entry point runs the same pipeline:
//! 1. Read the file (skipped by [`load_str`])
//! 2. Interpolate environment variables, unless `auto_expand` is off
//! 3. Parse as YAML or JSON
//! 4. Select the requested sub-path
//! 5. Enforce presence of the selected data
//! 6. Deserialize into `T` and run the caller's validation

use super::env_interpolation;
use super::environment::{DotenvEnv, Environment, ProcessEnv};
use super::format::Format;
use super::options::{LoadOptions, CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
use super::selection::select_path;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::PathBuf;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Failed to read dotenv file '{}': {source}", .path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// The selected data is absent and `fail_on_missing` is set.
    #[error("Failed to initialize config, the data is missing or invalid")]
    Missing,

    /// The data could not be deserialized, or validation rejected it.
    #[error("Failed to initialize config is not valid: {0}")]
    Invalid(#[source] anyhow::Error),
}

/// Load a configuration file according to `options`.
///
/// # Errors
///
/// - [`ConfigError::Io`] if the file cannot be read
/// - [`ConfigError::Yaml`] / [`ConfigError::Json`] if it cannot be parsed
/// - [`ConfigError::Dotenv`] if a configured dotenv file is malformed
/// - [`ConfigError::Missing`] if the selected data is absent and
///   `fail_on_missing` is set
/// - [`ConfigError::Invalid`] if deserialization or validation fails
///
/// # Examples
///
/// ```no_run
/// use yaml_env_config::{load, LoadOptions};
///
/// #[derive(serde::Deserialize)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// let server: Server = load(LoadOptions::new().file("config.yaml").path("server")).unwrap();
/// println!("Binding to {}:{}", server.host, server.port);
/// ```
pub fn load<T: DeserializeOwned>(options: LoadOptions<T>) -> Result<T, ConfigError> {
    let overlay;
    let env: &dyn Environment = match dotenv_overlay(&options)? {
        Some(dotenv) => {
            overlay = dotenv;
            &overlay
        }
        None => base_environment(&options),
    };

    let file = config_file(&options, env);
    debug!("Loading config file: {}", file.display());
    let content = fs::read_to_string(&file)?;

    let format = options.format.unwrap_or_else(|| Format::from_path(&file));
    run_pipeline(&content, format, env, &options)
}

/// Run the load pipeline on in-memory text instead of a file.
///
/// `options.file` is ignored. The format defaults to YAML.
pub fn load_str<T: DeserializeOwned>(text: &str, options: LoadOptions<T>) -> Result<T, ConfigError> {
    let overlay;
    let env: &dyn Environment = match dotenv_overlay(&options)? {
        Some(dotenv) => {
            overlay = dotenv;
            &overlay
        }
        None => base_environment(&options),
    };

    run_pipeline(text, options.format.unwrap_or_default(), env, &options)
}

/// Deserialize YAML with automatic environment variable interpolation.
///
/// ```
/// use serde::Deserialize;
/// use yaml_env_config::from_yaml_str;
///
/// #[derive(Deserialize, Debug)]
/// struct Config {
///     host: String,
///     port: u16,
/// }
///
/// std::env::set_var("FROM_YAML_DOC_HOST", "localhost");
///
/// let yaml = r#"
/// host: ${FROM_YAML_DOC_HOST}
/// port: ${FROM_YAML_DOC_PORT:8080}
/// "#;
///
/// let config: Config = from_yaml_str(yaml).unwrap();
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// ```
pub fn from_yaml_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    load_str(s, LoadOptions::new().format(Format::Yaml))
}

/// Deserialize JSON with automatic environment variable interpolation.
///
/// Similar to [`from_yaml_str`] but for JSON documents.
pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    load_str(s, LoadOptions::new().format(Format::Json))
}

fn base_environment<T>(options: &LoadOptions<T>) -> &dyn Environment {
    match &options.environment {
        Some(env) => env.as_ref(),
        None => &ProcessEnv,
    }
}

fn dotenv_overlay<T>(
    options: &LoadOptions<T>,
) -> Result<Option<DotenvEnv<&dyn Environment>>, ConfigError> {
    let Some(path) = options.dotenv.as_deref() else {
        return Ok(None);
    };

    if !path.exists() {
        debug!("Dotenv file {} not found, skipping", path.display());
        return Ok(None);
    }

    DotenvEnv::with_base(path, base_environment(options))
        .map(Some)
        .map_err(|source| ConfigError::Dotenv {
            path: path.to_path_buf(),
            source,
        })
}

/// The explicit file, else `CONFIG_FILE`, else `application.yaml`.
fn config_file<T>(options: &LoadOptions<T>, env: &dyn Environment) -> PathBuf {
    if let Some(file) = &options.file {
        return file.clone();
    }

    env.get(CONFIG_FILE_ENV)
        .filter(|file| !file.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn run_pipeline<T: DeserializeOwned>(
    content: &str,
    format: Format,
    env: &dyn Environment,
    options: &LoadOptions<T>,
) -> Result<T, ConfigError> {
    let document = if options.auto_expand {
        format.parse(&env_interpolation::expand_with(content, env))?
    } else {
        format.parse(content)?
    };

    let candidate = select_candidate(document, options)?;

    let value = serde_yaml::from_value::<T>(candidate)
        .map_err(|e| ConfigError::Invalid(anyhow::Error::new(e)))?;

    match &options.validate {
        Some(validate) => validate(value).map_err(ConfigError::Invalid),
        None => Ok(value),
    }
}

/// Narrow `document` to the selected path and apply the missing-data policy.
fn select_candidate<T>(document: Value, options: &LoadOptions<T>) -> Result<Value, ConfigError> {
    let candidate = match options.path.as_deref() {
        Some(path) => {
            debug!("Selecting config path '{path}'");
            select_path(&document, path).cloned()
        }
        None => Some(document),
    };

    if let Some(value) = candidate.filter(|value| !value.is_null()) {
        return Ok(value);
    }

    if options.fail_on_missing {
        return Err(ConfigError::Missing);
    }

    warn!(
        "Config data at '{}' is missing, using an empty mapping",
        options.path.as_deref().unwrap_or("<root>")
    );
    Ok(Value::Mapping(Mapping::new()))
}
