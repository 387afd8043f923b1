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

//! Configuration loading.
//!
//! This module provides:
//! - Environment variable interpolation on raw document text
//! - YAML and JSON parsing into a common value tree
//! - Sub-path selection and a missing-data policy
//! - Caller-supplied validation
//!
//! # Environment Variable Interpolation
//!
//! All loading functions interpolate environment variables by default:
//! - `$VAR_NAME` / `${VAR_NAME}` - variable, empty if unset
//! - `${VAR_NAME:default}` - variable with default value
//! - `$$` - a literal `$`
//!
//! # Configuration File Example
//!
//! ```yaml
//! server:
//!   host: ${SERVER_HOST:0.0.0.0}
//!   port: ${SERVER_PORT:8080}
//!
//! database:
//!   url: ${DATABASE_URL:postgres://localhost:5432/app}
//!   password: $DB_PASSWORD
//!   tls_cert: ${DB_TLS_CERT}
//! ```

pub mod env_interpolation;
pub mod environment;
pub mod format;
pub mod loader;
pub mod options;
pub mod selection;

// Re-export commonly used types
pub use env_interpolation::{expand, expand_with, referenced_variables};
pub use environment::{DotenvEnv, Environment, ProcessEnv};
pub use format::Format;
pub use loader::{from_json_str, from_yaml_str, load, load_str, ConfigError};
pub use options::{LoadOptions, ValidateFn, CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
pub use selection::select_path;
