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

//! Load YAML or JSON configuration files with environment variable interpolation.
//!
//! ```no_run
//! use yaml_env_config::{load, LoadOptions};
//!
//! #[derive(serde::Deserialize)]
//! struct AppConfig {
//!     name: String,
//! }
//!
//! // Reads $CONFIG_FILE, or application.yaml
//! let config: AppConfig = load(LoadOptions::new()).unwrap();
//! println!("Starting {}", config.name);
//! ```

pub mod config;

// Main exports for library users
pub use config::{
    expand, expand_with, from_json_str, from_yaml_str, load, load_str, ConfigError, Environment,
    Format, LoadOptions,
};
