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

use super::loader::ConfigError;
use serde_yaml::Value;
use std::path::Path;

/// Document syntax of a configuration file.
///
/// Both formats parse into a [`serde_yaml::Value`] tree so the rest of the
/// pipeline does not care which one was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON, everything else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn parse(self, text: &str) -> Result<Value, ConfigError> {
        match self {
            Format::Yaml => Ok(serde_yaml::from_str(text)?),
            Format::Json => {
                let value: serde_json::Value = serde_json::from_str(text)?;
                Ok(serde_yaml::to_value(value)?)
            }
        }
    }
}
