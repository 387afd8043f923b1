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

//! Selection of a sub-value from a parsed configuration document.

use serde_yaml::Value;

/// Select `path` from `value`.
///
/// An exact key match on `value` wins, so flat keys containing dots still work.
/// Otherwise `path` is split on `.` and walked segment by segment: mapping
/// segments are keys, sequence segments are zero-based indices.
///
/// ```
/// use yaml_env_config::config::selection::select_path;
///
/// let doc: serde_yaml::Value =
///     serde_yaml::from_str("db:\n  replicas:\n    - host: a\n    - host: b").unwrap();
///
/// let host = select_path(&doc, "db.replicas.1.host").unwrap();
/// assert_eq!(host.as_str(), Some("b"));
/// ```
pub fn select_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    lookup(value, path).or_else(|| {
        if path.contains('.') {
            path.split('.').try_fold(value, lookup)
        } else {
            None
        }
    })
}

fn lookup<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Mapping(map) => map.get(segment).or_else(|| {
            map.iter()
                .find(|(key, _)| scalar_key_matches(key, segment))
                .map(|(_, value)| value)
        }),
        Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Tagged(tagged) => lookup(&tagged.value, segment),
        _ => None,
    }
}

/// Non-string scalar keys (`404:`, `true:`) match their textual form.
fn scalar_key_matches(key: &Value, segment: &str) -> bool {
    match key {
        Value::Number(n) => n.to_string() == segment,
        Value::Bool(b) => b.to_string() == segment,
        _ => false,
    }
}
