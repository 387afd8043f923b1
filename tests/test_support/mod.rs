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

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A PEM certificate, used wherever a realistic multi-line value is needed.
pub const CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----\n\
MIIEQDCCAqigAwIBAgIUUMiiYh+ixcuNhBlFH9u7XUxKSM4wDQYJKoZIhvcNAQEM\n\
BQAwOjE4MDYGA1UEAwwvNjJkMjk0NGYtNGRlNS00MTA2LTk3NDItY2FkZTcxNzY4\n\
OGY4IFByb2plY3QgQ0EwHhcNMjIwNzA1MTEyNzE5WhcNMjQxMDAyMTEyNzE5WjA/\n\
MRcwFQYDVQQKDA5rYWZrYS0zZDI5ZTIzMTERMA8GA1UECwwIdTZ1M3kyYjMxETAP\n\
BgNVBAMMCGF2bmFkbWluMIIBojANBgkqhkiG9w0BAQEFAAOCAY8AMIIBigKCAYEA\n\
xbEqJZ21X8ZWXWUzPaU0Pq0grN8Enj/pt0GtRvjSK0c16qlIBSySRYy4K47Z1LJP\n\
wkTD0jB1nXx90mwJNioK/BrtABpASV74jB4p25GN9xhNxfk9DseR5ccIfM3hqF1F\n\
YHeNATX4gftmpr/2hjTHlnX046JCly4n4+ty41wPnOaTMon1S/SqrRc75GA4fZO+\n\
bK0G6Lr67lTzOkf/REFE6UZ55FHM//DIdNjqlkjiXKJXy6yYyoUFgYktP2A4KcVs\n\
cMvnmo3WQSBVVQ1Act22Tp/GbOP+0EjqOLct+rhOXDKPf2KyfvAhUjDk9HMFVcPE\n\
S3AE7VeuPH+7jdS0FmA5k0qWHMvcKTVIet10ulEpCnaUhCISdAzCKu6UlWTWiwOi\n\
2v2DzjDm/jgQOXwbSG4JJga9ikq97MwwoDhZNOThVTZk4evHCXzh1Xl/5H/cfRSM\n\
cdrjfLEkjDcFmsXpIGrLukOpWfSB7Vv0Dkby5CAWtEgB4WZRKh/qUXf5EUzU25JL\n\
AgMBAAGjOTA3MB0GA1UdDgQWBBSAw3F+1Tjn+JoGnh42zGdfRdncTTAJBgNVHRME\n\
AjAAMAsGA1UdDwQEAwIFoDANBgkqhkiG9w0BAQwFAAOCAYEAJvukW6dYGwY187Vu\n\
4XX7gcXEsAXwQMO7/NZSmsfnh6T/UgNymTRvSZZyOcEnaT6qzJdFjinVSmdX24lF\n\
Irv+I8F9SNHsWh2aCbf54hwGATCORAGeEeXWrRNBkyAG5qlbftZ8X7sFAYwLVYyM\n\
EBTIX2TN2VSKrW7zKTRnaMiDk5E+rsPJGU6btE1PRCbhPZYB6umoZtwA9iI6z2WH\n\
iQk3miyI3nf5VPKAyVpq5x8/+H3cAm0s5RcP1rYEoMbpB0QZR6n7s6H3NmxzDF7d\n\
nTQ8T/1uHItl4V8EUaorS2Ki1r0t/r2oZN3+XX/JtqYt09UaiJxpO99LaukHWbyq\n\
swcLnnd870piOydm3RSnP0ar8cQzp0BnVv9E1XajCXe7ntz70YQ0FqGsL3xrx0kd\n\
HbQJmsmSUWC2FOi5LZptkZBdm4gfE3y/UB0AfyG8dPaMm8dpzjd0kcdLZkmv2joi\n\
dwiAyzKxdj7Ge8a/h9BbR+8A07esmP3hGvX0E8fShOgdXzoo\n\
-----END CERTIFICATE-----";

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Build an in-memory environment from `(name, value)` pairs.
pub fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
