// Copyright 2025 eraflo
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

//! Installs the `env_logger` backend for the `log` facade.

use env_logger::{Builder, Env};

/// Installs the global logger with `default_filter` as the filter, unless
/// `RUST_LOG` is set.
///
/// Returns `false` if a logger was already installed, in which case the call
/// changes nothing.
pub fn init(default_filter: &str) -> bool {
    let installed = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init()
        .is_ok();
    if installed {
        log::debug!("Logger installed (default filter '{default_filter}').");
    }
    installed
}
