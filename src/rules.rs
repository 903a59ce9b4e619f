// Copyright 2025 Fernando Borretti
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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

/// The classification constants. The defaults reproduce the standard game
/// rules; a TOML file can override any subset of them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Rules {
    /// Cards from this set count toward the high-cost rule.
    #[serde(default = "default_high_cost_set")]
    pub high_cost_set: String,
    /// Cards from this set count toward the shelters rule.
    #[serde(default = "default_shelters_set")]
    pub shelters_set: String,
    /// The card whose presence requires a bane card.
    #[serde(default = "default_bane_card")]
    pub bane_card: String,
}

fn default_high_cost_set() -> String {
    "Prosperity".to_string()
}

fn default_shelters_set() -> String {
    "Dark Ages".to_string()
}

fn default_bane_card() -> String {
    "Young Witch".to_string()
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            high_cost_set: default_high_cost_set(),
            shelters_set: default_shelters_set(),
            bane_card: default_bane_card(),
        }
    }
}

impl Rules {
    /// Load rules from a TOML file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        match path {
            Some(path) => {
                let content = read_to_string(path)?;
                Ok(toml::from_str(&content)?)
            }
            None => Ok(Rules::default()),
        }
    }
}
