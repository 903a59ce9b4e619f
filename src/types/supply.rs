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

use std::fmt::Display;
use std::fmt::Formatter;

/// The classification of a candidate supply: the resolved card ids plus
/// the three rule flags. Computed fresh for every query and discarded
/// after printing.
#[derive(Clone, Debug, PartialEq)]
pub struct Supply {
    /// The resolved card ids, in input order, duplicates preserved.
    pub card_ids: Vec<String>,
    /// Whether at least half the cards are from the high-cost set.
    pub high_cost: bool,
    /// Whether at least half the cards are from the shelters set.
    pub shelters: bool,
    /// Whether the bane-trigger card is among the chosen names.
    pub bane: bool,
}

impl Display for Supply {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "cards: {}", self.card_ids.join(","))?;
        writeln!(f, "high cost: {}", self.high_cost)?;
        writeln!(f, "shelters: {}", self.shelters)?;
        write!(f, "bane: {}", self.bane)
    }
}
