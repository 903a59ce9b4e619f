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

/// A single catalog record. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// The card's unique short identifier.
    pub id: String,
    /// The language code of this record.
    pub language: String,
    /// The set (expansion) the card belongs to.
    pub set_name: String,
    /// The card's display name. Unique across the catalog: it is the
    /// lookup key.
    pub name: String,
    /// Free-text classification, e.g. "Action - Attack".
    pub card_type: String,
    /// Dependency marker. Empty when the card requires nothing.
    pub requires: String,
    /// The card's rules text.
    pub description: String,
}
