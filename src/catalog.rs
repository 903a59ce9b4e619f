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

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;
use std::time::Instant;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;

/// The field delimiter of the catalog file format. Fields cannot contain
/// it: the format has no escaping.
const DELIMITER: char = ';';

/// The in-memory catalog: a read-only mapping from card name to record,
/// built once at startup.
#[derive(Debug)]
pub struct Catalog {
    by_name: HashMap<String, Card>,
}

impl Catalog {
    /// Load a catalog from a semicolon-delimited file. The first line is a
    /// header naming the columns; every column the record needs must be
    /// present, in any order. Extra columns are ignored.
    pub fn load(path: &Path) -> Fallible<Self> {
        log::debug!("Loading catalog from {}...", path.display());
        let start = Instant::now();
        let content = read_to_string(path).map_err(|e| {
            ErrorReport::new(format!(
                "cannot read catalog file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let catalog = Self::parse(&content)?;
        let duration = start.elapsed().as_millis();
        log::debug!("Catalog of {} cards loaded in {duration}ms.", catalog.len());
        Ok(catalog)
    }

    fn parse(content: &str) -> Fallible<Self> {
        let mut lines = content.lines();
        let header = match lines.next() {
            Some(header) => header.trim_end(),
            None => return fail("catalog file is empty."),
        };
        let columns = Columns::from_header(header)?;
        let mut cards = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            // The header is line 1, so data lines start at 2.
            let card = columns.parse_line(line, index + 2)?;
            cards.push(card);
        }
        Ok(Self::from_cards(cards))
    }

    /// Build a catalog from records. A name appearing more than once keeps
    /// the last record, matching the source data's behavior.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut by_name = HashMap::new();
        for card in cards {
            if let Some(old) = by_name.insert(card.name.clone(), card) {
                log::debug!("Duplicate card name '{}': keeping the later record.", old.name);
            }
        }
        Self { by_name }
    }

    /// Look up a card by its display name.
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over all cards, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.by_name.values()
    }
}

/// The positions of the required columns, resolved from the header once so
/// that a malformed file fails at load time rather than mid-query.
struct Columns {
    id: usize,
    language: usize,
    set_name: usize,
    name: usize,
    card_type: usize,
    requires: usize,
    description: usize,
}

impl Columns {
    fn from_header(header: &str) -> Fallible<Self> {
        let mut positions = HashMap::new();
        for (index, column) in header.split(DELIMITER).enumerate() {
            positions.insert(column, index);
        }
        let position = |column: &str| -> Fallible<usize> {
            positions.get(column).copied().ok_or_else(|| {
                ErrorReport::new(format!("catalog header is missing the '{column}' column."))
            })
        };
        Ok(Self {
            id: position("_id")?,
            language: position("language")?,
            set_name: position("set_name")?,
            name: position("name")?,
            card_type: position("type")?,
            requires: position("requires")?,
            description: position("description")?,
        })
    }

    fn parse_line(&self, line: &str, number: usize) -> Fallible<Card> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        let field = |index: usize| -> Fallible<String> {
            match fields.get(index) {
                Some(value) => Ok(value.to_string()),
                None => fail(format!(
                    "catalog line {number} has {} fields, expected at least {}.",
                    fields.len(),
                    index + 1
                )),
            }
        };
        Ok(Card {
            id: field(self.id)?,
            language: field(self.language)?,
            set_name: field(self.set_name)?,
            name: field(self.name)?,
            card_type: field(self.card_type)?,
            requires: field(self.requires)?,
            description: field(self.description)?,
        })
    }
}
