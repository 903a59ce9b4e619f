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

use std::collections::HashSet;
use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Fallible;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_catalog_stats(path: &Path, format: StatsFormat) -> Fallible<()> {
    let catalog = Catalog::load(path)?;
    let stats = Stats::for_catalog(&catalog);
    match format {
        StatsFormat::Text => {
            println!("cards: {}", stats.card_count);
            println!("sets: {}", stats.set_count);
            println!("languages: {}", stats.language_count);
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    card_count: usize,
    set_count: usize,
    language_count: usize,
}

impl Stats {
    fn for_catalog(catalog: &Catalog) -> Self {
        let sets: HashSet<&str> = catalog.cards().map(|card| card.set_name.as_str()).collect();
        let languages: HashSet<&str> = catalog.cards().map(|card| card.language.as_str()).collect();
        Self {
            card_count: catalog.len(),
            set_count: sets.len(),
            language_count: languages.len(),
        }
    }
}
