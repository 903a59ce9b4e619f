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

use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::classifier::classify;
use crate::error::Fallible;
use crate::error::fail;
use crate::rules::Rules;
use crate::types::card::Card;

/// Draw a random supply from the catalog, classify it, and print both the
/// drawn names and the classification.
pub fn shuffle_supply(path: &Path, count: usize, rules_path: Option<&Path>) -> Fallible<()> {
    let catalog = Catalog::load(path)?;
    let rules = Rules::load(rules_path)?;
    let mut rng = rand::thread_rng();
    let draw = draw_supply(&catalog, &rules, count, &mut rng)?;
    let names: Vec<String> = draw.supply.iter().map(|card| card.name.clone()).collect();
    println!("supply: {}", names.join(", "));
    if let Some(bane) = &draw.bane {
        println!("bane card: {}", bane.name);
    }
    let supply = classify(&catalog, &rules, &names)?;
    println!("{supply}");
    Ok(())
}

/// A randomly drawn supply, plus the extra draw serving as the bane when
/// the bane-trigger card came up.
pub struct Draw<'a> {
    pub supply: Vec<&'a Card>,
    pub bane: Option<&'a Card>,
}

/// Draw `count` distinct cards from the catalog. If the bane-trigger card
/// is among them, draw one more card from the remaining pool to serve as
/// the bane.
pub fn draw_supply<'a>(
    catalog: &'a Catalog,
    rules: &Rules,
    count: usize,
    rng: &mut impl Rng,
) -> Fallible<Draw<'a>> {
    let mut pool: Vec<&Card> = catalog.cards().collect();
    if pool.len() < count {
        return fail(format!(
            "catalog has {} cards, cannot draw {count}.",
            pool.len()
        ));
    }
    pool.shuffle(rng);
    let supply: Vec<&Card> = pool.drain(..count).collect();
    let bane = if supply.iter().any(|card| card.name == rules.bane_card) {
        match pool.pop() {
            Some(card) => Some(card),
            None => return fail("no card left in the catalog to draw as the bane."),
        }
    } else {
        None
    };
    Ok(Draw { supply, bane })
}
