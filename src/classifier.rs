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

use crate::catalog::Catalog;
use crate::error::Fallible;
use crate::error::fail;
use crate::rules::Rules;
use crate::types::card::Card;
use crate::types::supply::Supply;

/// Split a line of input into candidate card names, trimming the
/// whitespace around each comma-separated entry. An empty line yields no
/// names.
pub fn split_names(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(|name| name.trim().to_string()).collect()
}

/// Classify a list of candidate names against the catalog. Fails on the
/// first name with no catalog record.
///
/// Both set thresholds use integer division: a supply of `n` cards
/// qualifies when at least `n / 2` (rounded down) of its cards are from
/// the set in question. For zero or one cards the threshold is zero, so
/// both flags are trivially true.
pub fn classify(catalog: &Catalog, rules: &Rules, names: &[String]) -> Fallible<Supply> {
    let mut cards: Vec<&Card> = Vec::with_capacity(names.len());
    for name in names {
        match catalog.get(name) {
            Some(card) => cards.push(card),
            None => return fail(format!("Unrecognized card name: {name}")),
        }
    }
    let card_ids = cards.iter().map(|card| card.id.clone()).collect();
    let num_cards = cards.len();
    let high_cost = count_in_set(&cards, &rules.high_cost_set) >= num_cards / 2;
    let shelters = count_in_set(&cards, &rules.shelters_set) >= num_cards / 2;
    let bane = names.iter().any(|name| name == &rules.bane_card);
    Ok(Supply {
        card_ids,
        high_cost,
        shelters,
        bane,
    })
}

fn count_in_set(cards: &[&Card], set_name: &str) -> usize {
    cards.iter().filter(|card| card.set_name == set_name).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, set_name: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            language: "en".to_string(),
            set_name: set_name.to_string(),
            name: name.to_string(),
            card_type: "Action".to_string(),
            requires: String::new(),
            description: String::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_cards(vec![
            card("c1", "Base", "Copper"),
            card("c2", "Intrigue", "Witch"),
            card("c3", "Prosperity", "Platinum"),
            card("c4", "Dark Ages", "Hovel"),
            card("c5", "Cornucopia", "Young Witch"),
        ])
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("Copper, Witch"), names(&["Copper", "Witch"]));
        assert_eq!(split_names("  Copper ,Witch  "), names(&["Copper", "Witch"]));
        assert_eq!(split_names("Copper"), names(&["Copper"]));
    }

    #[test]
    fn test_split_names_empty() {
        assert!(split_names("").is_empty());
        assert!(split_names("   ").is_empty());
    }

    #[test]
    fn test_split_names_keeps_blank_entries() {
        assert_eq!(split_names("Copper,,Witch"), names(&["Copper", "", "Witch"]));
    }

    #[test]
    fn test_two_base_cards() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &names(&["Copper", "Witch"])).unwrap();
        assert_eq!(supply.card_ids, names(&["c1", "c2"]));
        assert!(!supply.high_cost);
        assert!(!supply.shelters);
        assert!(!supply.bane);
    }

    #[test]
    fn test_single_card_thresholds_are_trivially_true() {
        // With one card the threshold is 1 / 2 = 0, so both flags hold no
        // matter which set the card is from.
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &names(&["Copper"])).unwrap();
        assert!(supply.high_cost);
        assert!(supply.shelters);
    }

    #[test]
    fn test_exactly_half_qualifies() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &names(&["Platinum", "Copper"])).unwrap();
        assert!(supply.high_cost);
        assert!(!supply.shelters);
    }

    #[test]
    fn test_shelters() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &names(&["Hovel", "Copper"])).unwrap();
        assert!(!supply.high_cost);
        assert!(supply.shelters);
    }

    #[test]
    fn test_bane_present() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &names(&["Young Witch", "Copper"])).unwrap();
        assert!(supply.bane);
    }

    #[test]
    fn test_bane_absent() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &names(&["Witch", "Copper"])).unwrap();
        assert!(!supply.bane);
    }

    #[test]
    fn test_empty_input() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &[]).unwrap();
        assert!(supply.card_ids.is_empty());
        assert!(supply.high_cost);
        assert!(supply.shelters);
        assert!(!supply.bane);
    }

    #[test]
    fn test_duplicates_preserved() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let supply = classify(&catalog, &rules, &names(&["Copper", "Copper"])).unwrap();
        assert_eq!(supply.card_ids, names(&["c1", "c1"]));
    }

    #[test]
    fn test_first_unknown_name_reported() {
        let catalog = sample_catalog();
        let rules = Rules::default();
        let error = classify(&catalog, &rules, &names(&["Copper", "Nope", "AlsoNope"]))
            .unwrap_err();
        assert_eq!(error.to_string(), "Unrecognized card name: Nope");
    }

    #[test]
    fn test_custom_rules() {
        let catalog = sample_catalog();
        let rules = Rules {
            high_cost_set: "Base".to_string(),
            shelters_set: "Intrigue".to_string(),
            bane_card: "Witch".to_string(),
        };
        let supply = classify(&catalog, &rules, &names(&["Copper", "Witch"])).unwrap();
        assert!(supply.high_cost);
        assert!(supply.shelters);
        assert!(supply.bane);
    }
}
