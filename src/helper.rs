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

use std::fs::write;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::Fallible;

/// The sample catalog used by file-based tests.
const SAMPLE_CATALOG: &str = "\
_id;language;set_name;name;type;requires;description
c1;en;Base;Copper;Treasure;;+1 coin
c2;en;Intrigue;Witch;Action - Attack;;Each other player gains a Curse
c3;en;Prosperity;Platinum;Treasure;;+5 coins
c4;en;Dark Ages;Hovel;Reaction - Shelter;;Discard when you buy a Victory card
c5;en;Cornucopia;Young Witch;Action - Attack;Bane;Add a bane pile to the supply
";

/// Write the sample catalog into a fresh temp directory. The directory
/// handle must outlive any use of the returned path.
pub fn write_sample_catalog() -> Fallible<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cards.csv");
    write(&path, SAMPLE_CATALOG)?;
    Ok((dir, path))
}
