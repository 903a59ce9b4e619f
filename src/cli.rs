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

use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Catalog;
use crate::cmd::check::check_catalog;
use crate::cmd::shuffle::shuffle_supply;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_catalog_stats;
use crate::error::Fallible;
use crate::repl;
use crate::rules::Rules;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Interactively classify candidate supplies.
    Repl {
        /// Path to the catalog file.
        catalog: PathBuf,
        /// Optional path to a TOML rules file.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Load the catalog and report whether it is well-formed.
    Check {
        /// Path to the catalog file.
        catalog: PathBuf,
    },
    /// Print catalog statistics.
    Stats {
        /// Path to the catalog file.
        catalog: PathBuf,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Draw a random supply from the catalog and classify it.
    Shuffle {
        /// Path to the catalog file.
        catalog: PathBuf,
        /// How many cards to draw.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Optional path to a TOML rules file.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Repl { catalog, rules } => {
            let catalog = Catalog::load(&catalog)?;
            let rules = Rules::load(rules.as_deref())?;
            repl::run(&catalog, &rules, stdin().lock(), stdout())
        }
        Command::Check { catalog } => check_catalog(&catalog),
        Command::Stats { catalog, format } => print_catalog_stats(&catalog, format),
        Command::Shuffle {
            catalog,
            count,
            rules,
        } => shuffle_supply(&catalog, count, rules.as_deref()),
    }
}
