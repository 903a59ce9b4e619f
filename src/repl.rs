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

use std::io::BufRead;
use std::io::Write;

use crate::catalog::Catalog;
use crate::classifier::classify;
use crate::classifier::split_names;
use crate::error::Fallible;
use crate::rules::Rules;

const PROMPT: &str = "Cards in Set: ";

/// Run the interactive loop: read a line of comma-separated card names,
/// classify them, print the result, repeat. An unrecognized name only
/// discards the current line. Returns when the user types `exit` or
/// `quit` as the entire line, or at end-of-input.
pub fn run(
    catalog: &Catalog,
    rules: &Rules,
    input: impl BufRead,
    mut output: impl Write,
) -> Fallible<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim_end();
        if line == "exit" || line == "quit" {
            break;
        }
        let names = split_names(line);
        match classify(catalog, rules, &names) {
            Ok(supply) => writeln!(output, "{supply}")?,
            Err(e) => writeln!(output, "ERROR: {e}")?,
        }
    }
    Ok(())
}
