// -*- coding: utf-8 -*-
// ------------------------------------------------------------------------------------------------
// Copyright © 2026, LTS authors.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the
// License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either
// express or implied.  See the License for the specific language governing permissions and
// limitations under the License.
// ------------------------------------------------------------------------------------------------

mod error;
mod lexer;
mod parser;

pub use error::ParseError;

use lts_core::Environment;
use lts_core::ProcessId;

/// Parses a CSP₀ term and returns the canonical process it denotes, owned by `env`.
pub fn load_csp0_string(env: &mut Environment, text: &str) -> Result<ProcessId, ParseError> {
    let tokens = lexer::tokenize(text)?;
    parser::Parser::new(env, tokens, text.len()).parse()
}
