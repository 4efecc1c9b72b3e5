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

//! Tokenises CSP₀ source text.
//!
//! Every operator has a Unicode spelling and an ASCII alias: `→`/`->`, `□`/`[]`, `⊓`/`|~|`, and
//! `⫴`/`|||`.  Whitespace between tokens is insignificant.

use std::fmt;
use std::fmt::Display;

use crate::error::ParseError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Token {
    Stop,
    Skip,
    Identifier(String),
    Arrow,
    Semicolon,
    ExternalChoice,
    InternalChoice,
    Interleave,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lexeme = match self {
            Token::Stop => "STOP",
            Token::Skip => "SKIP",
            Token::Identifier(name) => name.as_str(),
            Token::Arrow => "→",
            Token::Semicolon => ";",
            Token::ExternalChoice => "□",
            Token::InternalChoice => "⊓",
            Token::Interleave => "⫴",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::Comma => ",",
        };
        f.write_str(lexeme)
    }
}

/// Splits `text` into tokens, each tagged with its byte offset.
pub(crate) fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        let token = match ch {
            ch if ch.is_whitespace() => continue,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '→' => Token::Arrow,
            '□' => Token::ExternalChoice,
            '⊓' => Token::InternalChoice,
            '⫴' => Token::Interleave,
            '-' => match chars.next() {
                Some((_, '>')) => Token::Arrow,
                _ => return Err(ParseError::new("expected `>` after `-`", offset)),
            },
            '[' => match chars.next() {
                Some((_, ']')) => Token::ExternalChoice,
                _ => return Err(ParseError::new("expected `]` after `[`", offset)),
            },
            '|' => match (chars.next(), chars.next()) {
                (Some((_, '~')), Some((_, '|'))) => Token::InternalChoice,
                (Some((_, '|')), Some((_, '|'))) => Token::Interleave,
                _ => return Err(ParseError::new("expected `|~|` or `|||`", offset)),
            },
            ch if ch.is_ascii_alphabetic() || ch == '_' => {
                let mut end = offset + ch.len_utf8();
                while let Some(&(next_offset, next_ch)) = chars.peek() {
                    if next_ch.is_ascii_alphanumeric() || next_ch == '_' || next_ch == '.' {
                        end = next_offset + next_ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                match &text[offset..end] {
                    "STOP" => Token::Stop,
                    "SKIP" => Token::Skip,
                    name => Token::Identifier(name.to_owned()),
                }
            }
            ch => {
                return Err(ParseError::new(
                    format!("unexpected character `{}`", ch),
                    offset,
                ));
            }
        };
        tokens.push((offset, token));
    }
    Ok(tokens)
}
