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

//! A recursive descent parser for CSP₀ terms.

use lts_core::Environment;
use lts_core::ProcessBag;
use lts_core::ProcessId;
use lts_core::ProcessSet;

use crate::error::ParseError;
use crate::lexer::Token;

// The grammar, one level per binding strength, loosest operator first:
//
//   process    := interleave
//   interleave := internal (⫴ internal)*
//   internal   := external (⊓ external)*
//   external   := sequence (□ sequence)*
//   sequence   := prefix (; prefix)*
//   prefix     := identifier → prefix | atom
//   atom       := STOP | SKIP | ( process )
//               | □ { process, ... } | ⊓ { process, ... } | ⫴ { process, ... }
//
// A chain of one choice operator is a single replicated operator over all of its operands, so
// `P □ Q □ R` and `□ {P, Q, R}` denote the same process.  `;` is binary and associates to the
// left.  There are no process variables: a bare identifier is an error.

pub(crate) struct Parser<'a> {
    env: &'a mut Environment,
    tokens: Vec<(usize, Token)>,
    position: usize,
    end: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        env: &'a mut Environment,
        tokens: Vec<(usize, Token)>,
        end: usize,
    ) -> Parser<'a> {
        Parser {
            env,
            tokens,
            position: 0,
            end,
        }
    }

    pub(crate) fn parse(mut self) -> Result<ProcessId, ParseError> {
        let process = self.parse_process()?;
        match self.tokens.get(self.position) {
            Some((offset, token)) => Err(ParseError::new(
                format!("unexpected `{}` after process", token),
                *offset,
            )),
            None => Ok(process),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(_, token)| token)
    }

    /// The byte offset of the next token, or the end of the input if there is none.
    fn offset(&self) -> usize {
        self.tokens
            .get(self.position)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.end)
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.eat(&expected) {
            Ok(())
        } else {
            Err(ParseError::new(
                format!("expected `{}`", expected),
                self.offset(),
            ))
        }
    }

    fn take_identifier(&mut self) -> Option<String> {
        match self.tokens.get(self.position) {
            Some((_, Token::Identifier(name))) => {
                let name = name.clone();
                self.position += 1;
                Some(name)
            }
            _ => None,
        }
    }

    fn parse_process(&mut self) -> Result<ProcessId, ParseError> {
        self.parse_interleave()
    }

    fn parse_interleave(&mut self) -> Result<ProcessId, ParseError> {
        let first = self.parse_internal_choice()?;
        if !self.eat(&Token::Interleave) {
            return Ok(first);
        }
        let mut ps = ProcessBag::new();
        ps.insert(first);
        loop {
            ps.insert(self.parse_internal_choice()?);
            if !self.eat(&Token::Interleave) {
                break;
            }
        }
        Ok(self.env.replicated_interleave(ps))
    }

    fn parse_internal_choice(&mut self) -> Result<ProcessId, ParseError> {
        let first = self.parse_external_choice()?;
        if !self.eat(&Token::InternalChoice) {
            return Ok(first);
        }
        let mut ps = ProcessSet::new();
        ps.insert(first);
        loop {
            ps.insert(self.parse_external_choice()?);
            if !self.eat(&Token::InternalChoice) {
                break;
            }
        }
        Ok(self.env.replicated_internal_choice(ps))
    }

    fn parse_external_choice(&mut self) -> Result<ProcessId, ParseError> {
        let first = self.parse_sequence()?;
        if !self.eat(&Token::ExternalChoice) {
            return Ok(first);
        }
        let mut ps = ProcessSet::new();
        ps.insert(first);
        loop {
            ps.insert(self.parse_sequence()?);
            if !self.eat(&Token::ExternalChoice) {
                break;
            }
        }
        Ok(self.env.replicated_external_choice(ps))
    }

    fn parse_sequence(&mut self) -> Result<ProcessId, ParseError> {
        let mut process = self.parse_prefix()?;
        while self.eat(&Token::Semicolon) {
            let q = self.parse_prefix()?;
            process = self.env.sequential_composition(process, q);
        }
        Ok(process)
    }

    fn parse_prefix(&mut self) -> Result<ProcessId, ParseError> {
        if let Some(name) = self.take_identifier() {
            if !self.eat(&Token::Arrow) {
                return Err(ParseError::new(
                    format!("expected `→` after event `{}`", name),
                    self.offset(),
                ));
            }
            let after = self.parse_prefix()?;
            let initial = self.env.event(&name);
            Ok(self.env.prefix(initial, after))
        } else {
            self.parse_atom()
        }
    }

    fn parse_atom(&mut self) -> Result<ProcessId, ParseError> {
        let offset = self.offset();
        let token = match self.tokens.get(self.position) {
            Some((_, token)) => token.clone(),
            None => return Err(ParseError::new("expected a process", self.end)),
        };
        self.position += 1;
        match token {
            Token::Stop => Ok(self.env.stop()),
            Token::Skip => Ok(self.env.skip()),
            Token::LeftParen => {
                let process = self.parse_process()?;
                self.expect(Token::RightParen)?;
                Ok(process)
            }
            Token::ExternalChoice => {
                let ps: ProcessSet = self.parse_operand_list()?.into_iter().collect();
                Ok(self.env.replicated_external_choice(ps))
            }
            Token::InternalChoice => {
                let ps: ProcessSet = self.parse_operand_list()?.into_iter().collect();
                Ok(self.env.replicated_internal_choice(ps))
            }
            Token::Interleave => {
                let ps: ProcessBag = self.parse_operand_list()?.into_iter().collect();
                Ok(self.env.replicated_interleave(ps))
            }
            token => Err(ParseError::new(
                format!("expected a process, found `{}`", token),
                offset,
            )),
        }
    }

    /// The brace-enclosed operand list of a replicated operator.  Must be non-empty.
    fn parse_operand_list(&mut self) -> Result<Vec<ProcessId>, ParseError> {
        self.expect(Token::LeftBrace)?;
        let mut operands = vec![self.parse_process()?];
        while self.eat(&Token::Comma) {
            operands.push(self.parse_process()?);
        }
        self.expect(Token::RightBrace)?;
        Ok(operands)
    }
}
