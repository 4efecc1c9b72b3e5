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

//! Renders processes and event sets into their canonical text form.

use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

use crate::environment::Environment;
use crate::event::EventSet;
use crate::process::ProcessId;
use crate::process::ProcessNode;

impl Environment {
    /// Returns a value that renders `process` in its canonical form.  The output is a function
    /// only of the term's structure and of the interning order within this environment, so it is
    /// stable across runs.
    pub fn display(&self, process: ProcessId) -> impl Display + '_ {
        DisplayProcess { env: self, process }
    }

    /// Returns a value that renders an event set as `{a, b, τ}`, sorted by event index.
    pub fn display_events<'a>(&'a self, events: &'a EventSet) -> impl Display + 'a {
        DisplayEvents { env: self, events }
    }
}

struct DisplayProcess<'a> {
    env: &'a Environment,
    process: ProcessId,
}

impl Display for DisplayProcess<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        print_process(self.env, self.process, f)
    }
}

struct DisplayEvents<'a> {
    env: &'a Environment,
    events: &'a EventSet,
}

impl Display for DisplayEvents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.events
                .iter()
                .map(|event| self.env.event_name(event))
                .format(", ")
        )
    }
}

fn print_process(env: &Environment, process: ProcessId, f: &mut fmt::Formatter) -> fmt::Result {
    let node = env.node(process);
    match node {
        ProcessNode::Stop => f.write_str("STOP"),
        ProcessNode::Skip => f.write_str("SKIP"),
        ProcessNode::Prefix(initial, after) => {
            write!(f, "{} → ", env.event_name(*initial))?;
            print_operand(env, *after, node.precedence(), f)
        }
        ProcessNode::SequentialComposition(p, q) => {
            print_operand(env, *p, node.precedence(), f)?;
            f.write_str(" ; ")?;
            // A bare `;` on the right would re-associate to the left when read back, so the right
            // operand must bind strictly tighter.
            print_operand(env, *q, node.precedence() - 1, f)
        }
        ProcessNode::ExternalChoice(ps) => {
            print_operands(env, ps.elements(), "□", node.precedence(), f)
        }
        ProcessNode::InternalChoice(ps) => {
            print_operands(env, ps.elements(), "⊓", node.precedence(), f)
        }
        ProcessNode::Interleave(ps) => {
            print_operands(env, ps.elements(), "⫴", node.precedence(), f)
        }
    }
}

/// Prints an operand, parenthesising it when it binds too loosely to be read back as an operand
/// of its parent.
fn print_operand(
    env: &Environment,
    process: ProcessId,
    max_precedence: u32,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    if env.node(process).precedence() > max_precedence {
        f.write_str("(")?;
        print_process(env, process, f)?;
        f.write_str(")")
    } else {
        print_process(env, process, f)
    }
}

/// Prints a replicated operator: infix when there are exactly two operands, prefix set form
/// otherwise.  Operands are already sorted by canonical index.
fn print_operands(
    env: &Environment,
    operands: &[ProcessId],
    operator: &str,
    precedence: u32,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    if operands.len() == 2 {
        // A bare chain of the same operator flattens into one replicated operator when read
        // back, so operands at the parent's own precedence need parens too.
        print_operand(env, operands[0], precedence - 1, f)?;
        write!(f, " {} ", operator)?;
        print_operand(env, operands[1], precedence - 1, f)
    } else {
        write!(f, "{} {{", operator)?;
        let mut first = true;
        for process in operands {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            print_process(env, *process, f)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;

    use crate::event::Event;
    use crate::process::ProcessBag;

    fn name(env: &Environment, process: ProcessId) -> String {
        env.display(process).to_string()
    }

    #[test]
    fn primitives_render_as_keywords() {
        let env = Environment::new();
        assert_eq!(name(&env, env.stop()), "STOP");
        assert_eq!(name(&env, env.skip()), "SKIP");
    }

    #[test]
    fn prefixes_chain_without_parens() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let inner = env.prefix(b, env.stop());
        let process = env.prefix(a, inner);
        assert_eq!(name(&env, process), "a → b → STOP");
    }

    #[test]
    fn singleton_choice_renders_in_set_form() {
        let mut env = Environment::new();
        let external = env.external_choice(env.stop(), env.stop());
        assert_eq!(name(&env, external), "□ {STOP}");
        let internal = env.internal_choice(env.stop(), env.stop());
        assert_eq!(name(&env, internal), "⊓ {STOP}");
    }

    #[test]
    fn looser_operands_are_parenthesised() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let c = env.event("c");
        let pa = env.prefix(a, env.stop());
        let pb = env.prefix(b, env.stop());
        let pc = env.prefix(c, env.stop());

        // ⊓ binds more loosely than □, and more tightly than ⫴.
        let inner = env.internal_choice(pb, pc);
        let external = env.external_choice(pa, inner);
        assert_eq!(name(&env, external), "a → STOP □ (b → STOP ⊓ c → STOP)");
        let interleave = env.interleave(pa, inner);
        assert_eq!(name(&env, interleave), "a → STOP ⫴ b → STOP ⊓ c → STOP");
    }

    #[test]
    fn composition_parenthesises_loose_operands() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let pb = env.prefix(b, env.stop());
        let pab = env.prefix(a, pb);
        let choice = env.external_choice(env.skip(), pab);
        let process = env.sequential_composition(choice, env.stop());
        assert_eq!(name(&env, process), "(SKIP □ a → b → STOP) ; STOP");
    }

    #[test]
    fn interleaved_terminators_render_infix() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let c = env.event("c");
        let pa = env.prefix(a, env.skip());
        let pb = env.prefix(b, env.skip());
        let interleave = env.interleave(pa, pb);
        let pc = env.prefix(c, env.stop());
        let process = env.sequential_composition(interleave, pc);
        assert_eq!(name(&env, process), "(a → SKIP ⫴ b → SKIP) ; c → STOP");
    }

    #[test]
    fn wide_operators_render_in_set_form() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let c = env.event("c");
        let pa = env.prefix(a, env.stop());
        let pb = env.prefix(b, env.stop());
        let pc = env.prefix(c, env.stop());
        let bag: ProcessBag = vec![pa, pb, pc].into_iter().collect();
        let process = env.replicated_interleave(bag);
        assert_eq!(name(&env, process), "⫴ {a → STOP, b → STOP, c → STOP}");
    }

    #[test]
    fn nested_same_operator_operands_are_parenthesised() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let c = env.event("c");
        let pa = env.prefix(a, env.stop());
        let pb = env.prefix(b, env.stop());
        let inner = env.external_choice(pa, pb);
        let pc = env.prefix(c, env.stop());
        let process = env.external_choice(inner, pc);
        assert_eq!(name(&env, process), "(a → STOP □ b → STOP) □ c → STOP");
    }

    #[test]
    fn right_nested_compositions_are_parenthesised() {
        let mut env = Environment::new();
        let inner = env.sequential_composition(env.skip(), env.stop());
        let process = env.sequential_composition(env.skip(), inner);
        assert_eq!(name(&env, process), "SKIP ; (SKIP ; STOP)");

        let process = env.sequential_composition(inner, env.stop());
        assert_eq!(name(&env, process), "SKIP ; STOP ; STOP");
    }

    #[test]
    fn event_sets_render_sorted_by_index() {
        let mut env = Environment::new();
        let a = env.event("a");
        let events: EventSet = vec![a, Event::TAU].into_iter().collect();
        assert_eq!(env.display_events(&events).to_string(), "{τ, a}");
    }
}
