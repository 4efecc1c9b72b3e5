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

//! Defines the environment that owns every process and hands out canonical handles to them.

use std::collections::HashMap;

use crate::event::Event;
use crate::event::EventSet;
use crate::event::EventTable;
use crate::external_choice;
use crate::interleave;
use crate::internal_choice;
use crate::prefix;
use crate::primitives;
use crate::process::ProcessId;
use crate::process::ProcessNode;
use crate::process::ProcessSet;
use crate::sequential_composition;

/// The owner of a universe of process terms.
///
/// Every factory on the environment hash-conses: it builds a candidate node, probes the intern
/// table, and either returns the existing canonical handle or installs the new node under the
/// next index.  Structurally equal terms therefore always share one node, and equality of handles
/// is equality of terms.
///
/// The environment also owns the event registry, so different environments are fully independent
/// of each other.  Handles are only meaningful to the environment that issued them; querying one
/// environment with another's handle is a contract violation and may panic.
pub struct Environment {
    events: EventTable,
    nodes: Vec<ProcessNode>,
    index: HashMap<ProcessNode, ProcessId>,
    stop: ProcessId,
    skip: ProcessId,
}

impl Environment {
    /// Creates an empty environment.  `STOP` and `SKIP` are interned immediately, so they always
    /// receive the first two indices.
    pub fn new() -> Environment {
        let mut env = Environment {
            events: EventTable::new(),
            nodes: Vec::new(),
            index: HashMap::new(),
            stop: ProcessId(0),
            skip: ProcessId(0),
        };
        env.stop = env.intern(ProcessNode::Stop);
        env.skip = env.intern(ProcessNode::Skip);
        env
    }

    /// Returns the interned event named `name`, creating a new dense index on first sight.
    pub fn event(&mut self, name: &str) -> Event {
        self.events.event(name)
    }

    /// Returns the display name of an event issued by this environment's registry.
    pub fn event_name(&self, event: Event) -> &str {
        self.events.name(event)
    }

    /// Returns the number of distinct processes interned so far.
    pub fn process_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn stop_id(&self) -> ProcessId {
        self.stop
    }

    pub(crate) fn skip_id(&self) -> ProcessId {
        self.skip
    }

    pub(crate) fn node(&self, process: ProcessId) -> &ProcessNode {
        &self.nodes[process.0 as usize]
    }

    pub(crate) fn intern(&mut self, node: ProcessNode) -> ProcessId {
        if let Some(process) = self.index.get(&node) {
            return *process;
        }
        let process = ProcessId(self.nodes.len() as u32);
        self.nodes.push(node.clone());
        self.index.insert(node, process);
        process
    }

    /// Returns the set of events that `process` may immediately engage in, including τ and ✔.
    pub fn initials(&self, process: ProcessId) -> EventSet {
        let mut out = EventSet::new();
        self.push_initials(process, &mut out);
        out
    }

    pub(crate) fn push_initials(&self, process: ProcessId, out: &mut EventSet) {
        match self.node(process) {
            ProcessNode::Stop => {}
            ProcessNode::Skip => primitives::skip_initials(out),
            ProcessNode::Prefix(initial, _) => prefix::initials(*initial, out),
            ProcessNode::ExternalChoice(ps) => external_choice::initials(self, ps, out),
            ProcessNode::InternalChoice(ps) => internal_choice::initials(ps, out),
            ProcessNode::Interleave(ps) => interleave::initials(self, ps, out),
            ProcessNode::SequentialComposition(p, _) => {
                sequential_composition::initials(self, *p, out)
            }
        }
    }

    /// Returns the set of processes that `process` can become by performing `initial`.  New
    /// successor terms are interned in this environment on the way out.
    pub fn afters(&mut self, process: ProcessId, initial: Event) -> ProcessSet {
        let mut out = ProcessSet::new();
        let node = self.node(process).clone();
        match node {
            ProcessNode::Stop => {}
            ProcessNode::Skip => primitives::skip_afters(self, initial, &mut out),
            ProcessNode::Prefix(a, after) => prefix::afters(a, after, initial, &mut out),
            ProcessNode::ExternalChoice(ps) => {
                external_choice::afters(self, &ps, initial, &mut out)
            }
            ProcessNode::InternalChoice(ps) => internal_choice::afters(&ps, initial, &mut out),
            ProcessNode::Interleave(ps) => interleave::afters(self, &ps, initial, &mut out),
            ProcessNode::SequentialComposition(p, q) => {
                sequential_composition::afters(self, p, q, initial, &mut out)
            }
        }
        out
    }

    /// Returns the direct operand processes of `process`.
    pub fn subprocesses(&self, process: ProcessId) -> ProcessSet {
        let mut out = ProcessSet::new();
        match self.node(process) {
            ProcessNode::Stop => {}
            ProcessNode::Skip => {}
            ProcessNode::Prefix(_, after) => {
                out.insert(*after);
            }
            ProcessNode::ExternalChoice(ps) | ProcessNode::InternalChoice(ps) => {
                out.extend(ps.iter());
            }
            ProcessNode::Interleave(ps) => {
                out.extend(ps.iter());
            }
            ProcessNode::SequentialComposition(p, q) => {
                out.insert(*p);
                out.insert(*q);
            }
        }
        out
    }

    /// Returns the structural hash of `process`.  Equal terms hash equal; different operators
    /// over the same operands hash differently.
    pub fn hash(&self, process: ProcessId) -> u64 {
        self.node(process).structural_hash()
    }

    /// Returns the operator binding strength of `process`, used by the renderer to decide
    /// parenthesisation.
    pub fn precedence(&self, process: ProcessId) -> u32 {
        self.node(process).precedence()
    }
}

impl Default for Environment {
    fn default() -> Environment {
        Environment::new()
    }
}
