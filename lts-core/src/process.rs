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

//! Defines process handles, the node representation behind them, and sets and bags of processes.

use std::hash::Hash;

use smallvec::SmallVec;

use crate::environment::Environment;
use crate::event::Event;
use crate::external_choice::EXTERNAL_CHOICE_SCOPE;
use crate::hash::HashScope;
use crate::hash::Hasher;
use crate::interleave::INTERLEAVE_SCOPE;
use crate::internal_choice::INTERNAL_CHOICE_SCOPE;
use crate::prefix::PREFIX_SCOPE;
use crate::primitives::SKIP_SCOPE;
use crate::primitives::STOP_SCOPE;
use crate::sequential_composition::SEQUENTIAL_COMPOSITION_SCOPE;

/// A handle to a canonical process owned by an [`Environment`].
///
/// The handle is a dense index, assigned when the process is first interned.  Because every node
/// in an environment is canonical, two handles from the same environment are equal exactly when
/// the processes they denote are structurally equal.  The index also serves as the ordering key
/// that makes rendering reproducible.
///
/// [`Environment`]: struct.Environment.html
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProcessId(pub(crate) u32);

impl ProcessId {
    /// Returns the index assigned to this process by its environment.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// The structure of a single process term.  One variant per operator; the operand processes are
/// always canonical handles into the same environment.
#[derive(Clone, Eq, PartialEq)]
pub(crate) enum ProcessNode {
    Stop,
    Skip,
    Prefix(Event, ProcessId),
    ExternalChoice(ProcessSet),
    InternalChoice(ProcessSet),
    Interleave(ProcessBag),
    SequentialComposition(ProcessId, ProcessId),
}

impl ProcessNode {
    /// The operator's binding strength.  Smaller binds tighter; the renderer parenthesises a
    /// sub-term when it binds more loosely than its parent allows.
    pub(crate) fn precedence(&self) -> u32 {
        match self {
            ProcessNode::Stop => 1,
            ProcessNode::Skip => 1,
            ProcessNode::Prefix(..) => 1,
            ProcessNode::SequentialComposition(..) => 3,
            ProcessNode::ExternalChoice(..) => 6,
            ProcessNode::InternalChoice(..) => 7,
            ProcessNode::Interleave(..) => 9,
        }
    }

    /// The structural fingerprint of this node: the operator's scope plus the fingerprints of its
    /// operands.  Operand handles are already canonical, so hashing them is equivalent to hashing
    /// the operand structure.
    pub(crate) fn structural_hash(&self) -> u64 {
        match self {
            ProcessNode::Stop => Hasher::new(STOP_SCOPE).value(),
            ProcessNode::Skip => Hasher::new(SKIP_SCOPE).value(),
            ProcessNode::Prefix(initial, after) => Hasher::new(PREFIX_SCOPE)
                .add_u64(u64::from(initial.index()))
                .add_u64(u64::from(after.index()))
                .value(),
            ProcessNode::ExternalChoice(ps) => hash_handles(EXTERNAL_CHOICE_SCOPE, ps.iter()),
            ProcessNode::InternalChoice(ps) => hash_handles(INTERNAL_CHOICE_SCOPE, ps.iter()),
            ProcessNode::Interleave(ps) => hash_handles(INTERLEAVE_SCOPE, ps.iter()),
            ProcessNode::SequentialComposition(p, q) => {
                Hasher::new(SEQUENTIAL_COMPOSITION_SCOPE)
                    .add_u64(u64::from(p.index()))
                    .add_u64(u64::from(q.index()))
                    .value()
            }
        }
    }
}

impl Hash for ProcessNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

fn hash_handles<I: Iterator<Item = ProcessId>>(scope: HashScope, handles: I) -> u64 {
    let mut hash = Hasher::new(scope);
    for process in handles {
        hash = hash.add_u64(u64::from(process.index()));
    }
    hash.value()
}

const PROCESS_SET_SCOPE: HashScope = HashScope(0xe490_23d7_65a8_1f36);
const PROCESS_BAG_SCOPE: HashScope = HashScope(0x38a6_f44b_d092_c571);

/// A finite, deduplicating set of canonical processes.  Elements are kept sorted by canonical
/// index, so iteration order, rendering order, and the hash are all independent of the order in
/// which elements were inserted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProcessSet(SmallVec<[ProcessId; 2]>);

impl ProcessSet {
    pub fn new() -> ProcessSet {
        ProcessSet(SmallVec::new())
    }

    /// Adds a process to the set.  Returns whether the process was newly added.
    pub fn insert(&mut self, process: ProcessId) -> bool {
        match self.0.binary_search(&process) {
            Ok(_) => false,
            Err(position) => {
                self.0.insert(position, process);
                true
            }
        }
    }

    /// Removes a process from the set.  Returns whether the process was present.
    pub fn remove(&mut self, process: ProcessId) -> bool {
        match self.0.binary_search(&process) {
            Ok(position) => {
                self.0.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, process: ProcessId) -> bool {
        self.0.binary_search(&process).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the processes in the set, in ascending canonical index order.
    pub fn iter(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn elements(&self) -> &[ProcessId] {
        &self.0
    }

    /// Extends this set with every process reachable from it via any chain of τ transitions.
    /// Terminates because every successor is interned in a finite environment, and is idempotent.
    pub fn tau_close(&mut self, env: &mut Environment) {
        loop {
            let mut new_processes = ProcessSet::new();
            for process in self.iter() {
                new_processes.extend(env.afters(process, Event::TAU));
            }
            let old_size = self.len();
            self.extend(new_processes);
            if self.len() == old_size {
                return;
            }
        }
    }
}

impl Hash for ProcessSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(hash_handles(PROCESS_SET_SCOPE, self.iter()));
    }
}

impl Extend<ProcessId> for ProcessSet {
    fn extend<I: IntoIterator<Item = ProcessId>>(&mut self, iter: I) {
        for process in iter {
            self.insert(process);
        }
    }
}

impl std::iter::FromIterator<ProcessId> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = ProcessId>>(iter: I) -> ProcessSet {
        let mut set = ProcessSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ProcessSet {
    type Item = ProcessId;
    type IntoIter = smallvec::IntoIter<[ProcessId; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A finite collection of canonical processes that preserves multiplicity.  Like [`ProcessSet`],
/// elements are kept sorted by canonical index.
///
/// [`ProcessSet`]: struct.ProcessSet.html
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProcessBag(SmallVec<[ProcessId; 2]>);

impl ProcessBag {
    pub fn new() -> ProcessBag {
        ProcessBag(SmallVec::new())
    }

    /// Adds one occurrence of a process to the bag.
    pub fn insert(&mut self, process: ProcessId) {
        let position = match self.0.binary_search(&process) {
            Ok(position) => position,
            Err(position) => position,
        };
        self.0.insert(position, process);
    }

    pub fn contains(&self, process: ProcessId) -> bool {
        self.0.binary_search(&process).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over every occurrence in the bag, in ascending canonical index order.
    pub fn iter(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn elements(&self) -> &[ProcessId] {
        &self.0
    }

    /// Iterates over the distinct processes in the bag, in ascending canonical index order.
    pub fn distinct(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |(position, process)| {
                *position == 0 || self.0[position - 1] != **process
            })
            .map(|(_, process)| *process)
    }

    /// Returns a new bag with one occurrence of `from` replaced by `to`.  `from` must occur in
    /// the bag.
    pub(crate) fn replace_one(&self, from: ProcessId, to: ProcessId) -> ProcessBag {
        let mut result = self.clone();
        if let Ok(position) = result.0.binary_search(&from) {
            result.0.remove(position);
        }
        result.insert(to);
        result
    }
}

impl Hash for ProcessBag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(hash_handles(PROCESS_BAG_SCOPE, self.iter()));
    }
}

impl Extend<ProcessId> for ProcessBag {
    fn extend<I: IntoIterator<Item = ProcessId>>(&mut self, iter: I) {
        for process in iter {
            self.insert(process);
        }
    }
}

impl std::iter::FromIterator<ProcessId> for ProcessBag {
    fn from_iter<I: IntoIterator<Item = ProcessId>>(iter: I) -> ProcessBag {
        let mut bag = ProcessBag::new();
        bag.extend(iter);
        bag
    }
}

impl IntoIterator for ProcessBag {
    type Item = ProcessId;
    type IntoIter = smallvec::IntoIter<[ProcessId; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
