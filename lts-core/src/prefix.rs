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

//! Defines the prefix (`→`) operator.

use crate::environment::Environment;
use crate::event::Event;
use crate::event::EventSet;
use crate::hash::HashScope;
use crate::process::ProcessId;
use crate::process::ProcessNode;
use crate::process::ProcessSet;

pub(crate) const PREFIX_SCOPE: HashScope = HashScope(0xd5c1_27b0_7a13_9c5e);

impl Environment {
    /// Constructs a new _prefix_ process `a → P`.  This process performs event `a` and then
    /// behaves like process `P`.
    ///
    /// `a` may be any event, including τ or ✔; the semantics are the same, even though the
    /// concrete syntax never produces such terms.
    pub fn prefix(&mut self, initial: Event, after: ProcessId) -> ProcessId {
        self.intern(ProcessNode::Prefix(initial, after))
    }
}

// Operational semantics for a → P
//
// 1) ─────────────
//     a → P -a→ P

pub(crate) fn initials(initial: Event, out: &mut EventSet) {
    // initials(a → P) = {a}
    out.insert(initial);
}

pub(crate) fn afters(initial: Event, after: ProcessId, performed: Event, out: &mut ProcessSet) {
    // afters(a → P, a) = {P}
    if performed == initial {
        out.insert(after);
    }
}
