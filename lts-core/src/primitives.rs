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

//! Defines the primitive processes `STOP` and `SKIP`.

use crate::environment::Environment;
use crate::event::Event;
use crate::event::EventSet;
use crate::hash::HashScope;
use crate::process::ProcessId;
use crate::process::ProcessSet;

pub(crate) const STOP_SCOPE: HashScope = HashScope(0x9137_17f2_26d4_a6a7);
pub(crate) const SKIP_SCOPE: HashScope = HashScope(0x41f3_6110_b180_9d4f);

impl Environment {
    /// Returns the `STOP` process, which performs no actions at all.
    pub fn stop(&self) -> ProcessId {
        self.stop_id()
    }

    /// Returns the `SKIP` process, which performs ✔ and then becomes `STOP`.  Used to indicate
    /// the end of a process that can be sequentially composed with something else.
    pub fn skip(&self) -> ProcessId {
        self.skip_id()
    }
}

// Operational semantics for STOP: no rules.
//
// Operational semantics for SKIP
//
// 1) ────────────────
//     SKIP -✔→ STOP

pub(crate) fn skip_initials(out: &mut EventSet) {
    // initials(SKIP) = {✔}
    out.insert(Event::TICK);
}

pub(crate) fn skip_afters(env: &Environment, initial: Event, out: &mut ProcessSet) {
    // afters(SKIP, ✔) = {STOP}
    if initial == Event::TICK {
        out.insert(env.stop());
    }
}
