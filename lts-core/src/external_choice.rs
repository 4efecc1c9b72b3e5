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

//! Defines the external choice (`□`) operator.

use crate::environment::Environment;
use crate::event::Event;
use crate::event::EventSet;
use crate::hash::HashScope;
use crate::process::ProcessId;
use crate::process::ProcessNode;
use crate::process::ProcessSet;

pub(crate) const EXTERNAL_CHOICE_SCOPE: HashScope = HashScope(0x2c92_cdd9_3f0a_61b4);

impl Environment {
    /// Constructs a new _external choice_ process `P □ Q`.  This process behaves either like `P`
    /// or like `Q`, and the environment gets to choose which by offering the first visible event.
    pub fn external_choice(&mut self, p: ProcessId, q: ProcessId) -> ProcessId {
        let mut ps = ProcessSet::new();
        ps.insert(p);
        ps.insert(q);
        self.replicated_external_choice(ps)
    }

    /// Constructs a new _replicated external choice_ process `□ Ps` over a set of processes.  A
    /// singleton choice keeps its operator wrapper even though it behaves like its only operand.
    pub fn replicated_external_choice(&mut self, ps: ProcessSet) -> ProcessId {
        self.intern(ProcessNode::ExternalChoice(ps))
    }
}

// Operational semantics for □ Ps
//
//                  P -τ→ P'
//  1)  ────────────────────────────── P ∈ Ps
//       □ Ps -τ→ □ (Ps ∖ {P} ∪ {P'})
//
//         P -a→ P'
//  2)  ───────────── P ∈ Ps, a ≠ τ
//       □ Ps -a→ P'

pub(crate) fn initials(env: &Environment, ps: &ProcessSet, out: &mut EventSet) {
    // 1) If P ∈ Ps can perform τ, then □ Ps can perform τ.
    // 2) If P ∈ Ps can perform a ≠ τ, then □ Ps can perform a ≠ τ.
    //
    // initials(□ Ps) = ⋃ { initials(P) | P ∈ Ps }
    for p in ps.iter() {
        env.push_initials(p, out);
    }
}

pub(crate) fn afters(env: &mut Environment, ps: &ProcessSet, initial: Event, out: &mut ProcessSet) {
    // afters(□ Ps, τ) = ⋃ { □ (Ps ∖ {P} ∪ {P'}) | P ∈ Ps, P' ∈ afters(P, τ) }     [rule 1]
    // afters(□ Ps, a ≠ τ) = ⋃ { P' | P ∈ Ps, P' ∈ afters(P, a) }                  [rule 2]
    if initial == Event::TAU {
        // A silent move of one operand must not resolve the choice; the other operands stay in
        // contention, so the □ wrapper is rebuilt around the moved operand.
        for p in ps.iter() {
            let mut remainder = ps.clone();
            remainder.remove(p);
            for p_prime in env.afters(p, initial).iter() {
                let mut ps_prime = remainder.clone();
                ps_prime.insert(p_prime);
                let after = env.replicated_external_choice(ps_prime);
                out.insert(after);
            }
        }
    } else {
        // A visible event resolves the choice and the wrapper disappears.
        for p in ps.iter() {
            out.extend(env.afters(p, initial));
        }
    }
}
