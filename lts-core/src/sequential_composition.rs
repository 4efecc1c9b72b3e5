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

//! Defines the sequential composition (`;`) operator.

use crate::environment::Environment;
use crate::event::Event;
use crate::event::EventSet;
use crate::hash::HashScope;
use crate::process::ProcessId;
use crate::process::ProcessNode;
use crate::process::ProcessSet;

pub(crate) const SEQUENTIAL_COMPOSITION_SCOPE: HashScope = HashScope(0x1d53_09e8_c7b6_43fa);

impl Environment {
    /// Constructs a new _sequential composition_ process `P ; Q`.  This process behaves like `P`
    /// until `P` terminates, and then behaves like `Q`.  The termination itself is hidden: the
    /// composition turns `P`'s ✔ into a τ that activates `Q`.
    pub fn sequential_composition(&mut self, p: ProcessId, q: ProcessId) -> ProcessId {
        self.intern(ProcessNode::SequentialComposition(p, q))
    }
}

// Operational semantics for P ; Q
//
//        P -a→ P'
// 1)  ────────────── a ≠ ✔
//      P;Q -a→ P';Q
//
//     ∃ P' • P -✔→ P'
// 2) ─────────────────
//       P;Q -τ→ Q

pub(crate) fn initials(env: &Environment, p: ProcessId, out: &mut EventSet) {
    // 1) P;Q can perform all of the same events as P, except for ✔.
    // 2) If P can perform ✔, then P;Q can perform τ.
    //
    // initials(P;Q) = initials(P) ∖ {✔}                                           [rule 1]
    //               ∪ (✔ ∈ initials(P)? {τ}: {})                                  [rule 2]
    env.push_initials(p, out);
    if out.remove(Event::TICK) {
        out.insert(Event::TAU);
    }
}

pub(crate) fn afters(
    env: &mut Environment,
    p: ProcessId,
    q: ProcessId,
    initial: Event,
    out: &mut ProcessSet,
) {
    // afters(P;Q, a ≠ ✔) = { P';Q | P' ∈ afters(P, a) }                           [rule 1]
    // afters(P;Q, τ) = {Q} if ✔ ∈ initials(P)                                     [rule 2]
    //                = {}  if ✔ ∉ initials(P)
    // afters(P;Q, ✔) = {}
    //
    // (Note that τ is covered by both rules.)

    // The composition can never perform a ✔; that is always translated into a τ that activates
    // process Q.
    if initial == Event::TICK {
        return;
    }

    // If P can perform a non-✔ event (including τ) leading to P', then P;Q can also perform that
    // event, leading to P';Q.
    for p_prime in env.afters(p, initial).iter() {
        let after = env.sequential_composition(p_prime, q);
        out.insert(after);
    }

    // If P can perform a ✔, then P;Q can perform a τ leading to Q.  We don't care what the ✔
    // leads to; Q is activated no matter what.
    if initial == Event::TAU && env.initials(p).contains(Event::TICK) {
        out.insert(q);
    }
}
