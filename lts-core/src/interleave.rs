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

//! Defines the interleaving (`⫴`) operator.

use crate::environment::Environment;
use crate::event::Event;
use crate::event::EventSet;
use crate::hash::HashScope;
use crate::process::ProcessBag;
use crate::process::ProcessId;
use crate::process::ProcessNode;
use crate::process::ProcessSet;

pub(crate) const INTERLEAVE_SCOPE: HashScope = HashScope(0xafc1_8a3e_944d_7e02);

impl Environment {
    /// Constructs a new _interleaving_ process `P ⫴ Q`.  The two processes run without
    /// synchronising on anything except termination.
    pub fn interleave(&mut self, p: ProcessId, q: ProcessId) -> ProcessId {
        let mut ps = ProcessBag::new();
        ps.insert(p);
        ps.insert(q);
        self.replicated_interleave(ps)
    }

    /// Constructs a new _replicated interleaving_ process `⫴ Ps` over a bag of processes.  The
    /// operands are a bag, not a set: `P ⫴ P` keeps both copies of `P` running.
    pub fn replicated_interleave(&mut self, ps: ProcessBag) -> ProcessId {
        self.intern(ProcessNode::Interleave(ps))
    }
}

// Operational semantics for ⫴ Ps
//
//                  P -a→ P'
//  1)  ────────────────────────────── P ∈ Ps, a ≠ ✔
//       ⫴ Ps -a→ ⫴ (Ps ∖ {P} ∪ {P'})
//
//       ∀ P ∈ Ps • P -✔→
//  2)  ──────────────────
//        ⫴ Ps -✔→ STOP

pub(crate) fn initials(env: &Environment, ps: &ProcessBag, out: &mut EventSet) {
    // initials(⫴ Ps) = ⋃ { initials(P) ∖ {✔} | P ∈ Ps }                           [rule 1]
    //                ∪ (∀ P ∈ Ps • ✔ ∈ initials(P)? {✔}: {})                      [rule 2]
    //
    // An empty interleave is inert; the ∀ in rule 2 is not taken vacuously.
    let mut all_tick = !ps.is_empty();
    for p in ps.distinct() {
        let initials = env.initials(p);
        if !initials.contains(Event::TICK) {
            all_tick = false;
        }
        for initial in initials {
            if initial != Event::TICK {
                out.insert(initial);
            }
        }
    }
    if all_tick {
        out.insert(Event::TICK);
    }
}

pub(crate) fn afters(env: &mut Environment, ps: &ProcessBag, initial: Event, out: &mut ProcessSet) {
    // afters(⫴ Ps, a ≠ ✔) = ⋃ { ⫴ (Ps ∖ {P} ∪ {P'}) | P ∈ Ps, P' ∈ afters(P, a) } [rule 1]
    // afters(⫴ Ps, ✔) = {STOP} if ∀ P ∈ Ps • ✔ ∈ initials(P)                      [rule 2]
    //                 = {}     otherwise
    if initial == Event::TICK {
        // The whole interleave terminates as a unit, and only when every component can.
        if ps.is_empty() {
            return;
        }
        for p in ps.distinct() {
            if !env.initials(p).contains(Event::TICK) {
                return;
            }
        }
        out.insert(env.stop());
        return;
    }

    // Exactly one component moves; the others are unchanged.  Moving either copy of a duplicated
    // component produces the same bag, so it is enough to consider distinct components.
    for p in ps.distinct() {
        for p_prime in env.afters(p, initial).iter() {
            let after = env.replicated_interleave(ps.replace_one(p, p_prime));
            out.insert(after);
        }
    }
}

#[cfg(test)]
mod interleave_tests {
    use super::*;

    use proptest_attr_macro::proptest;

    use crate::test_support::Sketch;

    #[test]
    fn components_move_independently() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let p = env.prefix(a, env.stop());
        let q = env.prefix(b, env.stop());
        let process = env.interleave(p, q);

        let expected: EventSet = vec![a, b].into_iter().collect();
        assert_eq!(env.initials(process), expected);

        let stop_q = env.interleave(env.stop(), q);
        let expected: ProcessSet = std::iter::once(stop_q).collect();
        assert_eq!(env.afters(process, a), expected);

        let p_stop = env.interleave(p, env.stop());
        let expected: ProcessSet = std::iter::once(p_stop).collect();
        assert_eq!(env.afters(process, b), expected);

        assert!(env.afters(process, Event::TAU).is_empty());
    }

    #[test]
    fn duplicate_components_stay_distinct_occurrences() {
        let mut env = Environment::new();
        let a = env.event("a");
        let p = env.prefix(a, env.stop());
        let process = env.interleave(p, p);

        let expected: EventSet = std::iter::once(a).collect();
        assert_eq!(env.initials(process), expected);

        // One copy moves, the other keeps waiting.
        let stop_p = env.interleave(env.stop(), p);
        let expected: ProcessSet = std::iter::once(stop_p).collect();
        assert_eq!(env.afters(process, a), expected);
    }

    #[test]
    fn interleave_terminates_only_as_a_unit() {
        let mut env = Environment::new();
        let a = env.event("a");
        let p = env.prefix(a, env.skip());
        let q = env.skip();

        // One component is not ready to terminate yet.
        let process = env.interleave(p, q);
        let expected: EventSet = std::iter::once(a).collect();
        assert_eq!(env.initials(process), expected);
        assert!(env.afters(process, Event::TICK).is_empty());

        // Once every component offers ✔, the whole interleave does.
        let process = env.interleave(env.skip(), env.skip());
        let expected: EventSet = std::iter::once(Event::TICK).collect();
        assert_eq!(env.initials(process), expected);
        let expected: ProcessSet = std::iter::once(env.stop()).collect();
        assert_eq!(env.afters(process, Event::TICK), expected);
    }

    #[test]
    fn deadlocked_interleave_is_inert() {
        let mut env = Environment::new();
        let process = env.interleave(env.stop(), env.stop());
        assert!(env.initials(process).is_empty());
        assert!(env.afters(process, Event::TICK).is_empty());
    }

    #[test]
    fn empty_interleave_is_inert() {
        let mut env = Environment::new();
        let process = env.replicated_interleave(ProcessBag::new());
        assert!(env.initials(process).is_empty());
        assert!(env.afters(process, Event::TICK).is_empty());
    }

    #[proptest]
    fn interleave_offers_tick_iff_every_component_does(first: Sketch, rest: Vec<Sketch>) {
        let mut env = Environment::new();
        // The head argument keeps the bag non-empty; the empty bag has its own test.
        let ps: ProcessBag = std::iter::once(&first)
            .chain(rest.iter())
            .map(|sketch| sketch.realize(&mut env))
            .collect();
        let process = env.replicated_interleave(ps.clone());

        let all_tick = ps
            .iter()
            .all(|p| env.initials(p).contains(Event::TICK));
        assert_eq!(env.initials(process).contains(Event::TICK), all_tick);
        assert_eq!(!env.afters(process, Event::TICK).is_empty(), all_tick);
    }
}
