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

//! Defines the internal choice (`⊓`) operator.

use crate::environment::Environment;
use crate::event::Event;
use crate::event::EventSet;
use crate::hash::HashScope;
use crate::process::ProcessId;
use crate::process::ProcessNode;
use crate::process::ProcessSet;

pub(crate) const INTERNAL_CHOICE_SCOPE: HashScope = HashScope(0x6b8f_6e2a_58d1_20c9);

impl Environment {
    /// Constructs a new _internal choice_ process `P ⊓ Q`.  This process behaves either like `P`
    /// or like `Q`, and the environment has no control over which one is chosen.
    pub fn internal_choice(&mut self, p: ProcessId, q: ProcessId) -> ProcessId {
        let mut ps = ProcessSet::new();
        ps.insert(p);
        ps.insert(q);
        self.replicated_internal_choice(ps)
    }

    /// Constructs a new _replicated internal choice_ process `⊓ Ps` over a set of processes.  A
    /// singleton choice keeps its operator wrapper even though it behaves like its only operand.
    pub fn replicated_internal_choice(&mut self, ps: ProcessSet) -> ProcessId {
        self.intern(ProcessNode::InternalChoice(ps))
    }
}

// Operational semantics for ⊓ Ps
//
// 1) ──────────── P ∈ Ps
//     ⊓ Ps -τ→ P

pub(crate) fn initials(ps: &ProcessSet, out: &mut EventSet) {
    // initials(⊓ Ps) = {τ}
    //
    // An empty choice is inert; offering τ with nowhere to go would break the contract that
    // every initial event has at least one after.
    if !ps.is_empty() {
        out.insert(Event::TAU);
    }
}

pub(crate) fn afters(ps: &ProcessSet, initial: Event, out: &mut ProcessSet) {
    // afters(⊓ Ps, τ) = Ps
    if initial == Event::TAU {
        out.extend(ps.iter());
    }
}

#[cfg(test)]
mod internal_choice_tests {
    use super::*;

    use proptest_attr_macro::proptest;

    use crate::test_support::Sketch;

    #[test]
    fn internal_choice_commits_silently() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let p = env.prefix(a, env.stop());
        let q = env.prefix(b, env.stop());
        let process = env.internal_choice(p, q);

        let expected: EventSet = std::iter::once(Event::TAU).collect();
        assert_eq!(env.initials(process), expected);

        let expected: ProcessSet = vec![p, q].into_iter().collect();
        assert_eq!(env.afters(process, Event::TAU), expected);
        assert!(env.afters(process, a).is_empty());
        assert!(env.afters(process, Event::TICK).is_empty());
    }

    #[test]
    fn singleton_internal_choice_keeps_its_wrapper() {
        let mut env = Environment::new();
        let process = env.internal_choice(env.stop(), env.stop());
        assert_ne!(process, env.stop());

        let expected: ProcessSet = std::iter::once(env.stop()).collect();
        assert_eq!(env.afters(process, Event::TAU), expected);
    }

    #[test]
    fn empty_internal_choice_is_inert() {
        let mut env = Environment::new();
        let process = env.replicated_internal_choice(ProcessSet::new());
        assert!(env.initials(process).is_empty());
        assert!(env.afters(process, Event::TAU).is_empty());
    }

    #[proptest]
    fn check_replicated_internal_choice(ps: Vec<Sketch>) {
        let mut env = Environment::new();
        let ps: ProcessSet = ps.iter().map(|sketch| sketch.realize(&mut env)).collect();
        let process = env.replicated_internal_choice(ps.clone());

        if ps.is_empty() {
            assert!(env.initials(process).is_empty());
        } else {
            let expected: EventSet = std::iter::once(Event::TAU).collect();
            assert_eq!(env.initials(process), expected);
        }
        assert_eq!(env.afters(process, Event::TAU), ps);
    }
}
