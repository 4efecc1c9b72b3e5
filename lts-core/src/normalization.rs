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

//! Defines normalised process views, in which each event leads to at most one successor.

use crate::environment::Environment;
use crate::event::Event;
use crate::event::EventSet;
use crate::process::ProcessId;
use crate::process::ProcessSet;

/// A _prenormalised_ view of a process: a τ-closed set of canonical processes treated as a single
/// deterministic state.  Performing a visible event takes the union of every member's successors
/// and τ-closes it again, so each event has at most one successor state.  τ itself is absorbed
/// into the states and is never performable.
///
/// None of the process operators produce prenormalised states; this is the entry point for
/// machinery (such as refinement checkers) that needs a deterministic transition system.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Prenormalized {
    states: ProcessSet,
}

impl Prenormalized {
    /// Creates the root state for `process`: the τ-closure of `{process}`.
    pub fn root(env: &mut Environment, process: ProcessId) -> Prenormalized {
        let mut states = ProcessSet::new();
        states.insert(process);
        states.tau_close(env);
        Prenormalized { states }
    }

    /// Returns the set of canonical processes this state stands for.
    pub fn states(&self) -> &ProcessSet {
        &self.states
    }

    /// Returns the events this state can perform: everything any member can perform, except τ.
    pub fn initials(&self, env: &Environment) -> EventSet {
        let mut out = EventSet::new();
        for process in self.states.iter() {
            env.push_initials(process, &mut out);
        }
        out.remove(Event::TAU);
        out
    }

    /// Returns the unique successor state after performing `initial`, or `None` if this state
    /// cannot perform it.  τ never has a successor.
    pub fn after(&self, env: &mut Environment, initial: Event) -> Option<Prenormalized> {
        if initial == Event::TAU {
            return None;
        }
        let mut states = ProcessSet::new();
        for process in self.states.iter() {
            states.extend(env.afters(process, initial));
        }
        if states.is_empty() {
            return None;
        }
        states.tau_close(env);
        Some(Prenormalized { states })
    }

    /// The successor set of `initial`: the singleton `{after(initial)}` when the event is
    /// performable, and empty otherwise.
    pub fn afters(
        &self,
        env: &mut Environment,
        initial: Event,
    ) -> impl Iterator<Item = Prenormalized> {
        self.after(env, initial).into_iter()
    }
}

#[cfg(test)]
mod prenormalization_tests {
    use super::*;

    use proptest_attr_macro::proptest;

    use crate::test_support::Sketch;

    #[test]
    fn nondeterministic_branches_collapse_into_one_state() {
        let mut env = Environment::new();
        let a = env.event("a");
        let b = env.event("b");
        let c = env.event("c");
        let pb = env.prefix(b, env.stop());
        let pc = env.prefix(c, env.stop());
        let pab = env.prefix(a, pb);
        let pac = env.prefix(a, pc);
        let process = env.internal_choice(pab, pac);

        let root = Prenormalized::root(&mut env, process);
        let expected: ProcessSet = vec![process, pab, pac].into_iter().collect();
        assert_eq!(root.states(), &expected);

        let expected: EventSet = std::iter::once(a).collect();
        assert_eq!(root.initials(&env), expected);

        // Both branches move on `a`; the view folds them into a single state.
        let after_a = root.after(&mut env, a).unwrap();
        let expected: ProcessSet = vec![pb, pc].into_iter().collect();
        assert_eq!(after_a.states(), &expected);

        let expected: EventSet = vec![b, c].into_iter().collect();
        assert_eq!(after_a.initials(&env), expected);

        let after_b = after_a.after(&mut env, b).unwrap();
        let expected: ProcessSet = std::iter::once(env.stop()).collect();
        assert_eq!(after_b.states(), &expected);
    }

    #[test]
    fn tau_is_never_performable() {
        let mut env = Environment::new();
        let process = env.internal_choice(env.stop(), env.skip());
        let root = Prenormalized::root(&mut env, process);
        assert!(root.after(&mut env, Event::TAU).is_none());
        assert!(!root.initials(&env).contains(Event::TAU));
    }

    #[proptest]
    fn each_initial_has_exactly_one_successor(sketch: Sketch) {
        let mut env = Environment::new();
        let process = sketch.realize(&mut env);
        let root = Prenormalized::root(&mut env, process);
        for initial in root.initials(&env) {
            assert_eq!(root.afters(&mut env, initial).count(), 1);
        }
        assert_eq!(root.afters(&mut env, Event::TAU).count(), 0);
    }

    #[proptest]
    fn successors_are_deterministic(sketch: Sketch) {
        let mut env = Environment::new();
        let process = sketch.realize(&mut env);
        let root = Prenormalized::root(&mut env, process);
        for initial in root.initials(&env) {
            assert_eq!(root.after(&mut env, initial), root.after(&mut env, initial));
        }
    }
}
