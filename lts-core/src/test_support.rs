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

//! Scaffolding for the property tests: randomly generated process-term blueprints that can be
//! replayed into an environment.

use proptest::arbitrary::Arbitrary;
use proptest::collection::vec;
use proptest::prop_oneof;
use proptest::strategy::BoxedStrategy;
use proptest::strategy::Just;
use proptest::strategy::Strategy;

use crate::environment::Environment;
use crate::process::ProcessBag;
use crate::process::ProcessId;
use crate::process::ProcessSet;

/// How many distinct event names random terms draw from.  Kept small so that independently
/// generated subterms collide on the same event often.
pub const EVENT_POOL: u8 = 8;

/// The name of the `index`th pool event.
pub fn event_name(index: u8) -> String {
    format!("e{}", index)
}

/// A blueprint for a process term.  Canonical processes only exist inside an environment, so
/// random test terms are generated as sketches and then replayed through the environment's
/// factories.  Replaying the same sketch into the same environment twice must land on the same
/// canonical handle; the property tests lean on that.
#[derive(Clone, Debug)]
pub enum Sketch {
    Stop,
    Skip,
    Prefix(u8, Box<Sketch>),
    ExternalChoice(Vec<Sketch>),
    InternalChoice(Vec<Sketch>),
    Interleave(Vec<Sketch>),
    SequentialComposition(Box<Sketch>, Box<Sketch>),
}

impl Sketch {
    pub fn realize(&self, env: &mut Environment) -> ProcessId {
        match self {
            Sketch::Stop => env.stop(),
            Sketch::Skip => env.skip(),
            Sketch::Prefix(initial, after) => {
                let after = after.realize(env);
                let initial = env.event(&event_name(*initial));
                env.prefix(initial, after)
            }
            Sketch::ExternalChoice(ps) => {
                let ps: ProcessSet = ps.iter().map(|p| p.realize(env)).collect();
                env.replicated_external_choice(ps)
            }
            Sketch::InternalChoice(ps) => {
                let ps: ProcessSet = ps.iter().map(|p| p.realize(env)).collect();
                env.replicated_internal_choice(ps)
            }
            Sketch::Interleave(ps) => {
                let ps: ProcessBag = ps.iter().map(|p| p.realize(env)).collect();
                env.replicated_interleave(ps)
            }
            Sketch::SequentialComposition(p, q) => {
                let p = p.realize(env);
                let q = q.realize(env);
                env.sequential_composition(p, q)
            }
        }
    }
}

// One recursion budget drives the whole strategy: how deep terms may nest, how many nodes a term
// should have in expectation, and how many operands any one operator draws.  The replicated
// operators size their operand lists from the same fan-out bound.
const DEPTH: u32 = 6;
const TARGET_NODES: u32 = 32;
const FAN_OUT: u32 = 4;

impl Arbitrary for Sketch {
    type Parameters = ();
    type Strategy = BoxedStrategy<Sketch>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        let leaf = prop_oneof![Just(Sketch::Stop), Just(Sketch::Skip)];
        leaf.prop_recursive(DEPTH, TARGET_NODES, FAN_OUT, |inner| {
            let operands = vec(inner.clone(), 1..FAN_OUT as usize);
            prop_oneof![
                ((0..EVENT_POOL), inner.clone())
                    .prop_map(|(initial, after)| Sketch::Prefix(initial, Box::new(after))),
                operands.clone().prop_map(Sketch::ExternalChoice),
                operands.clone().prop_map(Sketch::InternalChoice),
                operands.prop_map(Sketch::Interleave),
                (inner.clone(), inner)
                    .prop_map(|(p, q)| Sketch::SequentialComposition(Box::new(p), Box::new(q))),
            ]
        })
        .boxed()
    }
}

#[test]
fn replaying_a_sketch_is_stable() {
    let mut env = Environment::new();
    let sketch = Sketch::Prefix(0, Box::new(Sketch::Skip));
    let first = sketch.realize(&mut env);
    let second = sketch.realize(&mut env);
    assert_eq!(first, second);
    assert_eq!(env.display(first).to_string(), "e0 → SKIP");
}
