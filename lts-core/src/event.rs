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

//! Defines events, the event registry, and sets of events.

use std::collections::HashMap;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::hash::HashScope;
use crate::hash::Hasher;

/// An atomic action that a process can perform.  Events are opaque names; the registry in each
/// [`Environment`] maps them to dense indices, and everything downstream (equality, hashing,
/// ordering) works on the index alone.
///
/// Index 0 is reserved and never issued, so that a zero value can never alias a real event.
///
/// [`Environment`]: struct.Environment.html
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Event(pub(crate) u32);

impl Event {
    /// The silent event τ, which expresses nondeterminism and is not visible to the environment.
    /// Every registry interns it first, so the constant is valid in every environment.
    pub const TAU: Event = Event(1);

    /// The termination event ✔, which marks the successful end of a process.  Every registry
    /// interns it second, so the constant is valid in every environment.
    pub const TICK: Event = Event(2);

    /// Returns the dense index of this event within its registry.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// The bijection between event names and event indices.  Append-only; the forward and reverse
/// maps are always in sync.
#[derive(Debug)]
pub(crate) struct EventTable {
    names: Vec<String>,
    indices: HashMap<String, Event>,
}

impl EventTable {
    pub(crate) fn new() -> EventTable {
        let mut table = EventTable {
            names: Vec::new(),
            indices: HashMap::new(),
        };
        let tau = table.event("τ");
        debug_assert_eq!(tau, Event::TAU);
        let tick = table.event("✔");
        debug_assert_eq!(tick, Event::TICK);
        table
    }

    pub(crate) fn event(&mut self, name: &str) -> Event {
        if let Some(event) = self.indices.get(name) {
            return *event;
        }
        self.names.push(name.to_owned());
        let event = Event(self.names.len() as u32);
        self.indices.insert(name.to_owned(), event);
        event
    }

    /// Reverse lookup.  Defined for every event this table ever issued; panics on an event from a
    /// different registry whose index this table has not reached yet.
    pub(crate) fn name(&self, event: Event) -> &str {
        &self.names[(event.0 - 1) as usize]
    }
}

const EVENT_SET_SCOPE: HashScope = HashScope(0x7be3_51c6_02ef_98ad);

/// A finite set of events.  Elements are kept sorted by index, so iteration order is
/// deterministic and rendering is reproducible.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventSet(SmallVec<[Event; 4]>);

impl EventSet {
    pub fn new() -> EventSet {
        EventSet(SmallVec::new())
    }

    /// Adds an event to the set.  Returns whether the event was newly added.
    pub fn insert(&mut self, event: Event) -> bool {
        match self.0.binary_search(&event) {
            Ok(_) => false,
            Err(position) => {
                self.0.insert(position, event);
                true
            }
        }
    }

    /// Removes an event from the set.  Returns whether the event was present.
    pub fn remove(&mut self, event: Event) -> bool {
        match self.0.binary_search(&event) {
            Ok(position) => {
                self.0.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, event: Event) -> bool {
        self.0.binary_search(&event).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the events in the set, in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.0.iter().copied()
    }
}

impl Hash for EventSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let mut hash = Hasher::new(EVENT_SET_SCOPE);
        for event in self.iter() {
            hash = hash.add_u64(u64::from(event.index()));
        }
        state.write_u64(hash.value());
    }
}

impl Extend<Event> for EventSet {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.insert(event);
        }
    }
}

impl std::iter::FromIterator<Event> for EventSet {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> EventSet {
        let mut set = EventSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for EventSet {
    type Item = Event;
    type IntoIter = smallvec::IntoIter<[Event; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
