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

mod environment;
mod event;
mod external_choice;
mod hash;
mod interleave;
mod internal_choice;
mod normalization;
mod prefix;
mod primitives;
mod process;
mod render;
mod sequential_composition;

pub use environment::Environment;
pub use event::Event;
pub use event::EventSet;
pub use hash::HashScope;
pub use hash::Hasher;
pub use normalization::Prenormalized;
pub use process::ProcessBag;
pub use process::ProcessId;
pub use process::ProcessSet;

#[cfg(test)]
mod test_support;
