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

//! A deterministic structural hash combinator, scoped by per-operator salts.

/// A salt that distinguishes one hashing call site from every other.  Two different operators that
/// happen to have the same operand fingerprint must still hash differently; each operator defines
/// its own scope constant to ensure that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HashScope(pub u64);

/// A non-cryptographic 64-bit hash combinator (FNV-1a).  The digest is a deterministic function of
/// the scope and the sequence of values added, so it is stable across runs and suitable both for
/// hash-consing and for rendering canonical identities.
#[derive(Clone, Copy, Debug)]
pub struct Hasher {
    state: u64,
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl Hasher {
    pub fn new(scope: HashScope) -> Hasher {
        let hasher = Hasher {
            state: FNV_OFFSET_BASIS,
        };
        hasher.add_u64(scope.0)
    }

    pub fn add_u64(mut self, value: u64) -> Hasher {
        for byte in value.to_le_bytes().iter() {
            self.state ^= u64::from(*byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
        self
    }

    pub fn add_str(mut self, value: &str) -> Hasher {
        for byte in value.as_bytes().iter() {
            self.state ^= u64::from(*byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
        // Terminate the string so that adding "ab" then "c" differs from "a" then "bc".
        self.state ^= 0xff;
        self.state = self.state.wrapping_mul(FNV_PRIME);
        self
    }

    pub fn value(self) -> u64 {
        self.state
    }
}
