// Copyright 2025 RisingWave Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// State shared by every node of one query's physical plan.
pub struct OptimizerContext {
    next_id: Cell<i32>,
}

pub type OptimizerContextRef = Rc<OptimizerContext>;

impl OptimizerContext {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
        }
    }

    /// A fresh context for tests.
    pub fn mock() -> OptimizerContextRef {
        Rc::new(Self::new())
    }

    /// Allocates the next plan node number. Numbers start at 1 and are unique within the context.
    pub fn next_plan_node_id(&self) -> i32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl Default for OptimizerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OptimizerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizerContext")
            .field("next_id", &self.next_id.get())
            .finish()
    }
}
