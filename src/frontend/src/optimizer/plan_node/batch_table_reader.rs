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

use super::{PlanBase, PlanNodeType, PlanRef};
use crate::utils::Describe;

/// `BatchTableReader` collects the rows produced by a table plan pushed down to the storage side.
///
/// The table plan is a cop plan, not an input: the reader has no inputs at all.
#[derive(Debug)]
pub struct BatchTableReader {
    pub base: PlanBase,
    table_plan: PlanRef,
}

impl BatchTableReader {
    pub fn new(table_plan: PlanRef) -> Self {
        let base = PlanBase::new(table_plan.ctx(), PlanNodeType::BatchTableReader);
        BatchTableReader { base, table_plan }
    }

    pub fn table_plan(&self) -> PlanRef {
        self.table_plan.clone()
    }
}

impl_plan_tree_node_for_leaf! { BatchTableReader }

impl Describe for BatchTableReader {
    /// Everything worth showing lives in the table plan.
    fn describe(&self) -> String {
        String::new()
    }
}
