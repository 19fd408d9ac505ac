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

/// `BatchIndexReader` collects the rows produced by an index plan pushed down to the storage side.
#[derive(Debug)]
pub struct BatchIndexReader {
    pub base: PlanBase,
    index_plan: PlanRef,
}

impl BatchIndexReader {
    pub fn new(index_plan: PlanRef) -> Self {
        let base = PlanBase::new(index_plan.ctx(), PlanNodeType::BatchIndexReader);
        BatchIndexReader { base, index_plan }
    }

    pub fn index_plan(&self) -> PlanRef {
        self.index_plan.clone()
    }
}

impl_plan_tree_node_for_leaf! { BatchIndexReader }

impl Describe for BatchIndexReader {
    fn describe(&self) -> String {
        String::new()
    }
}
