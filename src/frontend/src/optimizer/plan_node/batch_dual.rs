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

use super::{PlanBase, PlanNodeType};
use crate::optimizer::OptimizerContextRef;
use crate::utils::Describe;

/// `BatchDual` produces a fixed number of empty rows without reading any table.
#[derive(Debug)]
pub struct BatchDual {
    pub base: PlanBase,
    row_count: usize,
}

impl BatchDual {
    pub fn new(ctx: OptimizerContextRef, row_count: usize) -> Self {
        let base = PlanBase::new(ctx, PlanNodeType::BatchDual);
        BatchDual { base, row_count }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

impl_plan_tree_node_for_leaf! { BatchDual }

impl Describe for BatchDual {
    fn describe(&self) -> String {
        format!("rows:{}", self.row_count)
    }
}
