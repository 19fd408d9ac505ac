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

use super::{PlanBase, PlanNodeType, PlanRef, PlanTreeNodeUnary};
use crate::utils::Describe;

/// `BatchLimit` skips `offset` input rows and then returns at most `count` rows.
#[derive(Debug)]
pub struct BatchLimit {
    pub base: PlanBase,
    input: PlanRef,
    offset: u64,
    count: u64,
}

impl BatchLimit {
    pub fn new(input: PlanRef, offset: u64, count: u64) -> Self {
        let base = PlanBase::new(input.ctx(), PlanNodeType::BatchLimit);
        BatchLimit {
            base,
            input,
            offset,
            count,
        }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl PlanTreeNodeUnary for BatchLimit {
    fn input(&self) -> PlanRef {
        self.input.clone()
    }
}

impl_plan_tree_node_for_unary! { BatchLimit }

impl Describe for BatchLimit {
    fn describe(&self) -> String {
        format!("offset:{}, count:{}", self.offset, self.count)
    }
}
