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
use crate::optimizer::property::ByItem;
use crate::utils::{Describe, describe_joined};

/// `BatchSort` orders the input rows by a list of sort keys.
#[derive(Debug)]
pub struct BatchSort {
    pub base: PlanBase,
    input: PlanRef,
    by_items: Vec<ByItem>,
}

impl BatchSort {
    pub fn new(input: PlanRef, by_items: Vec<ByItem>) -> Self {
        let base = PlanBase::new(input.ctx(), PlanNodeType::BatchSort);
        BatchSort {
            base,
            input,
            by_items,
        }
    }

    pub fn by_items(&self) -> &[ByItem] {
        &self.by_items
    }
}

impl PlanTreeNodeUnary for BatchSort {
    fn input(&self) -> PlanRef {
        self.input.clone()
    }
}

impl_plan_tree_node_for_unary! { BatchSort }

impl Describe for BatchSort {
    fn describe(&self) -> String {
        describe_joined(&self.by_items)
    }
}
