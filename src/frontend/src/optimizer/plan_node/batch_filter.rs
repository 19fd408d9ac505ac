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
use crate::expr::ExprImpl;
use crate::utils::{Describe, describe_joined};

/// `BatchFilter` keeps the input rows satisfying every predicate.
#[derive(Debug)]
pub struct BatchFilter {
    pub base: PlanBase,
    input: PlanRef,
    predicates: Vec<ExprImpl>,
}

impl BatchFilter {
    pub fn new(input: PlanRef, predicates: Vec<ExprImpl>) -> Self {
        let base = PlanBase::new(input.ctx(), PlanNodeType::BatchFilter);
        BatchFilter {
            base,
            input,
            predicates,
        }
    }

    pub fn predicates(&self) -> &[ExprImpl] {
        &self.predicates
    }
}

impl PlanTreeNodeUnary for BatchFilter {
    fn input(&self) -> PlanRef {
        self.input.clone()
    }
}

impl_plan_tree_node_for_unary! { BatchFilter }

impl Describe for BatchFilter {
    fn describe(&self) -> String {
        describe_joined(&self.predicates)
    }
}
