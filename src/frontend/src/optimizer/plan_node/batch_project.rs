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

/// `BatchProject` computes one output column per expression.
#[derive(Debug)]
pub struct BatchProject {
    pub base: PlanBase,
    input: PlanRef,
    exprs: Vec<ExprImpl>,
}

impl BatchProject {
    pub fn new(input: PlanRef, exprs: Vec<ExprImpl>) -> Self {
        let base = PlanBase::new(input.ctx(), PlanNodeType::BatchProject);
        BatchProject { base, input, exprs }
    }

    pub fn exprs(&self) -> &[ExprImpl] {
        &self.exprs
    }
}

impl PlanTreeNodeUnary for BatchProject {
    fn input(&self) -> PlanRef {
        self.input.clone()
    }
}

impl_plan_tree_node_for_unary! { BatchProject }

impl Describe for BatchProject {
    fn describe(&self) -> String {
        describe_joined(&self.exprs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprType;
    use crate::optimizer::OptimizerContext;
    use crate::optimizer::plan_node::BatchDual;

    #[test]
    fn test_describe() {
        let dual: PlanRef = BatchDual::new(OptimizerContext::mock(), 1).into();
        let project = BatchProject::new(
            dual.clone(),
            vec![
                ExprImpl::column("t", "a"),
                ExprImpl::binary(
                    ExprType::Add,
                    ExprImpl::column("t", "b"),
                    ExprImpl::literal(1i64),
                ),
            ],
        );
        assert_eq!(project.describe(), "t.a, plus(t.b, 1)");
        assert_eq!(BatchProject::new(dual, vec![]).describe(), "");
    }
}
