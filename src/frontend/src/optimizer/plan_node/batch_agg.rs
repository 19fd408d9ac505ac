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

use std::fmt;

use super::{OperatorInfo, PlanBase, PlanNodeType, PlanRef, PlanTreeNodeUnary};
use crate::expr::{AggCall, ExprImpl};
use crate::utils::{Describe, describe_joined};

/// The phase an aggregation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggType {
    /// Computes the final result from raw input rows.
    Complete,
    /// Merges partial results computed by the storage side.
    Final,
    /// Aggregates input already ordered by the group keys.
    Stream,
}

impl fmt::Display for AggType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AggType::Complete => "complete",
            AggType::Final => "final",
            AggType::Stream => "stream",
        })
    }
}

/// `BatchAgg` groups input rows and computes aggregate functions per group.
#[derive(Debug)]
pub struct BatchAgg {
    pub base: PlanBase,
    input: PlanRef,
    agg_type: AggType,
    group_by: Vec<ExprImpl>,
    agg_calls: Vec<AggCall>,
}

impl BatchAgg {
    pub fn new(
        input: PlanRef,
        agg_type: AggType,
        group_by: Vec<ExprImpl>,
        agg_calls: Vec<AggCall>,
    ) -> Self {
        let base = PlanBase::new(input.ctx(), PlanNodeType::BatchAgg);
        BatchAgg {
            base,
            input,
            agg_type,
            group_by,
            agg_calls,
        }
    }

    pub fn agg_type(&self) -> AggType {
        self.agg_type
    }

    pub fn group_by(&self) -> &[ExprImpl] {
        &self.group_by
    }

    pub fn agg_calls(&self) -> &[AggCall] {
        &self.agg_calls
    }
}

impl PlanTreeNodeUnary for BatchAgg {
    fn input(&self) -> PlanRef {
        self.input.clone()
    }
}

impl_plan_tree_node_for_unary! { BatchAgg }

impl Describe for BatchAgg {
    fn describe(&self) -> String {
        // `funcs:` is always present, even with no aggregate function.
        let info = OperatorInfo::default()
            .field("type", self.agg_type)
            .list("group by", &self.group_by);
        format!(
            "{}, funcs:{}",
            info.finish(),
            describe_joined(&self.agg_calls)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::AggKind;
    use crate::optimizer::OptimizerContext;
    use crate::optimizer::plan_node::BatchDual;

    #[test]
    fn test_describe() {
        let dual: PlanRef = BatchDual::new(OptimizerContext::mock(), 1).into();
        let agg = BatchAgg::new(
            dual.clone(),
            AggType::Complete,
            vec![ExprImpl::column("t", "a"), ExprImpl::column("t", "b")],
            vec![
                AggCall::count_star(),
                AggCall::new(AggKind::Sum, false, vec![ExprImpl::column("t", "c")]),
            ],
        );
        assert_eq!(
            agg.describe(),
            "type:complete, group by:t.a, t.b, funcs:count(1), sum(t.c)"
        );

        let agg = BatchAgg::new(
            dual.clone(),
            AggType::Stream,
            vec![],
            vec![AggCall::new(AggKind::Max, true, vec![ExprImpl::column("t", "a")])],
        );
        assert_eq!(agg.describe(), "type:stream, funcs:max(distinct t.a)");

        let agg = BatchAgg::new(dual, AggType::Final, vec![], vec![]);
        assert_eq!(agg.describe(), "type:final, funcs:");
    }
}
