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

use super::generic;
use super::{OperatorInfo, PlanBase, PlanNodeType, PlanRef, PlanTreeNodeBinary};
use crate::expr::{ColumnRef, FunctionCall};
use crate::optimizer::property::Direction;
use crate::types::{Datum, datum_to_text};
use crate::utils::Describe;

/// `BatchMergeJoin` joins two inputs both ordered by their merge keys.
#[derive(Debug)]
pub struct BatchMergeJoin {
    pub base: PlanBase,
    core: generic::Join<PlanRef>,
    equal_conditions: Vec<FunctionCall>,
    /// Values padding the inner side of an outer join when a row has no match.
    default_values: Vec<Datum>,
    direction: Direction,
    left_keys: Vec<ColumnRef>,
    right_keys: Vec<ColumnRef>,
}

impl BatchMergeJoin {
    pub fn new(
        core: generic::Join<PlanRef>,
        equal_conditions: Vec<FunctionCall>,
        default_values: Vec<Datum>,
        direction: Direction,
        left_keys: Vec<ColumnRef>,
        right_keys: Vec<ColumnRef>,
    ) -> Self {
        let base = PlanBase::new(core.left.ctx(), PlanNodeType::BatchMergeJoin);
        BatchMergeJoin {
            base,
            core,
            equal_conditions,
            default_values,
            direction,
            left_keys,
            right_keys,
        }
    }

    pub fn core(&self) -> &generic::Join<PlanRef> {
        &self.core
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl PlanTreeNodeBinary for BatchMergeJoin {
    fn left(&self) -> PlanRef {
        self.core.left.clone()
    }

    fn right(&self) -> PlanRef {
        self.core.right.clone()
    }
}

impl_plan_tree_node_for_binary! { BatchMergeJoin }

impl Describe for BatchMergeJoin {
    /// The clauses after the conditions are appended without a separator, matching the format
    /// existing explain consumers expect.
    fn describe(&self) -> String {
        let info = OperatorInfo::new(self.core.join_type).list("equal", &self.equal_conditions);
        // A value that can't be rendered shows the error message in its place.
        let default_values = self
            .default_values
            .iter()
            .map(|v| datum_to_text(v).unwrap_or_else(|e| e.to_string()));
        self.core
            .describe_conditions(info)
            .list_str_unseparated("default vals:", default_values)
            .raw(&self.direction.to_string())
            .list_str_unseparated("left key:", self.left_keys.iter().map(Describe::describe))
            .list_str_unseparated("right key:", self.right_keys.iter().map(Describe::describe))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{ExprImpl, ExprType};
    use crate::optimizer::OptimizerContext;
    use crate::optimizer::plan_node::BatchDual;
    use crate::types::ScalarImpl;

    fn join(
        join_type: generic::JoinType,
        default_values: Vec<Datum>,
        direction: Direction,
        keys: bool,
    ) -> BatchMergeJoin {
        let ctx = OptimizerContext::mock();
        let left: PlanRef = BatchDual::new(ctx.clone(), 1).into();
        let right: PlanRef = BatchDual::new(ctx, 1).into();
        let core = generic::Join::new(left, right, join_type);
        let (equal, left_keys, right_keys) = if keys {
            (
                vec![FunctionCall::new(
                    ExprType::Equal,
                    vec![ExprImpl::column("t", "a"), ExprImpl::column("s", "a")],
                )],
                vec![ColumnRef::new(Some("t"), "a")],
                vec![ColumnRef::new(Some("s"), "a")],
            )
        } else {
            (vec![], vec![], vec![])
        };
        BatchMergeJoin::new(core, equal, default_values, direction, left_keys, right_keys)
    }

    #[test]
    fn test_describe() {
        let j = join(generic::JoinType::Inner, vec![], Direction::Ascending, false);
        assert_eq!(j.describe(), "inner joinasc");

        let j = join(generic::JoinType::Inner, vec![], Direction::Descending, true);
        assert_eq!(
            j.describe(),
            "inner join, equal:eq(t.a, s.a)descleft key:t.aright key:s.a"
        );
    }

    #[test]
    fn test_describe_default_values() {
        let j = join(
            generic::JoinType::LeftOuter,
            vec![None, Some(ScalarImpl::Int64(0)), Some("x".into())],
            Direction::Ascending,
            false,
        );
        assert_eq!(j.describe(), "left outer joindefault vals:NULL, 0, xasc");
    }

    #[test]
    fn test_describe_unrenderable_default_value() {
        let j = join(
            generic::JoinType::LeftOuter,
            vec![Some(ScalarImpl::Bytea(vec![0xc3, 0x28].into())), None],
            Direction::Ascending,
            false,
        );
        let info = j.describe();
        assert!(
            info.starts_with("left outer joindefault vals:invalid UTF-8 in bytea value: "),
            "{}",
            info
        );
        assert!(info.ends_with(", NULLasc"), "{}", info);
    }
}
