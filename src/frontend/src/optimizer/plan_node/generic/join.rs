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

use crate::expr::ExprImpl;
use crate::optimizer::plan_node::{OperatorInfo, PlanRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    #[default]
    Inner,
    LeftOuter,
    RightOuter,
    Semi,
    AntiSemi,
    /// Semi join that outputs every left row plus a marker column telling whether it matched.
    LeftOuterSemi,
    AntiLeftOuterSemi,
}

impl JoinType {
    pub fn is_semi(self) -> bool {
        matches!(
            self,
            JoinType::Semi
                | JoinType::AntiSemi
                | JoinType::LeftOuterSemi
                | JoinType::AntiLeftOuterSemi
        )
    }

    pub fn is_anti(self) -> bool {
        matches!(self, JoinType::AntiSemi | JoinType::AntiLeftOuterSemi)
    }

    /// Whether the join outputs an auxiliary marker column.
    pub fn with_aux(self) -> bool {
        matches!(self, JoinType::LeftOuterSemi | JoinType::AntiLeftOuterSemi)
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JoinType::Inner => "inner join",
            JoinType::LeftOuter => "left outer join",
            JoinType::RightOuter => "right outer join",
            JoinType::Semi => "semi join",
            JoinType::AntiSemi => "anti semi join",
            JoinType::LeftOuterSemi => "left outer semi join",
            JoinType::AntiLeftOuterSemi => "anti left outer semi join",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinSide {
    Left,
    Right,
}

impl JoinSide {
    /// Position of the side in the join's inputs.
    pub fn index(self) -> usize {
        match self {
            JoinSide::Left => 0,
            JoinSide::Right => 1,
        }
    }
}

/// [`Join`] holds what every physical join carries: two inputs, the join type and the conditions
/// that only refer to one side or to both sides without being an equality.
///
/// Equality conditions and join keys differ between join algorithms and live in each operator.
#[derive(Debug, Clone)]
pub struct Join<PlanRef> {
    pub left: PlanRef,
    pub right: PlanRef,
    pub join_type: JoinType,
    pub left_conditions: Vec<ExprImpl>,
    pub right_conditions: Vec<ExprImpl>,
    pub other_conditions: Vec<ExprImpl>,
}

impl<PlanRef> Join<PlanRef> {
    pub fn new(left: PlanRef, right: PlanRef, join_type: JoinType) -> Self {
        Self {
            left,
            right,
            join_type,
            left_conditions: vec![],
            right_conditions: vec![],
            other_conditions: vec![],
        }
    }

    pub fn with_left_conditions(mut self, conds: Vec<ExprImpl>) -> Self {
        self.left_conditions = conds;
        self
    }

    pub fn with_right_conditions(mut self, conds: Vec<ExprImpl>) -> Self {
        self.right_conditions = conds;
        self
    }

    pub fn with_other_conditions(mut self, conds: Vec<ExprImpl>) -> Self {
        self.other_conditions = conds;
        self
    }

    pub fn child(&self, side: JoinSide) -> &PlanRef {
        match side {
            JoinSide::Left => &self.left,
            JoinSide::Right => &self.right,
        }
    }
}

impl Join<PlanRef> {
    /// Appends the `left cond`, `right cond` and `other cond` clauses.
    pub(crate) fn describe_conditions(&self, info: OperatorInfo) -> OperatorInfo {
        info.list("left cond", &self.left_conditions)
            .list("right cond", &self.right_conditions)
            .list("other cond", &self.other_conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type_flags() {
        assert!(JoinType::AntiLeftOuterSemi.with_aux());
        assert!(JoinType::AntiLeftOuterSemi.is_anti());
        assert!(!JoinType::Semi.is_anti());
        assert!(!JoinType::LeftOuter.is_semi());
        assert_eq!(JoinType::AntiSemi.to_string(), "anti semi join");
        assert_eq!(JoinSide::Right.index(), 1);
    }
}
