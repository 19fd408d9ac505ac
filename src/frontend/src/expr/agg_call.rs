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

use super::ExprImpl;
use crate::utils::{Describe, describe_joined};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggKind {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    FirstRow,
}

impl fmt::Display for AggKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AggKind::Count => "count",
            AggKind::Sum => "sum",
            AggKind::Avg => "avg",
            AggKind::Min => "min",
            AggKind::Max => "max",
            AggKind::FirstRow => "firstrow",
        })
    }
}

/// An aggregate function computed by an aggregation operator.
#[derive(Debug, Clone, PartialEq)]
pub struct AggCall {
    agg_kind: AggKind,
    distinct: bool,
    inputs: Vec<ExprImpl>,
}

impl AggCall {
    pub fn new(agg_kind: AggKind, distinct: bool, inputs: Vec<ExprImpl>) -> Self {
        AggCall {
            agg_kind,
            distinct,
            inputs,
        }
    }

    /// A `count(*)` aggregate function, described with a literal `1` argument.
    pub fn count_star() -> Self {
        Self::new(AggKind::Count, false, vec![ExprImpl::literal(1i64)])
    }

    pub fn agg_kind(&self) -> AggKind {
        self.agg_kind
    }

    pub fn distinct(&self) -> bool {
        self.distinct
    }

    pub fn inputs(&self) -> &[ExprImpl] {
        &self.inputs
    }
}

impl Describe for AggCall {
    fn describe(&self) -> String {
        let distinct = if self.distinct { "distinct " } else { "" };
        format!(
            "{}({}{})",
            self.agg_kind,
            distinct,
            describe_joined(&self.inputs)
        )
    }
}
