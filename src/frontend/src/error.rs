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

use crate::optimizer::plan_node::PlanNodeType;
use crate::optimizer::plan_node::generic::JoinType;

/// A specialized Result type for plan construction and explain assembly.
pub type Result<T> = std::result::Result<T, PlanError>;

/// The error type for plan construction and explain assembly.
#[derive(thiserror::Error, thiserror_ext::ReportDebug, thiserror_ext::Box, thiserror_ext::Construct)]
#[thiserror_ext(newtype(name = PlanError))]
pub enum ErrorKind {
    #[error("correlated apply requires a join operator, got {0}")]
    NotAJoin(PlanNodeType),

    #[error("{node} does not support {join_type}")]
    UnsupportedJoinType {
        node: PlanNodeType,
        join_type: JoinType,
    },

    #[error("failed to explain: {0}")]
    #[construct(skip)]
    Format(#[from] std::fmt::Error),
}
