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
use crate::utils::Describe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn from_desc(desc: bool) -> Self {
        if desc {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        })
    }
}

/// One sort key: an expression and the direction it is ordered in.
#[derive(Debug, Clone, PartialEq)]
pub struct ByItem {
    pub expr: ExprImpl,
    pub direct: Direction,
}

impl ByItem {
    pub fn new(expr: ExprImpl, direct: Direction) -> Self {
        Self { expr, direct }
    }
}

impl Describe for ByItem {
    fn describe(&self) -> String {
        format!("{}:{}", self.expr.describe(), self.direct)
    }
}
