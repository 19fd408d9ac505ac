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

/// Scalar function kinds that can appear in plan conditions and projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    And,
    Or,
    Not,
    IsNull,
    Like,
    In,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ExprType {
    /// The function name used when describing a call.
    pub fn name(self) -> &'static str {
        match self {
            ExprType::Equal => "eq",
            ExprType::NotEqual => "ne",
            ExprType::LessThan => "lt",
            ExprType::LessThanOrEqual => "le",
            ExprType::GreaterThan => "gt",
            ExprType::GreaterThanOrEqual => "ge",
            ExprType::And => "and",
            ExprType::Or => "or",
            ExprType::Not => "not",
            ExprType::IsNull => "isnull",
            ExprType::Like => "like",
            ExprType::In => "in",
            ExprType::Add => "plus",
            ExprType::Subtract => "minus",
            ExprType::Multiply => "mul",
            ExprType::Divide => "div",
        }
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    func_type: ExprType,
    inputs: Vec<ExprImpl>,
}

impl FunctionCall {
    pub fn new(func_type: ExprType, inputs: Vec<ExprImpl>) -> Self {
        FunctionCall { func_type, inputs }
    }

    pub fn func_type(&self) -> ExprType {
        self.func_type
    }

    pub fn inputs(&self) -> &[ExprImpl] {
        &self.inputs
    }
}

impl Describe for FunctionCall {
    fn describe(&self) -> String {
        format!("{}({})", self.func_type, describe_joined(&self.inputs))
    }
}
