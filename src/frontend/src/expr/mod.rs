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

//! Expressions embedded in plan nodes.
//!
//! Plan nodes only ever ask an expression for its [`Describe`] text; nothing here evaluates.

mod agg_call;
mod column_ref;
mod function_call;
mod literal;

pub use agg_call::{AggCall, AggKind};
pub use column_ref::ColumnRef;
pub use function_call::{ExprType, FunctionCall};
pub use literal::Literal;

use crate::types::ScalarImpl;
use crate::utils::Describe;

#[derive(Debug, Clone, PartialEq)]
pub enum ExprImpl {
    ColumnRef(Box<ColumnRef>),
    Literal(Box<Literal>),
    FunctionCall(Box<FunctionCall>),
}

impl ExprImpl {
    /// A literal value.
    pub fn literal(v: impl Into<ScalarImpl>) -> Self {
        Literal::new(Some(v.into())).into()
    }

    /// A literal `NULL`.
    pub fn literal_null() -> Self {
        Literal::new(None).into()
    }

    /// A column of the given table.
    pub fn column(table: &str, name: &str) -> Self {
        ColumnRef::new(Some(table), name).into()
    }

    /// Shorthand for a two-argument function call.
    pub fn binary(func_type: ExprType, lhs: ExprImpl, rhs: ExprImpl) -> Self {
        FunctionCall::new(func_type, vec![lhs, rhs]).into()
    }
}

impl Describe for ExprImpl {
    fn describe(&self) -> String {
        match self {
            ExprImpl::ColumnRef(e) => e.describe(),
            ExprImpl::Literal(e) => e.describe(),
            ExprImpl::FunctionCall(e) => e.describe(),
        }
    }
}

macro_rules! impl_from_expr {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ExprImpl {
                fn from(e: $variant) -> Self {
                    ExprImpl::$variant(Box::new(e))
                }
            }
        )*
    };
}

impl_from_expr! { ColumnRef, Literal, FunctionCall }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_nested() {
        let cond = ExprImpl::binary(
            ExprType::And,
            ExprImpl::binary(
                ExprType::GreaterThan,
                ExprImpl::column("t", "a"),
                ExprImpl::literal(1i64),
            ),
            FunctionCall::new(ExprType::IsNull, vec![ExprImpl::column("t", "b")]).into(),
        );
        assert_eq!(cond.describe(), "and(gt(t.a, 1), isnull(t.b))");
        assert_eq!(cond.describe(), cond.describe());
    }
}
