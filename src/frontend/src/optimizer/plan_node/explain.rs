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

use std::fmt::Display;

use itertools::Itertools;

use crate::utils::Describe;

/// Builds the one-line operator info of a plan node.
///
/// Items of one clause are joined with `", "`. A clause with no items is left out together with
/// its label.
#[derive(Debug, Default)]
pub struct OperatorInfo {
    buf: String,
}

impl OperatorInfo {
    pub fn new(head: impl Display) -> Self {
        Self {
            buf: head.to_string(),
        }
    }

    /// Appends `, <label>:<value>`.
    pub fn field(mut self, label: &str, value: impl Display) -> Self {
        self.push_sep();
        self.buf.push_str(label);
        self.buf.push(':');
        self.buf.push_str(&value.to_string());
        self
    }

    /// Appends `, <flag>` if `on`.
    pub fn flag(mut self, flag: &str, on: bool) -> Self {
        if on {
            self.push_sep();
            self.buf.push_str(flag);
        }
        self
    }

    /// Appends `, <label>:<items>` if `items` is not empty.
    pub fn list<'a, T: Describe + 'a>(
        self,
        label: &str,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Self {
        self.list_str(label, items.into_iter().map(Describe::describe))
    }

    /// Like [`OperatorInfo::list`], but for items already rendered.
    pub fn list_str(mut self, label: &str, items: impl IntoIterator<Item = impl Display>) -> Self {
        let items = items.into_iter().join(", ");
        if !items.is_empty() {
            self.push_sep();
            self.buf.push_str(label);
            self.buf.push(':');
            self.buf.push_str(&items);
        }
        self
    }

    /// Appends `<label><items>` with no separator in front, if `items` is not empty.
    pub fn list_str_unseparated(
        mut self,
        label: &str,
        items: impl IntoIterator<Item = impl Display>,
    ) -> Self {
        let items = items.into_iter().join(", ");
        if !items.is_empty() {
            self.buf.push_str(label);
            self.buf.push_str(&items);
        }
        self
    }

    /// Appends `text` with no separator in front.
    pub fn raw(mut self, text: &str) -> Self {
        self.buf.push_str(text);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn push_sep(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push_str(", ");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprImpl;

    #[test]
    fn test_operator_info() {
        let none: Vec<ExprImpl> = vec![];
        let info = OperatorInfo::new("inner join")
            .field("small", "Dual_1")
            .list("equal", &none)
            .list("left cond", &[ExprImpl::column("t", "a"), ExprImpl::literal(1i64)])
            .flag("aux", false)
            .flag("anti", true)
            .finish();
        assert_eq!(info, "inner join, small:Dual_1, left cond:t.a, 1, anti");
    }

    #[test]
    fn test_operator_info_first_clause() {
        assert_eq!(OperatorInfo::default().field("rows", 0).finish(), "rows:0");
        assert_eq!(
            OperatorInfo::new("left outer join")
                .list_str_unseparated("default vals:", ["NULL"])
                .raw("asc")
                .list_str_unseparated("left key:", Vec::<String>::new())
                .finish(),
            "left outer joindefault vals:NULLasc"
        );
    }
}
