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

use crate::utils::Describe;

/// A reference to a column, optionally qualified by the table it comes from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    table: Option<Box<str>>,
    name: Box<str>,
}

impl ColumnRef {
    pub fn new(table: Option<&str>, name: &str) -> Self {
        ColumnRef {
            table: table.map(Into::into),
            name: name.into(),
        }
    }

    /// An unqualified column.
    pub fn unqualified(name: &str) -> Self {
        Self::new(None, name)
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Debug for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("ColumnRef")
                .field("table", &self.table)
                .field("name", &self.name)
                .finish()
        } else {
            write!(f, "{}", self)
        }
    }
}

impl Describe for ColumnRef {
    fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(ColumnRef::new(Some("t"), "a").describe(), "t.a");
        assert_eq!(ColumnRef::unqualified("colA").describe(), "colA");
    }
}
