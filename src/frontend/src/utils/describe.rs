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

use itertools::Itertools;

/// Produces the one-line summary shown for an operator or an expression in `EXPLAIN` output.
///
/// Implementations must be pure: calling `describe` twice on an unchanged value yields the same
/// string.
pub trait Describe {
    fn describe(&self) -> String;
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Describes each item and joins the results with `", "`.
pub fn describe_joined<'a, T: Describe + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    items.into_iter().map(Describe::describe).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Word(&'static str);

    impl Describe for Word {
        fn describe(&self) -> String {
            self.0.to_owned()
        }
    }

    #[test]
    fn test_describe_joined() {
        assert_eq!(describe_joined::<Word>([]), "");
        assert_eq!(describe_joined(&[Word("a")]), "a");
        assert_eq!(describe_joined(&[Word("a"), Word("b"), Word("c")]), "a, b, c");
    }
}
