/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * License:
 * This file is part of the SCL parser project.
 *
 * The SCL parser is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::{BTreeSet, HashSet};

/// Answers "has this identifier been declared?".
///
/// The identifier table belongs to the tokenizer; the parser only asks
/// this one question, and only for `display` statements.
pub trait IdentifierOracle {
    fn exists(&self, name: &str) -> bool;
}

impl IdentifierOracle for HashSet<String> {
    fn exists(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl IdentifierOracle for BTreeSet<String> {
    fn exists(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<F> IdentifierOracle for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, name: &str) -> bool {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_and_closures_answer() {
        let set: HashSet<String> = ["x".to_string()].into_iter().collect();
        assert!(set.exists("x"));
        assert!(!set.exists("y"));

        let only_a = |name: &str| name == "a";
        assert!(only_a.exists("a"));
        assert!(!only_a.exists("b"));
    }
}
