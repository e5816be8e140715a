use rpds::List;

use crate::prelude::*;

/// A persistent set of names.
///
/// Adding a name shares the existing members, so extending a scope while
/// descending into a binder never leaks into sibling subtrees.
#[derive(Clone, Debug)]
pub struct NameSet(List<Identifier>);

impl Default for NameSet {
    fn default() -> Self {
        Self(List::new())
    }
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(name: Identifier) -> Self {
        Self::new().add(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.as_str() == name)
    }

    #[must_use]
    pub fn add(&self, name: Identifier) -> Self {
        if self.contains(&name) {
            self.clone()
        } else {
            Self(self.0.push_front(name))
        }
    }

    /// Members of `self` plus the members of `other` not already present.
    #[must_use]
    pub fn union(self, other: NameSet) -> Self {
        other.0.iter().fold(self, |acc, name| acc.add(name.clone()))
    }

    /// Members of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &NameSet) -> Self {
        self.iter()
            .filter(|name| !other.contains(name))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Identifier> for NameSet {
    fn from_iter<T: IntoIterator<Item = Identifier>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), |acc, name| acc.add(name))
    }
}

/// Produces `v1`, `v2`, ... for alpha-conversion.
///
/// One generator is owned by each top-level reduction, so the sequence is
/// monotonic within a run and reproducible across runs.
#[derive(Default, Debug)]
pub struct NameGenerator {
    issued: usize,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_name(&mut self) -> Identifier {
        self.issued += 1;
        Identifier::numbered(self.issued)
    }

    /// The next name in the sequence that is not in `taken`.
    pub fn fresh(&mut self, taken: &NameSet) -> Identifier {
        loop {
            let name = self.next_name();
            if !taken.contains(&name) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(names: &[&str]) -> NameSet {
        names
            .iter()
            .map(|n| Identifier::new(n).unwrap())
            .collect()
    }

    fn sorted(set: &NameSet) -> Vec<String> {
        let mut names = set.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        names.sort();
        names
    }

    #[test]
    fn test_add_is_idempotent() {
        let s = set(&["x", "y"]);
        let t = s.add(Identifier::new("x").unwrap());
        assert_eq!(t.len(), 2);
        let u = t.add(Identifier::new("z").unwrap());
        assert_eq!(u.len(), 3);
        assert!(u.contains("z"));
        assert!(!s.contains("z"));
    }

    #[test]
    fn test_union_and_difference() {
        let lhs = set(&["a", "b"]);
        let rhs = set(&["b", "c"]);
        let union = lhs.clone().union(rhs.clone());
        assert_eq!(sorted(&union), vec!["a", "b", "c"]);
        assert_eq!(sorted(&union.difference(&lhs)), vec!["c"]);
        assert!(lhs.difference(&lhs).is_empty());
        assert!(NameSet::new().union(NameSet::new()).is_empty());
    }

    #[test]
    fn test_generator() {
        let mut names = NameGenerator::new();
        assert_eq!(names.fresh(&NameSet::new()).as_str(), "v1");
        let taken = set(&["v2", "v3"]);
        assert_eq!(names.fresh(&taken).as_str(), "v4");
        assert_eq!(names.fresh(&NameSet::new()).as_str(), "v5");
    }
}
