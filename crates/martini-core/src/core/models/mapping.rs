use std::collections::HashMap;
use std::fmt;

/// A LAMMPS atom (bead) type index.
///
/// Bead types are the positive integers LAMMPS uses to refer to particle
/// classes in `pair_coeff` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BeadType(u32);

impl BeadType {
    /// Creates a bead type, returning `None` for the reserved index `0`.
    pub fn new(index: u32) -> Option<Self> {
        (index > 0).then_some(Self(index))
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered mapping from bead type to its MARTINI label (e.g. `TC5`).
///
/// Entries keep the order in which they were inserted, which is the order of
/// the mapping file. Type ids are unique; labels may repeat, since several
/// LAMMPS types can share one MARTINI bead class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeLabelMap {
    entries: Vec<(BeadType, String)>,
}

impl TypeLabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mapping entry.
    ///
    /// Returns `false` and leaves the map unchanged if `bead_type` is already
    /// mapped.
    pub fn insert(&mut self, bead_type: BeadType, label: impl Into<String>) -> bool {
        if self.contains(bead_type) {
            return false;
        }
        self.entries.push((bead_type, label.into()));
        true
    }

    pub fn contains(&self, bead_type: BeadType) -> bool {
        self.entries.iter().any(|(t, _)| *t == bead_type)
    }

    pub fn label(&self, bead_type: BeadType) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == bead_type)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (BeadType, &str)> + '_ {
        self.entries.iter().map(|(t, label)| (*t, label.as_str()))
    }

    pub fn types(&self) -> impl Iterator<Item = BeadType> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reverse index from label to bead type.
    ///
    /// When a label is shared by several types the last one in mapping order wins.
    pub fn label_index(&self) -> HashMap<&str, BeadType> {
        self.entries
            .iter()
            .map(|(t, label)| (label.as_str(), *t))
            .collect()
    }

    /// Number of unordered type pairs, self pairs included: `n * (n + 1) / 2`.
    pub fn pair_count(&self) -> usize {
        let n = self.entries.len();
        n * (n + 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bead(i: u32) -> BeadType {
        BeadType::new(i).unwrap()
    }

    #[test]
    fn bead_type_rejects_zero() {
        assert!(BeadType::new(0).is_none());
        assert_eq!(BeadType::new(7).map(BeadType::index), Some(7));
    }

    #[test]
    fn insert_preserves_file_order() {
        let mut map = TypeLabelMap::new();
        assert!(map.insert(bead(3), "TC5"));
        assert!(map.insert(bead(1), "TP1"));
        assert!(map.insert(bead(2), "Q5"));

        let order: Vec<_> = map.iter().collect();
        assert_eq!(
            order,
            vec![(bead(3), "TC5"), (bead(1), "TP1"), (bead(2), "Q5")]
        );
        assert_eq!(map.label(bead(1)), Some("TP1"));
        assert_eq!(map.label(bead(9)), None);
    }

    #[test]
    fn insert_rejects_duplicate_type() {
        let mut map = TypeLabelMap::new();
        assert!(map.insert(bead(1), "TC5"));
        assert!(!map.insert(bead(1), "TP1"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.label(bead(1)), Some("TC5"));
    }

    #[test]
    fn label_index_keeps_last_duplicate_label() {
        let mut map = TypeLabelMap::new();
        map.insert(bead(1), "TC5");
        map.insert(bead(2), "TP1");
        map.insert(bead(3), "TC5");

        let index = map.label_index();
        assert_eq!(index.len(), 2);
        assert_eq!(index["TC5"], bead(3));
        assert_eq!(index["TP1"], bead(2));
    }

    #[test]
    fn pair_count_includes_self_pairs() {
        let mut map = TypeLabelMap::new();
        assert_eq!(map.pair_count(), 0);
        for i in 1..=4 {
            map.insert(bead(i), "C1");
        }
        assert_eq!(map.pair_count(), 10);
    }
}
