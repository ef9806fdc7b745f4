//! Path and hop types.
//!
//! A `Path` is what the planner hands back: the stations visited in order,
//! each tagged with the line used to arrive there.

use std::collections::BTreeSet;

/// Set of line names carried by one graph edge.
///
/// Ordered so that "pick any line" has a reproducible answer.
pub type LineSet = BTreeSet<String>;

/// One station in a path, plus the line used to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Station name
    pub station: String,
    /// Line used to arrive at `station`. `None` only for an origin that
    /// has not departed yet.
    pub line: Option<String>,
}

impl Hop {
    /// Creates a hop.
    pub fn new(station: impl Into<String>, line: Option<String>) -> Self {
        Self {
            station: station.into(),
            line,
        }
    }

    /// Returns the line name, or `""` when none has been chosen.
    pub fn line_name(&self) -> &str {
        self.line.as_deref().unwrap_or_default()
    }
}

/// A run of consecutive hops on the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    /// Line travelled on
    pub line: String,
    /// Boarding station
    pub from: String,
    /// Alighting station
    pub to: String,
    /// Number of stops travelled
    pub stops: usize,
}

/// A route through the network.
///
/// The first hop is the origin and the last is the destination. An empty
/// path means the origin already is the destination.
///
/// # Invariants
///
/// - For consecutive hops `(a, b)`, the searched graph has an edge between
///   `a.station` and `b.station` carrying `b.line`.
/// - Paths are never mutated once shared: [`Path::grow`] returns a new path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    hops: Vec<Hop>,
}

impl Path {
    /// The empty path ("already there").
    pub fn empty() -> Self {
        Self::default()
    }

    /// A path holding only the origin.
    pub fn origin(station: impl Into<String>, line: Option<String>) -> Self {
        Self {
            hops: vec![Hop::new(station, line)],
        }
    }

    /// Builds a path from hops that are already known to be valid.
    pub fn from_hops(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    /// Returns a copy of this path extended by `station`.
    ///
    /// Line selection for the new hop:
    /// 1. stay on the current line if `available` carries it;
    /// 2. otherwise take the smallest line name in `available`;
    /// 3. if the previous hop has no line yet (the origin), give it the
    ///    chosen line too, so a rendered path never starts blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use navi_server::domain::{LineSet, Path};
    ///
    /// let lines: LineSet = ["Blue".to_string(), "Red".to_string()].into();
    ///
    /// let start = Path::origin("A", None);
    /// let next = start.grow("B", &lines);
    ///
    /// // Ties go to the smallest name, and the origin picks it up too
    /// assert_eq!(next.hops()[0].line.as_deref(), Some("Blue"));
    /// assert_eq!(next.hops()[1].line.as_deref(), Some("Blue"));
    ///
    /// // The original is untouched
    /// assert_eq!(start.hops()[0].line, None);
    /// ```
    pub fn grow(&self, station: &str, available: &LineSet) -> Path {
        let mut hops = self.hops.clone();

        let current = hops.last().and_then(|h| h.line.clone());
        let line = match current {
            Some(line) if available.contains(&line) => Some(line),
            _ => available.first().cloned(),
        };

        if let Some(prev) = hops.last_mut()
            && prev.line.is_none()
        {
            prev.line = line.clone();
        }

        hops.push(Hop::new(station, line));
        Path { hops }
    }

    /// All hops, origin first.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Consumes the path, returning its hops.
    pub fn into_hops(self) -> Vec<Hop> {
        self.hops
    }

    /// Number of hops (stations including the origin).
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Returns true for the "already there" path.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// The first hop.
    pub fn first(&self) -> Option<&Hop> {
        self.hops.first()
    }

    /// The last hop.
    pub fn last(&self) -> Option<&Hop> {
        self.hops.last()
    }

    /// Station names in travel order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.hops.iter().map(|h| h.station.as_str())
    }

    /// Groups the path into runs on a single line.
    pub fn legs(&self) -> Vec<Leg> {
        let mut legs: Vec<Leg> = Vec::new();

        for pair in self.hops.windows(2) {
            let (prev, hop) = (&pair[0], &pair[1]);
            let line = hop.line_name();
            match legs.last_mut() {
                Some(leg) if leg.line == line => {
                    leg.to = hop.station.clone();
                    leg.stops += 1;
                }
                _ => legs.push(Leg {
                    line: line.to_string(),
                    from: prev.station.clone(),
                    to: hop.station.clone(),
                    stops: 1,
                }),
            }
        }

        legs
    }

    /// Number of line changes along the path.
    pub fn transfers(&self) -> usize {
        self.legs().len().saturating_sub(1)
    }

    /// Distinct lines used, in the order they are first boarded.
    pub fn lines(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.legs()
            .into_iter()
            .filter(|leg| seen.insert(leg.line.clone()))
            .map(|leg| leg.line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(names: &[&str]) -> LineSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn grow_stays_on_current_line() {
        let path = Path::origin("A", Some("Red".into()));
        let path = path.grow("B", &lines(&["Blue", "Red"]));

        assert_eq!(path.hops()[1].line.as_deref(), Some("Red"));
    }

    #[test]
    fn grow_changes_line_when_needed() {
        let path = Path::origin("A", Some("Red".into()));
        let path = path.grow("B", &lines(&["Green", "Blue"]));

        assert_eq!(path.hops()[1].line.as_deref(), Some("Blue"));
        // Origin keeps its own line once it has one
        assert_eq!(path.hops()[0].line.as_deref(), Some("Red"));
    }

    #[test]
    fn grow_backfills_origin_line() {
        let path = Path::origin("A", None).grow("B", &lines(&["Green"]));

        assert_eq!(path.hops()[0].line.as_deref(), Some("Green"));
        assert_eq!(path.hops()[1].line.as_deref(), Some("Green"));
    }

    #[test]
    fn grow_does_not_touch_shared_prefix() {
        let base = Path::origin("A", None);
        let left = base.grow("B", &lines(&["Red"]));
        let right = base.grow("C", &lines(&["Blue"]));

        assert_eq!(base.hops()[0].line, None);
        assert_eq!(left.hops()[0].line.as_deref(), Some("Red"));
        assert_eq!(right.hops()[0].line.as_deref(), Some("Blue"));
    }

    #[test]
    fn grow_with_no_lines_leaves_hop_blank() {
        let path = Path::origin("A", None).grow("B", &LineSet::new());
        assert_eq!(path.hops()[1].line, None);
    }

    #[test]
    fn empty_path() {
        let path = Path::empty();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(path.legs().is_empty());
        assert_eq!(path.transfers(), 0);
    }

    #[test]
    fn legs_group_by_line() {
        let path = Path::from_hops(vec![
            Hop::new("S1", Some("A".into())),
            Hop::new("S2", Some("A".into())),
            Hop::new("S3", Some("A".into())),
            Hop::new("S4", Some("B".into())),
            Hop::new("S5", Some("B".into())),
        ]);

        let legs = path.legs();
        assert_eq!(legs.len(), 2);
        assert_eq!(
            legs[0],
            Leg {
                line: "A".into(),
                from: "S1".into(),
                to: "S3".into(),
                stops: 2,
            }
        );
        assert_eq!(legs[1].from, "S3");
        assert_eq!(legs[1].to, "S5");
        assert_eq!(path.transfers(), 1);
        assert_eq!(path.lines(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn lines_are_distinct_in_boarding_order() {
        let path = Path::from_hops(vec![
            Hop::new("S1", Some("B".into())),
            Hop::new("S2", Some("B".into())),
            Hop::new("S3", Some("A".into())),
            Hop::new("S4", Some("B".into())),
        ]);

        assert_eq!(path.transfers(), 2);
        assert_eq!(path.lines(), vec!["B".to_string(), "A".to_string()]);
    }
}
