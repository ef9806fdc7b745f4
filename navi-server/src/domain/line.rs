//! Transit line type.

/// A named transit line: an ordered sequence of stops.
///
/// Lines are supplied by the network data provider and never modified after
/// construction. The same station name may appear on many lines, which is
/// how transfers come about.
///
/// # Examples
///
/// ```
/// use navi_server::domain::Line;
///
/// let line = Line::new("Yamanote", ["Tokyo", "Kanda", "Akihabara"]);
/// assert_eq!(line.stations().len(), 3);
/// assert!(line.has_edges());
///
/// // A single stop contributes no edges to any graph
/// assert!(!Line::new("Stub", ["Tokyo"]).has_edges());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    stations: Vec<String>,
    color: Option<String>,
}

impl Line {
    /// Create a line without a display color.
    pub fn new<I, S>(name: impl Into<String>, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            stations: stations.into_iter().map(Into::into).collect(),
            color: None,
        }
    }

    /// Set the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The line's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops in travel order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Display color, if the provider gave one.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Whether this line connects at least two stops.
    pub fn has_edges(&self) -> bool {
        self.stations.len() >= 2
    }

    /// Consecutive stop pairs `(previous, next)`.
    pub fn consecutive_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stations
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}
