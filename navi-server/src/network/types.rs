//! Wire types for line data.
//!
//! The provider serves a JSON array of lines. Older worlds use Go-style
//! capitalised field names, newer ones lowercase; both are accepted.

use serde::{Deserialize, Serialize};

use crate::domain::Line;

/// One line as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LineDto {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Stations", default)]
    pub stations: Vec<String>,

    #[serde(
        alias = "Color",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
}

impl From<LineDto> for Line {
    fn from(dto: LineDto) -> Self {
        let line = Line::new(dto.name, dto.stations);
        match dto.color.filter(|c| !c.is_empty()) {
            Some(color) => line.with_color(color),
            None => line,
        }
    }
}

/// Decode a JSON array of lines.
pub fn parse_lines(json: &str) -> Result<Vec<Line>, serde_json::Error> {
    let dtos: Vec<LineDto> = serde_json::from_str(json)?;
    Ok(dtos.into_iter().map(Line::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_capitalised_fields() {
        let json = r#"[
            {"Name": "Ginza", "Stations": ["Shibuya", "Omotesando"], "Color": "orange"}
        ]"#;

        let lines = parse_lines(json).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name(), "Ginza");
        assert_eq!(lines[0].stations(), ["Shibuya", "Omotesando"]);
        assert_eq!(lines[0].color(), Some("orange"));
    }

    #[test]
    fn parse_lowercase_fields_without_color() {
        let json = r#"[{"name": "Loop", "stations": ["A", "B", "C"]}]"#;

        let lines = parse_lines(json).unwrap();
        assert_eq!(lines[0].name(), "Loop");
        assert_eq!(lines[0].color(), None);
    }

    #[test]
    fn missing_stations_is_empty_line() {
        let lines = parse_lines(r#"[{"name": "Ghost"}]"#).unwrap();
        assert!(lines[0].stations().is_empty());
    }

    #[test]
    fn empty_color_is_none() {
        let lines = parse_lines(r#"[{"name": "L", "stations": [], "color": ""}]"#).unwrap();
        assert_eq!(lines[0].color(), None);
    }

    #[test]
    fn rejects_non_array() {
        assert!(parse_lines(r#"{"name": "L"}"#).is_err());
    }
}
