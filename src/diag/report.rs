// Rendering and export of the correspondence diagnostic.

use name_reconcile::MatchResult;
use serde::Serialize;
use snafu::{whatever, ResultExt};

use crate::diag::*;

/// Placeholder shown in the table when no reference name was close enough.
pub const NO_SUGGESTION_PLACEHOLDER: &str = "—";
/// Message shown when every municipality of the vote table matches the
/// boundary dataset.
pub const ALL_MATCH_MESSAGE: &str =
    "Tudo certo! Todos os municípios do CSV batem com o GeoJSON.";
/// Single row written to the export when the diagnostic is empty.
pub const ALL_MATCH_ROW: &str = "(todos conferem)";

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct DiagnosticRow {
    pub municipio_csv: String,
    pub sugestao_geojson: String,
}

/// The two-column text table shown to the operator.
pub fn render_table(results: &[MatchResult]) -> String {
    if results.is_empty() {
        return ALL_MATCH_MESSAGE.to_string();
    }
    let header = "Município no CSV";
    let width = results
        .iter()
        .map(|r| r.candidate.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count());
    let mut out = String::new();
    out.push_str(&format!("{:<width$}  Sugestão (GeoJSON)\n", header, width = width));
    for r in results {
        let suggestion = r.suggestion.as_deref().unwrap_or(NO_SUGGESTION_PLACEHOLDER);
        out.push_str(&format!("{:<width$}  {}\n", r.candidate, suggestion, width = width));
    }
    out
}

/// Serializes the diagnostic with the export column convention.
///
/// Absent suggestions serialize as the empty string. An empty diagnostic
/// produces the single placeholder row, so the export always has content
/// below the header.
pub fn diagnostic_csv_string(results: &[MatchResult]) -> DiagResult<String> {
    let rows: Vec<DiagnosticRow> = if results.is_empty() {
        vec![DiagnosticRow {
            municipio_csv: ALL_MATCH_ROW.to_string(),
            sugestao_geojson: String::new(),
        }]
    } else {
        results
            .iter()
            .map(|r| DiagnosticRow {
                municipio_csv: r.candidate.clone(),
                sugestao_geojson: r.suggestion.clone().unwrap_or_default(),
            })
            .collect()
    };

    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row).context(CsvWriteSnafu {})?;
    }
    let bytes = match wtr.into_inner() {
        Ok(b) => b,
        Err(e) => whatever!("Could not finalize the diagnostic CSV: {:?}", e),
    };
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => whatever!("The diagnostic CSV is not valid UTF-8: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(candidate: &str, suggestion: Option<&str>) -> MatchResult {
        MatchResult {
            candidate: candidate.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    #[test]
    fn empty_diagnostic_renders_the_all_match_message() {
        assert_eq!(render_table(&[]), ALL_MATCH_MESSAGE);
    }

    #[test]
    fn table_uses_the_placeholder_for_absent_suggestions() {
        let results = vec![
            result("Crisciuma", Some("Criciúma")),
            result("Xyzabc", None),
        ];
        let table = render_table(&results);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Município no CSV"));
        assert!(lines[1].contains("Criciúma"));
        assert!(lines[2].contains(NO_SUGGESTION_PLACEHOLDER));
    }

    #[test]
    fn export_serializes_suggestions_and_blanks() {
        let results = vec![
            result("Crisciuma", Some("Criciúma")),
            result("Xyzabc", None),
        ];
        let csv = diagnostic_csv_string(&results).unwrap();
        assert_eq!(
            csv,
            "municipio_csv,sugestao_geojson\nCrisciuma,Criciúma\nXyzabc,\n"
        );
    }

    #[test]
    fn empty_export_carries_the_placeholder_row() {
        let csv = diagnostic_csv_string(&[]).unwrap();
        assert_eq!(csv, "municipio_csv,sugestao_geojson\n(todos conferem),\n");
    }
}
