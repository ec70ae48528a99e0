// Primitives for reading the vote table.

use std::io::Read;

use csv::ReaderBuilder;
use log::debug;
use snafu::{whatever, OptionExt, ResultExt};

use crate::diag::*;

/// One row of the vote table, after trimming.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoteRecord {
    pub inspetoria: String,
    pub cidade: String,
    pub votos: u64,
}

pub fn read_vote_table(path: &str, delimiter: char) -> DiagResult<Vec<VoteRecord>> {
    if !delimiter.is_ascii() {
        whatever!("The delimiter must be a single ASCII character: {:?}", delimiter);
    }
    let rdr = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .from_path(path)
        .context(CsvOpenSnafu {
            path: path.to_string(),
        })?;
    read_vote_records(rdr)
}

fn read_vote_records<R: Read>(mut rdr: csv::Reader<R>) -> DiagResult<Vec<VoteRecord>> {
    let headers = rdr
        .headers()
        .context(CsvLineParseSnafu { lineno: 1usize })?
        .clone();
    debug!("header: {:?}", headers);
    let column = |name: &str| -> DiagResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .context(MissingColumnSnafu { column: name })
    };
    let inspetoria_idx = column("Inspetoria")?;
    let cidade_idx = column("Cidade")?;
    let votos_idx = column("Votos")?;

    let mut res: Vec<VoteRecord> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        // The header occupies the first line.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("{:?} {:?}", lineno, line);
        let field = |i: usize| line.get(i).unwrap_or("").trim().to_string();
        let raw_votos = field(votos_idx);
        let votos = raw_votos
            .parse::<u64>()
            .ok()
            .context(BadVoteCountSnafu {
                value: raw_votos.clone(),
                lineno,
            })?;
        res.push(VoteRecord {
            inspetoria: field(inspetoria_idx),
            cidade: field(cidade_idx),
            votos,
        });
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str, delimiter: u8) -> csv::Reader<&[u8]> {
        ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn reads_semicolon_delimited_rows() {
        let data = "Inspetoria;Cidade;Votos\nNorte; Joinville ;120\nSul;Criciúma;80\n";
        let records = read_vote_records(reader(data, b';')).unwrap();
        assert_eq!(
            records,
            vec![
                VoteRecord {
                    inspetoria: "Norte".to_string(),
                    cidade: "Joinville".to_string(),
                    votos: 120,
                },
                VoteRecord {
                    inspetoria: "Sul".to_string(),
                    cidade: "Criciúma".to_string(),
                    votos: 80,
                },
            ]
        );
    }

    #[test]
    fn reads_comma_delimited_rows() {
        let data = "Cidade,Votos,Inspetoria\nBlumenau,42,Vale\n";
        let records = read_vote_records(reader(data, b',')).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cidade, "Blumenau");
        assert_eq!(records[0].votos, 42);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let data = "Inspetoria;Cidade\nNorte;Joinville\n";
        let res = read_vote_records(reader(data, b';'));
        match res {
            Err(DiagError::MissingColumn { column }) => assert_eq!(column, "Votos"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_vote_count_carries_the_line_number() {
        let data = "Inspetoria;Cidade;Votos\nNorte;Joinville;120\nSul;Criciúma;oitenta\n";
        let res = read_vote_records(reader(data, b';'));
        match res {
            Err(DiagError::BadVoteCount { value, lineno }) => {
                assert_eq!(value, "oitenta");
                assert_eq!(lineno, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        assert!(read_vote_table("unused.csv", 'ç').is_err());
    }
}
