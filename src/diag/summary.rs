// Aggregation of the vote table: the counters and the ranking.

use std::collections::BTreeMap;

use crate::diag::io_votes::VoteRecord;

/// Totals over the (optionally filtered) vote table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct VoteSummary {
    pub total_votes: u64,
    /// The number of distinct municipalities in the filtered table, before
    /// truncating the ranking.
    pub municipality_count: usize,
    /// The top municipalities by summed votes, descending. Ties resolve to
    /// ascending name order.
    pub ranking: Vec<(String, u64)>,
}

impl VoteSummary {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Total de votos (filtro): {}\n",
            format_total(self.total_votes)
        ));
        out.push_str(&format!("Municípios no filtro: {}\n", self.municipality_count));
        if !self.ranking.is_empty() {
            out.push_str("Ranking de votos por município:\n");
            for (pos, (cidade, votos)) in self.ranking.iter().enumerate() {
                out.push_str(&format!(
                    "{:>4}. {}  {}\n",
                    pos + 1,
                    cidade,
                    format_total(*votos)
                ));
            }
        }
        out
    }
}

/// Sums the votes per municipality, optionally restricted to one inspetoria
/// and/or one municipality (exact match, the records are already trimmed).
pub fn summarize(
    records: &[VoteRecord],
    inspetoria: Option<&str>,
    cidade: Option<&str>,
    top: usize,
) -> VoteSummary {
    let mut by_city: BTreeMap<String, u64> = BTreeMap::new();
    let mut total: u64 = 0;
    for r in records {
        if let Some(i) = inspetoria {
            if r.inspetoria != i {
                continue;
            }
        }
        if let Some(c) = cidade {
            if r.cidade != c {
                continue;
            }
        }
        *by_city.entry(r.cidade.clone()).or_insert(0) += r.votos;
        total += r.votos;
    }
    let mut ranking: Vec<(String, u64)> = by_city.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let municipality_count = ranking.len();
    ranking.truncate(top);
    VoteSummary {
        total_votes: total,
        municipality_count,
        ranking,
    }
}

/// Vote totals with the Brazilian thousands separator.
pub fn format_total(n: u64) -> String {
    let digits: Vec<char> = n.to_string().chars().rev().collect();
    let mut out: Vec<char> = Vec::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*c);
    }
    out.iter().rev().collect()
}
