//! Orders asset holders by balance and renders the report lines.

use std::{
    fmt::Display,
    io::{self, Write},
};

use crate::indexer::BalanceRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedBalance {
    /// Zero-based.
    pub rank: usize,
    pub account: String,
    pub amount: u64,
}

impl Display for RankedBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} {}", self.rank, self.account, self.amount)
    }
}

/// Sorts holders by amount, largest first, and keeps every holder whose rank is at most `top`.
/// That is `top + 1` holders, as the rank starts at zero. A `top` of zero or less keeps everyone.
pub fn rank(mut records: Vec<BalanceRecord>, top: i64) -> Vec<RankedBalance> {
    // sort_by is stable, equal amounts stay in the order the indexer returned them.
    records.sort_by(|a, b| b.amount.cmp(&a.amount));

    let max_rank = usize::try_from(top).ok().filter(|top| *top > 0);

    records
        .into_iter()
        .enumerate()
        .take_while(|(rank, _)| max_rank.map_or(true, |max_rank| *rank <= max_rank))
        .map(|(rank, record)| RankedBalance {
            rank,
            account: record.account,
            amount: record.amount,
        })
        .collect()
}

pub fn write_report(ranked: &[RankedBalance], out: &mut impl Write) -> io::Result<()> {
    for entry in ranked {
        writeln!(out, "{entry}")?;
    }

    Ok(())
}
