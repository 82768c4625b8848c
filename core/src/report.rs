use crate::scan::MatchRecord;
use std::collections::HashMap;
use std::path::PathBuf;

/// All hits for one file, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub path: PathBuf,
    pub records: Vec<MatchRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    NoMatches,
    Matches(Vec<ResultGroup>),
}

impl Report {
    /// Groups records by file. Groups keep the order in which each file was
    /// first seen; records keep their input order within a group.
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        if records.is_empty() {
            return Report::NoMatches;
        }
        let mut groups: Vec<ResultGroup> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();
        for record in records {
            let slot = *index.entry(record.path.clone()).or_insert_with(|| {
                groups.push(ResultGroup { path: record.path.clone(), records: Vec::new() });
                groups.len() - 1
            });
            groups[slot].records.push(record);
        }
        Report::Matches(groups)
    }

    pub fn groups(&self) -> &[ResultGroup] {
        match self {
            Report::NoMatches => &[],
            Report::Matches(groups) => groups,
        }
    }

    pub fn record_count(&self) -> usize {
        self.groups().iter().map(|g| g.records.len()).sum()
    }
}
