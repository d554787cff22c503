use crate::domain::model::SizeCategory;
use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(1|10|100)_C([0-9]+)\.py$").expect("script name pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub size: SizeCategory,
    pub card: u32,
    pub filename: String,
    pub in_range: bool,
}

/// Keeps only names shaped like `{prefix}_C{card}.py`, sorted by size then card.
pub fn build_catalog<S: AsRef<str>>(names: &[S], max_card: u32) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let caps = SCRIPT_NAME.captures(name)?;
            let size = SizeCategory::from_prefix(&caps[1])?;
            let card: u32 = caps[2].parse().ok()?;
            // 前導零的檔名 (1_C05.py) 不會被啟動器產生，略過
            if caps[2].len() > 1 && caps[2].starts_with('0') {
                return None;
            }
            Some(CatalogEntry {
                size,
                card,
                filename: name.to_string(),
                in_range: (1..=max_card).contains(&card),
            })
        })
        .collect();

    entries.sort_by_key(|e| (e.size, e.card));
    entries
}
