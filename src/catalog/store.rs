use std::collections::BTreeMap;

use strsim::jaro_winkler;

use crate::error::{DonutError, Result};
use crate::finder::constants::SUGGESTION_THRESHOLD;
use crate::finder::search::validate_size;
use crate::models::{Berry, Donut, canonical_name};

/// Read-only berry catalog in display order (ascending `index`).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    berries: Vec<Berry>,
}

impl Catalog {
    pub fn new(mut berries: Vec<Berry>) -> Self {
        berries.sort_by_key(|b| b.index);
        Self { berries }
    }

    pub fn berries(&self) -> &[Berry] {
        &self.berries
    }

    /// Look up a berry by name (case-insensitive, long `Hyper X Berry` names accepted).
    pub fn get(&self, name: &str) -> Option<&Berry> {
        self.position(name).map(|idx| &self.berries[idx])
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = canonical_name(name).to_lowercase();
        self.berries.iter().position(|b| b.key() == key)
    }

    /// Closest berry name by Jaro-Winkler similarity, if any is close enough.
    pub fn suggest(&self, name: &str) -> Option<&Berry> {
        let wanted = canonical_name(name).to_lowercase();
        self.berries
            .iter()
            .map(|b| (b, jaro_winkler(&b.key(), &wanted)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(b, _)| b)
    }

    /// Build a donut from berry names; repeats add more units.
    pub fn donut_from_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Donut> {
        validate_size(names.len() as u32)?;

        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            let idx = self
                .position(name)
                .ok_or_else(|| DonutError::UnknownBerry {
                    name: name.trim().to_string(),
                    suggestion: self.suggest(name).map(|b| b.name.clone()),
                })?;
            *counts.entry(idx).or_insert(0) += 1;
        }

        let counts: Vec<(usize, u32)> = counts.into_iter().collect();
        Ok(Donut::from_counts(&self.berries, &counts))
    }

    /// Berries the donut uses beyond current stock, as (name, needed, available).
    pub fn shortfalls(&self, donut: &Donut) -> Vec<(String, u32, u32)> {
        self.berries
            .iter()
            .filter_map(|berry| {
                let needed = donut.quantity(&berry.name);
                match berry.count {
                    Some(have) if needed > have => Some((berry.name.clone(), needed, have)),
                    _ => None,
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.berries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.berries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Berry::new(2, "H-Cheri", [0, 90, 0, 0, 10], 2, 250, Some(1)),
            Berry::new(1, "H-Sitrus", [0, 0, 100, 20, 0], 3, 300, Some(4)),
            Berry::new(3, "Oran Berry", [10, 10, 10, 10, 10], 1, 100, None),
        ])
    }

    #[test]
    fn test_display_order_by_index() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.berries().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["H-Sitrus", "H-Cheri", "Oran Berry"]);
    }

    #[test]
    fn test_get_case_insensitive_and_long_names() {
        let catalog = sample_catalog();
        assert!(catalog.get("h-sitrus").is_some());
        assert!(catalog.get("Hyper Sitrus Berry").is_some());
        assert!(catalog.get("ORAN BERRY").is_some());
        assert!(catalog.get("Pecha").is_none());
    }

    #[test]
    fn test_suggest_close_name() {
        let catalog = sample_catalog();
        assert_eq!(catalog.suggest("H-Citrus").unwrap().name, "H-Sitrus");
        assert!(catalog.suggest("zzzz").is_none());
    }

    #[test]
    fn test_donut_from_names() {
        let catalog = sample_catalog();
        let donut = catalog
            .donut_from_names(&["H-Sitrus", "h-sitrus", "H-Cheri"])
            .unwrap();
        assert_eq!(donut.berry_count, 3);
        assert_eq!(donut.quantity("H-Sitrus"), 2);
        assert_eq!(donut.flavor_total, 340);
    }

    #[test]
    fn test_donut_from_names_rejects_bad_input() {
        let catalog = sample_catalog();

        assert!(matches!(
            catalog.donut_from_names(&["H-Sitrus"]),
            Err(DonutError::InvalidSize { size: 1, .. })
        ));
        assert!(matches!(
            catalog.donut_from_names(&["H-Sitrus"; 9]),
            Err(DonutError::InvalidSize { size: 9, .. })
        ));

        match catalog.donut_from_names(&["H-Sitrus", "H-Citrus"]) {
            Err(DonutError::UnknownBerry { name, suggestion }) => {
                assert_eq!(name, "H-Citrus");
                assert_eq!(suggestion.as_deref(), Some("H-Sitrus"));
            }
            other => panic!("expected UnknownBerry, got {:?}", other),
        }
    }

    #[test]
    fn test_shortfalls() {
        let catalog = sample_catalog();
        let donut = catalog
            .donut_from_names(&["H-Cheri", "H-Cheri", "Oran Berry", "Oran Berry"])
            .unwrap();
        assert_eq!(
            catalog.shortfalls(&donut),
            vec![("H-Cheri".to_string(), 2, 1)]
        );
    }
}
