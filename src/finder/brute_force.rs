use crate::finder::search::SearchConfig;
use crate::models::{Berry, Donut};

/// Number of size-`r` multisets over `n` berries: C(n + r - 1, r).
pub fn total_combinations(n: usize, r: u32) -> u128 {
    if n == 0 {
        return if r == 0 { 1 } else { 0 };
    }
    let top = (n as u128) + (r as u128) - 1;
    (0..r as u128).fold(1u128, |acc, i| acc * (top - i) / (i + 1))
}

/// Reference search: checks every multiset of `size` berries with no pruning.
///
/// Ignores `config.ratchet`. Returns the matching donuts and the number of
/// multisets checked.
pub fn brute_force(berries: &[Berry], size: u32, config: &SearchConfig) -> (Vec<Donut>, u128) {
    let n = berries.len();
    let r = size as usize;
    let mut donuts = Vec::new();
    let mut checked = 0u128;

    if n == 0 || r == 0 {
        return (donuts, checked);
    }

    // Non-decreasing berry indices, advanced like an odometer.
    let mut indices = vec![0usize; r];
    loop {
        checked += 1;

        let mut counts: Vec<(usize, u32)> = Vec::new();
        for &idx in &indices {
            match counts.last_mut() {
                Some((last, qty)) if *last == idx => *qty += 1,
                _ => counts.push((idx, 1)),
            }
        }

        let within_stock = !config.inventory_aware
            || counts
                .iter()
                .all(|&(idx, qty)| berries[idx].count.is_none_or(|c| qty <= c));
        let flavor: i64 = indices.iter().map(|&idx| berries[idx].flavor_total).sum();

        if within_stock && flavor >= config.target_flavor {
            let donut = Donut::from_counts(berries, &counts);
            if config.filter.admits(&donut) {
                donuts.push(donut);
            }
        }

        let Some(slot) = (0..r).rev().find(|&i| indices[i] < n - 1) else {
            break;
        };
        let next = indices[slot] + 1;
        for idx in &mut indices[slot..] {
            *idx = next;
        }
    }

    (donuts, checked)
}
