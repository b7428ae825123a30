// src/stats/rank.rs

use crate::model::ClassifiedCard;
use super::classify::Buckets;

/// `(bucket key, cards most-used first)`
pub type Ranked = Vec<(String, Vec<ClassifiedCard>)>;

/// Most used first. Equal counts keep their input order (`sort_by` is stable).
pub fn rank(bucket: &[ClassifiedCard]) -> Vec<ClassifiedCard> {
    let mut out = bucket.to_vec();
    out.sort_by(|a, b| b.total_uses.cmp(&a.total_uses));
    out
}

/// Rank every bucket; bucket order follows the map's key order.
pub fn rank_all(buckets: &Buckets) -> Ranked {
    buckets
        .iter()
        .map(|(key, cards)| (key.clone(), rank(cards)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardRecord;

    fn cc(id: &str, uses: u64) -> ClassifiedCard {
        ClassifiedCard {
            card: CardRecord { id: s!(id), ..Default::default() },
            total_uses: uses,
        }
    }

    fn ids(v: &[ClassifiedCard]) -> Vec<&str> {
        v.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn descending_by_uses() {
        let input = vec![cc("a", 1), cc("b", 5), cc("c", 3)];
        assert_eq!(ids(&rank(&input)), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![cc("x", 2), cc("y", 7), cc("z", 2), cc("w", 2)];
        assert_eq!(ids(&rank(&input)), vec!["y", "x", "z", "w"]);
    }

    #[test]
    fn input_untouched() {
        let input = vec![cc("a", 1), cc("b", 2)];
        let _ = rank(&input);
        assert_eq!(ids(&input), vec!["a", "b"]);
    }

    #[test]
    fn empty_bucket() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn rank_all_orders_each_bucket() {
        let mut b = Buckets::new();
        b.insert(s!("Justice"), vec![cc("1", 0), cc("2", 4)]);
        b.insert(s!("Aggression"), vec![cc("3", 1)]);

        let ranked = rank_all(&b);
        assert_eq!(ranked[0].0, "Aggression");
        assert_eq!(ids(&ranked[1].1), vec!["2", "1"]);
    }
}
