use std::collections::HashSet;
use crate::models::place::PlaceCandidate;

/// A candidate together with the key it is deduplicated under.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedCandidate {
    pub key: String,
    pub candidate: PlaceCandidate,
}

/// Keeps the first candidate seen for every identifier, preserving the
/// order of first appearance. Candidates without an identifier never
/// collapse: each gets the key `unidentified-<n>`, n being its position in
/// the input, suffixed further if a real identifier already uses that name.
pub fn dedup_first_seen(candidates: Vec<PlaceCandidate>) -> Vec<KeyedCandidate> {
    let real_ids: HashSet<&str> = candidates
        .iter()
        .filter_map(|candidate| candidate.id.as_deref())
        .collect();
    let mut synthetic: Vec<String> = Vec::new();
    for (position, candidate) in candidates.iter().enumerate() {
        if candidate.id.is_none() {
            synthetic.push(synthetic_key(position, &real_ids));
        }
    }
    let mut synthetic = synthetic.into_iter();

    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let key = match &candidate.id {
            Some(id) => {
                if !seen.insert(id.clone()) {
                    continue;
                }
                id.clone()
            }
            None => match synthetic.next() {
                Some(key) => key,
                None => continue,
            },
        };
        unique.push(KeyedCandidate { key, candidate });
    }

    unique
}

/// Positions are distinct, so only real identifiers can clash.
fn synthetic_key(position: usize, real_ids: &HashSet<&str>) -> String {
    let base = format!("unidentified-{}", position);
    let mut key = base.clone();
    let mut attempt = 1;
    while real_ids.contains(key.as_str()) {
        key = format!("{}-{}", base, attempt);
        attempt += 1;
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::coordinate::Coordinate;

    fn candidate(id: Option<&str>, name: &str, keyword: &str) -> PlaceCandidate {
        PlaceCandidate {
            id: id.map(str::to_string),
            name: name.to_string(),
            coordinate: Some(Coordinate::new(19.0, 72.0)),
            rating: None,
            keyword: keyword.to_string(),
        }
    }

    #[test]
    fn first_keyword_wins() {
        let unique = dedup_first_seen(vec![
            candidate(Some("X"), "GreenField Seeds", "seed store"),
            candidate(Some("Y"), "AgriMart", "fertilizer store"),
            candidate(Some("X"), "GreenField Seeds & Fertilizer", "fertilizer store"),
        ]);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].key, "X");
        assert_eq!(unique[0].candidate.name, "GreenField Seeds");
        assert_eq!(unique[0].candidate.keyword, "seed store");
        assert_eq!(unique[1].key, "Y");
    }

    #[test]
    fn unidentified_candidates_are_all_kept() {
        let unique = dedup_first_seen(vec![
            candidate(None, "Roadside stall", "seed store"),
            candidate(Some("A"), "Kisan Kendra", "seed store"),
            candidate(None, "Roadside stall", "pesticide shop"),
        ]);

        let keys: Vec<_> = unique.iter().map(|k| k.key.as_str()).collect();
        assert_eq!(keys, vec!["unidentified-0", "A", "unidentified-2"]);
    }

    #[test]
    fn synthetic_key_never_shadows_a_real_identifier() {
        let unique = dedup_first_seen(vec![
            candidate(None, "Roadside stall", "seed store"),
            candidate(Some("unidentified-0"), "Oddly named store", "fertilizer store"),
            candidate(Some("unidentified-0-1"), "Even odder store", "fertilizer store"),
        ]);

        let keys: Vec<_> = unique.iter().map(|k| k.key.as_str()).collect();
        assert_eq!(keys, vec!["unidentified-0-2", "unidentified-0", "unidentified-0-1"]);
        let distinct: HashSet<_> = keys.iter().collect();
        assert_eq!(distinct.len(), keys.len());
    }
}
