use crate::lumi_map::LumiRange;

/// Compress lumi-section numbers into inclusive ranges of consecutive values.
/// Values are grouped in input order, so the input is expected to be sorted.
pub fn lumi_ranges(lumis: &[u64]) -> Vec<LumiRange> {
    let mut result: Vec<LumiRange> = Vec::new();
    for &lumi in lumis {
        match result.last_mut() {
            Some(r) if r.end.checked_add(1) == Some(lumi) => r.end = lumi,
            _ => result.push(LumiRange::new(lumi, lumi)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lumi_ranges() {
        assert!(lumi_ranges(&[]).is_empty());
        assert_eq!(lumi_ranges(&[7]), vec![LumiRange::new(7, 7)]);
        assert_eq!(
            lumi_ranges(&[1, 2, 3, 5, 6, 9]),
            vec![
                LumiRange::new(1, 3),
                LumiRange::new(5, 6),
                LumiRange::new(9, 9)
            ]
        );
    }

    #[test]
    fn test_lumi_ranges_unsorted() {
        // out of order values start a new range
        assert_eq!(
            lumi_ranges(&[4, 5, 1, 2]),
            vec![LumiRange::new(4, 5), LumiRange::new(1, 2)]
        );
    }

    #[test]
    fn test_lumi_ranges_duplicates_split() {
        assert_eq!(
            lumi_ranges(&[1, 1, 2]),
            vec![LumiRange::new(1, 1), LumiRange::new(1, 2)]
        );
    }

    #[test]
    fn test_max_value() {
        assert_eq!(
            lumi_ranges(&[u64::MAX - 1, u64::MAX]),
            vec![LumiRange::new(u64::MAX - 1, u64::MAX)]
        );
    }
}
