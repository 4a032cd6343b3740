use crate::error::LumiError;
use crate::lumi_map::LumiMap;
use crate::ranges::lumi_ranges;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Read};

/// One record of a run/lumi listing, typically one file of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLumis {
    pub run: u64,
    pub lumis: Vec<u64>,
}

/// Parse a run/lumi listing. Each line holds a run number followed by its lumi sections,
/// separated by commas and/or whitespace and optionally wrapped in brackets:
///
/// ```text
/// # run lumis
/// 315252 1,2,3
/// 315252 [4, 5]
/// 315257 10 11 12
/// ```
pub fn parse_run_lumis<R>(reader: R) -> Result<Vec<RunLumis>, LumiError>
where
    R: Read,
{
    let mut reader = io::BufReader::new(reader);
    let mut records = Vec::new();
    let mut line = String::new();
    let mut line_number = 0;
    while reader.read_line(&mut line)? > 0 {
        line_number += 1;
        if line.trim().is_empty() || line.starts_with('#') {
            line.clear();
            continue;
        }
        match parse_line(&line) {
            Some(record) if record.lumis.is_empty() => {
                log::warn!("no lumis for run {} on line {}", record.run, line_number);
            }
            Some(record) => records.push(record),
            None => {
                return Err(LumiError::InvalidLine {
                    line: line_number,
                    content: line.trim_end().to_string(),
                })
            }
        }
        line.clear();
    }
    log::debug!("read {} run/lumi records", records.len());
    Ok(records)
}

fn parse_line(line: &str) -> Option<RunLumis> {
    let line = line.trim();
    let (run, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let run = run.parse::<u64>().ok()?;
    let lumis = rest
        .split(|c: char| c == ',' || c == '[' || c == ']' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;
    Some(RunLumis { run, lumis })
}

/// Merge records into a lumi mask. Runs come out in ascending order and the lumis of
/// each run are sorted, de-duplicated and compressed into ranges.
///
/// With a `golden` mask, a record is kept only if every one of its lumis is certified.
pub fn build_mask(records: &[RunLumis], golden: Option<&LumiMap>) -> LumiMap {
    let mut by_run: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    let mut dropped = 0;
    for record in records {
        if let Some(golden) = golden {
            let run = record.run.to_string();
            if !record.lumis.iter().all(|&l| golden.contains(&run, l)) {
                dropped += 1;
                continue;
            }
        }
        by_run
            .entry(record.run)
            .or_default()
            .extend_from_slice(&record.lumis);
    }
    if dropped > 0 {
        log::info!(
            "dropped {} of {} records with uncertified lumis",
            dropped,
            records.len()
        );
    }

    let mut mask = LumiMap::new();
    for (run, mut lumis) in by_run {
        lumis.sort_unstable();
        lumis.dedup();
        mask.insert_ranges(run.to_string(), &lumi_ranges(&lumis));
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lumi_map::LumiRange;

    #[test]
    fn test_parse_run_lumis() {
        let listing = "# run lumis\n315252 1,2,3\n\n315252 [4, 5]\n315257 10 11\t12\n";
        let records = parse_run_lumis(listing.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                RunLumis {
                    run: 315252,
                    lumis: vec![1, 2, 3]
                },
                RunLumis {
                    run: 315252,
                    lumis: vec![4, 5]
                },
                RunLumis {
                    run: 315257,
                    lumis: vec![10, 11, 12]
                },
            ]
        );
    }

    #[test]
    fn test_parse_skips_run_without_lumis() {
        let records = parse_run_lumis("1\n2 5\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].run, 2);
    }

    #[test]
    fn test_parse_invalid_line() {
        let err = parse_run_lumis("1 1,2\nrun 3\n".as_bytes()).unwrap_err();
        match err {
            LumiError::InvalidLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "run 3");
            }
            e => panic!("unexpected error: {}", e),
        }
        assert!(parse_run_lumis("1 1,x\n".as_bytes()).is_err());
    }

    #[test]
    fn test_build_mask() {
        let records = vec![
            RunLumis {
                run: 20,
                lumis: vec![7, 5, 6],
            },
            RunLumis {
                run: 3,
                lumis: vec![1, 2],
            },
            RunLumis {
                run: 20,
                lumis: vec![6, 8, 10],
            },
        ];
        let mask = build_mask(&records, None);
        assert_eq!(mask.runs().collect::<Vec<_>>(), vec!["3", "20"]);
        assert_eq!(
            mask.ranges("20").collect::<Vec<_>>(),
            vec![LumiRange::new(5, 8), LumiRange::new(10, 10)]
        );
        assert_eq!(
            mask.ranges("3").collect::<Vec<_>>(),
            vec![LumiRange::new(1, 2)]
        );
    }

    #[test]
    fn test_build_mask_with_golden() {
        let golden = LumiMap::from_json_str(r#"{"1": [[1, 10]], "2": [[5, 5]]}"#).unwrap();
        let records = vec![
            RunLumis {
                run: 1,
                lumis: vec![1, 2],
            },
            // 11 is not certified, the whole record goes
            RunLumis {
                run: 1,
                lumis: vec![10, 11],
            },
            RunLumis {
                run: 2,
                lumis: vec![5],
            },
            RunLumis {
                run: 3,
                lumis: vec![1],
            },
        ];
        let mask = build_mask(&records, Some(&golden));
        assert_eq!(mask.runs().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(
            mask.ranges("1").collect::<Vec<_>>(),
            vec![LumiRange::new(1, 2)]
        );
    }

    #[test]
    fn test_build_mask_empty() {
        assert!(build_mask(&[], None).is_empty());
    }
}
