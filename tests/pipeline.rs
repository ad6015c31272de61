use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use mapprep::aggregate::AggregateRow;
use mapprep::enrich::read_enriched;
use mapprep::pipeline::pipeline::Pipeline;
use mapprep::pipeline::{ChoroplethPrep, AGGREGATES_FILE, ENRICHED_FILE, PALETTE_FILE, SAMPLE_FILE};
use mapprep::processing::check::check;

fn write_reference(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("reference.csv");
    let mut file = File::create(&path).unwrap();
    writeln!(
        file,
        "iso2c,country.name.en,continent,region,country.name.en.regex"
    )
    .unwrap();
    writeln!(file, "KE,Kenya,Africa,Eastern Africa,kenya").unwrap();
    writeln!(file, "EG,Egypt,Africa,Northern Africa,egypt").unwrap();
    writeln!(
        file,
        "CD,Democratic Republic of the Congo,Africa,Middle Africa,congo.dem"
    )
    .unwrap();
    writeln!(file, "FR,France,Europe,Western Europe,france").unwrap();
    path
}

fn record_line(code: &str, lang: &str, user: &str) -> String {
    format!(
        r#"{{"country_code":"{}","lang":"{}","place_lat":-1.2,"place_lon":36.8,"screen_name":"{}","text":"post by {}"}}"#,
        code, lang, user, user
    )
}

fn write_records(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("records.jsonl");
    let mut file = File::create(&path).unwrap();
    for (i, (code, lang)) in [
        ("KE", "sw"),
        ("KE", "en"),
        ("EG", "ar"),
        ("CD", "fr"),
        ("KE", "en"),
        ("FR", "fr"), // out of region, dropped
        ("CD", "fr"),
    ]
    .into_iter()
    .enumerate()
    {
        writeln!(file, "{}", record_line(code, lang, &format!("user_{}", i))).unwrap();
    }
    // a record the collector could not resolve
    writeln!(
        file,
        r#"{{"country_code":null,"lang":"en","place_lat":null,"place_lon":null,"screen_name":"lost","text":"nowhere"}}"#
    )
    .unwrap();
    path
}

fn run_pipeline(dst: &Path, sample_size: i64, seed: u64) {
    let dir = dst.parent().unwrap();
    let reference = write_reference(dir);
    let records = write_records(dir);
    ChoroplethPrep::new(
        reference,
        records,
        dst.to_path_buf(),
        "Africa".to_string(),
        sample_size,
        seed,
    )
    .run()
    .unwrap();
}

fn read_aggregates(dst: &Path) -> Vec<AggregateRow> {
    let mut reader = csv::ReaderBuilder::new()
        .from_path(dst.join(AGGREGATES_FILE))
        .unwrap();
    reader.deserialize().map(|row| row.unwrap()).collect()
}

fn sampled_users(dst: &Path) -> HashSet<String> {
    read_enriched(&dst.join(SAMPLE_FILE))
        .unwrap()
        .iter()
        .map(|record| record.record().screen_name.clone())
        .collect()
}

#[test_log::test]
fn full_run() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("out");
    run_pipeline(&dst, 4, 42);

    // out-of-region and unresolved records are gone
    let enriched = read_enriched(&dst.join(ENRICHED_FILE)).unwrap();
    assert_eq!(enriched.len(), 6);
    assert!(enriched.iter().all(|r| r.country_code() != "FR"));

    // counts conserved and names normalized, in display order
    let rows = read_aggregates(&dst);
    let total: u64 = rows.iter().map(|row| row.count).sum();
    assert_eq!(total, enriched.len() as u64);

    let summary: Vec<(&str, u64)> = rows
        .iter()
        .map(|row| (row.country_name.as_str(), row.count))
        .collect();
    // Northern Africa before Middle Africa before Eastern Africa
    assert_eq!(summary, vec![("Egypt", 1), ("DRC", 2), ("Kenya", 3)]);
    assert!(rows.iter().all(|row| row.region_rank.is_some()));

    // sample respects requested size
    let sampled = sampled_users(&dst);
    assert_eq!(sampled.len(), 4);

    // palette covers the sampled languages exactly
    let palette: std::collections::BTreeMap<String, String> =
        serde_json::from_reader(File::open(dst.join(PALETTE_FILE)).unwrap()).unwrap();
    let sampled_langs: HashSet<String> = read_enriched(&dst.join(SAMPLE_FILE))
        .unwrap()
        .iter()
        .map(|record| record.record().lang.clone())
        .collect();
    assert_eq!(
        palette.keys().cloned().collect::<HashSet<_>>(),
        sampled_langs
    );

    // the produced directory passes its own verification
    let verified = check(&dst.join(ENRICHED_FILE), &dst.join(AGGREGATES_FILE)).unwrap();
    assert_eq!(verified, 6);
}

#[test_log::test]
fn sampling_reproducible_across_runs() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let dst_a = dir_a.path().join("out");
    let dst_b = dir_b.path().join("out");

    run_pipeline(&dst_a, 3, 42);
    run_pipeline(&dst_b, 3, 42);
    assert_eq!(sampled_users(&dst_a), sampled_users(&dst_b));
}

#[test_log::test]
fn sample_larger_than_corpus_returns_everything() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("out");
    run_pipeline(&dst, 1000, 42);

    assert_eq!(sampled_users(&dst).len(), 6);
}
