use std::fs;
use std::io::{Cursor, Write};

use tempfile::NamedTempFile;

use marquee::catalog::loader::CatalogLoader;
use marquee::query::stream::{QueryStream, VERDICT_FOUND, VERDICT_MISSING};
use marquee::search::executor::{QueryEngine, SequentialSearch};

const SOURCE: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in
1,Movie,Alpha,Jane Doe,\"Ada, Bob\",Brazil,\"March 4, 2019\",2016,TV-G,90 min,Drama
2,Series,Beta,,,,,,,,
3,Movie,Gamma,John Roe,Carol,Chile,\"May 12, 2021\",2020,PG,100 min,\"Comedy, drama\"
";

#[test]
fn benchmark_flow_reports_verdicts_and_comparisons() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SOURCE.as_bytes()).unwrap();
    let catalog = CatalogLoader::new(8).load(file.path());
    assert_eq!(catalog.len(), 3);

    let mut stream = QueryStream::new(Cursor::new("1\n3\nFIM\nGamma\nDelta\nFIM\n"));
    let ids = stream.id_block();
    let subset = QueryEngine::new(&catalog).resolve_ids(&ids);
    assert_eq!(subset.len(), 2);

    let mut search = SequentialSearch::start(subset);
    let verdicts: Vec<&str> = stream
        .title_block()
        .iter()
        .map(|title| {
            if search.probe(title) {
                VERDICT_FOUND
            } else {
                VERDICT_MISSING
            }
        })
        .collect();
    assert_eq!(verdicts, vec!["SIM", "NAO"]);

    // Two subset records scanned for each of the two queries
    let report = search.finish("877284");
    assert_eq!(report.comparisons, 4);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("877284_sequential.txt");
    report.write_to(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let segments: Vec<&str> = written.split('\t').collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "877284");
    assert!(segments[1].starts_with("Time: ") && segments[1].ends_with('s'));
    // Elapsed seconds always render fractionally, whole values included
    assert!(segments[1].contains('.'));
    assert_eq!(segments[2], "Comparisons: 4");
}

#[test]
fn unknown_id_shrinks_the_subset_without_failing() {
    let catalog = CatalogLoader::new(8).load_from(Cursor::new(SOURCE));
    let mut stream = QueryStream::new(Cursor::new("1\n9\nFIM\n"));
    let subset = QueryEngine::new(&catalog).resolve_ids(&stream.id_block());
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].show_id, "1");
}

#[test]
fn print_flow_renders_records_sorted_by_title() {
    let catalog = CatalogLoader::new(8).load_from(Cursor::new(SOURCE));
    let mut stream = QueryStream::new(Cursor::new("3 1 2\nFIM\n"));

    let mut subset = QueryEngine::new(&catalog).resolve_ids(&stream.id_block());
    QueryEngine::sort_by_title(&mut subset);
    let lines: Vec<String> = subset.iter().map(|show| show.to_string()).collect();

    assert_eq!(
        lines,
        vec![
            "=> 1 ## Alpha ## Movie ## Jane Doe ## [Ada, Bob] ## Brazil ## \
             March 4, 2019 ## 2016 ## TV-G ## 90 min ## [Drama] ##",
            "=> 2 ## Beta ## Series ## NaN ## [NaN] ## NaN ## \
             March 1, 1900 ## 0 ## NaN ## NaN ## [NaN] ##",
            "=> 3 ## Gamma ## Movie ## John Roe ## [Carol] ## Chile ## \
             May 12, 2021 ## 2020 ## PG ## 100 min ## [Comedy, drama] ##",
        ]
    );
}
