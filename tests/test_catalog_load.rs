//! Catalog loading: header contract, row validation, and facet reductions.

use movie_catalog::storage::catalog::loader::load_reader;
use movie_catalog::{Catalog, EmptyCatalogError, LoadError, MovieRecord, Runtime};
use std::io::Write;
use std::path::PathBuf;

const HEADER: &str = "Rank,Title,Year,Genre,Rating,Duration,Image URL,IMDb URL";

fn write_csv(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("filmes.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

fn movie(rank: u32, genre: &str, year: i32, rating: f64) -> MovieRecord {
    MovieRecord {
        rank,
        title: format!("Movie {}", rank),
        year,
        genre: genre.to_string(),
        rating,
        duration: Runtime::from("2h"),
        image_url: format!("https://img.example/{}.jpg", rank),
        detail_url: format!("https://www.imdb.com/title/tt{:07}/", rank),
    }
}

#[test]
fn loads_rows_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        &format!(
            "{}\n\
             2,The Godfather,1972,Crime,9.2,2h 55m,https://img/2.jpg,https://imdb/2\n\
             1,The Shawshank Redemption,1994,Drama,9.3,2h 22m,https://img/1.jpg,https://imdb/1\n",
            HEADER
        ),
    );

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    let ranks: Vec<u32> = catalog.records().iter().map(|m| m.rank).collect();
    assert_eq!(ranks, vec![2, 1]);

    let first = &catalog.records()[0];
    assert_eq!(first.title, "The Godfather");
    assert_eq!(first.year, 1972);
    assert_eq!(first.genre, "Crime");
    assert_eq!(first.rating, 9.2);
    assert_eq!(first.duration.as_str(), "2h 55m");
    assert_eq!(first.duration.minutes(), Some(175));
    assert_eq!(first.image_url, "https://img/2.jpg");
    assert_eq!(first.detail_url, "https://imdb/2");
}

#[test]
fn column_order_is_free_and_extra_columns_are_ignored() {
    let csv = "IMDb URL,Notes,Title,Rank,Genre,Year,Duration,Rating,Image URL\n\
               https://imdb/3,seen,The Dark Knight,3,Action,2008,152,9.0,https://img/3.jpg\n";
    let catalog = load_reader(csv.as_bytes()).unwrap();
    let m = catalog.by_rank(3).unwrap();
    assert_eq!(m.title, "The Dark Knight");
    assert_eq!(m.year, 2008);
    assert_eq!(m.duration.minutes(), Some(152));
    assert_eq!(m.detail_url, "https://imdb/3");
}

#[test]
fn quoted_fields_with_commas_are_kept_whole() {
    let csv = format!(
        "{}\n10,\"The Good, the Bad and the Ugly\",1966,Western,8.8,2h 58m,https://img/10.jpg,https://imdb/10\n",
        HEADER
    );
    let catalog = load_reader(csv.as_bytes()).unwrap();
    assert_eq!(
        catalog.by_rank(10).unwrap().title,
        "The Good, the Bad and the Ugly"
    );
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "got {:?}", err);
}

#[test]
fn missing_required_column_is_rejected() {
    let csv = "Rank,Title,Year,Genre,Rating,Duration,Image URL\n\
               1,Movie,1994,Drama,9.3,2h,https://img/1.jpg\n";
    let err = load_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("IMDb URL")), "got {:?}", err);
}

#[test]
fn unparsable_row_is_rejected() {
    let csv = format!(
        "{}\n1,Movie,nineteen,Drama,9.3,2h,https://img/1.jpg,https://imdb/1\n",
        HEADER
    );
    let err = load_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidRow { .. }), "got {:?}", err);
}

#[test]
fn short_row_is_rejected() {
    let csv = format!("{}\n1,Movie,1994,Drama\n", HEADER);
    let err = load_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidRow { .. }), "got {:?}", err);
}

#[test]
fn out_of_range_rating_and_zero_rank_are_rejected() {
    let bad_rating = format!(
        "{}\n1,Movie,1994,Drama,11.5,2h,https://img/1.jpg,https://imdb/1\n",
        HEADER
    );
    assert!(matches!(
        load_reader(bad_rating.as_bytes()).unwrap_err(),
        LoadError::InvalidRow { .. }
    ));

    let zero_rank = format!(
        "{}\n0,Movie,1994,Drama,8.0,2h,https://img/0.jpg,https://imdb/0\n",
        HEADER
    );
    assert!(matches!(
        load_reader(zero_rank.as_bytes()).unwrap_err(),
        LoadError::InvalidRow { .. }
    ));
}

#[test]
fn duplicate_rank_is_rejected() {
    let csv = format!(
        "{}\n\
         1,A,1994,Drama,9.3,2h,https://img/a.jpg,https://imdb/a\n\
         1,B,1995,Drama,9.1,2h,https://img/b.jpg,https://imdb/b\n",
        HEADER
    );
    let err = load_reader(csv.as_bytes()).unwrap_err();
    assert!(
        matches!(err, LoadError::DuplicateRank { rank: 1, .. }),
        "got {:?}",
        err
    );
}

#[test]
fn header_only_file_is_empty() {
    let err = load_reader(format!("{}\n", HEADER).as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Empty), "got {:?}", err);
}

#[test]
fn zero_byte_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "");
    let err = Catalog::load(&path).unwrap_err();
    assert!(
        matches!(err, LoadError::Empty | LoadError::MissingColumn(_)),
        "got {:?}",
        err
    );
}

#[test]
fn facets_are_sorted_and_inclusive() {
    let catalog = Catalog::from_records(vec![
        movie(1, "Drama", 1994, 9.3),
        movie(2, "Action", 2008, 9.0),
        movie(3, "Drama", 1957, 8.1),
        movie(4, "Crime", 1972, 9.2),
    ])
    .unwrap();

    assert_eq!(catalog.distinct_genres(), vec!["Action", "Crime", "Drama"]);

    let years = catalog.year_range().unwrap();
    assert_eq!((years.min, years.max), (1957, 2008));

    let ratings = catalog.rating_range().unwrap();
    assert_eq!((ratings.min, ratings.max), (8.1, 9.3));

    let facets = catalog.facets().unwrap();
    assert_eq!(facets.genres.len(), 3);
    assert_eq!(facets.years, years);
}

#[test]
fn reductions_on_empty_catalog_fail() {
    let catalog = Catalog::from_records(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.distinct_genres().is_empty());
    assert_eq!(catalog.year_range().unwrap_err(), EmptyCatalogError);
    assert_eq!(catalog.rating_range().unwrap_err(), EmptyCatalogError);
    assert!(catalog.facets().is_err());
}

#[test]
fn lookup_by_rank() {
    let catalog =
        Catalog::from_records(vec![movie(7, "Drama", 1994, 9.3), movie(3, "Action", 2008, 9.0)])
            .unwrap();
    assert_eq!(catalog.by_rank(3).unwrap().genre, "Action");
    assert!(catalog.by_rank(1).is_none());
}

#[test]
fn bundled_dataset_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/filmes.csv");
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.records()[0].title, "The Shawshank Redemption");
    assert!(catalog
        .records()
        .iter()
        .all(|m| m.duration.minutes().is_some()));
}
