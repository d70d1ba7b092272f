use movie_catalog::infra::{config, logging};
use movie_catalog::Catalog;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--list-genres]\n\
         \n\
         Reads env vars (all optional):\n\
           CATALOG_PATH (default {}), RUST_LOG\n",
        config::DEFAULT_CATALOG_PATH
    );
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    logging::init(&config::log_filter());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let list_genres = args.iter().any(|a| a == "--list-genres");

    let path = config::catalog_path();
    println!("> Preflight:");
    println!("  CATALOG_PATH={}", path.display());

    let catalog = Catalog::load(&path)
        .map_err(|e| anyhow::anyhow!("Catalog failed to load from {}: {}", path.display(), e))?;
    println!("  Movies: {}", catalog.len());

    let facets = catalog.facets()?;
    println!("  Genres: {}", facets.genres.len());
    if list_genres {
        for g in &facets.genres {
            println!("    - {}", g);
        }
    }
    println!("  Years: {}..={}", facets.years.min, facets.years.max);
    println!("  Ratings: {:.1}..={:.1}", facets.ratings.min, facets.ratings.max);

    let unreadable = catalog
        .records()
        .iter()
        .filter(|m| m.duration.minutes().is_none())
        .count();
    if unreadable > 0 {
        eprintln!("  Warning: {} durations could not be read as minutes.", unreadable);
    }

    println!("> Preflight OK.");
    Ok(())
}
