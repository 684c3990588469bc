use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tattoo_folio::catalog::Catalog;
use tattoo_folio::types::{Category, Locale};
use tattoo_folio::{assets, config, data, output, reviews, thumbs};

#[derive(Parser)]
#[command(name = "tattoo-folio")]
#[command(about = "Portfolio catalog and thumbnail tool for a tattoo studio site")]
#[command(long_about = "\
Portfolio catalog and thumbnail tool for a tattoo studio site

The catalog is built in: every photo has an id like bw_001 and lives at a
fixed path under the web root. The thumbs command fills in the square
thumbnails the site expects next to each photo.

Site structure:

  site/
  ├── config.toml                  # Optional overrides (see gen-config)
  └── public/
      └── images/portfolio/
          ├── blackwork/
          │   ├── bw_001.jpeg      # Source photo
          │   └── thumbs/
          │       ├── bw_001.webp  # Written by `thumbs`
          │       └── bw_001.avif
          ├── color/               # co_NNN
          ├── fine-line/           # fl_NNN
          ├── varios/              # va_NNN
          ├── featured/            # fe_NNN
          └── Studio/              # st_NNN

Run 'tattoo-folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root (holds config.toml and the web root)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Shared flag for commands that emit localized text.
#[derive(clap::Args, Clone)]
struct LangArgs {
    /// Language of alt text and reviews
    #[arg(long, value_enum, default_value_t = Locale::DEFAULT)]
    lang: Locale,
}

#[derive(Subcommand)]
enum Command {
    /// Generate missing WebP and AVIF thumbnails
    Thumbs,
    /// Print the portfolio catalog as JSON
    Catalog {
        #[command(flatten)]
        lang: LangArgs,
        /// Only entries of this category
        #[arg(long, value_enum)]
        category: Option<Category>,
        /// Use the generated ranges instead of the curated lists
        #[arg(long)]
        generated: bool,
        /// Group entries by category
        #[arg(long)]
        grouped: bool,
    },
    /// Print the studio gallery as JSON
    Studio(LangArgs),
    /// Print customer reviews as JSON
    Reviews(LangArgs),
    /// Verify every catalog photo and thumbnail exists on disk
    Check {
        /// Check the generated ranges instead of the curated lists
        #[arg(long)]
        generated: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn select_catalog(generated: bool) -> Catalog {
    if generated {
        data::portfolio_items()
    } else {
        data::all_portfolio_items()
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_thumbs(
    public_dir: &Path,
    site_config: &config::SiteConfig,
) -> Result<(), thumbs::ThumbsError> {
    let base = public_dir.join(tattoo_folio::naming::ASSET_ROOT.trim_start_matches('/'));
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_thumbs_event(&event, &base) {
                eprintln!("{}", line);
            }
        }
    });
    let result = thumbs::generate(public_dir, &site_config.thumbnails, Some(tx));
    printer.join().ok();
    output::print_thumbs_summary(&result?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Thumbs => {
            let site_config = config::load_config(&cli.root)?;
            let public_dir = cli.root.join(&site_config.public_dir);
            run_thumbs(&public_dir, &site_config)?;
        }
        Command::Catalog {
            lang,
            category,
            generated,
            grouped,
        } => {
            let mut catalog = select_catalog(generated);
            if let Some(category) = category {
                catalog = Catalog::new(catalog.of(category));
            }
            if grouped {
                let groups: std::collections::BTreeMap<_, _> = catalog
                    .group_by_category()
                    .into_iter()
                    .map(|(category, entries)| {
                        (category, Catalog::new(entries).localize(lang.lang))
                    })
                    .collect();
                print_json(&groups)?;
            } else {
                print_json(&catalog.localize(lang.lang))?;
            }
        }
        Command::Studio(lang) => {
            print_json(&data::studio_items().localize(lang.lang))?;
        }
        Command::Reviews(lang) => {
            let list = reviews::reviews(lang.lang)?;
            print_json(&serde_json::json!({
                "lang": lang.lang.code(),
                "url": reviews::reviews_url(lang.lang),
                "average_rating": reviews::average_rating(&list),
                "reviews": list,
            }))?;
        }
        Command::Check { generated } => {
            let site_config = config::load_config(&cli.root)?;
            let public_dir = cli.root.join(&site_config.public_dir);
            eprintln!("==> Checking {}", public_dir.display());
            let catalog = Catalog::concat([
                select_catalog(generated).into_entries(),
                data::studio_items().into_entries(),
            ]);
            let report = assets::check_assets(&catalog, &public_dir)?;
            output::print_check_report(&report);
            if !report.is_ok() {
                return Err(format!("{} catalog assets missing", report.missing.len()).into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
