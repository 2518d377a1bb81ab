use anyhow::{bail, Result};
use clap::Parser;

use ranger_themer::cli::Args;
use ranger_themer::flavor::{self, Flavor};
use ranger_themer::generate;
use ranger_themer::preview;
use ranger_themer::template::Template;

fn main() -> Result<()> {
    let args = Args::parse();

    let template = Template::load(&args.template)?;
    let flavors = select_flavors(&args.flavor)?;

    if args.preview {
        let mut stdout = std::io::stdout();
        for flavor in &flavors {
            let quantized = flavor.quantize()?;
            preview::print_preview(&mut stdout, flavor, &quantized)?;
        }
    }

    let outcomes = generate::generate_all(&template, &flavors, &args.output_dir)?;
    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(path) => println!("{}: wrote {}", outcome.flavor, path.display()),
            Err(e) => {
                eprintln!("{}: {e}", outcome.flavor);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} flavors failed", outcomes.len());
    }
    Ok(())
}

/// Resolve `--flavor` keys against the known flavors; all if none given.
fn select_flavors(requested: &[String]) -> Result<Vec<Flavor>> {
    let known = flavor::all_flavors();
    if requested.is_empty() {
        return Ok(known.to_vec());
    }
    let mut selected = Vec::with_capacity(requested.len());
    for name in requested {
        let want = name.to_lowercase();
        match known
            .iter()
            .find(|f| f.key().map(|k| k == want).unwrap_or(false))
        {
            Some(flavor) => selected.push(*flavor),
            None => {
                let keys: Vec<String> =
                    known.iter().filter_map(|f| f.key().ok()).collect();
                bail!("unknown flavor {name:?}; known flavors: {}", keys.join(", "));
            }
        }
    }
    Ok(selected)
}
