//! Converts a Boolean function between term lists and its column string.
//!
//! ```bash
//! cargo run --example column -- --width 3 --minterms 1,3,5
//! cargo run --example column -- --width 2 --maxterms 0,2 --dontcares 3
//! cargo run --example column -- --width 2 --column 0-1-
//! ```

use clap::Parser;
use minterm_rs::cache::Covers;
use minterm_rs::function::BooleanFunction;
use minterm_rs::reducer::{Minimizer, Reducer};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of input variables.
    #[arg(short, long)]
    width: u32,

    /// Rows where the function is true.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    minterms: Option<Vec<i64>>,

    /// Rows where the function is false.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    maxterms: Option<Vec<i64>>,

    /// Unconstrained rows.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    dontcares: Option<Vec<i64>>,

    /// Output column, row 0 first.
    #[arg(long, allow_hyphen_values = true)]
    column: Option<String>,

    /// Don't-care symbol.
    #[arg(long, allow_hyphen_values = true)]
    dc: Option<String>,

    /// Print debug logs.
    #[arg(short, long)]
    verbose: bool,
}

/// Lists every minterm as its own product term.
struct Canonical {
    vars: Vec<String>,
}

impl Minimizer for Canonical {
    fn generate_covers(&self, function: &BooleanFunction) -> Covers {
        vec![function.minmax_bit_terms().terms]
    }

    fn vars(&self) -> &[String] {
        &self.vars
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut builder = BooleanFunction::builder(args.width);
    if let Some(minterms) = args.minterms {
        builder = builder.minterms(minterms);
    }
    if let Some(maxterms) = args.maxterms {
        builder = builder.maxterms(maxterms);
    }
    if let Some(dontcares) = args.dontcares {
        builder = builder.dontcares(dontcares);
    }
    if let Some(column) = args.column {
        builder = builder.column_string(column);
    }
    if let Some(dc) = args.dc {
        builder = builder.dc(dc);
    }
    let f = builder.build()?;

    println!("column    = {}", f.to_column_string());
    let broken = f.break_column_string();
    println!("minterms  = {:?}", broken.minterms);
    println!("maxterms  = {:?}", broken.maxterms);
    println!("dontcares = {:?}", broken.dontcares);

    let bits = f.minmax_bit_terms();
    println!("{} = {:?}", bits.kind, bits.terms);

    let vars = (1..=f.width()).map(|i| format!("x{}", i)).collect();
    let reducer = Reducer::new(f, Canonical { vars })?;
    println!("covers ({}) = {:?}", reducer.algorithm(), reducer.covers());

    Ok(())
}
