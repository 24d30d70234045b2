use anyhow::Result;
use clap::Parser;
use symloc_core::{find_symbol, SymbolLookup};

/// Report where a symbol will be loaded in an ELF64 executable
#[derive(Parser)]
#[command(
    name = "symloc",
    about = "Look up a symbol's load address in an ELF64 executable",
    version,
    author
)]
struct Cli {
    /// Symbol name to search for
    symbol: String,

    /// Path to the candidate executable
    path: std::path::PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match find_symbol(&cli.symbol, &cli.path)? {
        SymbolLookup::Resolved(addr) => {
            println!("{} will be loaded to 0x{:x}", cli.symbol, addr);
        }
        SymbolLookup::LocalOnly => {
            println!("{} is not a global symbol", cli.symbol);
        }
        SymbolLookup::NotFound => {
            println!("{} not found", cli.symbol);
        }
        SymbolLookup::NotExecutable => {
            println!("{} is not an executable", cli.path.display());
        }
        SymbolLookup::GlobalExternal => {
            println!(
                "{} is a global symbol, but will come from a shared library",
                cli.symbol
            );
        }
    }

    Ok(())
}
