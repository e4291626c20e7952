use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use tl_atlas::Direction;

mod app;
mod ui;

#[derive(Parser)]
#[command(
    name = "tailor",
    about = "Avatar clothing customizer and template converter"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a clothing template between the platform layouts without
    /// launching the UI.
    Convert {
        /// Source PNG path.
        input: PathBuf,
        /// `roblox-to-polytoria` or `polytoria-to-roblox`.
        #[arg(long, value_parser = parse_direction)]
        direction: Direction,
        /// Output path; defaults to the fixed template filename next to the
        /// input.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_direction(value: &str) -> Result<Direction, String> {
    match value {
        "roblox-to-polytoria" => Ok(Direction::RobloxToPolytoria),
        "polytoria-to-roblox" => Ok(Direction::PolytoriaToRoblox),
        other => Err(format!(
            "unknown direction `{other}` (expected `roblox-to-polytoria` or `polytoria-to-roblox`)"
        )),
    }
}

fn main() {
    tracing_subscriber::fmt()
    .without_time()
    .compact()
    .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Convert {
            input,
            direction,
            output,
        }) => {
            if let Err(message) = run_convert(&input, direction, output) {
                tracing::error!("{message}");
                std::process::exit(1);
            }
        }
        None => app::run(),
    }
}

fn run_convert(input: &Path, direction: Direction, output: Option<PathBuf>) -> Result<(), String> {
    let bytes =
        std::fs::read(input).map_err(|e| format!("failed to read {}: {e}", input.display()))?;
    let source =
        tl_atlas::decode_rgba_with_timeout(bytes, app::DECODE_TIMEOUT).map_err(|e| e.to_string())?;
    let converted = tl_atlas::convert(&source, direction);
    let encoded = tl_atlas::encode_png(&converted).map_err(|e| e.to_string())?;
    let out_path =
        output.unwrap_or_else(|| input.with_file_name(tl_atlas::template_filename(direction)));
    std::fs::write(&out_path, encoded)
        .map_err(|e| format!("failed to write {}: {e}", out_path.display()))?;
    info!("wrote {}", out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_direction;
    use tl_atlas::Direction;

    #[test]
    fn direction_flags_parse() {
        assert_eq!(
            parse_direction("roblox-to-polytoria").unwrap(),
            Direction::RobloxToPolytoria
        );
        assert_eq!(
            parse_direction("polytoria-to-roblox").unwrap(),
            Direction::PolytoriaToRoblox
        );
        assert!(parse_direction("sideways").is_err());
    }
}
