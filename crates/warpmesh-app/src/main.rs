//! The `warpmesh` binary: prints a fulldome warp mesh on stdout.

use std::io::{self, BufWriter, Write};

use warpmesh_config::{CliArgs, ConfigError, HELP_TEXT, WarpParams};
use warpmesh_mesh::{WarpMesh, write_mesh, write_summary};

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write mesh: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    warpmesh_log::init_logging(warpmesh_log::DEFAULT_FILTER);

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse_permissive(std::env::args_os())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.help {
        out.write_all(HELP_TEXT.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let params = WarpParams::from_cli(&args)?;
    if !params.silent {
        write_summary(&mut out, &params)?;
    }

    let mesh = WarpMesh::generate(&params);
    write_mesh(&mut out, &mesh, params.aspect)?;
    out.flush()?;

    tracing::info!(
        width = mesh.width(),
        height = mesh.height(),
        "warp mesh written"
    );
    Ok(())
}
