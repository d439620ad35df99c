//! Command-line argument parsing for the warp mesh generator.
//!
//! The accepted syntax is a handful of single-letter flags. Anything that is
//! not one of them is skipped, and a value flag with nothing after it is
//! ignored, so the token stream is filtered before clap sees it.

use std::ffi::OsString;

use clap::Parser;
use glam::UVec2;

use crate::error::ConfigError;
use crate::params::{WarpParams, effective_resolution};

/// Usage text printed for `-h`.
pub const HELP_TEXT: &str = "\
WarpMesh, a tool to create fulldome dedicated warping mesh, for Blender
Parameters:
    -r : set the square resolution of the mesh (default: 5)
    -f : set the target field of view, in degrees (default: 180.0)
    -z : set the shift ratio between lens and head positions (default: 0.4)
    -a : set the aspect ratio (default: 1.0)
    -s : do not display summary of parameters, only final result
    -h : display this help
";

/// Flags that consume the following token as their value.
const VALUE_FLAGS: [&str; 4] = ["-r", "-f", "-z", "-a"];

/// Warp mesh command-line arguments.
///
/// CLI values override [`WarpParams::default`]. The last occurrence of a
/// repeated flag wins. Numbers are read from the start of their token, so
/// `-r 5.7` means 5 and `-f 90deg` means 90. Floating-point values are read
/// at single precision.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(
    name = "warpmesh",
    about = "Fulldome warping mesh generator",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct CliArgs {
    /// Square resolution of the mesh, rounded to the next odd value.
    #[arg(short = 'r', value_parser = leading_int)]
    pub resolution: Option<i32>,

    /// Target field of view, in degrees.
    #[arg(short = 'f', value_parser = leading_float)]
    pub fov_degrees: Option<f32>,

    /// Shift ratio between lens and head positions.
    #[arg(short = 'z', value_parser = leading_float)]
    pub z_shift_ratio: Option<f32>,

    /// Aspect ratio applied to the output x coordinate.
    #[arg(short = 'a', value_parser = leading_float)]
    pub aspect: Option<f32>,

    /// Only print the mesh, without the parameter summary.
    #[arg(short = 's')]
    pub silent: bool,

    /// Print usage and exit.
    #[arg(short = 'h')]
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments with the tool's permissive rules.
    ///
    /// The first item is the program name, as with [`Parser::parse_from`].
    /// Tokens that are not valid UTF-8 are never flags and are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Cli`] when a recognised flag carries a value
    /// that does not start with a number.
    pub fn parse_permissive<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("warpmesh"));
        let tokens = recognized_tokens(args);
        Self::try_parse_from(std::iter::once(program).chain(tokens)).map_err(ConfigError::Cli)
    }
}

/// Walk the raw tokens left to right and keep only the ones the tool knows.
///
/// Values are glued to their flag (`-r=7`) so that values starting with a
/// hyphen are never mistaken for flags. Everything after `-h` is dropped,
/// since help is printed as soon as it is reached.
fn recognized_tokens(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let args: Vec<OsString> = args.into_iter().collect();
    let mut kept = Vec::with_capacity(args.len());
    let mut i = 0;

    while i < args.len() {
        match args[i].to_str() {
            Some(flag) if VALUE_FLAGS.contains(&flag) && i + 1 < args.len() => {
                let mut glued = OsString::from(format!("{flag}="));
                glued.push(&args[i + 1]);
                kept.push(glued);
                i += 2;
            }
            Some("-s") => {
                kept.push(args[i].clone());
                i += 1;
            }
            Some("-h") => {
                kept.push(args[i].clone());
                break;
            }
            _ => {
                tracing::trace!(token = ?args[i], "skipping unrecognized argument");
                i += 1;
            }
        }
    }

    kept
}

/// Read the integer at the start of `value`, ignoring whatever follows.
///
/// Leading whitespace and a sign are allowed; at least one digit is required.
fn leading_int(value: &str) -> Result<i32, String> {
    let s = value.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(format!("'{value}' does not start with an integer"));
    }
    s[..sign_len + digits]
        .parse()
        .map_err(|e| format!("'{value}': {e}"))
}

/// Read the longest single-precision number at the start of `value`.
fn leading_float(value: &str) -> Result<f32, String> {
    let s = value.trim_start();
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| s[..end].parse::<f32>().ok())
        .ok_or_else(|| format!("'{value}' does not start with a number"))
}

impl WarpParams {
    /// Apply CLI overrides on top of the current values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidResolution`] if `-r` rounds to an empty grid.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(r) = args.resolution {
            self.resolution = UVec2::splat(effective_resolution(i64::from(r))?);
        }
        if let Some(fov) = args.fov_degrees {
            self.set_output_fov_degrees(f64::from(fov));
        }
        if let Some(z) = args.z_shift_ratio {
            self.z_shift_ratio = f64::from(z);
        }
        if let Some(a) = args.aspect {
            self.aspect = f64::from(a);
        }
        if args.silent {
            self.silent = true;
        }
        Ok(())
    }

    /// Defaults with the given CLI overrides applied.
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut params = Self::default();
        params.apply_cli_overrides(args)?;
        Ok(params)
    }
}
