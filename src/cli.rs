use std::num::ParseIntError;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use voxquad_quad::{QuadEncoding, ShadingMode};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "voxquad", version, about = "Packed voxel face records to AO-consistent quads")]
pub struct Cli {
    /// Configuration file; missing means defaults.
    #[arg(long, global = true, default_value = "voxquad.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub encoding: Option<EncodingArg>,

    #[arg(long, global = true, value_enum)]
    pub shading: Option<ShadingArg>,

    /// Expansion worker threads (0 = one per core).
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode one face record (and optional AO byte) and print its quad.
    Decode {
        /// Face record, decimal or 0x-prefixed hex.
        #[arg(value_parser = parse_u32)]
        face: u32,
        /// AO record, decimal or 0x-prefixed hex.
        #[arg(value_parser = parse_u8)]
        ao: Option<u8>,
    },
    /// Expand a chunk dump into a vertex stream.
    Expand {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Expand through one multi-draw batch instead of per-chunk draws.
        #[arg(long)]
        batched: bool,
    },
    /// Build a small scene, sample its AO and report the quad splits.
    Demo {
        /// Also write the scene as a chunk dump.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Csv,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    Table,
    Swizzle,
}

impl From<EncodingArg> for QuadEncoding {
    fn from(e: EncodingArg) -> Self {
        match e {
            EncodingArg::Table => QuadEncoding::Table,
            EncodingArg::Swizzle => QuadEncoding::Swizzle,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShadingArg {
    Ao,
    Directional,
}

impl From<ShadingArg> for ShadingMode {
    fn from(s: ShadingArg) -> Self {
        match s {
            ShadingArg::Ao => ShadingMode::AmbientOcclusion,
            ShadingArg::Directional => ShadingMode::Directional,
        }
    }
}

/// Effective settings: config values with command-line overrides applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub encoding: QuadEncoding,
    pub shading: ShadingMode,
    pub threads: usize,
}

impl Settings {
    pub fn resolve(cfg: &Config, cli: &Cli) -> Self {
        Self {
            encoding: cli.encoding.map(Into::into).unwrap_or(cfg.render.encoding),
            shading: cli.shading.map(Into::into).unwrap_or(cfg.render.shading),
            threads: cli.threads.unwrap_or(cfg.runtime.threads),
        }
    }
}

fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn parse_u8(s: &str) -> Result<u8, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
