mod cli;
mod config;
mod demo;
mod dump;
mod logging;
mod output;

use std::error::Error;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use voxquad_codec::{ChunkOrigin, Direction, decode_ao, decode_face};
use voxquad_quad::{build_face, diagonal, should_flip};
use voxquad_runtime::{DrawBatcher, ExpandPool};

use crate::cli::{Cli, Command, Format, Settings};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    logging::init(cli.log_file.as_deref())?;
    let cfg = config::load_or_default(&cli.config)?;
    logging::set_level(&cfg.log.level, cli.log_file.as_deref())?;
    let settings = Settings::resolve(&cfg, &cli);
    log::debug!("settings: {:?}", settings);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command {
        Command::Decode { face, ao } => decode(&mut out, settings, face, ao.unwrap_or(0))?,
        Command::Expand {
            path,
            format,
            batched,
        } => {
            let dump = dump::load_dump_from_path(&path)?;
            let vertices = if batched {
                let mut batcher = DrawBatcher::new();
                for draw in dump.draws() {
                    batcher.push_draw(&draw)?;
                }
                log::info!("batched {} draws", batcher.draws().len());
                batcher.expand(settings.encoding)?
            } else {
                let pool = ExpandPool::new(settings.threads, settings.encoding)?;
                let mut all = Vec::new();
                for result in pool.expand_all(&dump.draws()) {
                    all.extend(result?);
                }
                all
            };
            output::write_vertices(&mut out, &vertices, settings.shading, format)?;
        }
        Command::Demo { out: dump_path } => {
            let scene = demo::mesh_scene(&demo::scene_voxels());
            let stats = demo::split_stats(&scene);
            log::info!("demo scene: {} chunks", scene.chunks.len());
            writeln!(
                out,
                "{} faces, {} with occlusion, {} using the flipped diagonal",
                stats.faces, stats.occluded, stats.flipped
            )?;
            let pool = ExpandPool::new(settings.threads, settings.encoding)?;
            for (chunk, result) in scene.chunks.iter().zip(pool.expand_all(&scene.draws())) {
                let vertices = result?;
                let mean = if vertices.is_empty() {
                    0.0
                } else {
                    vertices.iter().map(|v| settings.shading.light_factor(v)).sum::<f32>()
                        / vertices.len() as f32
                };
                writeln!(
                    out,
                    "chunk {:?}: {} vertices, mean light {:.3}",
                    <[i32; 3]>::from(chunk.origin),
                    vertices.len(),
                    mean
                )?;
            }
            if let Some(path) = dump_path {
                dump::write_dump_to_path(&scene, &path)?;
                log::info!("wrote scene dump to {}", path.display());
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn decode<W: Write>(
    out: &mut W,
    settings: Settings,
    packed: u32,
    ao: u8,
) -> Result<(), Box<dyn Error>> {
    let face = decode_face(packed);
    let corners = decode_ao(ao);
    writeln!(out, "offset   {:?}", face.local_offset)?;
    writeln!(out, "texture  {}", face.texture_index)?;
    match Direction::try_from(face.direction) {
        Ok(dir) => writeln!(out, "direction {} ({:?})", face.direction, dir)?,
        Err(e) => {
            writeln!(out, "direction {} (invalid)", face.direction)?;
            return Err(e.into());
        }
    }
    let flipped = should_flip(corners);
    let note = if flipped { " (flipped)" } else { "" };
    writeln!(out, "ao       {:?} split {:?}{}", corners, diagonal(flipped), note)?;
    let vertices = build_face(settings.encoding, &face, ChunkOrigin::default(), corners);
    output::write_vertices(out, &vertices, settings.shading, Format::Text)?;
    Ok(())
}
