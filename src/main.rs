use std::error::Error;

use clap::{Parser, ValueEnum};

use tile_map_generator::ascii;
use tile_map_generator::generate::{GenerateResult, MapConfig, ResolvedRequest};
use tile_map_generator::terrain::{LayerKind, EMPTY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Step {
    /// Lower the noise scale by 1 (minimum 1)
    Coarser,
    /// Raise the noise scale by 1
    Finer,
    /// Keep the scale, pick a new random seed
    Reroll,
}

#[derive(Parser, Debug)]
#[command(name = "tile_map_generator")]
#[command(about = "Generate layered tile maps with named sites from seeded noise")]
struct Args {
    /// Width of the map in tiles
    #[arg(short = 'W', long, default_value = "20")]
    width: usize,

    /// Height of the map in tiles
    #[arg(short = 'H', long, default_value = "15")]
    height: usize,

    /// Map seed (random in [0, 1) if not specified)
    #[arg(short, long)]
    seed: Option<f64>,

    /// Noise scale; higher values give larger features (minimum 1)
    #[arg(short = 'n', long, default_value = "10")]
    noise_scale: f64,

    /// Spacing between site candidates, in tiles
    #[arg(long, default_value = "5")]
    stride: usize,

    /// Tile size in pixels, used for label anchor coordinates
    #[arg(long, default_value = "64")]
    tile_size: u32,

    /// Regenerate after the first map, once per step, in order
    #[arg(long, value_enum)]
    step: Vec<Step>,

    /// Print each map as JSON instead of an ASCII preview
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Generation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = MapConfig {
        width: args.width,
        height: args.height,
        tile_size: args.tile_size,
        site_stride: args.stride,
        noise_scale: args.noise_scale,
    };
    let pipeline = config.pipeline();
    let mut rng = rand::thread_rng();

    let mut request = config.request();
    if let Some(seed) = args.seed {
        request = request.with_seed(seed);
    }
    let mut resolved = request.resolve(&mut rng);

    let mut result = pipeline.run(&resolved);
    report(&result, &config, args.json)?;

    for step in &args.step {
        resolved = apply_step(&resolved, *step, &mut rng);
        result = pipeline.run(&resolved);
        report(&result, &config, args.json)?;
    }

    Ok(())
}

fn apply_step(request: &ResolvedRequest, step: Step, rng: &mut impl rand::Rng) -> ResolvedRequest {
    match step {
        Step::Coarser => request.coarser(),
        Step::Finer => request.finer(),
        Step::Reroll => request.reroll(rng),
    }
}

fn report(result: &GenerateResult, config: &MapConfig, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    let request = &result.request;
    println!("Generating map with seed: {}", request.seed);
    println!("Seeds: {}", request.seeds());
    println!("Map size: {}x{}, noise scale: {}", request.width, request.height, request.noise_scale);
    print!("{}", ascii::render_ascii_map(&result.layers, &result.sites));
    println!("{}", ascii::legend());
    for kind in LayerKind::all() {
        let filled = result.layers.layer(*kind).iter().filter(|&(_, _, &c)| c != EMPTY).count();
        println!("  {:<8} {} tiles", kind.name(), filled);
    }
    println!("Placed {} named sites:", result.sites.len());
    for site in &result.sites {
        let (px, py) = site.pixel_center(config.tile_size);
        println!("  ({:>3}, {:>3}) @ {:>5},{:<5} {}", site.x, site.y, px, py, site.label);
    }
    println!();
    Ok(())
}
