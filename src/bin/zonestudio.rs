use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zonestudio::{
    AssetStore as _, BackendConfig, Canvas, CreateProfile, CreateProject, FORMAT_PRESETS, Format,
    GRID_PRESETS, GridOpts, HttpBackend, PipelineType, ProjectStore as _, RenderService as _,
    Studio, StyleProfileService as _, Zone, build_render_request, generate_grid,
    inspect_render_sized, validate_partition,
};

#[derive(Parser, Debug)]
#[command(name = "zonestudio", version)]
struct Cli {
    /// Backend base URL (overrides ZONESTUDIO_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List format and grid presets.
    Presets,
    /// Generate a zone layout as JSON.
    Grid(GridArgs),
    /// Print the render request for a layout file.
    Request(LayoutArgs),
    /// Render a layout file through the backend and save the PNG.
    Render(RenderArgs),
    /// Upload an asset.
    Upload {
        /// File to upload.
        file: PathBuf,
    },
    /// Create a style profile, optionally analyzing it.
    Profile(ProfileArgs),
    /// Project commands.
    #[command(subcommand)]
    Project(ProjectCommand),
}

#[derive(Parser, Debug)]
struct GridArgs {
    /// Grid preset key (`2h`, `4q`, ...).
    #[arg(long)]
    preset: String,

    /// Format preset key; alternative to --width/--height.
    #[arg(long, conflicts_with_all = ["width", "height"])]
    format: Option<String>,

    /// Canvas width.
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Canvas height.
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Gap between cells in pixels.
    #[arg(long, default_value_t = zonestudio::DEFAULT_GAP_PX)]
    gap: u32,

    /// Project id to stamp on the zones.
    #[arg(long)]
    project: Option<String>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Layout JSON as printed by `zonestudio grid`.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    layout: LayoutArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ProfileArgs {
    /// Profile name.
    #[arg(long)]
    name: String,

    /// Server-side reference image path (repeatable).
    #[arg(long = "image", required = true)]
    images: Vec<String>,

    /// Run the analysis right away.
    #[arg(long, default_value_t = false)]
    analyze: bool,
}

#[derive(Subcommand, Debug)]
enum ProjectCommand {
    /// Create a project.
    New {
        /// Project name.
        #[arg(long)]
        name: String,
        /// Pipeline type (`static`, `photo_direction`, `video_reel`).
        #[arg(long = "type", default_value = "static")]
        pipeline_type: String,
        /// Initial brief.
        #[arg(long, default_value = "")]
        brief: String,
        /// Style profile id.
        #[arg(long)]
        style_profile: Option<String>,
    },
    /// Show a project's pipeline and zones.
    Show {
        /// Project id.
        id: String,
    },
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
struct LayoutFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
    width: u32,
    height: u32,
    zones: Vec<Zone>,
}

impl LayoutFile {
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read layout '{}'", path.display()))?;
        let layout: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parse layout '{}'", path.display()))?;
        validate_partition(&layout.zones, layout.canvas()?)?;
        Ok(layout)
    }

    fn canvas(&self) -> anyhow::Result<Canvas> {
        Ok(Canvas::new(self.width, self.height)?)
    }

    fn project_id(&self) -> anyhow::Result<&str> {
        self.project_id
            .as_deref()
            .context("layout has no project_id; generate it with `grid --project <id>`")
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = BackendConfig::from_env();
    if let Some(url) = &cli.api_url {
        cfg = cfg.with_base_url(url);
    }

    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Grid(args) => cmd_grid(args),
        Command::Request(args) => cmd_request(args),
        Command::Render(args) => cmd_render(args, cfg),
        Command::Upload { file } => print_json(&HttpBackend::new(cfg)?.upload(&file)?),
        Command::Profile(args) => cmd_profile(args, cfg),
        Command::Project(cmd) => cmd_project(cmd, cfg),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("encode json")?
    );
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("formats:");
    for p in &FORMAT_PRESETS {
        println!("  {:<10} {:>5} x {:<5} {}", p.key, p.width, p.height, p.label);
    }
    println!("grids:");
    for g in &GRID_PRESETS {
        let ratios = g
            .ratios
            .map(|r| format!(" ratios {r:?}"))
            .unwrap_or_default();
        println!("  {:<10} {} x {} {}{}", g.key, g.rows, g.cols, g.label, ratios);
    }
    Ok(())
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let format = match (&args.format, args.width, args.height) {
        (Some(key), _, _) => Format::preset(key)?,
        (None, Some(w), Some(h)) => Format::custom(w, h)?,
        _ => anyhow::bail!("pass --format or both --width and --height"),
    };
    let canvas = format.canvas()?;
    let mut zones = generate_grid(&args.preset, canvas, GridOpts { gap: args.gap });
    if zones.is_empty() {
        anyhow::bail!("unknown grid preset '{}'", args.preset);
    }
    if let Some(project) = &args.project {
        for z in &mut zones {
            z.project_id = Some(project.clone());
        }
    }
    print_json(&LayoutFile {
        project_id: args.project,
        width: canvas.width,
        height: canvas.height,
        zones,
    })
}

fn cmd_request(args: LayoutArgs) -> anyhow::Result<()> {
    let layout = LayoutFile::from_path(&args.in_path)?;
    let req = build_render_request(layout.project_id()?, layout.canvas()?, &layout.zones)?;
    print_json(&req)
}

fn cmd_render(args: RenderArgs, cfg: BackendConfig) -> anyhow::Result<()> {
    let layout = LayoutFile::from_path(&args.layout.in_path)?;
    let req = build_render_request(layout.project_id()?, layout.canvas()?, &layout.zones)?;

    let backend = HttpBackend::new(cfg)?;
    let rendered = backend.render(&req)?;
    let bytes = backend.fetch_rendered(&rendered.render_id)?;
    let image = inspect_render_sized(bytes, rendered.width, rendered.height)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &image.bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{}, render {})",
        args.out.display(),
        image.width,
        image.height,
        rendered.render_id
    );
    Ok(())
}

fn cmd_profile(args: ProfileArgs, cfg: BackendConfig) -> anyhow::Result<()> {
    let backend = HttpBackend::new(cfg)?;
    let created = backend.create_profile(&CreateProfile {
        name: args.name,
        source_image_paths: args.images,
    })?;
    if !args.analyze {
        return print_json(&created);
    }
    print_json(&backend.analyze_profile(&created.id)?)
}

fn cmd_project(cmd: ProjectCommand, cfg: BackendConfig) -> anyhow::Result<()> {
    let backend = HttpBackend::new(cfg)?;
    match cmd {
        ProjectCommand::New {
            name,
            pipeline_type,
            brief,
            style_profile,
        } => {
            let pipeline_type: PipelineType = pipeline_type.parse()?;
            print_json(&backend.create_project(&CreateProject {
                name,
                pipeline_type,
                style_profile_id: style_profile,
                brief,
            })?)
        }
        ProjectCommand::Show { id } => {
            let record = backend.project(&id)?;
            let mut studio = Studio::new();
            studio.load_project(&record);

            println!("{} ({}, {})", record.name, record.id, record.pipeline_type.as_str());
            for step in studio.steps() {
                let marker = if step.step_number == studio.current_step() {
                    ">"
                } else {
                    " "
                };
                println!(
                    "{marker} {:>2} {:<18} {:?}",
                    step.step_number, step.name, step.status
                );
            }
            for zone in studio.zones() {
                let b = zone.bounds;
                println!(
                    "  zone {:>2} {:<8} {}x{} at {},{}",
                    zone.order,
                    zone.role.as_str(),
                    b.width,
                    b.height,
                    b.x,
                    b.y
                );
            }
            Ok(())
        }
    }
}
