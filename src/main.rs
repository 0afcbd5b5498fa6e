use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;

use channel_shuffle::image_pipeline::{
    BatchObserver, Channel, ChannelMap, ChannelShufflePipeline, FileQueue, OutputFormat,
    PipelineTimings, ProcessResult, TransformConfig, collect_inputs,
};
use channel_shuffle::logger;

/// Resize images to a target long side and remap/invert their RGBA channels.
#[derive(Parser)]
#[command(name = "channel-shuffle", version)]
struct Cli {
    /// Image files or directories (png, jpg, jpeg, bmp, tga)
    #[arg(value_name = "INPUTS", required = true)]
    inputs: Vec<PathBuf>,

    /// Maximum length of the longer side; smaller images are left as-is.
    /// Presets are 1024, 512 and 256.
    #[arg(short, long, value_name = "PX", default_value_t = 1024)]
    size: u32,

    /// Source channel for the output red channel
    #[arg(long, value_name = "CH", default_value = "r")]
    red: Channel,

    /// Source channel for the output green channel
    #[arg(long, value_name = "CH", default_value = "g")]
    green: Channel,

    /// Source channel for the output blue channel
    #[arg(long, value_name = "CH", default_value = "b")]
    blue: Channel,

    /// Source channel for the output alpha channel
    #[arg(long, value_name = "CH", default_value = "a")]
    alpha: Channel,

    #[arg(long)]
    invert_red: bool,

    #[arg(long)]
    invert_green: bool,

    #[arg(long)]
    invert_blue: bool,

    #[arg(long)]
    invert_alpha: bool,

    /// Output format: png, tga or jpg (ignored with --overwrite)
    #[arg(short, long, value_name = "FMT", default_value = "tga")]
    format: OutputFormat,

    /// Replace each source file, keeping its path and format
    #[arg(long)]
    overwrite: bool,

    /// Write outputs directly instead of via a temporary file and rename.
    /// An interrupted write can then destroy the source in --overwrite mode.
    #[arg(long)]
    in_place_unsafe: bool,

    /// Print per-stage timings for each file
    #[arg(long)]
    timings: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn transform_config(&self) -> anyhow::Result<TransformConfig> {
        let map = ChannelMap::new(
            [self.red, self.green, self.blue, self.alpha],
            [
                self.invert_red,
                self.invert_green,
                self.invert_blue,
                self.invert_alpha,
            ],
        );

        Ok(TransformConfig::builder()
            .target_size(self.size)
            .channel_map(map)
            .overwrite_source(self.overwrite)
            .output_format(self.format)
            .atomic_write(!self.in_place_unsafe)
            .build()?)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Prints a progress line per file and the result line once it is done.
struct ConsoleProgress {
    show_timings: bool,
}

impl BatchObserver for ConsoleProgress {
    fn on_file_start(&mut self, index: usize, total: usize, input: &Path) {
        let percent = (index + 1) * 100 / total;
        println!("[{}/{} {:>3}%] {}", index + 1, total, percent, file_name(input));
    }

    fn on_file_done(
        &mut self,
        _index: usize,
        _total: usize,
        result: &ProcessResult,
        timings: Option<&PipelineTimings>,
    ) {
        println!("  {}", result.report_line());
        if let (true, Some(timings)) = (self.show_timings, timings) {
            println!("  {}", timings.summary_line());
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = cli.transform_config()?;
    info!(
        size = config.target_size,
        channels = %config.channel_map,
        overwrite = config.overwrite_source,
        format = %config.output_format,
        "Transform settings"
    );

    let files = collect_inputs(&cli.inputs).context("could not enumerate inputs")?;
    if files.is_empty() {
        bail!("no image files found in the given inputs");
    }

    let mut queue = FileQueue::new();
    queue.extend(files);

    let pipeline = ChannelShufflePipeline::new(config);
    let mut progress = ConsoleProgress {
        show_timings: cli.timings,
    };
    let report = queue.run(&pipeline, &mut progress, None);

    println!("Done: {}", report.summary());
    if report.failed() > 0 {
        println!("Failed files:");
        for failure in report.failures() {
            println!("  {}", failure.report_line());
        }
    }
    Ok(report.failed() == 0)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(if cli.verbose { "debug" } else { "info" });

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
