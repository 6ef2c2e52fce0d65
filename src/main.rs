//! CLI entry point for smarttree

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::{Parser, ValueEnum};
use smarttree::tree::{DEFAULT_FOLD_THRESHOLD, DEFAULT_MAX_DEPTH};
use smarttree::{OutputConfig, RenderConfig, StopRules, TreeError, TreeFormatter, TreeRenderer};

/// Set by the Ctrl-C handler, polled by the renderer between lines.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Exit status for a walk cancelled with Ctrl-C.
const EXIT_INTERRUPTED: i32 = 130;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "smarttree")]
#[command(about = "Smart Tree: context-aware directory visualizer for developers")]
#[command(version)]
struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Max recursion depth
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,

    /// Fold directories with more than N subdirectories
    #[arg(short, long, default_value_t = DEFAULT_FOLD_THRESHOLD)]
    fold: usize,

    /// Do not hide or fold anything (disables smart features)
    #[arg(short, long)]
    all: bool,

    /// Show hidden files and folders
    #[arg(long)]
    hidden: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let config = RenderConfig {
            max_depth: self.depth,
            fold_threshold: self.fold,
            show_hidden: self.hidden,
            rules: StopRules::default(),
        };
        if self.all {
            config.show_everything()
        } else {
            config
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst)) {
        eprintln!("smarttree: warning: cannot install Ctrl-C handler: {}", e);
    }

    let config = args.render_config();
    let mut formatter = TreeFormatter::stdout(&OutputConfig {
        use_color: should_use_color(args.color),
    });
    let result = TreeRenderer::new(&config)
        .with_interrupt(&INTERRUPTED)
        .render(&args.path, &mut formatter);

    match result {
        Ok(()) => {}
        Err(TreeError::Interrupted) => {
            eprintln!("\nAborted.");
            process::exit(EXIT_INTERRUPTED);
        }
        Err(TreeError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e @ (TreeError::NotFound(_) | TreeError::NotADirectory(_))) => {
            eprintln!("smarttree: Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("smarttree: {}", e);
            process::exit(1);
        }
    }
}
