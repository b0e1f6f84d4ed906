use clap::{Parser, Subcommand};
use pyts_transpiler::{Options, ParseError, convert_with};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "pyts")]
#[command(about = "pyts - TypeScript declarations from Python definitions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript from .py definition files
    Convert {
        /// Path to a .py file or directory
        #[arg(required_unless_present = "stdin")]
        input: Option<PathBuf>,

        /// Directory for generated .ts files (defaults to alongside the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Read from stdin and write to stdout
        #[arg(long)]
        stdin: bool,

        /// Output the full conversion result as JSON
        #[arg(long)]
        json: bool,

        /// Fail on the first malformed definition instead of skipping it
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output, stdin, json, strict } => {
            let options = Options { strict, ..Options::default() };
            if stdin {
                convert_stdin(json, &options);
            } else if let Some(path) = input {
                convert_path(&path, output.as_deref(), &options);
            } else {
                eprintln!("Error: provide a file/directory or use --stdin");
                std::process::exit(1);
            }
        }
    }
}

fn convert_stdin(json_output: bool, options: &Options) {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source).expect("Failed to read stdin");

    match convert_with(&source, options) {
        Ok(result) => {
            if json_output {
                println!("{}", serde_json::to_string(&result).unwrap());
            } else {
                print!("{}", result.code);
            }
        }
        Err(err) => {
            report_error(&err, &source, "<stdin>");
            std::process::exit(1);
        }
    }
}

fn convert_path(path: &Path, output: Option<&Path>, options: &Options) {
    if path.is_file() {
        if path.extension().map_or(true, |ext| ext != "py") {
            eprintln!("Error: {} is not a .py file", path.display());
            std::process::exit(1);
        }
        let start = Instant::now();
        if !convert_file(path, output, options) {
            std::process::exit(1);
        }
        print_summary(1, start.elapsed());
    } else if path.is_dir() {
        convert_directory(path, output, options);
    } else {
        eprintln!("Error: {} does not exist", path.display());
        std::process::exit(1);
    }
}

fn convert_directory(dir: &Path, output: Option<&Path>, options: &Options) {
    let start = Instant::now();
    let mut file_count = 0;
    let mut failures = 0;

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "py"))
        .filter(|e| e.path().file_name().map_or(false, |name| name != "__init__.py"))
    {
        if convert_file(entry.path(), output, options) {
            file_count += 1;
        } else {
            failures += 1;
        }
    }

    if file_count == 0 && failures == 0 {
        eprintln!("No .py files found in {}", dir.display());
        std::process::exit(1);
    }

    print_summary(file_count, start.elapsed());
    if failures > 0 {
        std::process::exit(1);
    }
}

fn convert_file(path: &Path, output: Option<&Path>, options: &Options) -> bool {
    let source = fs::read_to_string(path).expect("Failed to read file");

    match convert_with(&source, options) {
        Ok(result) => {
            let sibling = path.with_extension("ts");
            let target = match output {
                Some(dir) => {
                    fs::create_dir_all(dir).expect("Failed to create output directory");
                    dir.join(sibling.file_name().expect("file path has a name"))
                }
                None => sibling,
            };
            fs::write(&target, &result.code).expect("Failed to write file");
            print_generated(&target.display().to_string());
            true
        }
        Err(err) => {
            report_error(&err, &source, &path.display().to_string());
            false
        }
    }
}

fn report_error(err: &ParseError, source: &str, filename: &str) {
    if io::stderr().is_terminal() {
        eprint!("{}", err.render_color(source, filename));
    } else {
        eprint!("{}", err.render(source, filename));
    }
}

fn print_generated(path: &str) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}", path);
    } else {
        eprintln!("  ✓ {}", path);
    }
}

fn print_summary(count: usize, elapsed: std::time::Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);
    let files_word = if count == 1 { "file" } else { "files" };

    if is_tty {
        eprintln!("\n\x1b[1m✨ Generated {} {} in {}\x1b[0m", count, files_word, time_str);
    } else {
        eprintln!("\n✨ Generated {} {} in {}", count, files_word, time_str);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
