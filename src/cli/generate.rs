//! Favicon generation pipeline.
//!
//! Resolves the emoji token, renders the base bitmap, and writes the PNG
//! and ICO artifacts in that order.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;

use crate::emoji;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{render_glyph, resize_set, write_ico, write_png, BASE_SIZE, ICO_SIZES};

/// Generate favicon assets from an emoji
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Favicon destination
    #[arg(short, long, value_name = "PATH", default_value = "./favicon.ico")]
    pub destination: PathBuf,

    /// Choose emoji (an alias like ":tada:" or a literal character)
    #[arg(short, long, default_value = "✨")]
    pub emoji: String,

    /// PNG output path
    #[arg(short, long, value_name = "PATH", default_value = "./favicon.png")]
    pub png: PathBuf,
}

/// Wall-clock cost of each pipeline stage.
struct StageTimings {
    render: Duration,
    png: Duration,
    resize: Duration,
    ico: Duration,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let started = Instant::now();

    // An unknown alias must abort before anything touches the filesystem.
    let glyph = emoji::resolve(&args.emoji)?;
    if glyph != args.emoji {
        printer.info("Resolved", &format!("{} as {}", args.emoji, glyph));
    }

    printer.status(
        "Rendering",
        &format!("{} ({}x{})", glyph, BASE_SIZE, BASE_SIZE),
    );
    let stage = Instant::now();
    let base = render_glyph(&glyph, BASE_SIZE)?;
    let render = stage.elapsed();

    printer.status("Writing", &display_path(&args.png));
    let stage = Instant::now();
    write_png(&base, &args.png)?;
    let png = stage.elapsed();

    let stage = Instant::now();
    let variants = resize_set(&base);
    let resize = stage.elapsed();

    let sizes = ICO_SIZES.map(|s| s.to_string()).join(", ");
    printer.status(
        "Writing",
        &format!(
            "{} {}",
            display_path(&args.destination),
            printer.dim(&format!("({})", sizes))
        ),
    );
    let stage = Instant::now();
    write_ico(&variants, &args.destination)?;
    let ico = stage.elapsed();

    let timings = StageTimings {
        render,
        png,
        resize,
        ico,
    };
    print_summary(&args, started.elapsed(), &timings);

    Ok(())
}

/// Success summary on stdout: both output paths, total elapsed seconds,
/// and the per-stage breakdown.
fn print_summary(args: &GenerateArgs, elapsed: Duration, timings: &StageTimings) {
    println!("Saved {}", display_path(&args.destination));
    println!("Saved {}", display_path(&args.png));
    println!("Elapsed: {:.3}s", elapsed.as_secs_f64());
    println!(
        "Breakdown: render {:.1}ms, png {:.1}ms, resize {:.1}ms, ico {:.1}ms",
        ms(timings.render),
        ms(timings.png),
        ms(timings.resize),
        ms(timings.ico),
    );
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FavemojiError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn args_for(dir: &Path, emoji: &str) -> GenerateArgs {
        GenerateArgs {
            destination: dir.join("out.ico"),
            emoji: emoji.to_string(),
            png: dir.join("out.png"),
        }
    }

    #[test]
    fn test_generate_from_alias() {
        let dir = tempdir().unwrap();

        run(args_for(dir.path(), "sparkles"), &Printer::new()).unwrap();

        let png = image::open(dir.path().join("out.png")).unwrap().to_rgba8();
        assert_eq!(png.width(), 256);
        assert_eq!(png.height(), 256);

        let file = fs::File::open(dir.path().join("out.ico")).unwrap();
        let icon_dir = ico::IconDir::read(file).unwrap();
        let sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, vec![16, 32, 48, 64, 128, 256]);
    }

    #[test]
    fn test_generate_from_literal_glyph() {
        let dir = tempdir().unwrap();

        run(args_for(dir.path(), "🎉"), &Printer::new()).unwrap();

        assert!(dir.path().join("out.ico").exists());
        assert!(dir.path().join("out.png").exists());
    }

    #[test]
    fn test_unknown_alias_writes_nothing() {
        let dir = tempdir().unwrap();

        let result = run(args_for(dir.path(), ":not_a_real_emoji:"), &Printer::new());

        match result {
            Err(FavemojiError::UnknownEmoji { id }) => assert_eq!(id, "not_a_real_emoji"),
            other => panic!("expected UnknownEmoji, got {:?}", other),
        }
        assert!(!dir.path().join("out.ico").exists());
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempdir().unwrap();

        run(args_for(dir.path(), "sparkles"), &Printer::new()).unwrap();
        let first_ico = fs::read(dir.path().join("out.ico")).unwrap();
        let first_png = fs::read(dir.path().join("out.png")).unwrap();

        run(args_for(dir.path(), "sparkles"), &Printer::new()).unwrap();
        assert_eq!(first_ico, fs::read(dir.path().join("out.ico")).unwrap());
        assert_eq!(first_png, fs::read(dir.path().join("out.png")).unwrap());
    }
}
