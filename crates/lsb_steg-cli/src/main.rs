//! lsbsteg - Hide and extract secret messages in images
//!
//! A command-line front end for the `lsb_steg` codec. Images are loaded with
//! the `image` crate and flattened to 8-bit RGB before encoding or decoding.

use clap::{Parser, Subcommand};
use image::RgbImage;
use lsb_steg::{
    capacity_bits, lsb_decode_default, lsb_encode_default, max_message_len, required_bits,
    StegError, FORMAT_VERSION, TERMINATOR,
};
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lsbsteg")]
#[command(version)]
#[command(about = "Hide and extract secret messages in images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in an image
    Encode {
        /// Carrier image (PNG, BMP, TIFF, GIF, WebP, JPEG)
        input: PathBuf,

        /// Output image; use a lossless format such as PNG
        #[arg(short, long)]
        output: PathBuf,

        /// Message text
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        message: Option<String>,

        /// Read the message from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Write to a lossy format even though it destroys the message
        #[arg(long)]
        allow_lossy: bool,
    },

    /// Extract a hidden message from an image
    Decode {
        /// Encoded image
        input: PathBuf,

        /// Write the message to a file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how much text an image can hold
    Info {
        /// Image file
        input: PathBuf,
    },
}

/// Whether an output path can carry hidden bits.
#[derive(Debug, PartialEq, Eq)]
enum OutputFormat {
    Lossless,
    Lossy,
    Unknown(String),
}

fn classify_output(path: &Path) -> Result<OutputFormat, String> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .ok_or_else(|| format!("'{}' has no extension (e.g. .png)", path.display()))?;
    Ok(match ext.as_str() {
        "png" | "bmp" | "tif" | "tiff" | "webp" => OutputFormat::Lossless,
        // GIF output is palette-quantized, which rewrites the low bits
        "jpg" | "jpeg" | "gif" => OutputFormat::Lossy,
        _ => OutputFormat::Unknown(ext),
    })
}

fn load_rgb(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;
    let rgb = img.to_rgb8();
    debug!(
        "Loaded '{}' ({}x{}, {:?})",
        path.display(),
        rgb.width(),
        rgb.height(),
        img.color()
    );
    Ok(rgb)
}

fn read_message(message: Option<String>, file: Option<PathBuf>) -> Result<String, Box<dyn Error>> {
    let text = match (message, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?,
        (None, None) => return Err("Please provide either --message or --file".into()),
    };
    if text.is_empty() {
        return Err("Please enter a message".into());
    }
    Ok(text)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lsbsteg=info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Hide `text` in the image at `input` and save the result to `output`.
fn run_encode(
    input: &Path,
    output: &Path,
    text: &str,
    allow_lossy: bool,
) -> Result<(), Box<dyn Error>> {
    match classify_output(output)? {
        OutputFormat::Lossless => {}
        OutputFormat::Lossy if allow_lossy => {
            warn!("'{}' is lossy; the hidden message will not survive", output.display());
        }
        OutputFormat::Lossy => {
            return Err(format!(
                "'{}' is a lossy format and would destroy the hidden message; \
                 save as PNG instead or pass --allow-lossy",
                output.display()
            )
            .into());
        }
        OutputFormat::Unknown(ext) => {
            warn!("Unknown format '.{}'; hidden data needs a lossless format such as PNG", ext);
        }
    }

    let carrier = load_rgb(input)?;
    let (width, height) = carrier.dimensions();
    let pixels = (width as usize) * (height as usize);

    info!(
        "Encoding {} characters into '{}' ({}x{}), {} of {} bits",
        text.chars().count(),
        input.display(),
        width,
        height,
        required_bits(text.chars().count()),
        capacity_bits(pixels)
    );

    let encoded = lsb_encode_default(carrier.as_raw(), text).map_err(|e| match e {
        StegError::CapacityExceeded { .. } => format!(
            "{}; this image holds at most {} characters",
            e,
            max_message_len(pixels)
        ),
        other => other.to_string(),
    })?;

    let img = RgbImage::from_raw(width, height, encoded)
        .ok_or("Failed to create image from encoded data")?;
    img.save(output)
        .map_err(|e| format!("Failed to save '{}': {}", output.display(), e))?;

    info!("Message hidden in '{}'", output.display());
    Ok(())
}

/// Recover the message hidden in the image at `input`.
fn run_decode(input: &Path) -> Result<String, Box<dyn Error>> {
    let carrier = load_rgb(input)?;
    info!("Decoding '{}'", input.display());

    let message = match lsb_decode_default(carrier.as_raw()) {
        Ok(message) => message,
        Err(StegError::NoHiddenMessage) => {
            return Err(format!("No hidden message found in '{}'", input.display()).into());
        }
        Err(e) => return Err(e.into()),
    };

    info!("Recovered {} characters", message.chars().count());
    Ok(message)
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            message,
            file,
            allow_lossy,
        } => {
            let text = read_message(message, file)?;
            run_encode(&input, &output, &text, allow_lossy)?;
        }

        Commands::Decode { input, output } => {
            let message = run_decode(&input)?;

            match output {
                Some(path) => {
                    fs::write(&path, message.as_bytes())?;
                    info!("Written message to '{}'", path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(message.as_bytes())?;
                    stdout.write_all(b"\n")?;
                }
            }
        }

        Commands::Info { input } => {
            let carrier = load_rgb(&input)?;
            let (width, height) = carrier.dimensions();
            let pixels = (width as usize) * (height as usize);

            println!("Image:        {}", input.display());
            println!("Dimensions:   {}x{}", width, height);
            println!("Capacity:     {} bits", capacity_bits(pixels));
            println!("Max message:  {} characters", max_message_len(pixels));
            println!("Format:       v{} (terminator {:?})", FORMAT_VERSION, TERMINATOR);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh scratch directory per test, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("lsbsteg-{}-{}", name, std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).expect("create scratch dir");
            Self(dir)
        }

        fn path(&self, file: &str) -> PathBuf {
            self.0.join(file)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn write_gradient(path: &Path, width: u32, height: u32) {
        RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
        })
        .save(path)
        .expect("write carrier");
    }

    #[test]
    fn test_classify_output() {
        assert_eq!(classify_output(Path::new("out.png")), Ok(OutputFormat::Lossless));
        assert_eq!(classify_output(Path::new("OUT.BMP")), Ok(OutputFormat::Lossless));
        assert_eq!(classify_output(Path::new("photo.jpg")), Ok(OutputFormat::Lossy));
        assert_eq!(classify_output(Path::new("photo.JPEG")), Ok(OutputFormat::Lossy));
        assert_eq!(classify_output(Path::new("x.gif")), Ok(OutputFormat::Lossy));
        assert_eq!(
            classify_output(Path::new("x.qoi")),
            Ok(OutputFormat::Unknown("qoi".to_string()))
        );
        assert!(classify_output(Path::new("noext")).is_err());
    }

    #[test]
    fn test_encode_refuses_gif_output() {
        let dir = ScratchDir::new("gif");
        let input = dir.path("carrier.png");
        let output = dir.path("encoded.gif");
        write_gradient(&input, 64, 64);

        let err = run_encode(&input, &output, "meet at noon", false).unwrap_err();
        assert!(err.to_string().contains("lossy"), "unexpected error: {err}");
        assert!(!output.exists());
    }

    #[test]
    fn test_encode_decode_png_file() {
        let dir = ScratchDir::new("png");
        let input = dir.path("carrier.png");
        let output = dir.path("encoded.png");
        write_gradient(&input, 64, 64);

        run_encode(&input, &output, "meet at noon", false).unwrap();
        assert_eq!(run_decode(&output).unwrap(), "meet at noon");
    }

    #[test]
    fn test_decode_plain_image_reports_no_message() {
        let dir = ScratchDir::new("plain");
        let input = dir.path("carrier.png");
        write_gradient(&input, 64, 64);

        let err = run_decode(&input).unwrap_err();
        assert!(err.to_string().starts_with("No hidden message found"));
    }

    #[test]
    fn test_encode_oversize_message_reports_limit() {
        let dir = ScratchDir::new("oversize");
        let input = dir.path("carrier.png");
        let output = dir.path("encoded.png");
        // 8x8 = 64 pixels = 192 bits = 24 bytes, 13 of them terminator
        write_gradient(&input, 8, 8);

        let err = run_encode(&input, &output, &"x".repeat(12), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "message too long for this image: needs 200 bits, carrier holds 192; \
             this image holds at most 11 characters"
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_read_message() {
        assert_eq!(read_message(Some("hi".into()), None).unwrap(), "hi");
        assert!(read_message(Some(String::new()), None).is_err());
        assert!(read_message(None, None).is_err());
    }

    #[test]
    fn test_cli_parses_encode() {
        let cli = Cli::try_parse_from(["lsbsteg", "encode", "in.png", "-o", "out.png", "-m", "secret"])
            .unwrap();
        match cli.command {
            Commands::Encode {
                message,
                allow_lossy,
                ..
            } => {
                assert_eq!(message.as_deref(), Some("secret"));
                assert!(!allow_lossy);
            }
            _ => panic!("expected encode"),
        }
    }

    #[test]
    fn test_cli_encode_needs_message_or_file() {
        assert!(Cli::try_parse_from(["lsbsteg", "encode", "in.png", "-o", "out.png"]).is_err());
        assert!(Cli::try_parse_from([
            "lsbsteg", "encode", "in.png", "-o", "out.png", "-m", "a", "-f", "msg.txt"
        ])
        .is_err());
    }
}
