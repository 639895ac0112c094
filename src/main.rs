//! ctfft-check: load a complex signal and its expected spectrum, transform, and compare.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use ctfft::options::{BitReverseAlgorithm, Options};
use ctfft::samples::SampleFile;
use ctfft::{fft_32_with_opts, mismatches, Mismatch};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Run the forward FFT over sample files and check the result against the expected spectrum.
#[derive(Parser, Debug)]
#[command(name = "ctfft-check", version, about)]
struct Config {
    /// Real parts of the input signal.
    input_re: PathBuf,

    /// Imaginary parts of the input signal.
    input_im: PathBuf,

    /// Real parts of the expected spectrum.
    expected_re: PathBuf,

    /// Imaginary parts of the expected spectrum.
    expected_im: PathBuf,

    /// Write the real parts of the computed spectrum here.
    #[arg(long)]
    output_re: Option<PathBuf>,

    /// Write the imaginary parts of the computed spectrum here.
    #[arg(long)]
    output_im: Option<PathBuf>,

    /// Largest accepted absolute difference per sample.
    #[arg(short, long, default_value = "1e-3", env = "CTFFT_EPSILON")]
    epsilon: f32,

    /// Bit reversal algorithm for the pre-pass.
    #[arg(long, value_enum, default_value = "table")]
    bit_reverse: BitReverseArg,

    /// Only print the verdict.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum BitReverseArg {
    Table,
    MaskWalk,
}

impl From<BitReverseArg> for BitReverseAlgorithm {
    fn from(arg: BitReverseArg) -> Self {
        match arg {
            BitReverseArg::Table => BitReverseAlgorithm::Table,
            BitReverseArg::MaskWalk => BitReverseAlgorithm::MaskWalk,
        }
    }
}

fn load(path: &Path) -> Result<SampleFile> {
    SampleFile::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn print_complex_data(reals: &[f32], imags: &[f32]) {
    let row = |data: &[f32]| {
        data.iter()
            .map(|x| format!("{x:.2}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("\tReal: {}", row(reals));
    println!("\tImag: {}", row(imags));
}

fn print_arr(data: &[f32]) {
    let items = data
        .iter()
        .map(|x| format!("{x:.3}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{{{items}}}");
}

/// Compare one component, printing both rows when it is off.
fn check(name: &str, actual: &[f32], expected: &[f32], epsilon: f32, quiet: bool) -> bool {
    let off: Vec<Mismatch<f32>> = mismatches(actual, expected, epsilon);
    if off.is_empty() {
        return true;
    }

    info!(component = name, count = off.len(), first = off[0].index, "mismatch");
    if !quiet {
        print!("Expected: ");
        print_arr(expected);
        print!("Got     : ");
        print_arr(actual);
    }
    false
}

fn run(config: &Config) -> Result<bool> {
    let input_re = load(&config.input_re)?;
    let input_im = load(&config.input_im)?;
    let expected_re = load(&config.expected_re)?;
    let expected_im = load(&config.expected_im)?;

    let n = input_re.rows();
    for (file, path) in [
        (&input_re, &config.input_re),
        (&input_im, &config.input_im),
        (&expected_re, &config.expected_re),
        (&expected_im, &config.expected_im),
    ] {
        ensure!(
            file.rows() == n && file.len() >= n,
            "{} holds {} samples, expected {n}",
            path.display(),
            file.rows()
        );
    }

    let mut reals = input_re.data[..n].to_vec();
    let mut imags = input_im.data[..n].to_vec();
    let expected_reals = &expected_re.data[..n];
    let expected_imags = &expected_im.data[..n];

    if !config.quiet {
        println!("---Input Data, N = {n}");
        print_complex_data(&reals, &imags);
        println!("---Expected:");
        print_complex_data(expected_reals, expected_imags);
    }

    let opts = Options::with_bit_reverse(config.bit_reverse.into());
    fft_32_with_opts(&mut reals, &mut imags, &opts).context("transform failed")?;

    if !config.quiet {
        println!("---Frequency Domain:");
        print_complex_data(&reals, &imags);
    }

    if let Some(path) = &config.output_re {
        SampleFile::from_samples(reals.clone()).save(path)?;
    }
    if let Some(path) = &config.output_im {
        SampleFile::from_samples(imags.clone()).save(path)?;
    }

    let re_ok = check("real", &reals, expected_reals, config.epsilon, config.quiet);
    let im_ok = check("imag", &imags, expected_imags, config.epsilon, config.quiet);
    let passed = re_ok && im_ok;
    println!(
        "Test Case 1: {}",
        if passed { "Passed" } else { "Failed" }
    );
    Ok(passed)
}

/// Log filter built from `RUST_LOG` style directives, warnings only when there are none.
fn log_filter(directives: &str) -> EnvFilter {
    if directives.trim().is_empty() {
        EnvFilter::new(LevelFilter::WARN.to_string())
    } else {
        EnvFilter::new(directives)
    }
}

fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        let config = Config::try_parse_from([
            "ctfft-check",
            "re.txt",
            "im.txt",
            "exp_re.txt",
            "exp_im.txt",
            "--bit-reverse",
            "mask-walk",
            "--epsilon",
            "0.01",
        ])
        .unwrap();
        assert_eq!(config.epsilon, 0.01);
        assert_eq!(
            BitReverseAlgorithm::from(config.bit_reverse),
            BitReverseAlgorithm::MaskWalk
        );
        assert!(config.output_re.is_none());
    }

    #[test]
    fn log_level_follows_directives() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("ctfft=trace").max_level_hint(), Some(LevelFilter::TRACE));
        assert_eq!(log_filter("error").max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn end_to_end() {
        let dir = std::env::temp_dir().join(format!("ctfft-check-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let write = |name: &str, data: Vec<f32>| {
            let path = dir.join(name);
            SampleFile::from_samples(data).save(&path).unwrap();
            path
        };

        let s = std::f32::consts::SQRT_2;
        let config = Config {
            input_re: write("re", (1..=8).map(|i| i as f32).collect()),
            input_im: write("im", vec![0.0; 8]),
            expected_re: write("exp_re", vec![36.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0, -4.0]),
            expected_im: write(
                "exp_im",
                vec![
                    0.0,
                    4.0 * (1.0 + s),
                    4.0,
                    4.0 * (s - 1.0),
                    0.0,
                    -4.0 * (s - 1.0),
                    -4.0,
                    -4.0 * (1.0 + s),
                ],
            ),
            output_re: Some(dir.join("out_re")),
            output_im: None,
            epsilon: 1e-3,
            bit_reverse: BitReverseArg::Table,
            quiet: true,
        };

        assert!(run(&config).unwrap());
        assert_eq!(SampleFile::load(dir.join("out_re")).unwrap().data[0], 36.0);

        let config = Config {
            expected_im: write("bad_im", vec![1.0; 8]),
            ..config
        };
        assert!(!run(&config).unwrap());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
