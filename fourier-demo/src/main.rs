use anyhow::{Context, Result};
use clap::{App, Arg};
use fourier_transform::{Algorithm, Signal};
use std::io::{self, Write};
use tracing::{debug, info, Level};

/// Samples `sin(2π f t)` at `size` points spaced uniformly over `[0, interval)`.
fn sinusoid(size: usize, interval: f32, frequency: f32) -> Signal {
    let period = interval / size as f32;
    (0..size)
        .map(|i| {
            let t = period * i as f32;
            (std::f64::consts::PI * 2.0 * frequency as f64 * t as f64).sin() as f32
        })
        .collect()
}

fn main() -> Result<()> {
    let matches = App::new("fourier-demo")
        .about("Transforms a sampled sinusoid and prints the magnitude of every bin")
        .arg(
            Arg::with_name("size")
                .long("size")
                .short("n")
                .takes_value(true)
                .default_value("1024")
                .help("Number of samples"),
        )
        .arg(
            Arg::with_name("interval")
                .long("interval")
                .takes_value(true)
                .help("Length T of the sampled interval [0, T) [default: 8π]"),
        )
        .arg(
            Arg::with_name("frequency")
                .long("frequency")
                .short("f")
                .takes_value(true)
                .default_value("10")
                .help("Frequency of the sinusoid"),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .short("a")
                .takes_value(true)
                .possible_values(&["dft", "fft"])
                .default_value("fft"),
        )
        .arg(
            Arg::with_name("hertz")
                .long("hertz")
                .help("Print the frequency of each bin instead of its index"),
        )
        .arg(Arg::with_name("verbose").short("v").multiple(true))
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let size: usize = matches
        .value_of("size")
        .unwrap_or("1024")
        .parse()
        .context("invalid --size")?;
    let frequency: f32 = matches
        .value_of("frequency")
        .unwrap_or("10")
        .parse()
        .context("invalid --frequency")?;
    let interval = match matches.value_of("interval") {
        Some(value) => value.parse::<f32>().context("invalid --interval")?,
        None => 8.0 * std::f32::consts::PI,
    };
    let algorithm: Algorithm = matches
        .value_of("algorithm")
        .unwrap_or("fft")
        .parse()
        .context("invalid --algorithm")?;

    let sample_rate = size as f32 / interval;
    info!(size, interval, frequency, ?algorithm, "transforming sinusoid");
    debug!(sample_rate, "sampling");

    let signal = sinusoid(size, interval, frequency);
    let spectrum = algorithm
        .transform(&signal)
        .with_context(|| format!("{:?} transform failed", algorithm))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, coefficient) in spectrum.iter().enumerate() {
        if matches.is_present("hertz") {
            let bin = index as f32 * sample_rate / size as f32;
            writeln!(out, "{} {}", bin, coefficient.norm())?;
        } else {
            writeln!(out, "{} {}", index, coefficient.norm())?;
        }
    }
    Ok(())
}
