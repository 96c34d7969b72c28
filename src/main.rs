use chrono::Local;
use clap::Parser;
use dicetallylib::roller::Roller;
use std::io::Write;
use std::process::ExitCode;

/// Roll some dice many times and plot how often each total came up
#[derive(Parser)]
struct Cli {
    /// How many times to roll the dice
    trials: u32,
    /// Number of dice per roll
    dice: u32,
    /// Number of sides of every die
    sides: u32,
    /// How many occurrences a single hash mark stands for
    #[arg(short, long, default_value_t = 1)]
    scale: u32,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    env_logger::builder()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level()).bold();
            writeln!(
                buf,
                "{}|{level_style}{:7}{level_style:#}|{:10}| {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::info!(
        "Rolling {}d{} {} times, scale {}",
        args.dice,
        args.sides,
        args.trials,
        args.scale
    );
    let mut roller = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            Roller::seeded(seed)
        }
        None => Roller::from_os_rng(),
    };
    match roller.plot_rolls(args.trials, args.dice, args.sides, args.scale) {
        Ok(histogram) => {
            log::info!("Plotted {} totals", histogram.rows().len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
