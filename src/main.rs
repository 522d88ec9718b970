use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use float_decode::ieee754::{decode, SplitFields};
use float_decode::{BitString, ParseMode};

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    print!("Insert the binary float: ");
    io::stdout().flush().context("flushing the prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading the binary float")?;

    let bits = line.trim().parse::<BitString>()?;
    let fields = SplitFields::split(&bits)?;

    println!("\nBinary ---");
    println!(
        "Sign: {} Exponent: {} Fraction: {}",
        fields.sign(),
        fields.exponent(),
        fields.fraction()
    );

    println!("\nDecimal ---");
    println!(
        "Sign: {:.0} Exponent: {:.0} Fraction: {:.6}",
        fields.sign().magnitude(ParseMode::Integer),
        fields.exponent().magnitude(ParseMode::Integer),
        fields.fraction().magnitude(ParseMode::Fractional)
    );

    let value = decode(&fields);
    println!("Result: {:.6}", value.to_f64());

    Ok(())
}
