use hamming74::cs::ecc::{ErrorClassAnalyzer, HammingConfig, Report};
use hamming74::{Error, Result};

fn main() -> Result<()> {
    env_logger::init();

    // Optional information word as a binary string, e.g. `hamming_report 0110`
    let config = match std::env::args().nth(1) {
        Some(arg) => HammingConfig::with_information_word(parse_word(&arg)?),
        None => HammingConfig::default(),
    };

    let analyzer = ErrorClassAnalyzer::new(config)?;
    print!("{}", Report::generate(&analyzer));
    Ok(())
}

fn parse_word(arg: &str) -> Result<u64> {
    u64::from_str_radix(arg, 2).map_err(|e| {
        Error::InvalidInput(format!(
            "information word must be binary, got {:?}: {}",
            arg, e
        ))
    })
}
