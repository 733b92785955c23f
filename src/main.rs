use bitpeek::{
    config::Config,
    peek::{force_hex_notice, parse_text, peek},
};
use failure::Error;
use log::{debug, info};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};
use structopt::StructOpt;

/// Show integer literals of various languages in binary, hex, ascii and
/// decimal
#[derive(StructOpt, Debug)]
#[structopt(name = "bitpeek")]
struct Opt {
    /// Literals to peek at, an interactive prompt is started if none are given
    #[structopt(name = "TOKEN", allow_hyphen_values = true)]
    tokens: Vec<String>,
    /// YAML file with display settings (`showBin: false`, `msb0: true`, ...)
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    /// Read every token as hex, for hex dumps
    #[structopt(short = "x", long = "force-hex")]
    force_hex: bool,
    /// Number bits from the most significant end
    #[structopt(long = "msb0")]
    msb0: bool,
    /// Show only the bits, without ruler and labels
    #[structopt(long = "raw-bits")]
    raw_bits: bool,
    /// Keep 64 bit values on a single row
    #[structopt(long = "single-row")]
    single_row: bool,
    #[structopt(long = "group-by-bytes")]
    group_by_bytes: bool,
    /// Show zero bits as `0` instead of `.`
    #[structopt(long = "no-register-view")]
    no_register_view: bool,
}

impl Opt {
    fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        config.force_hex |= self.force_hex;
        config.msb0 |= self.msb0;
        config.raw_bits |= self.raw_bits;
        config.single_row |= self.single_row;
        config.group_by_bytes |= self.group_by_bytes;
        config.register_view &= !self.no_register_view;

        Ok(config)
    }
}

// true if every word was a number
fn print_words<'a>(words: impl Iterator<Item = &'a str>, config: &Config) -> bool {
    let mut all_numbers = true;

    for (i, word) in words.enumerate() {
        if i > 0 {
            println!();
        }

        match parse_text(word, config) {
            Some(v) => println!("{}", peek(&v, config)),
            None => {
                eprintln!("{}: not a number", word);
                all_numbers = false;
            }
        }
    }

    all_numbers
}

fn repl(mut config: Config) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match line.trim() {
            ":hex" => {
                config = config.toggled_force_hex();
                println!("{}", force_hex_notice(&config));
            }
            "" => {}
            line => {
                print_words(line.split_whitespace(), &config);
            }
        }
    }

    println!();
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = Opt::from_args();
    let config = opt.config()?;
    debug!("{:?}", config);

    if opt.tokens.is_empty() {
        info!("no tokens given, reading from stdin");
        repl(config)
    } else {
        if !print_words(opt.tokens.iter().map(String::as_str), &config) {
            std::process::exit(1);
        }
        Ok(())
    }
}
