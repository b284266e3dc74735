use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use byteout::{Config, Error, Locale, Result, locate_with};

const USAGE: &str =
    "usage: byteout [--json] [--locale en|zh-CN] [--no-context] [--save-defaults] <FILE|->";

/// Command-line options, with defaults taken from the config file
#[derive(Debug)]
struct Options {
    /// Only optional when `save_defaults` is set
    path: Option<String>,
    json: bool,
    locale: Locale,
    show_context: bool,
    save_defaults: bool,
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>, config: &Config) -> Result<Self> {
        let mut path = None;
        let mut json = false;
        let mut locale = config.locale;
        let mut show_context = config.show_context;
        let mut save_defaults = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => json = true,
                "--no-context" => show_context = false,
                "--save-defaults" => save_defaults = true,
                "--locale" => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::Usage("--locale needs a value".to_string()))?;
                    locale = value.parse()?;
                }
                "-h" | "--help" => return Err(Error::Usage(USAGE.to_string())),
                _ if path.is_none() => path = Some(arg),
                _ => return Err(Error::Usage(format!("unexpected argument '{}'", arg))),
            }
        }

        if path.is_none() && !save_defaults {
            return Err(Error::Usage(USAGE.to_string()));
        }
        Ok(Options {
            path,
            json,
            locale,
            show_context,
            save_defaults,
        })
    }

    /// The settings that `--save-defaults` persists
    fn defaults(&self) -> Config {
        Config {
            locale: self.locale,
            show_context: self.show_context,
        }
    }
}

fn read_input(path: &str) -> Result<(String, String)> {
    if path == "-" {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        return Ok((contents, "<stdin>".to_string()));
    }

    let contents = fs::read_to_string(path)?;
    let filename = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());
    Ok((contents, filename))
}

/// Returns whether the input was valid JSON
fn run(options: &Options, path: &str) -> Result<bool> {
    let (contents, filename) = read_input(path)?;

    let err = match serde_json::from_str::<serde_json::Value>(&contents) {
        Ok(_) => {
            println!("{}", options.locale.valid(&filename));
            return Ok(true);
        }
        Err(e) => e,
    };

    match locate_with(&err, &contents, options.locale) {
        Some(diagnostic) if options.json => {
            println!("{}", serde_json::to_string_pretty(&diagnostic)?);
        }
        Some(diagnostic) => {
            print!(
                "{}",
                diagnostic.render(&contents, &filename, options.locale, options.show_context)
            );
        }
        None => println!("{}: {}", options.locale.failed_to_parse(&filename), err),
    }

    Ok(false)
}

fn main() -> ExitCode {
    let config = Config::load();

    let options = match Options::parse(env::args().skip(1), &config) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    if options.save_defaults {
        match options.defaults().save() {
            Ok(path) => eprintln!("Saved defaults to {}", path.display()),
            Err(e) => {
                eprintln!("✗ Failed to save config: {}", e);
                return ExitCode::from(2);
            }
        }
    }

    let Some(path) = options.path.as_deref() else {
        return ExitCode::SUCCESS;
    };

    match run(&options, path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::from(2)
        }
    }
}
