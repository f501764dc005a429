use atty::Stream;
use cfn_intrinsics::intrinsics::mappings::*;
use cfn_intrinsics::intrinsics::{encoder, resolve_token, short_form_to_long};
use cfn_intrinsics::render::{render, resolve_document, write_rendered, OutputFormat};
use clap::{ArgAction, Parser, Subcommand};
use console::style;
use log::debug;
use serde_json::{Map, Value};
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token for an intrinsic function, e.g. `encode GetAtt MyQueue Arn`
    Encode {
        /// Function name, short (GetAtt) or long (Fn::GetAtt)
        function: String,

        /// Function arguments. Join and Select take the delimiter/index first
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the intrinsic a token stands for, or the string itself if it is not a token
    Decode { token: String },

    /// Resolve every token in a JSON template
    Resolve {
        /// Template to read. Defaults to stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// File to write. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args.command) {
        eprintln!("{} {}", style("✘").red(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Encode { function, args } => {
            println!("{}", encode(&function, &args)?);
        }
        Command::Decode { token } => match resolve_token(&token) {
            Some(resolved) => println!("{}", serde_json::to_string_pretty(&resolved)?),
            None => {
                debug!("{} is not an intrinsic token", token);
                println!("{}", token);
            }
        },
        Command::Resolve {
            input,
            output,
            format,
        } => {
            let contents = read_input(input.as_ref())?;
            let rendered = render(&resolve_document(&contents)?, format)?;
            write_rendered(&rendered, output.as_deref())?;
            if let Some(path) = output {
                eprintln!("{} {}", style("✔").green(), path.display());
            }
        }
    }
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String, Box<dyn Error>> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None if atty::is(Stream::Stdin) => {
            Err("No template given: pass --input or pipe a template on stdin".into())
        }
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

fn encode(function: &str, args: &[String]) -> Result<String, Box<dyn Error>> {
    let name = short_form_to_long(function)
        .ok_or_else(|| format!("Unsupported intrinsic function: {}", function))?;

    let token = match (name, args) {
        (REF, [logical_name]) => encoder::ref_(logical_name),
        (FN_GET_ATT, [logical_name, attribute]) => encoder::get_att(logical_name, attribute),
        (FN_IMPORT_VALUE, [export]) => encoder::import_value(export),
        (FN_BASE64, [input]) => encoder::base64(input),
        (FN_CIDR, [ip_block, count, cidr_bits]) => encoder::cidr(ip_block, count, cidr_bits),
        (FN_FIND_IN_MAP, [map_name, top, second]) => encoder::find_in_map(map_name, top, second),
        (FN_GET_AZS, []) => encoder::get_azs(""),
        (FN_GET_AZS, [region]) => encoder::get_azs(region),
        (FN_JOIN, [delimiter, values @ ..]) => encoder::join(delimiter, values),
        (FN_SELECT, [index, list @ ..]) => encoder::select(index, list),
        (FN_SPLIT, [delimiter, source]) => encoder::split(delimiter, source),
        (FN_SUB, [template]) => encoder::sub(template),
        (FN_TRANSFORM, [macro_name]) => encoder::transform(macro_name, Map::new()),
        (FN_TRANSFORM, [macro_name, parameters]) => {
            let parameters: Map<String, Value> = serde_json::from_str(parameters)?;
            encoder::transform(macro_name, parameters)
        }
        _ => {
            return Err(format!(
                "Wrong number of arguments for {}: got {}",
                name,
                args.len()
            )
            .into())
        }
    };
    Ok(token)
}
