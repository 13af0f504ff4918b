//! This is the command line tool that loads '.dot' files, rebuilds the graphs,
//! and saves them as DOT text or renders them with GraphViz.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, ArgAction, Command};
use dotgraph::core::utils::{read_text_file, save_to_file};
use dotgraph::gv;
use dotgraph::gv::{DotParser, GraphBuilder};
use dotgraph::model::Dot;
use std::process;

struct CLIOptions {
    output_path: Option<String>,
    format: Option<String>,
    prog: String,
    simplify: bool,
    suppress_disconnected: bool,
    debug_mode: bool,
}

impl CLIOptions {
    pub fn new() -> Self {
        Self {
            output_path: None,
            format: None,
            prog: "dot".to_string(),
            simplify: false,
            suppress_disconnected: false,
            debug_mode: false,
        }
    }
}

fn generate_output(graphs: &[Dot], options: &CLIOptions) -> Result<(), String> {
    let mut content: Vec<u8> = Vec::new();
    for dot in graphs {
        dot.set_simplify(options.simplify);
        dot.set_suppress_disconnected(options.suppress_disconnected);

        let bytes = match &options.format {
            Some(format) => dot
                .create_with(&options.prog, &[], format)
                .map_err(|err| err.to_string())?,
            None => dot.to_dot_string().into_bytes(),
        };
        content.extend(bytes);
    }

    match &options.output_path {
        Some(path) => {
            if let Result::Err(err) = save_to_file(path, &content) {
                log::error!("Could not write the file {}", path);
                return Err(err.to_string());
            }
            log::info!("Wrote {}", path);
        }
        None => {
            print!("{}", String::from_utf8_lossy(&content));
        }
    }
    Ok(())
}

fn main() {
    let matches = Command::new("dotgraph")
        .version("0.1.0")
        .about("Parses DOT files and writes them back, or renders them")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enables debug logging"),
        )
        .arg(
            Arg::new("ast")
                .short('a')
                .long("ast")
                .action(ArgAction::SetTrue)
                .help("Dump the graph AST"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the output file"),
        )
        .arg(
            Arg::new("format")
                .short('T')
                .long("format")
                .value_name("FORMAT")
                .help("Render with GraphViz in this format instead of writing DOT"),
        )
        .arg(
            Arg::new("prog")
                .short('K')
                .long("prog")
                .value_name("PROGRAM")
                .default_value("dot")
                .help("The GraphViz program that renders the graph"),
        )
        .arg(
            Arg::new("simplify")
                .long("simplify")
                .action(ArgAction::SetTrue)
                .help("Drop duplicate edges"),
        )
        .arg(
            Arg::new("suppress-disconnected")
                .long("suppress-disconnected")
                .action(ArgAction::SetTrue)
                .help("Drop nodes that are not connected to an edge"),
        )
        .arg(
            Arg::new("INPUT")
                .help("Sets the input file to use")
                .required(true)
                .index(1),
        )
        .get_matches();

    let mut cli = CLIOptions::new();
    cli.debug_mode = matches.get_flag("debug");
    cli.simplify = matches.get_flag("simplify");
    cli.suppress_disconnected = matches.get_flag("suppress-disconnected");
    cli.output_path = matches.get_one::<String>("output").cloned();
    cli.format = matches.get_one::<String>("format").cloned();
    if let Some(prog) = matches.get_one::<String>("prog") {
        cli.prog = prog.clone();
    }

    let mut logger = env_logger::builder();
    logger.format_timestamp(None);
    if cli.debug_mode {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let dump_ast = matches.get_flag("ast");

    // INPUT is required, so clap has already rejected a missing value.
    let input_path = match matches.get_one::<String>("INPUT") {
        Some(path) => path.clone(),
        None => process::exit(2),
    };
    let contents = match read_text_file(&input_path) {
        Ok(contents) => contents,
        Err(err) => {
            log::error!("Can't open the file {}: {}", input_path, err);
            process::exit(1);
        }
    };
    let mut parser = DotParser::new(&contents);

    let tree = parser.process();

    match tree {
        Result::Err(err) => {
            parser.print_error();
            log::error!("Error: {}", err);
            process::exit(1);
        }

        Result::Ok(graphs) => {
            if dump_ast {
                gv::dump_ast(&graphs);
            }
            let mut gb = GraphBuilder::new();
            for g in &graphs {
                gb.visit_graph(g);
            }
            if let Err(err) = generate_output(&gb.get(), &cli) {
                log::error!("{}", err);
                process::exit(1);
            }
        }
    }
}
