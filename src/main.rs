mod cli;
#[allow(dead_code)]
mod codegen;
mod error;
mod render;
mod syntax;

use std::io::{self, BufRead};
use std::process;

use clap::Parser;

use render::TreePrinter;

fn main() {
    env_logger::init();

    let args = cli::Cli::parse();

    let src = match args.expr {
        Some(expr) => expr,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .expect("Failed to read stdin");
            line
        }
    };

    let tokens = match syntax::tokenize(&src) {
        Ok(tokens) => tokens,
        Err(why) => {
            eprintln!("{why:?}");
            process::exit(1);
        }
    };
    log::debug!("{} tokens", tokens.len());

    let expr = match syntax::parse(&tokens) {
        Ok(expr) => expr,
        Err(why) => {
            eprintln!("{why:?}");
            process::exit(1);
        }
    };

    let mut printer = TreePrinter::new();
    for line in printer.render(&expr) {
        println!("{line}");
    }
}
