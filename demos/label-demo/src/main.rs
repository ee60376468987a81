//! LINEA label demo
//!
//! Encodes identifiers given as plain arguments and prints their bar
//! strings, then issues a small fresh batch under a fixed prefix against
//! the codes just shown.
//!
//! Usage: label-demo [IDENTIFIER...]

use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use linea_core::Identifier;
use linea_issue::CodeGenerator;
use linea_symbol::{ElementKind, EncodedCode};

const BATCH_PREFIX: &str = "299";
const BATCH_SIZE: usize = 5;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        vec!["9782940199617", "400638133393"]
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut shown = Vec::new();
    for input in inputs {
        match input.parse::<Identifier>() {
            Ok(id) => {
                print_code(&EncodedCode::from_identifier(&id));
                shown.push(id);
            }
            Err(e) => {
                eprintln!("{input}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("=== issuing {BATCH_SIZE} codes under prefix {BATCH_PREFIX} ===");
    let generator = match CodeGenerator::new(BATCH_PREFIX) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = StdRng::from_entropy();
    for _ in 0..BATCH_SIZE {
        match generator.generate(&mut rng, &shown) {
            Ok(id) => {
                println!("{}  ({})", id, id.dashed());
                shown.push(id);
            }
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_code(code: &EncodedCode) {
    println!("=== {} ===", code.label());
    println!("bars:     {}", code.bars());
    println!("elements: {}", code.dashed_bars());
    for element in code.elements() {
        match element.kind {
            ElementKind::NormalGuard => println!("  guard    {}", element.bars),
            ElementKind::CentralGuard => println!("  central  {}", element.bars),
            ElementKind::Digit { value, set } => {
                println!("  {value} ({})    {}", set.letter(), element.bars)
            }
        }
    }
    println!();
}
