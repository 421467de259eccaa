use std::{env, fs::read_to_string, time::Instant};

use quill::{display_error, lexer::lexer::Lexer, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let lexer = Lexer::new(file_contents.clone(), Some(String::from(file_name)));
    let (program, errors) = parse(lexer);

    println!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            display_error(error, &file_contents, file_path);
        }
        std::process::exit(1);
    }

    println!("Parsed {} statements", program.statements.len());
    println!("{:#?}", program);
}
