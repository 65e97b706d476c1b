use clap::Parser;

/// Report how many characters bot-description-400.txt is away from 400
///
/// Reads bot-description-400.txt from the current directory, trims
/// surrounding whitespace, and prints the character count, the number of
/// characters to add or remove, and the trimmed content.
#[derive(Parser, Debug)]
#[command(name = "length-report", author, version)]
pub struct Cli {}
