use clap_markdown::help_markdown;
use length_report::cli::Cli;

fn main() {
    println!("# length-report CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `length-report` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
