use linkly_card::cli::Cli;

fn main() {
    Cli::run()
}
