use std::io;

fn main() -> io::Result<()> {
    bin32::cli::run()
}
