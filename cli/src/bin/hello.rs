use anyhow::Result;

use fixture::Program;

fn main() -> Result<()> {
    fixture::run(
        Program::Hello,
        env!("CARGO_BIN_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}
