use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    blockfall::app::run()
}
