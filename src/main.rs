use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = media_manager::cli::parse();
    app::run(args)
}
