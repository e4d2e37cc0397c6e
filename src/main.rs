use shaderbake::compiler::Glslc;
use shaderbake::manifest::BUILTIN_SHADERS;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .parse_env("RUST_LOG")
        .init();

    Glslc::default().run(BUILTIN_SHADERS)?;
    Ok(())
}
