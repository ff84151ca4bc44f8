//! Print what the server has installed: models, samplers, upscalers,
//! styles and current memory usage.
//!
//! Requires a running Web UI instance started with `--api`, reachable at
//! `SD_API_URL` (falls back to http://127.0.0.1:7860).
//!
//! ```sh
//! cargo run --example server_info
//! ```

use sdwebui_rs::{SdWebUiClient, SdWebUiOptions};

fn gib(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0 * 1024.0)
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("SD_API_URL").unwrap_or_else(|_| "http://127.0.0.1:7860".to_string());
    let api = SdWebUiClient::new(SdWebUiOptions::new().with_base_url(&base_url))?;

    let models = api.sd_models().await?;
    println!("Checkpoints ({}):", models.len());
    for model in &models {
        println!("  {}", model.title);
    }

    let samplers = api.samplers().await?;
    println!("Samplers ({}):", samplers.len());
    for sampler in samplers.iter().take(8) {
        println!("  {}", sampler.name);
    }

    let upscalers = api.upscalers().await?;
    println!("Upscalers ({}):", upscalers.len());
    for upscaler in &upscalers {
        match upscaler.scale {
            Some(scale) => println!("  {} (x{})", upscaler.name, scale),
            None => println!("  {}", upscaler.name),
        }
    }

    let styles = api.prompt_styles().await?;
    println!("Prompt styles: {}", styles.len());

    let memory = api.memory().await?;
    if let (Some(used), Some(total)) = (memory.ram.used, memory.ram.total) {
        println!("RAM: {:.1} / {:.1} GiB", gib(used), gib(total));
    }
    if let (Some(used), Some(total)) = (memory.cuda.system.used, memory.cuda.system.total) {
        println!("VRAM: {:.1} / {:.1} GiB", gib(used), gib(total));
    }

    Ok(())
}
