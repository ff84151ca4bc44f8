//! Generate a single image from a text prompt and save it to disk.
//!
//! Requires a running Web UI instance started with `--api`, reachable at
//! `SD_API_URL` (falls back to http://127.0.0.1:7860).
//!
//! ```sh
//! cargo run --example txt2img
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sdwebui_rs::{SdWebUiClient, SdWebUiOptions, Txt2ImgOptions};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("SD_API_URL").unwrap_or_else(|_| "http://127.0.0.1:7860".to_string());
    let api = SdWebUiClient::new(SdWebUiOptions::new().with_base_url(&base_url))?;

    // Show which checkpoint will do the work
    let options = api.get_options().await?;
    if let Some(checkpoint) = &options.sd_model_checkpoint {
        println!("Using checkpoint: {}", checkpoint);
    }

    println!("Generating...");
    let response = api
        .txt2img(&Txt2ImgOptions {
            prompt: Some("a red fox in the snow, highly detailed, nature photography".into()),
            negative_prompt: Some("lowres, blurry, bad anatomy".into()),
            steps: Some(20),
            cfg_scale: Some(7.0),
            width: Some(512),
            height: Some(512),
            ..Default::default()
        })
        .await?;

    if response.images.is_empty() {
        eprintln!("Server returned no images");
        return Ok(());
    }

    // The info field is a JSON string with the effective parameters
    let info: serde_json::Value = serde_json::from_str(&response.info)?;
    println!("Seed: {}", info["seed"]);

    let bytes = BASE64.decode(&response.images[0])?;
    std::fs::write("txt2img.png", &bytes)?;
    println!("Saved: txt2img.png ({} bytes)", bytes.len());

    Ok(())
}
