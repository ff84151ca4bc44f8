//! # sdwebui-rs
//!
//! Async Rust client for the [AUTOMATIC1111 Stable Diffusion Web UI](https://github.com/AUTOMATIC1111/stable-diffusion-webui)
//! REST API.
//!
//! Provides a typed method for every `/sdapi/v1` endpoint: generation,
//! postprocessing, job control, settings, model management and training.
//! Requests ride on a reusable JSON transport with basic-auth support and
//! environment-based configuration.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sdwebui_rs::{SdWebUiClient, SdWebUiOptions, Txt2ImgOptions};
//!
//! # async fn example() -> sdwebui_rs::Result<()> {
//! let api = SdWebUiClient::new(
//!     SdWebUiOptions::new().with_base_url("http://127.0.0.1:7860"),
//! )?;
//!
//! let response = api
//!     .txt2img(&Txt2ImgOptions {
//!         prompt: Some("a red fox in the snow, highly detailed".into()),
//!         negative_prompt: Some("lowres, blurry".into()),
//!         steps: Some(20),
//!         width: Some(512),
//!         height: Some(512),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for (i, image) in response.images.iter().enumerate() {
//!     println!("image {i}: {} base64 bytes", image.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Credentials and the server address can also come from the environment
//! (`SD_API_URL`, `SD_API_USERNAME`, `SD_API_PASSWORD`):
//!
//! ```no_run
//! # async fn example() -> sdwebui_rs::Result<()> {
//! let api = sdwebui_rs::SdWebUiClient::from_env()?;
//! let models = api.sd_models().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use api::SdWebUiClient;
pub use client::{BodyValue, Client, Query, RequestOptions};
pub use config::{resolve_config, ClientConfig, SdWebUiOptions};
pub use error::{Result, SdWebUiError};
pub use types::{
    CmdFlags, ExtraBatchImagesOptions, ExtraSingleImageOptions, Img2ImgOptions,
    InterrogateOptions, SdOptions, Txt2ImgOptions, Txt2ImgResponse,
};
