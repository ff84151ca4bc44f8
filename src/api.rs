//! Typed facade over the Web UI's `/sdapi/v1` endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::client::Client;
use crate::config::{resolve_config, SdWebUiOptions};
use crate::error::Result;
use crate::types::{
    CmdFlags, CreateResponse, EmbeddingsResponse, Extension, ExtraBatchImagesOptions,
    ExtraBatchImagesResponse, ExtraSingleImageOptions, ExtraSingleImageResponse, FaceRestorer,
    HyperNetwork, Img2ImgOptions, Img2ImgResponse, InterrogateOptions, InterrogateResponse,
    LatentUpscaleMode, Memory, PngInfoResponse, ProgressResponse, PromptStyle, RealEsrganModel,
    Sampler, Scheduler, ScriptInfo, Scripts, SdModel, SdOptions, SdVae, TrainResponse,
    Txt2ImgOptions, Txt2ImgResponse, Upscaler,
};

/// The `png-info` endpoint expects an object body even when no image is
/// supplied.
#[derive(Serialize)]
struct PngInfoRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

/// Client for the AUTOMATIC1111 Stable Diffusion Web UI API.
///
/// One method per endpoint, with request and response bodies typed by
/// [`crate::types`]. The underlying [`Client`] is reachable through
/// [`SdWebUiClient::client`] for endpoints added by extensions.
#[derive(Debug, Clone)]
pub struct SdWebUiClient {
    client: Client,
}

impl SdWebUiClient {
    /// Creates a client from the given options, reading `SD_API_URL`,
    /// `SD_API_USERNAME` and `SD_API_PASSWORD` for anything not set
    /// explicitly.
    pub fn new(options: SdWebUiOptions) -> Result<Self> {
        let config = resolve_config(&options, |key| std::env::var(key).ok())?;
        Ok(Self {
            client: Client::new(config),
        })
    }

    /// Creates a client configured entirely from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(SdWebUiOptions::default())
    }

    /// Wraps an already configured transport client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns the underlying transport client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    // ── Generation ──────────────────────────────────────────────────

    /// Generates images from a text prompt.
    pub async fn txt2img(&self, options: &Txt2ImgOptions) -> Result<Txt2ImgResponse> {
        self.client
            .post("/sdapi/v1/txt2img", Some(options), None)
            .await
    }

    /// Generates images from source images.
    pub async fn img2img(&self, options: &Img2ImgOptions) -> Result<Img2ImgResponse> {
        self.client
            .post("/sdapi/v1/img2img", Some(options), None)
            .await
    }

    // ── Postprocessing ──────────────────────────────────────────────

    /// Runs upscaling and face restoration on a single image.
    pub async fn extra_single_image(
        &self,
        options: &ExtraSingleImageOptions,
    ) -> Result<ExtraSingleImageResponse> {
        self.client
            .post("/sdapi/v1/extra-single-image", Some(options), None)
            .await
    }

    /// Runs upscaling and face restoration on a batch of images.
    pub async fn extra_batch_images(
        &self,
        options: &ExtraBatchImagesOptions,
    ) -> Result<ExtraBatchImagesResponse> {
        self.client
            .post("/sdapi/v1/extra-batch-images", Some(options), None)
            .await
    }

    /// Reads the generation parameters embedded in a PNG image. The image
    /// is passed as a base64 string.
    pub async fn png_info(&self, image: Option<&str>) -> Result<PngInfoResponse> {
        let request = PngInfoRequest { image };
        self.client
            .post("/sdapi/v1/png-info", Some(&request), None)
            .await
    }

    /// Captions an image with the requested interrogation model.
    pub async fn interrogate(&self, options: &InterrogateOptions) -> Result<InterrogateResponse> {
        self.client
            .post("/sdapi/v1/interrogate", Some(options), None)
            .await
    }

    // ── Job control ─────────────────────────────────────────────────

    /// Reports progress of the currently running job.
    pub async fn progress(&self) -> Result<ProgressResponse> {
        self.client.get("/sdapi/v1/progress", None, None).await
    }

    /// Interrupts the currently running job.
    pub async fn interrupt(&self) -> Result<Value> {
        self.client
            .post("/sdapi/v1/interrupt", None::<&Value>, None)
            .await
    }

    /// Skips the current image of the running job.
    pub async fn skip(&self) -> Result<Value> {
        self.client
            .post("/sdapi/v1/skip", None::<&Value>, None)
            .await
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Reads the server settings when called without a payload, or writes
    /// the given subset of settings when called with one. The raw response
    /// is returned either way; use [`SdWebUiClient::get_options`] and
    /// [`SdWebUiClient::set_options`] for the typed split.
    pub async fn options(&self, options: Option<&SdOptions>) -> Result<Value> {
        match options {
            Some(options) => {
                self.client
                    .post("/sdapi/v1/options", Some(options), None)
                    .await
            }
            None => self.client.get("/sdapi/v1/options", None, None).await,
        }
    }

    /// Reads the server settings.
    pub async fn get_options(&self) -> Result<SdOptions> {
        self.client.get("/sdapi/v1/options", None, None).await
    }

    /// Writes the given settings; fields left unset keep their server-side
    /// values.
    pub async fn set_options(&self, options: &SdOptions) -> Result<Value> {
        self.client
            .post("/sdapi/v1/options", Some(options), None)
            .await
    }

    /// Reports the command-line flags the server was started with.
    pub async fn cmd_flags(&self) -> Result<CmdFlags> {
        self.client.get("/sdapi/v1/cmd-flags", None, None).await
    }

    // ── Enumerations ────────────────────────────────────────────────

    /// Lists the available samplers.
    pub async fn samplers(&self) -> Result<Vec<Sampler>> {
        self.client.get("/sdapi/v1/samplers", None, None).await
    }

    /// Lists the available schedulers.
    pub async fn schedulers(&self) -> Result<Vec<Scheduler>> {
        self.client.get("/sdapi/v1/schedulers", None, None).await
    }

    /// Lists the available upscalers.
    pub async fn upscalers(&self) -> Result<Vec<Upscaler>> {
        self.client.get("/sdapi/v1/upscalers", None, None).await
    }

    /// Lists the available latent upscale modes.
    pub async fn latent_upscale_modes(&self) -> Result<Vec<LatentUpscaleMode>> {
        self.client
            .get("/sdapi/v1/latent-upscale-modes", None, None)
            .await
    }

    /// Lists the installed checkpoints.
    pub async fn sd_models(&self) -> Result<Vec<SdModel>> {
        self.client.get("/sdapi/v1/sd-models", None, None).await
    }

    /// Lists the installed VAEs.
    pub async fn sd_vae(&self) -> Result<Vec<SdVae>> {
        self.client.get("/sdapi/v1/sd-vae", None, None).await
    }

    /// Lists the installed hypernetworks.
    pub async fn hypernetworks(&self) -> Result<Vec<HyperNetwork>> {
        self.client.get("/sdapi/v1/hypernetworks", None, None).await
    }

    /// Lists the available face restorers.
    pub async fn face_restorers(&self) -> Result<Vec<FaceRestorer>> {
        self.client
            .get("/sdapi/v1/face-restorers", None, None)
            .await
    }

    /// Lists the installed RealESRGAN models.
    pub async fn realesrgan_models(&self) -> Result<Vec<RealEsrganModel>> {
        self.client
            .get("/sdapi/v1/realesrgan-models", None, None)
            .await
    }

    /// Lists the saved prompt styles.
    pub async fn prompt_styles(&self) -> Result<Vec<PromptStyle>> {
        self.client.get("/sdapi/v1/prompt-styles", None, None).await
    }

    /// Lists the textual-inversion embeddings, split into those loaded for
    /// the current model and those skipped.
    pub async fn embeddings(&self) -> Result<EmbeddingsResponse> {
        self.client.get("/sdapi/v1/embeddings", None, None).await
    }

    /// Lists the scripts available per tab.
    pub async fn scripts(&self) -> Result<Scripts> {
        self.client.get("/sdapi/v1/scripts", None, None).await
    }

    /// Describes every script and the arguments it accepts.
    pub async fn script_info(&self) -> Result<Vec<ScriptInfo>> {
        self.client.get("/sdapi/v1/script-info", None, None).await
    }

    /// Lists the installed extensions.
    pub async fn extensions(&self) -> Result<Vec<Extension>> {
        self.client.get("/sdapi/v1/extensions", None, None).await
    }

    // ── Model management ────────────────────────────────────────────

    /// Rescans the embeddings directory.
    pub async fn refresh_embeddings(&self) -> Result<Value> {
        self.client
            .post("/sdapi/v1/refresh-embeddings", None::<&Value>, None)
            .await
    }

    /// Rescans the checkpoints directory.
    pub async fn refresh_checkpoints(&self) -> Result<Value> {
        self.client
            .post("/sdapi/v1/refresh-checkpoints", None::<&Value>, None)
            .await
    }

    /// Rescans the VAE directory.
    pub async fn refresh_vae(&self) -> Result<Value> {
        self.client
            .post("/sdapi/v1/refresh-vae", None::<&Value>, None)
            .await
    }

    /// Unloads the current checkpoint from memory.
    pub async fn unload_checkpoint(&self) -> Result<Value> {
        self.client
            .post("/sdapi/v1/unload-checkpoint", None::<&Value>, None)
            .await
    }

    /// Reloads the current checkpoint into memory.
    pub async fn reload_checkpoint(&self) -> Result<Value> {
        self.client
            .post("/sdapi/v1/reload-checkpoint", None::<&Value>, None)
            .await
    }

    // ── Training ────────────────────────────────────────────────────

    /// Creates a textual-inversion embedding. The payload is passed
    /// through as-is; see the Web UI docs for the accepted keys.
    pub async fn create_embedding(&self, options: &Value) -> Result<CreateResponse> {
        self.client
            .post("/sdapi/v1/create/embedding", Some(options), None)
            .await
    }

    /// Creates a hypernetwork.
    pub async fn create_hypernetwork(&self, options: &Value) -> Result<CreateResponse> {
        self.client
            .post("/sdapi/v1/create/hypernetwork", Some(options), None)
            .await
    }

    /// Trains a textual-inversion embedding.
    pub async fn train_embedding(&self, options: &Value) -> Result<TrainResponse> {
        self.client
            .post("/sdapi/v1/train/embedding", Some(options), None)
            .await
    }

    /// Trains a hypernetwork.
    pub async fn train_hypernetwork(&self, options: &Value) -> Result<TrainResponse> {
        self.client
            .post("/sdapi/v1/train/hypernetwork", Some(options), None)
            .await
    }

    // ── Server state ────────────────────────────────────────────────

    /// Reports RAM and CUDA memory usage.
    pub async fn memory(&self) -> Result<Memory> {
        self.client.get("/sdapi/v1/memory", None, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_png_info_request_without_image_is_empty_object() {
        let request = PngInfoRequest { image: None };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
    }

    #[test]
    fn test_png_info_request_with_image() {
        let request = PngInfoRequest {
            image: Some("aGVsbG8="),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"image": "aGVsbG8="})
        );
    }

    #[test]
    fn test_new_with_explicit_options_never_reads_env() {
        let options = SdWebUiOptions::new()
            .with_base_url("http://127.0.0.1:7860")
            .with_username("user")
            .with_password("pass");
        let api = SdWebUiClient::new(options).unwrap();
        assert_eq!(
            api.client().config().base_url().as_str(),
            "http://127.0.0.1:7860/"
        );
        assert_eq!(
            api.client()
                .config()
                .headers()
                .get("Authorization")
                .map(String::as_str),
            Some("Basic dXNlcjpwYXNz")
        );
    }
}
