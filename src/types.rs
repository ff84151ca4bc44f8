//! Request and response shapes for the Stable Diffusion Web UI API.
//!
//! Option records follow partial-set semantics: every optional field is an
//! `Option` that is skipped during serialization when unset, so a request
//! carries only the fields the caller actually assigned and the server's
//! defaults apply to the rest. Open server records (`SdOptions`, `CmdFlags`,
//! `OverrideSettings`) also capture unknown keys in a flattened `extra` map,
//! since the server adds and removes settings across versions.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

// ── Generation requests ─────────────────────────────────────────────

/// Options for the `txt2img` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Txt2ImgOptions {
    /// Positive prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Negative prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    /// Prompt style names to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<String>>,
    /// Seed; -1 asks the server to pick one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subseed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subseed_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_resize_from_h: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_resize_from_w: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<String>,
    /// Images per batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    /// Number of batches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_iter: Option<u32>,
    /// Sampling steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Classifier-free guidance scale: how closely the generation follows
    /// the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_faces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_save_samples: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_save_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<f64>,
    /// How much noise the sampler removes; drives img2img strength and the
    /// highres second pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denoising_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_min_uncond: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_churn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_noise: Option<f64>,
    /// Settings overridden for this request only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_settings: Option<OverrideSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_settings_restore_afterwards: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refiner_checkpoint: Option<String>,
    /// Fraction of steps after which the refiner checkpoint takes over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refiner_switch_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_extra_networks: Option<bool>,
    /// Base64 image for the first pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstpass_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Map<String, Value>>,
    /// Enable the highres fix second pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_hr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstphase_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstphase_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_upscaler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_second_pass_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_resize_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_resize_y: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_checkpoint_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_sampler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_scheduler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_task_id: Option<String>,
    /// Legacy alias for `sampler_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler_index: Option<String>,
    /// Script to run for this generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_args: Option<Vec<Value>>,
    /// Return the generated images in the response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_images: Option<bool>,
    /// Save the generated images on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images: Option<bool>,
    /// Payloads for always-on scripts (e.g. ControlNet), keyed by script
    /// title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alwayson_scripts: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infotext: Option<String>,
}

/// Options for the `img2img` endpoint: source images and inpainting
/// controls on top of every [`Txt2ImgOptions`] field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Img2ImgOptions {
    /// Base64 encoded source images. The server reports this back as null
    /// in response parameters, which deserializes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub init_images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_cfg_scale: Option<f64>,
    /// Base64 encoded inpainting mask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_blur: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_blur_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_blur_y: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_round: Option<bool>,
    /// Masked content fill mode: 0 fill, 1 original, 2 latent noise,
    /// 3 latent nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpainting_fill: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpaint_full_res: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpaint_full_res_padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpainting_mask_invert: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_noise_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latent_mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_init_images: Option<bool>,
    /// Shared generation parameters.
    #[serde(flatten)]
    pub params: Txt2ImgOptions,
}

/// Settings overridden for a single request via `override_settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_model_checkpoint: Option<String>,
    /// CLIP skip.
    #[serde(rename = "CLIP_stop_at_last_layers", skip_serializing_if = "Option::is_none")]
    pub clip_stop_at_last_layers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_pnginfo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_model_hash_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_model_name_to_info: Option<bool>,
    /// Any other setting key accepted by the options endpoint.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ── Postprocessing requests ─────────────────────────────────────────

/// Options for the `extra-single-image` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraSingleImageOptions {
    /// Base64 encoded image to process.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_extras_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gfpgan_visibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeformer_visibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeformer_weight: Option<f64>,
    /// Upscale factor when `resize_mode` is 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize_w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize_h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_crop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras_upscaler_2_visibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscale_first: Option<bool>,
}

/// One input image for the `extra-batch-images` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraImageItem {
    /// Base64 encoded image data.
    pub data: String,
    pub name: String,
}

/// Options for the `extra-batch-images` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraBatchImagesOptions {
    /// Images to process.
    #[serde(rename = "imageList")]
    pub image_list: Vec<ExtraImageItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_mode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_extras_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gfpgan_visibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeformer_visibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeformer_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize_w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_resize_h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_crop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras_upscaler_2_visibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscale_first: Option<bool>,
}

/// Options for the `interrogate` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterrogateOptions {
    /// Base64 encoded image to caption.
    pub image: String,
    /// Interrogation model, e.g. `clip` or `deepdanbooru`.
    pub model: String,
}

// ── Generation responses ────────────────────────────────────────────

/// Response from the `txt2img` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Txt2ImgResponse {
    /// Generated images as base64 strings; empty when `send_images` was
    /// disabled.
    #[serde(default)]
    pub images: Vec<String>,
    /// Parameters the server used for the generation.
    pub parameters: Txt2ImgOptions,
    /// JSON-encoded generation metadata.
    pub info: String,
}

/// Response from the `img2img` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Img2ImgResponse {
    #[serde(default)]
    pub images: Vec<String>,
    pub parameters: Img2ImgOptions,
    pub info: String,
}

/// Response from the `extra-single-image` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraSingleImageResponse {
    pub html_info: String,
    /// Processed image as a base64 string.
    pub image: Option<String>,
}

/// Response from the `extra-batch-images` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraBatchImagesResponse {
    pub html_info: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Response from the `png-info` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PngInfoResponse {
    /// Generation parameter text embedded in the image.
    pub info: String,
    #[serde(default)]
    pub items: Map<String, Value>,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// Response from the `progress` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    /// Completion fraction in `0.0..=1.0`.
    pub progress: f64,
    /// Estimated remaining time relative to the job length.
    pub eta_relative: f64,
    pub state: Value,
    /// Live preview as a base64 string, when enabled.
    pub current_image: Option<String>,
    pub textinfo: Option<String>,
}

/// Response from the `interrogate` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterrogateResponse {
    pub caption: String,
}

/// Response from the `create/embedding` and `create/hypernetwork`
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub info: String,
}

/// Response from the `train/embedding` and `train/hypernetwork`
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub info: String,
}

// ── Server enumerations ─────────────────────────────────────────────

/// One entry from the `samplers` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sampler {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// One entry from the `schedulers` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheduler {
    pub name: String,
    pub label: String,
    pub aliases: Option<Vec<String>>,
    pub default_rho: Option<f64>,
    pub need_inner_model: Option<bool>,
}

/// One entry from the `upscalers` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upscaler {
    pub name: String,
    pub model_name: Option<String>,
    pub model_path: Option<String>,
    pub model_url: Option<String>,
    pub scale: Option<f64>,
}

/// One entry from the `latent-upscale-modes` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatentUpscaleMode {
    pub name: String,
}

/// One entry from the `sd-models` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdModel {
    pub title: String,
    pub model_name: String,
    pub hash: Option<String>,
    pub sha256: Option<String>,
    pub filename: String,
    pub config: Option<String>,
}

/// One entry from the `sd-vae` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdVae {
    pub model_name: String,
    pub filename: String,
}

/// One entry from the `hypernetworks` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperNetwork {
    pub name: String,
    pub path: Option<String>,
}

/// One entry from the `face-restorers` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRestorer {
    pub name: String,
    pub cmd_dir: Option<String>,
}

/// One entry from the `realesrgan-models` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealEsrganModel {
    pub name: String,
    pub path: Option<String>,
    pub scale: Option<i64>,
}

/// One entry from the `prompt-styles` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptStyle {
    pub name: String,
    pub prompt: Option<String>,
    pub negative_prompt: Option<String>,
}

/// Properties of one textual-inversion embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingInfo {
    /// Training step this embedding was saved at, if tracked.
    pub step: Option<i64>,
    pub sd_checkpoint: Option<String>,
    pub sd_checkpoint_name: Option<String>,
    pub shape: Option<u32>,
    /// Number of vectors per token.
    pub vectors: u32,
}

/// Response from the `embeddings` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingsResponse {
    /// Embeddings loaded and usable with the current model.
    #[serde(default)]
    pub loaded: HashMap<String, EmbeddingInfo>,
    /// Embeddings skipped because they do not match the current model.
    #[serde(default)]
    pub skipped: HashMap<String, EmbeddingInfo>,
}

// ── Server state ────────────────────────────────────────────────────

/// Response from the `memory` endpoint. Sections the server cannot
/// report arrive empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default)]
    pub ram: MemoryRam,
    #[serde(default)]
    pub cuda: MemoryCuda,
}

/// System RAM usage in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRam {
    pub free: Option<u64>,
    pub used: Option<u64>,
    pub total: Option<u64>,
}

/// CUDA memory usage in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryCuda {
    #[serde(default)]
    pub system: MemoryRam,
    #[serde(default)]
    pub active: MemoryStat,
    #[serde(default)]
    pub allocated: MemoryStat,
    #[serde(default)]
    pub reserved: MemoryStat,
    #[serde(default)]
    pub inactive: MemoryStat,
    #[serde(default)]
    pub events: MemoryEvents,
}

/// Current/peak pair for one CUDA allocator statistic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStat {
    pub current: Option<u64>,
    pub peak: Option<u64>,
}

/// CUDA allocator event counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryEvents {
    pub retries: Option<u64>,
    pub oom: Option<u64>,
}

/// Response from the `scripts` endpoint: script names per tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scripts {
    #[serde(default)]
    pub txt2img: Vec<String>,
    #[serde(default)]
    pub img2img: Vec<String>,
}

/// One entry from the `script-info` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    pub is_alwayson: bool,
    pub is_img2img: bool,
    #[serde(default)]
    pub args: Vec<ScriptArg>,
}

/// One argument accepted by a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptArg {
    pub label: String,
    pub value: Option<Value>,
    pub minimum: Option<Value>,
    pub maximum: Option<Value>,
    pub step: Option<Value>,
    pub choices: Option<Vec<String>>,
}

/// One entry from the `extensions` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub name: String,
    pub remote: Option<String>,
    pub branch: Option<String>,
    pub commit_hash: Option<String>,
    pub version: Option<String>,
    pub commit_date: Option<String>,
    pub enabled: bool,
}

// ── Server settings and flags ───────────────────────────────────────

/// The server's settings record, as read from and written to the
/// `options` endpoint.
///
/// Field inventory mirrors the Web UI's settings catalog; everything is
/// optional so a partial write changes only the named settings, and reads
/// survive whatever subset the server version exposes. Unknown keys land
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_filename_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_add_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_replace_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_extended_filename: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_only_if_multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_prevent_empty_spots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_zip_filename_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_rows: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_text_active_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_text_inactive_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_before_face_restoration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_before_highres_fix: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_images_before_color_correction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_mask: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_mask_composite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jpeg_quality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webp_lossless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_for_4chan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_downscale_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_side_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_max_size_mp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_original_name_batch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_upscaler_name_as_suffix: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_selected_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_write_log_csv: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_init_img: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_temp_dir_at_start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_incomplete_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_txt2img_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_img2img_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_extras_samples: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_grids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_txt2img_grids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_img2img_grids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_save: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir_init_images: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_to_dirs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_save_to_dirs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_save_to_dirs_for_ui: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories_filename_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories_max_prompt_words: Option<f64>,
    #[serde(rename = "ESRGAN_tile", skip_serializing_if = "Option::is_none")]
    pub esrgan_tile: Option<f64>,
    #[serde(rename = "ESRGAN_tile_overlap", skip_serializing_if = "Option::is_none")]
    pub esrgan_tile_overlap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realesrgan_enabled_models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dat_enabled_models: Option<Vec<String>>,
    #[serde(rename = "DAT_tile", skip_serializing_if = "Option::is_none")]
    pub dat_tile: Option<f64>,
    #[serde(rename = "DAT_tile_overlap", skip_serializing_if = "Option::is_none")]
    pub dat_tile_overlap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaler_for_img2img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_scale_by_when_changing_upscaler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_restoration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_restoration_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_former_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_restoration_unload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_launch_browser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_console_prompts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_warnings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_gradio_deprecation_warnings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memmon_poll_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples_log_stdout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_tqdm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_upscale_progressbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_hypernet_extra: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_hidden_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_mmap_load_safetensors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_ldm_prints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_stacks_on_signal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_activities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_record_shapes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_profile_memory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_with_stack: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiling_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_enable_requests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_forbid_local_requests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_useragent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unload_models_when_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_memory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_optimizer_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_training_settings_to_txt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_filename_word_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_filename_join_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_image_repeats_per_epoch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_write_csv_every: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_xattention_optimizations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_enable_tensorboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_tensorboard_save_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_tensorboard_flush_every: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_model_checkpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_checkpoints_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_checkpoints_keep_in_cpu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_checkpoint_cache: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_unet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_quantization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_batch_seeds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comma_padding_backtrack: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdxl_clip_l_skip: Option<bool>,
    #[serde(rename = "CLIP_stop_at_last_layers", skip_serializing_if = "Option::is_none")]
    pub clip_stop_at_last_layers: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcast_attn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randn_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hires_fix_refiner_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdxl_crop_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdxl_crop_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdxl_refiner_low_aesthetic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdxl_refiner_high_aesthetic_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd3_enable_t5: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae_explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae_checkpoint_cache: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae_overrides_per_model_preferences: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_vae_precision_bfloat16: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_vae_precision: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae_encode_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_vae_decode_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inpainting_mask_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_noise_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_extra_noise: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_color_correction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_fix_steps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_editor_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_sketch_default_brush_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_inpaint_mask_brush_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_inpaint_sketch_default_brush_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_mask: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_mask_composite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_batch_show_results_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_inpaint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_attention_optimization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_min_uncond: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_min_uncond_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_merging_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_merging_ratio_img2img: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_merging_ratio_hr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_cond_uncond: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_cond_uncond_v0: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_cond_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_cond_uncond: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp8_storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_fp16_weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_backcompat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_old_emphasis_implementation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_old_karras_scheduler_sigmas: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_dpmpp_sde_batch_determinism: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_old_hires_fix_width_height: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hires_fix_use_firstpass_conds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_old_scheduling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_downcasted_alpha_bar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refiner_switch_by_sample_steps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_keep_models_in_memory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_return_ranks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_num_beams: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_min_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_max_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_dict_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_clip_skip_categories: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrogate_deepbooru_score_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_sort_alpha: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_use_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_escape: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepbooru_filter_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_show_hidden_directories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_dir_button_function: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_hidden_models: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_default_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_card_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_card_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_card_text_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_card_show_desc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_card_description_is_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_card_order_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_card_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_tree_view_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_tree_view_default_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_tree_view_default_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_networks_add_text_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_extra_networks_tab_reorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textual_inversion_print_at_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textual_inversion_add_hashes_to_infotext: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_hypernetwork: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyedit_precision_attention: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyedit_precision_extra: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyedit_delimiters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyedit_delimiters_whitespace: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyedit_move: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_token_counters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_styles_into_token_counters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_show_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_modal_lightbox: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_modal_lightbox_initially_zoomed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_modal_lightbox_gamepad: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_modal_lightbox_gamepad_repeat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_webui_modal_lightbox_icon_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_webui_modal_lightbox_toolbar_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_dir_button_choice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_prompt_box: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samplers_in_dropdown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_and_batch_together: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_checkpoint_dropdown_use_short: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hires_fix_show_sampler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hires_fix_show_prompts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txt2img_settings_accordion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img2img_settings_accordion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupt_after_current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quicksettings_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_tab_order: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_tabs: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_reorder_list: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_themes_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_in_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_seed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_reloading_ui_scripts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infotext_explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_pnginfo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_txt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_model_name_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_model_hash_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_vae_name_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_vae_hash_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_user_name_to_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_version_to_infotext: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_weights_auto_swap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infotext_skip_pasting: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infotext_styles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progressbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_previews_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_previews_image_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_every_n_steps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_preview_allow_lowvram_full: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_preview_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_preview_refresh_period: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_preview_fast_interrupt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_live_preview_in_modal_lightbox: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_screen_sleep_during_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_samplers: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_ddim: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_ancestral: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddim_discretize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_churn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_tmax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_noise: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rho: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_noise_seed_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_discard_next_to_last_sigma: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sgm_noise_multiplier: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uni_pc_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uni_pc_skip_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uni_pc_order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uni_pc_lower_order_final: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_noise_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_early_cond: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_dist_alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta_dist_beta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postprocessing_enable_in_main_ui: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postprocessing_disable_in_extras: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postprocessing_operation_order: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upscaling_max_images_in_cache: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postprocessing_existing_caption_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_extensions: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_all_extensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_config_state_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_checkpoint_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_prompt_comments: Option<bool>,
    /// Settings this version of the record does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Command-line flags the server was started with, as reported by the
/// `cmd-flags` endpoint. Read-only server state; everything optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CmdFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_all_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_python_version_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_torch_cuda_test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reinstall_xformers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reinstall_torch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_startup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_prepare_environment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_install: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_sysinfo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loglevel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_download_clip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ckpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ckpt_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vae_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gfpgan_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gfpgan_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_half: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_half_vae: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_progressbar_hiding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_batch_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddings_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textual_inversion_templates_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypernetwork_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medvram: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medvram_sdxl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowvram: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowram: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_batch_cond_uncond: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unload_gfpgan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcast_sampling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngrok: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngrok_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngrok_options: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_insecure_extension_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeformer_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gfpgan_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esrgan_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsrgan_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realesrgan_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dat_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xformers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_enable_xformers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xformers_flash_attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepdanbooru: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_split_attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_sub_quad_attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_quad_q_chunk_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_quad_kv_chunk_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_quad_chunk_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_split_attention_invokeai: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_split_attention_v1: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_sdp_attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_sdp_no_mem_attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_opt_split_attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_nan_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cpu: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ipex: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_model_loading_ram_optimization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_negative_prompt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_ui_dir_config: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_settings_in_sections: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_specific_settings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_settings_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_auth_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_img2img_tool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_inpaint_tool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_allowed_path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_channelslast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles_file: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autolaunch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_textbox_seed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_console_progressbars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_console_prompts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vae_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_safe_unpickle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nowebui: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_debug_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_allow_origins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_allow_origins_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_keyfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_certfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_tls_verify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradio_queue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_gradio_queue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_version_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_hashing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_download_sd_model: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_stop_route: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_server_stop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_keep_alive: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_all_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_extra_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_load_model_at_start: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unix_filenames_sanitization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filenames_max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_prompt_history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldsr_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyco_dir_backcompat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scunet_models_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swinir_models_path: Option<String>,
    /// Flags this version of the record does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_txt2img_options_serialize_only_set_fields() {
        let options = Txt2ImgOptions {
            prompt: Some("a red fox".into()),
            steps: Some(20),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"prompt": "a red fox", "steps": 20}));
    }

    #[test]
    fn test_default_txt2img_options_serialize_empty() {
        let value = serde_json::to_value(Txt2ImgOptions::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_img2img_options_flatten_shared_params() {
        let options = Img2ImgOptions {
            init_images: vec!["aGVsbG8=".into()],
            mask: Some("bWFzaw==".into()),
            params: Txt2ImgOptions {
                prompt: Some("watercolor".into()),
                denoising_strength: Some(0.6),
                ..Default::default()
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "init_images": ["aGVsbG8="],
                "mask": "bWFzaw==",
                "prompt": "watercolor",
                "denoising_strength": 0.6
            })
        );
    }

    #[test]
    fn test_img2img_parameters_accept_null_init_images() {
        let parameters: Img2ImgOptions = serde_json::from_value(json!({
            "init_images": null,
            "prompt": "watercolor"
        }))
        .unwrap();
        assert!(parameters.init_images.is_empty());
        assert_eq!(parameters.params.prompt.as_deref(), Some("watercolor"));
    }

    #[test]
    fn test_extra_batch_images_use_wire_name() {
        let options = ExtraBatchImagesOptions {
            image_list: vec![ExtraImageItem {
                data: "aGVsbG8=".into(),
                name: "a.png".into(),
            }],
            upscaling_resize: Some(2.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "imageList": [{"data": "aGVsbG8=", "name": "a.png"}],
                "upscaling_resize": 2.0
            })
        );
    }

    #[test]
    fn test_sd_options_roundtrip_renamed_fields() {
        let options: SdOptions = serde_json::from_value(json!({
            "ESRGAN_tile": 192,
            "CLIP_stop_at_last_layers": 2,
            "sd_model_checkpoint": "v1-5-pruned.ckpt",
            "brand_new_setting": true
        }))
        .unwrap();
        assert_eq!(options.esrgan_tile, Some(192.0));
        assert_eq!(options.clip_stop_at_last_layers, Some(2.0));
        assert_eq!(options.extra.get("brand_new_setting"), Some(&json!(true)));

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["ESRGAN_tile"], json!(192.0));
        assert_eq!(value["CLIP_stop_at_last_layers"], json!(2.0));
        assert_eq!(value["brand_new_setting"], json!(true));
    }

    #[test]
    fn test_sd_options_partial_write_payload() {
        let options = SdOptions {
            sd_model_checkpoint: Some("v2-1.safetensors".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"sd_model_checkpoint": "v2-1.safetensors"}));
    }

    #[test]
    fn test_cmd_flags_parse_sample() {
        let flags: CmdFlags = serde_json::from_value(json!({
            "api": true,
            "port": 7860,
            "ckpt_dir": null,
            "medvram": false,
            "some_future_flag": "x"
        }))
        .unwrap();
        assert_eq!(flags.api, Some(true));
        assert_eq!(flags.port, Some(7860));
        assert_eq!(flags.ckpt_dir, None);
        assert_eq!(flags.extra.get("some_future_flag"), Some(&json!("x")));
    }

    #[test]
    fn test_progress_response_parse_sample() {
        let progress: ProgressResponse = serde_json::from_value(json!({
            "progress": 0.42,
            "eta_relative": 3.5,
            "state": {"job": "txt2img", "sampling_step": 8},
            "current_image": null,
            "textinfo": null
        }))
        .unwrap();
        assert_eq!(progress.progress, 0.42);
        assert_eq!(progress.state["job"], "txt2img");
        assert!(progress.current_image.is_none());
    }

    #[test]
    fn test_memory_sections_accept_empty_objects() {
        let memory: Memory = serde_json::from_value(json!({"ram": {}, "cuda": {}})).unwrap();
        assert_eq!(memory.ram.total, None);
        assert_eq!(memory.cuda.active.peak, None);
    }

    #[test]
    fn test_memory_parse_sample() {
        let memory: Memory = serde_json::from_value(json!({
            "ram": {"free": 1024, "used": 2048, "total": 3072},
            "cuda": {
                "system": {"free": 10, "used": 20, "total": 30},
                "active": {"current": 1, "peak": 2},
                "allocated": {"current": 3, "peak": 4},
                "reserved": {"current": 5, "peak": 6},
                "inactive": {"current": 7, "peak": 8},
                "events": {"retries": 0, "oom": 0}
            }
        }))
        .unwrap();
        assert_eq!(memory.ram.total, Some(3072));
        assert_eq!(memory.cuda.allocated.peak, Some(4));
        assert_eq!(memory.cuda.events.oom, Some(0));
    }

    #[test]
    fn test_embeddings_response_parse_sample() {
        let embeddings: EmbeddingsResponse = serde_json::from_value(json!({
            "loaded": {
                "EasyNegative": {
                    "step": null,
                    "sd_checkpoint": null,
                    "sd_checkpoint_name": null,
                    "shape": 768,
                    "vectors": 8
                }
            },
            "skipped": {}
        }))
        .unwrap();
        assert_eq!(embeddings.loaded["EasyNegative"].vectors, 8);
        assert!(embeddings.skipped.is_empty());
    }

    #[test]
    fn test_txt2img_response_parse_sample() {
        let response: Txt2ImgResponse = serde_json::from_value(json!({
            "images": ["aGVsbG8="],
            "parameters": {"prompt": "a red fox", "steps": 20, "seed": -1},
            "info": "{\"seed\": 1234}"
        }))
        .unwrap();
        assert_eq!(response.images.len(), 1);
        assert_eq!(response.parameters.prompt.as_deref(), Some("a red fox"));
        assert_eq!(response.parameters.seed, Some(-1));
    }

    #[test]
    fn test_script_info_parse_sample() {
        let scripts: Vec<ScriptInfo> = serde_json::from_value(json!([{
            "name": "x/y/z plot",
            "is_alwayson": false,
            "is_img2img": false,
            "args": [{
                "label": "X type",
                "value": "Nothing",
                "minimum": null,
                "maximum": null,
                "step": null,
                "choices": ["Nothing", "Seed", "Steps"]
            }]
        }]))
        .unwrap();
        assert_eq!(scripts[0].args[0].choices.as_ref().unwrap().len(), 3);
    }
}
