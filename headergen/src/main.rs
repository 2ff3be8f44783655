use std::env;

use header::{Entry, HeaderError, ModelHeaderSpec, SchemaConfig, assemble, render};
use log::{info, warn};

/// Threshold the editors ship for every class until the user tunes it.
const DEFAULT_THRESHOLD: f32 = 0.8;

fn default_spec() -> ModelHeaderSpec {
    ModelHeaderSpec {
        samples_period: Some(25),
        samples_length: 80,
        sample_dimensions: 3,
        entries: vec![
            Entry::Action {
                threshold: DEFAULT_THRESHOLD,
                text: "Shake".to_string(),
            },
            Entry::Action {
                threshold: DEFAULT_THRESHOLD,
                text: "Still".to_string(),
            },
            Entry::Action {
                threshold: DEFAULT_THRESHOLD,
                text: "Circle".to_string(),
            },
        ],
    }
}

fn main() -> Result<(), HeaderError> {
    env_logger::init();

    let spec = match env::var("MODEL_SPEC") {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(spec) => spec,
            Err(e) => {
                warn!("ignoring MODEL_SPEC: {e}");
                default_spec()
            }
        },
        Err(_) => default_spec(),
    };

    let blob = assemble(&SchemaConfig::ACTIONS, &spec)?;
    info!(
        "packed {} entries into {} header bytes",
        spec.entries.len(),
        blob.len()
    );

    println!("Blob: {blob:02X?}");
    println!("\nC code:\n{}", render::c_array(&blob));
    println!("DeviceScript:\n{}", render::hex_literal(&blob));

    Ok(())
}
