use crate::color::palette::PaletteStrategy;
use crate::prelude::*;
use anyhow::anyhow;
use std::env::var;

pub fn get_dataset_dir() -> Result<String> {
    match var("DATASET_DIR") {
        Ok(dir) => match dir.is_empty() {
            true => {
                let err = "DATASET_DIR is empty";
                tracing::error!(err);
                Err(anyhow!(err))
            }
            false => Ok(dir),
        },
        Err(e) => {
            let err = format!("DATASET_DIR not found in environment: {:?}", e);
            tracing::error!(err);
            Err(anyhow!(err))
        }
    }
}

pub fn get_palette_strategy() -> Result<PaletteStrategy> {
    match var("PALETTE_STRATEGY") {
        Ok(strategy) => match strategy.to_lowercase().as_str() {
            "" | "random" => Ok(PaletteStrategy::Random),
            "category" | "category_keyed" => Ok(PaletteStrategy::CategoryKeyed),
            other => {
                let err = format!("Unrecognized PALETTE_STRATEGY: {:?}", other);
                tracing::error!(err);
                Err(anyhow!(err))
            }
        },
        Err(_) => Ok(PaletteStrategy::Random),
    }
}
