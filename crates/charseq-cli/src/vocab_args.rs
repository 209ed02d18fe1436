use std::sync::Arc;

use charseq::{
    CharVocab,
    vocab::io::{load_char_to_index_json_path, load_index_to_char_json_path},
};

/// Source vocabulary argument group.
#[derive(clap::Args, Debug)]
pub struct SourceVocabArgs {
    /// Source `char -> index` JSON table.
    #[arg(long)]
    pub source: String,
}

impl SourceVocabArgs {
    /// Load the source vocabulary.
    pub fn load(&self) -> Result<Arc<CharVocab<u32>>, Box<dyn std::error::Error>> {
        log::info!("source vocab: {}", self.source);
        Ok(Arc::new(load_char_to_index_json_path(&self.source)?))
    }
}

/// Target vocabulary argument group.
#[derive(clap::Args, Debug)]
pub struct TargetVocabArgs {
    /// Target `index -> char` JSON table.
    #[arg(long)]
    pub target: String,
}

impl TargetVocabArgs {
    /// Load the target vocabulary.
    pub fn load(&self) -> Result<Arc<CharVocab<u32>>, Box<dyn std::error::Error>> {
        log::info!("target vocab: {}", self.target);
        Ok(Arc::new(load_index_to_char_json_path(&self.target)?))
    }
}
