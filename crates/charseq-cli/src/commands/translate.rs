use std::io::{BufRead, Write};

use charseq::{
    SpecialTokens,
    TextTranslator,
    Translator,
    TranslatorOptions,
    model::TransitionTableModel,
    rayon::ParallelRayonTranslator,
    translator::DEFAULT_MAX_OUTPUT_LEN,
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_args::{SourceVocabArgs, TargetVocabArgs},
};

/// Args for the translate command.
#[derive(clap::Args, Debug)]
pub struct TranslateArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    source: SourceVocabArgs,

    #[command(flatten)]
    target: TargetVocabArgs,

    /// Transition table JSON (`{"from": to, ...}`).
    #[arg(long)]
    model: String,

    /// Maximum decoded chars per line, or per sentence with `--documents`.
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_LEN)]
    max_output_len: usize,

    /// The decoder start token.
    #[arg(long, default_value = "0")]
    start: u32,

    /// The decoder stop token.
    #[arg(long, default_value = "1")]
    stop: u32,

    /// Treat each line as a document: translate sentence by sentence.
    #[arg(long)]
    documents: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TranslateArgs {
    fn options(&self) -> TranslatorOptions<u32> {
        TranslatorOptions::default()
            .with_max_output_len(self.max_output_len)
            .with_special_tokens(SpecialTokens::new(self.start, self.stop))
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let source = self.source.load()?;
        let target = self.target.load()?;

        log::info!("model: {}", self.model);
        let model = TransitionTableModel::load_json_path(&self.model, self.stop as usize)?;

        let translator = ParallelRayonTranslator::new(Translator::new(
            source,
            target,
            model,
            self.options(),
        )?);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        run_translate(&mut reader, &mut writer, &translator, self.documents)
    }
}

/// Translate every input line; lines with nothing to translate become blank lines.
///
/// In document mode the separator after the last sentence is dropped.
fn run_translate<D: TextTranslator>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    translator: &D,
    documents: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let batch: Vec<&str> = lines.iter().map(String::as_str).collect();

    let translations = if documents {
        translator.try_translate_document_batch(&batch)?
    } else {
        translator.try_translate_batch(&batch)?
    };

    for (idx, translation) in translations.into_iter().enumerate() {
        match translation {
            Some(text) => {
                let text = if documents {
                    text.strip_suffix(' ').unwrap_or(&text)
                } else {
                    text.as_str()
                };
                writeln!(writer, "{text}")?;
            }
            None => {
                log::debug!("line {idx}: nothing to translate");
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
