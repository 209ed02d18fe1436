use std::io::{BufRead, Write};

use charseq::{CharVocab, encoding::encode_indices};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_args::SourceVocabArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    source: SourceVocabArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let source = self.source.load()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        run_encode(&mut reader, &mut writer, &source)
    }
}

fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    source: &CharVocab<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        let indices = encode_indices(source, &line);

        for (idx, index) in indices.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, index)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
