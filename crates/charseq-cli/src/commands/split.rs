use std::io::{BufRead, Write};

use charseq::segmentation::{DEFAULT_SENTENCE_BOUNDARY_PATTERN, SentenceSplitter};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the split command.
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Sentence boundary regex.
    #[arg(long, default_value_t = DEFAULT_SENTENCE_BOUNDARY_PATTERN.to_string())]
    pattern: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl SplitArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let splitter = SentenceSplitter::from_pattern(&self.pattern)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;
        run_split(&mut reader, &mut writer, &splitter)
    }
}

/// Each input line is a document; sentences are written one per line.
fn run_split(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    splitter: &SentenceSplitter,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        for sentence in splitter.split_trimmed(&line) {
            writeln!(writer, "{sentence}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
