use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// The file path named by an IO flag; `None` means stdio.
fn file_path(flag: Option<&str>) -> Option<&str> {
    flag.filter(|p| *p != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; stdin if absent or "-".
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(self.input.as_deref()) {
            Some(path) => {
                log::debug!("reading {path}");
                Box::new(BufReader::new(File::open(path)?))
            }
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file; stdout if absent or "-".
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(self.output.as_deref()) {
            Some(path) => {
                log::debug!("writing {path}");
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
