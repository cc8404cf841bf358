use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};

use full_cut::config::configuration::DefaultConfig;
use full_cut::core::full_segmenter::FullSegmenter;
use full_cut::dict::dictionary::Dictionary;

fn cut_line(segmenter: &FullSegmenter<'_>, line: &str) -> String {
    segmenter
        .segment(line.trim())
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    // simple command line interface
    // the dictionary comes from FULL_CUT_CONFIG or the shipped full_cut.yml
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 3 {
        return Err("usage: verifier <input> <output>".into());
    }
    let input_filename = &args[1];
    let output_filename = &args[2];

    let cfg = DefaultConfig::load()?;
    let dict = Dictionary::from_config(&cfg)?;
    let segmenter = FullSegmenter::new(&dict);

    let input_file = File::open(input_filename)?;
    let lines = io::BufReader::new(input_file).lines();

    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    let output_file = opts.open(output_filename)?;
    let mut writer = LineWriter::new(output_file);

    let mut total = 0_usize;
    for line in lines {
        let line = line?;
        writeln!(writer, "{}", cut_line(&segmenter, &line))?;
        total += 1;
    }
    writer.flush()?;
    log::info!("{} lines written to {}", total, output_filename);
    Ok(())
}
