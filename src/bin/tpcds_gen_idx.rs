// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Compiles a `.dst` distribution tree into the binary `.idx` image, with an
//! optional MD5 comparison against a reference file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use md5::{Digest, Md5};

use benchgen::tpcds::distribution::load_dst_file;
use benchgen::tpcds::idx::write_idx;

#[derive(Parser)]
#[command(name = "tpcds_gen_idx")]
#[command(about = "TPC-DS distribution compiler (.dst -> .idx)", long_about = None)]
struct Cli {
    /// Root .dst file; #include directives resolve relative to it.
    #[arg(long, default_value = "resources/tpcds/tpcds.dst")]
    input: PathBuf,

    /// Output .idx path.
    #[arg(long, default_value = "generated/tpcds.idx")]
    output: PathBuf,

    /// Reference .idx to compare against by MD5.
    #[arg(long)]
    compare: Option<PathBuf>,
}

fn md5_file(path: &PathBuf) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Md5::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

fn run(cli: &Cli) -> Result<(), String> {
    let distributions = load_dst_file(&cli.input).map_err(|e| e.to_string())?;
    if distributions.is_empty() {
        return Err("no distributions found".to_string());
    }
    info!("parsed {} distributions from {}", distributions.len(), cli.input.display());

    let image = write_idx(&distributions).map_err(|e| e.to_string())?;
    if let Some(parent) = cli.output.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    std::fs::write(&cli.output, &image).map_err(|e| e.to_string())?;
    println!("Wrote {}", cli.output.display());

    if let Some(compare) = &cli.compare {
        let generated_md5 = md5_file(&cli.output).map_err(|e| e.to_string())?;
        let compare_md5 = md5_file(compare).map_err(|e| e.to_string())?;
        println!("MD5 generated: {generated_md5}");
        println!("MD5 compare:   {compare_md5}");
        if generated_md5 != compare_md5 {
            return Err("MD5 mismatch".to_string());
        }
        println!("MD5 match");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
