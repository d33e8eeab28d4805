use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use huffpack::{
    decode_with_stats, encode_with_stats,
    io_utils::{check_extension, huffman_cli_error, io_cli_error},
    Codebook, CompressionStats, Config, FrequencyTable, HuffmanTree,
};

/// Static Huffman compressor.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file into a .huff artifact
    #[command(alias = "c")]
    Encode {
        input: PathBuf,
        output: PathBuf,
        /// Print statistics as JSON on stdout
        #[arg(long)]
        json: bool,
        /// Encode without writing the output file
        #[arg(long)]
        dry_run: bool,
    },
    /// Restore the original bytes from a .huff artifact
    #[command(alias = "d")]
    Decode {
        input: PathBuf,
        output: PathBuf,
        /// Print statistics as JSON on stdout
        #[arg(long)]
        json: bool,
        /// Refuse artifacts declaring more than this many bytes
        #[arg(long, value_name = "BYTES")]
        max_output: Option<usize>,
    },
    /// Show the frequency table, tree and codebook of a raw file
    #[command(alias = "i")]
    Inspect {
        input: PathBuf,
        /// Print the codebook as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Encode {
            input,
            output,
            json,
            dry_run,
        } => {
            let data = read_input(&input)?;
            let (encoded, stats) = encode_with_stats(&data)
                .map_err(|e| huffman_cli_error("encoding", &input, e))?;
            if dry_run {
                eprintln!("(dry run) skipping write of {} bytes", encoded.len());
            } else {
                fs::write(&output, &encoded)
                    .map_err(|e| io_cli_error("writing output file", &output, e))?;
            }
            print_stats(&stats, json)?;
        }
        Command::Decode {
            input,
            output,
            json,
            max_output,
        } => {
            check_extension(&input)?;
            let mut config = Config::default();
            if let Some(limit) = max_output {
                config.max_output_len = limit;
            }
            let data = read_input(&input)?;
            let (decoded, stats) = decode_with_stats(&data, &config)
                .map_err(|e| huffman_cli_error("decoding", &input, e))?;
            fs::write(&output, &decoded)
                .map_err(|e| io_cli_error("writing output file", &output, e))?;
            print_stats(&stats, json)?;
        }
        Command::Inspect { input, json } => {
            let data = read_input(&input)?;
            inspect(&data, json)?;
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    Ok(fs::read(path).map_err(|e| io_cli_error("reading input file", path, e))?)
}

fn print_stats(stats: &CompressionStats, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        stats.report();
    }
    Ok(())
}

fn symbol_label(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("0x{byte:02x}")
    }
}

fn inspect(data: &[u8], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let freq = FrequencyTable::count(data);
    let Some(tree) = HuffmanTree::from_frequencies(&freq) else {
        if json {
            println!("{}", serde_json::json!({ "total": 0, "symbols": [] }));
        } else {
            println!("empty input: no tree");
        }
        return Ok(());
    };
    let codebook = Codebook::from_tree(&tree);

    if json {
        let symbols: Vec<_> = freq
            .iter()
            .filter_map(|(byte, count)| {
                codebook.get(byte).map(|code| {
                    serde_json::json!({
                        "byte": byte,
                        "count": count,
                        "code": code.to_string(),
                    })
                })
            })
            .collect();
        let out = serde_json::json!({
            "total": freq.total(),
            "distinct": freq.distinct(),
            "entropy": freq.entropy(),
            "depth": tree.depth(),
            "symbols": symbols,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} bytes, {} distinct, entropy {:.3} bits/byte, tree depth {}",
        freq.total(),
        freq.distinct(),
        freq.entropy(),
        tree.depth()
    );
    print!("{tree}");
    for (byte, code) in codebook.iter() {
        println!("{:>6} {:>10} {}", symbol_label(byte), freq.get(byte), code);
    }
    Ok(())
}
