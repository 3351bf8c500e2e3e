//! File-level front end for the `huffcode` library, treating a file as a
//! sequence of byte symbols.
//!
//! The container written by `compress` carries everything `decompress`
//! needs, since the bit stream alone is not decodable: a magic number, the
//! original symbol count, the frequency table (tree reconstruction from it
//! is deterministic), the bit length, the packed stream and an xxhash64 of
//! the original bytes.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use tracing::{debug, info};

use huffcode::{decode, encode, stats, CodeTable, FrequencyTable, HuffmanTree};

const MAGIC: [u8; 4] = *b"HUF1";
const XXHASH_SEED: u64 = 0;

#[derive(Parser)]
#[command(version, about = "Huffman coding for files of byte symbols")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log what is happening along the way
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a file into a huffcode container
    Compress { input: PathBuf, output: PathBuf },
    /// Decode a huffcode container back into the original file
    Decompress { input: PathBuf, output: PathBuf },
    /// Print entropy, average code length and efficiency for a file
    Stats { input: PathBuf },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Command::Compress { input, output } => compress(&input, &output),
        Command::Decompress { input, output } => decompress(&input, &output),
        Command::Stats { input } => print_stats(&input),
    }
}

fn compress(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let data = fs::read(input).wrap_err_with(|| format!("reading {}", input.display()))?;
    info!("read {} bytes from {}", data.len(), input.display());

    let freq = FrequencyTable::count(&data);
    let stream = if freq.is_empty() {
        huffcode::EncodedStream::default()
    } else {
        let tree = HuffmanTree::build(&freq)?;
        let codes = CodeTable::from_tree(&tree);
        debug!(
            "{} distinct symbols, longest codeword {} bits",
            freq.len(),
            codes.max_code_len()
        );
        encode(&data, &codes)?
    };

    let checksum = twox_hash::XxHash64::oneshot(XXHASH_SEED, &data);

    let mut out = Vec::with_capacity(stream.as_bytes().len() + 9 * freq.len() + 32);
    out.write_all(&MAGIC)?;
    out.write_all(&(data.len() as u64).to_le_bytes())?;
    out.write_all(&(freq.len() as u32).to_le_bytes())?;
    for (symbol, count) in freq.iter() {
        out.push(*symbol);
        out.write_all(&count.to_le_bytes())?;
    }
    out.write_all(&(stream.len() as u64).to_le_bytes())?;
    out.write_all(stream.as_bytes())?;
    out.write_all(&checksum.to_le_bytes())?;

    fs::write(output, &out).wrap_err_with(|| format!("writing {}", output.display()))?;
    info!(
        "wrote {} bytes ({} bits of payload) to {}",
        out.len(),
        stream.len(),
        output.display()
    );
    Ok(())
}

fn decompress(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let container =
        fs::read(input).wrap_err_with(|| format!("reading {}", input.display()))?;
    let mut r = Reader::new(&container);

    if r.take(4)? != MAGIC {
        bail!("{} is not a huffcode container", input.display());
    }
    let symbol_count = u64::from_le_bytes(r.take(8)?.try_into()?) as usize;
    let distinct = u32::from_le_bytes(r.take(4)?.try_into()?) as usize;
    if distinct > 256 {
        bail!("frequency table claims {distinct} distinct symbols, more than a byte alphabet allows");
    }

    let mut pairs = Vec::with_capacity(distinct);
    for _ in 0..distinct {
        let symbol = r.take(1)?[0];
        let count = u64::from_le_bytes(r.take(8)?.try_into()?);
        pairs.push((symbol, count));
    }
    let freq: FrequencyTable<u8> = pairs.into_iter().collect();

    let bit_len = u64::from_le_bytes(r.take(8)?.try_into()?) as usize;
    let stream_bytes = r.take(bit_len.div_ceil(8))?.to_vec();
    let stored_checksum = u64::from_le_bytes(r.take(8)?.try_into()?);
    let stream = huffcode::EncodedStream::from_parts(stream_bytes, bit_len);

    let data = if freq.is_empty() {
        if symbol_count != 0 || !stream.is_empty() {
            bail!("container has no frequency table but a non-empty payload");
        }
        Vec::new()
    } else {
        let tree = HuffmanTree::build(&freq)?;
        decode(&stream, &tree, symbol_count)?
    };

    let checksum = twox_hash::XxHash64::oneshot(XXHASH_SEED, &data);
    if checksum != stored_checksum {
        bail!(
            "content checksum mismatch: stored {stored_checksum:016x}, decoded data hashes to {checksum:016x}"
        );
    }

    fs::write(output, &data).wrap_err_with(|| format!("writing {}", output.display()))?;
    info!("restored {} bytes to {}", data.len(), output.display());
    Ok(())
}

fn print_stats(input: &PathBuf) -> Result<()> {
    let data = fs::read(input).wrap_err_with(|| format!("reading {}", input.display()))?;
    let freq = FrequencyTable::count(&data);
    if freq.is_empty() {
        println!("{}: empty file, nothing to code", input.display());
        return Ok(());
    }
    let tree = HuffmanTree::build(&freq)?;
    let codes = CodeTable::from_tree(&tree);
    let s = stats(&freq, &codes);

    println!("{}:", input.display());
    println!("  symbols:            {}", data.len());
    println!("  distinct symbols:   {}", freq.len());
    println!("  entropy:            {:.4} bits/symbol", s.entropy);
    println!("  average length:     {:.4} bits/symbol", s.avg_code_len);
    println!("  efficiency:         {:.4}", s.efficiency);
    println!("  longest codeword:   {} bits", codes.max_code_len());
    Ok(())
}

/// Cursor over the container bytes that errors instead of panicking when the
/// file is shorter than its headers claim.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or_else(|| eyre!("container length overflow"))?;
        if end > self.data.len() {
            bail!(
                "container truncated: wanted {n} bytes at offset {}, only {} left",
                self.pos,
                self.data.len() - self.pos
            );
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}
