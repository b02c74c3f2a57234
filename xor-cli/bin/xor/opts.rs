//! Command line argument parsing for the xor utility.

use clap::Parser;

use xor_cli::CliConfig;

/// Streaming XOR combiner
///
/// This utility XORs two byte streams together and writes the result to
/// standard output.
#[derive(Debug, Parser)]
#[command(
    name = "xor",
    version,
    about = "XOR two files together, padding shorter with zeros",
    long_about = "xor combines two byte streams with byte-wise XOR and writes \
                 the raw result to standard output. The shorter input is \
                 padded with zero bytes to the longer one's length, and \
                 trailing zero bytes are stripped from the output unless \
                 -z is given.",
    after_help = "Examples:
  xor plaintext ciphertext > result.bin     # XOR two files
  xor file1 - < file2 > result              # Use stdin for second file
  cat file2 | xor file1 - > result          # Use stdin for second file
  xor -z file1 file2 > result.bin           # Preserve trailing zeros

XOR properties:
  If result = A ^ B, then A = result ^ B and B = result ^ A, so any two
  components can recover the third:
  xor fileA fileB > result                  # XOR A and B
  xor result fileB > recovered_A            # Recover A using result and B
  xor result fileA > recovered_B            # Recover B using result and A"
)]
pub struct XorOpts {
    /// First input file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    file1: String,

    /// Second input file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    file2: String,

    /// Show progress information to stderr
    #[arg(short = 'p', long = "progress")]
    progress: bool,

    /// Preserve trailing zero bytes in output (default: strip them)
    #[arg(short = 'z', long = "preserve-zeros")]
    preserve_zeros: bool,
}

impl XorOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            progress: self.progress,
            preserve_zeros: self.preserve_zeros,
        }
    }

    /// First input descriptor as given on the command line
    pub fn file1(&self) -> &str {
        &self.file1
    }

    /// Second input descriptor as given on the command line
    pub fn file2(&self) -> &str {
        &self.file2
    }
}
