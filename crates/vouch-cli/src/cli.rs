//! Command-line interface definitions and parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vouch",
    author,
    version,
    about = "Utilities for working with Vouch keys",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new key pair
    #[command(visible_alias = "n")]
    New {
        /// Name of the key pair holder
        #[arg(short, long)]
        name: String,

        /// Key expiration (RFC 3339 date or Unix epoch seconds)
        #[arg(short, long)]
        expires: String,

        /// Path to write the private key
        #[arg(long)]
        private_key_path: Option<PathBuf>,

        /// Path to write the public key
        #[arg(long)]
        public_key_path: Option<PathBuf>,
    },
    /// Sign a file with a private key
    #[command(visible_alias = "s")]
    Sign {
        /// Path to the file to sign
        file: PathBuf,

        /// Path to write the signature
        #[arg(short, long)]
        signature: PathBuf,

        /// Path to the signer's private key
        #[arg(short, long)]
        key: Option<PathBuf>,
    },
    /// Verify a file against a signature and public key
    #[command(visible_alias = "v")]
    Verify {
        /// Path to the file to verify
        file: PathBuf,

        /// Path to the signature
        #[arg(short, long)]
        signature: PathBuf,

        /// Path to the signer's public key
        #[arg(short, long)]
        key: Option<PathBuf>,
    },
    /// Certify a public key with a private key
    #[command(visible_alias = "c")]
    Certify {
        /// Path to the public key file to certify (rewritten in place)
        public_key: PathBuf,

        /// Path to the certifier's private key
        #[arg(short, long)]
        key: Option<PathBuf>,
    },
    /// Inspect a key file
    #[command(visible_alias = "ki")]
    KeyInfo {
        /// Path to the key file
        path: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect a signature file
    #[command(visible_alias = "si")]
    SignatureInfo {
        /// Path to the signature file
        path: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect the certifications carried by a public key file
    #[command(visible_alias = "ci")]
    CertificationInfo {
        /// Path to the public key file
        path: PathBuf,

        /// Public key file of a certifier to check certifications against
        #[arg(long)]
        certifier: Option<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}
