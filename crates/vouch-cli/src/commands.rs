//! Command handlers for the Vouch CLI
//!
//! Every handler maps 1:1 onto a core operation: file bytes go in, encoded
//! records or reports come out. Nothing here implements trust logic.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use vouch_core::{create_key_pair, KeyRecord, SignatureRecord, Timestamp};

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::report::{CertificationsReport, KeyReport, SignatureReport};

/// Command dispatcher for handling CLI commands
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Execute a CLI command
    pub fn execute(cli: Cli, config: CliConfig) -> Result<()> {
        match cli.command {
            Commands::New {
                name,
                expires,
                private_key_path,
                public_key_path,
            } => {
                let private_path =
                    private_key_path.unwrap_or_else(|| config.private_key_path.clone());
                let public_path = public_key_path.unwrap_or_else(|| config.public_key_path.clone());
                Self::handle_new(&name, &expires, &private_path, &public_path)
            }
            Commands::Sign {
                file,
                signature,
                key,
            } => {
                let key = key.unwrap_or_else(|| config.private_key_path.clone());
                Self::handle_sign(&file, &signature, &key)
            }
            Commands::Verify {
                file,
                signature,
                key,
            } => {
                let key = key.unwrap_or_else(|| config.public_key_path.clone());
                let valid = Self::handle_verify(&file, &signature, &key)?;
                if !valid {
                    // An invalid signature is a reported outcome, not an
                    // error; it still fails the command for scripting.
                    std::process::exit(1);
                }
                Ok(())
            }
            Commands::Certify { public_key, key } => {
                let key = key.unwrap_or_else(|| config.private_key_path.clone());
                Self::handle_certify(&public_key, &key)
            }
            Commands::KeyInfo { path, json } => Self::handle_key_info(&path, json),
            Commands::SignatureInfo { path, json } => Self::handle_signature_info(&path, json),
            Commands::CertificationInfo {
                path,
                certifier,
                json,
            } => Self::handle_certification_info(&path, certifier.as_deref(), json),
        }
    }

    /// Generate a key pair and write both halves to disk
    fn handle_new(
        name: &str,
        expires_text: &str,
        private_path: &Path,
        public_path: &Path,
    ) -> Result<()> {
        let expires = parse_expiry(expires_text)?;
        let (private, public) = create_key_pair(name, expires)?;

        fs::write(private_path, private.to_bytes()?)?;
        fs::write(public_path, public.to_bytes()?)?;
        info!("generated key pair {}", public.id());

        println!(
            "Saved private key to {} and public key to {}",
            private_path.display(),
            public_path.display()
        );
        println!("Key ID: {}", public.id());
        Ok(())
    }

    /// Sign a file with a private key and write the signature file
    fn handle_sign(file: &Path, signature_path: &Path, key_path: &Path) -> Result<()> {
        let data = fs::read(file)?;
        let private = read_key(key_path)?.into_private()?;

        let signature = private.sign(&data)?;
        fs::write(signature_path, signature.to_bytes()?)?;

        println!(
            "Signed {} and saved signature to {}",
            file.display(),
            signature_path.display()
        );
        Ok(())
    }

    /// Verify a file against a signature file and public key
    fn handle_verify(file: &Path, signature_path: &Path, key_path: &Path) -> Result<bool> {
        let data = fs::read(file)?;
        let signature = SignatureRecord::from_bytes(&fs::read(signature_path)?)?;
        let public = read_key(key_path)?.into_public()?;

        if signature.signer_id != public.id() {
            debug!(
                "signature names signer {}, supplied key is {}",
                signature.signer_id,
                public.id()
            );
        }

        let valid = public.verify(&signature.signature, &data);
        println!("Signature is {}", if valid { "valid" } else { "invalid" });
        Ok(valid)
    }

    /// Certify a public key file with a private key, rewriting it in place
    fn handle_certify(public_key_path: &Path, key_path: &Path) -> Result<()> {
        let private = read_key(key_path)?.into_private()?;
        let mut public = read_key(public_key_path)?.into_public()?;

        private.certify(&mut public)?;
        fs::write(public_key_path, public.to_bytes()?)?;
        info!("certified {} with {}", public.id(), private.public_id());

        println!(
            "Certified {} ({}) with key {}",
            public.id(),
            public.info().name,
            private.public_id()
        );
        Ok(())
    }

    /// Report the human-readable fields of a key file
    fn handle_key_info(path: &Path, json: bool) -> Result<()> {
        let record = read_key(path)?;
        let report = KeyReport::from_record(&record);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("\n{}", report.render());
        }
        Ok(())
    }

    /// Report the fields of a signature file
    fn handle_signature_info(path: &Path, json: bool) -> Result<()> {
        let record = SignatureRecord::from_bytes(&fs::read(path)?)?;
        let report = SignatureReport::from_record(&record);
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("\n{}", report.render());
        }
        Ok(())
    }

    /// Report the certifications carried by a public key file
    fn handle_certification_info(
        path: &Path,
        certifier_path: Option<&Path>,
        json: bool,
    ) -> Result<()> {
        let holder = read_key(path)?.into_public()?;
        let certifier = match certifier_path {
            Some(path) => Some(read_key(path)?.into_public()?),
            None => None,
        };

        let report = CertificationsReport::from_record(&holder, certifier.as_ref());
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("\n{}", report.render());
        }
        Ok(())
    }
}

/// Decode a key file from disk
fn read_key(path: &Path) -> Result<KeyRecord> {
    Ok(KeyRecord::from_bytes(&fs::read(path)?)?)
}

/// Parse an expiry given as RFC 3339 or bare Unix epoch seconds
fn parse_expiry(text: &str) -> Result<Timestamp> {
    if let Ok(secs) = text.parse::<u64>() {
        return Ok(Timestamp::new(secs));
    }

    let datetime = chrono::DateTime::parse_from_rfc3339(text)
        .map_err(|err| CliError::InvalidExpiry(format!("{text}: {err}")))?;
    let secs = datetime.timestamp();
    if secs < 0 {
        return Err(CliError::InvalidExpiry(format!(
            "{text}: before the Unix epoch"
        )));
    }
    Ok(Timestamp::new(secs as u64))
}
